//! Model a color with the HSL notation in the sRGB color space.

use crate::{
    color::{Component, Components, Flags, Rgba},
    math::{almost_zero, normalize_hue},
    models::{FromRgba, ToRgba},
};

tinct_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space.
    /// Saturation and lightness are percentages.
    pub struct Hsl {
        /// The hue component of the color in degrees.
        pub hue: Component,
        /// The saturation component of the color.
        saturation: Component,
        /// The lightness component of the color.
        lightness: Component,
    }
}

impl FromRgba for Hsl {
    fn from_rgba(color: &Rgba) -> Self {
        let (hue, min, max) = hue_with_min_max(&color.to_unit());

        let lightness = (min + max) / 2.0;
        let delta = max - min;

        let saturation = if almost_zero(delta) {
            0.0
        } else {
            delta / (1.0 - (2.0 * lightness - 1.0).abs())
        };

        with_hue(hue, |hue| {
            Hsl::new(hue, saturation * 100.0, lightness * 100.0, color.alpha)
        })
    }
}

impl ToRgba for Hsl {
    fn to_rgba(&self) -> Rgba {
        let unit = hsl_to_unit_rgb(self.hue, self.saturation / 100.0, self.lightness / 100.0);
        Rgba::from_unit(unit, self.alpha)
    }
}

/// Calculate the hue from unit RGB components and return it along with the
/// min and max RGB values. The hue is NaN for achromatic colors.
pub(super) fn hue_with_min_max(from: &Components) -> (Component, Component, Component) {
    let Components(red, green, blue) = *from;

    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);

    let delta = max - min;

    let hue = if !almost_zero(delta) {
        60.0 * if max == red {
            (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
        } else if max == green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        }
    } else {
        Component::NAN
    };

    (normalize_hue(hue), min, max)
}

/// Build a model from a hue that may be NaN, marking it as powerless and
/// storing zero in that case.
pub(super) fn with_hue<M: HueFlags>(hue: Component, f: impl FnOnce(Component) -> M) -> M {
    if hue.is_nan() {
        f(0.0).mark_hue_none()
    } else {
        f(hue)
    }
}

/// Models with a hue component that can be marked powerless.
pub(super) trait HueFlags {
    fn mark_hue_none(self) -> Self;
}

impl HueFlags for Hsl {
    fn mark_hue_none(self) -> Self {
        self.with_flags(Flags::HUE_IS_NONE)
    }
}

/// Convert from HSL with unit saturation and lightness to unit RGB.
/// <https://drafts.csswg.org/css-color-4/#hsl-to-rgb>
pub(super) fn hsl_to_unit_rgb(
    hue: Component,
    saturation: Component,
    lightness: Component,
) -> Components {
    let saturation = saturation.clamp(0.0, 1.0);
    let lightness = lightness.clamp(0.0, 1.0);

    if saturation <= 0.0 || hue.is_nan() {
        return Components(lightness, lightness, lightness);
    }

    let hue = normalize_hue(hue);

    macro_rules! f {
        ($n:expr) => {{
            let k = ($n + hue / 30.0) % 12.0;
            let a = saturation * lightness.min(1.0 - lightness);
            lightness - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
        }};
    }

    Components(f!(0.0), f!(8.0), f!(4.0))
}
