//! Model a color with the HWB notation in the sRGB color space.

use crate::{
    color::{Component, Components, Flags, Rgba},
    models::{
        hsl::{hsl_to_unit_rgb, hue_with_min_max, with_hue, HueFlags},
        FromRgba, ToRgba,
    },
};

tinct_macros::gen_model! {
    /// A color specified with the HWB notation in the sRGB color space.
    /// Whiteness and blackness are percentages.
    pub struct Hwb {
        /// The hue component of the color in degrees.
        pub hue: Component,
        /// The whiteness component of the color.
        pub whiteness: Component,
        /// The blackness component of the color.
        pub blackness: Component,
    }
}

impl HueFlags for Hwb {
    fn mark_hue_none(self) -> Self {
        self.with_flags(Flags::HUE_IS_NONE)
    }
}

impl FromRgba for Hwb {
    fn from_rgba(color: &Rgba) -> Self {
        let (hue, min, max) = hue_with_min_max(&color.to_unit());

        let whiteness = min * 100.0;
        let blackness = (1.0 - max) * 100.0;

        with_hue(hue, |hue| Hwb::new(hue, whiteness, blackness, color.alpha))
    }
}

impl ToRgba for Hwb {
    fn to_rgba(&self) -> Rgba {
        Rgba::from_unit(
            hwb_to_unit_rgb(self.hue, self.whiteness / 100.0, self.blackness / 100.0),
            self.alpha,
        )
    }
}

/// Convert from HWB with unit whiteness and blackness to unit RGB.
/// <https://drafts.csswg.org/css-color-4/#hwb-to-rgb>
pub(super) fn hwb_to_unit_rgb(
    hue: Component,
    whiteness: Component,
    blackness: Component,
) -> Components {
    let whiteness = whiteness.clamp(0.0, 1.0);
    let blackness = blackness.clamp(0.0, 1.0);

    if whiteness + blackness >= 1.0 {
        let gray = whiteness / (whiteness + blackness);
        return Components(gray, gray, gray);
    }

    let rgb = hsl_to_unit_rgb(hue, 1.0, 0.5);
    rgb.map(|v| v * (1.0 - whiteness - blackness) + whiteness)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn hwb_to_rgb() {
        let rgba = Hwb::new(0.0, 20.0, 20.0, 1.0).to_rgba();
        assert_eq!((rgba.red, rgba.green, rgba.blue), (204, 51, 51));

        let rgba = Hwb::new(240.0, 0.0, 50.0, 1.0).to_rgba();
        assert_eq!((rgba.red, rgba.green, rgba.blue), (0, 0, 128));
    }

    #[test]
    fn rgb_to_hwb() {
        let hwb = Hwb::from_rgba(&Rgba::new(210, 105, 30, 1.0));
        assert_component_eq!(hwb.hue, 25.0, 1e-3);
        assert_component_eq!(hwb.whiteness, 11.7647, 1e-3);
        assert_component_eq!(hwb.blackness, 17.6471, 1e-3);
    }

    #[test]
    fn whiteness_and_blackness_over_one_is_gray() {
        let rgba = Hwb::new(200.0, 30.0, 90.0, 1.0).to_rgba();
        assert_eq!((rgba.red, rgba.green, rgba.blue), (64, 64, 64));

        let hwb = Hwb::from_rgba(&Rgba::new(255, 255, 255, 1.0));
        assert!(hwb.flags.contains(Flags::HUE_IS_NONE));
        assert_eq!(hwb.to_array(), [0.0, 100.0, 0.0]);
    }

    #[test]
    fn round_trip_through_hwb() {
        let source = Rgba::new(70, 130, 180, 0.3);
        assert_eq!(Hwb::from_rgba(&source).to_rgba(), source);
    }
}
