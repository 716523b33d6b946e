//! Models for rectangular and polar coordinate systems used to model CIE-Lab,
//! CIE-Lch, Oklab and Oklch.

use crate::{
    color::{Component, Components, Flags, Rgba},
    math::{almost_zero, normalize_hue, transform, transform_3x3, Transform},
    models::{
        hsl::{with_hue, HueFlags},
        rgb::{SrgbLinear, ToLinearLight},
        xyz::{ToXyz, WhitePoint, Xyz, XyzD65, D65},
        FromRgba, ToRgba,
    },
};

mod space {
    /// Tags the color space a rectangular or polar model lives in.
    pub trait Space: Clone + Copy + std::fmt::Debug + PartialEq {}

    /// The CIE-Lab color space.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct Lab;
    impl Space for Lab {}

    /// The Oklab color space.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct Oklab;
    impl Space for Oklab {}
}

tinct_macros::gen_model! {
    /// The model for a color specified in the rectangular orthogonal form.
    pub struct Rectangular<S: space::Space> {
        /// The lightness component.
        pub lightness: Component,
        /// The a component.
        pub a: Component,
        /// The b component.
        pub b: Component,
    }
}

impl<S: space::Space> Rectangular<S> {
    /// Convert this orthogonal rectangular model into its cylindrical polar
    /// form.
    pub fn to_polar(&self) -> Polar<S> {
        let chroma = (self.a * self.a + self.b * self.b).sqrt();
        let hue = if almost_zero(chroma) {
            Component::NAN
        } else {
            normalize_hue(self.b.atan2(self.a).to_degrees())
        };

        with_hue(hue, |hue| Polar::new(self.lightness, chroma, hue, self.alpha))
    }

    /// Return the same color with both axes zeroed when it is a gray, so that
    /// no float noise leaks into the chroma.
    fn neutral_if_gray(mut self, color: &Rgba) -> Self {
        if color.red == color.green && color.green == color.blue {
            self.a = 0.0;
            self.b = 0.0;
        }
        self
    }
}

tinct_macros::gen_model! {
    /// The model for a color specified in the cylindrical polar form.
    pub struct Polar<S: space::Space> {
        /// The lightness component.
        pub lightness: Component,
        /// The chroma component.
        pub chroma: Component,
        /// The hue component.
        pub hue: Component,
    }
}

impl<S: space::Space> Polar<S> {
    /// Convert this cylindrical polar model into its orthogonal rectangular
    /// form.
    pub fn to_rectangular(&self) -> Rectangular<S> {
        if self.flags.contains(Flags::HUE_IS_NONE) {
            return Rectangular::new(self.lightness, 0.0, 0.0, self.alpha);
        }

        let hue = self.hue.to_radians();
        let a = self.chroma * hue.cos();
        let b = self.chroma * hue.sin();

        Rectangular::new(self.lightness, a, b, self.alpha)
    }
}

impl<S: space::Space> HueFlags for Polar<S> {
    fn mark_hue_none(self) -> Self {
        self.with_flags(Flags::HUE_IS_NONE)
    }
}

impl<S: space::Space> FromRgba for Polar<S>
where
    Rectangular<S>: FromRgba,
{
    fn from_rgba(color: &Rgba) -> Self {
        Rectangular::<S>::from_rgba(color).to_polar()
    }
}

impl<S: space::Space> ToRgba for Polar<S>
where
    Rectangular<S>: ToRgba,
{
    fn to_rgba(&self) -> Rgba {
        self.to_rectangular().to_rgba()
    }
}

/// The model for a color specified in the CIE-Lab color space with the rectangular orthogonal form.
pub type Lab = Rectangular<space::Lab>;

/// The ratio between the linear and the cube root segments of the Lab
/// companding function.
const DELTA: Component = 6.0 / 29.0;

impl ToXyz for Lab {
    type WhitePoint = D65;

    fn to_xyz(&self) -> Xyz<D65> {
        fn f_inv(v: Component) -> Component {
            if v > DELTA {
                v * v * v
            } else {
                3.0 * DELTA * DELTA * (v - 4.0 / 29.0)
            }
        }

        let fy = (self.lightness + 16.0) / 116.0;
        let fx = fy + self.a / 500.0;
        let fz = fy - self.b / 200.0;

        Xyz::new(
            f_inv(fx) * D65::WHITE_POINT.0,
            f_inv(fy) * D65::WHITE_POINT.1,
            f_inv(fz) * D65::WHITE_POINT.2,
            self.alpha,
        )
    }
}

impl From<XyzD65> for Lab {
    fn from(value: XyzD65) -> Self {
        let Components(fx, fy, fz) = value.relative_to_white().map(|t| {
            if t > DELTA * DELTA * DELTA {
                t.cbrt()
            } else {
                t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
            }
        });

        let lightness = 116.0 * fy - 16.0;
        let a = 500.0 * (fx - fy);
        let b = 200.0 * (fy - fz);

        Lab::new(lightness, a, b, value.alpha)
    }
}

impl FromRgba for Lab {
    fn from_rgba(color: &Rgba) -> Self {
        Lab::from(color.to_linear_light().to_xyz()).neutral_if_gray(color)
    }
}

impl ToRgba for Lab {
    fn to_rgba(&self) -> Rgba {
        SrgbLinear::from(self.to_xyz()).to_rgba()
    }
}

/// The model for a color specified in the CIE-Lab color space with the cylindrical polar form.
pub type Lch = Polar<space::Lab>;

/// The model for a color specified in the oklab color space with the rectangular orthogonal form.
pub type Oklab = Rectangular<space::Oklab>;

impl FromRgba for Oklab {
    fn from_rgba(color: &Rgba) -> Self {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const SRGB_TO_LMS: Transform = transform_3x3(
            0.4122214708, 0.2119034982, 0.0883024619,
            0.5363325363, 0.6806995451, 0.2817188376,
            0.0514459929, 0.1073969566, 0.6299787005,
        );

        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const LMS_TO_OKLAB: Transform = transform_3x3(
             0.2104542553,  1.9779984951,  0.0259040371,
             0.7936177850, -2.4285922050,  0.7827717662,
            -0.0040720468,  0.4505937099, -0.8086757660,
        );

        let linear = color.to_linear_light();
        let lms = transform(&SRGB_TO_LMS, linear.to_components());
        let lms = lms.map(|v| v.cbrt());
        Oklab::from_components(transform(&LMS_TO_OKLAB, lms), color.alpha).neutral_if_gray(color)
    }
}

impl ToRgba for Oklab {
    fn to_rgba(&self) -> Rgba {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const OKLAB_TO_LMS: Transform = transform_3x3(
            1.0,           1.0,           1.0,
            0.3963377774, -0.1055613458, -0.0894841775,
            0.2158037573, -0.0638541728, -1.2914855480,
        );

        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const LMS_TO_SRGB: Transform = transform_3x3(
             4.0767416621, -1.2684380046, -0.0041960863,
            -3.3077115913,  2.6097574011, -0.7034186147,
             0.2309699292, -0.3413193965,  1.7076147010,
        );

        let lms = transform(&OKLAB_TO_LMS, self.to_components());
        let lms = lms.map(|v| v * v * v);
        SrgbLinear::from_components(transform(&LMS_TO_SRGB, lms), self.alpha).to_rgba()
    }
}

/// The model for a color specified in the oklab color space with the cylindrical polar form.
pub type Oklch = Polar<space::Oklab>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn converting_to_polar_should_set_hue_to_missing_for_small_a_b_values() {
        let lab = Lab::new(50.0, 0.0, 0.0, 1.0);
        let polar = lab.to_polar();

        assert!(polar.flags.contains(Flags::HUE_IS_NONE));
        assert_eq!(polar.hue, 0.0);
        assert_eq!(polar.chroma, 0.0);
    }

    #[test]
    fn polar_round_trip() {
        let lab = Lab::new(56.6293, 39.23708, 57.553769, 1.0);
        let lch = lab.to_polar();
        assert_component_eq!(lch.chroma, 69.65619, 1e-3);
        assert_component_eq!(lch.hue, 55.715927, 1e-3);

        let back = lch.to_rectangular();
        assert_component_eq!(back.a, lab.a, 1e-3);
        assert_component_eq!(back.b, lab.b, 1e-3);
    }

    #[test]
    fn negative_angles_wrap() {
        let lch = Lab::new(50.0, 10.0, -10.0, 1.0).to_polar();
        assert_component_eq!(lch.hue, 315.0, 1e-3);
    }

    #[test]
    fn white_and_black_in_lab() {
        let white = Lab::from_rgba(&Rgba::new(255, 255, 255, 1.0));
        assert_component_eq!(white.lightness, 100.0, 1e-2);
        assert_eq!((white.a, white.b), (0.0, 0.0));

        let black = Lab::from_rgba(&Rgba::new(0, 0, 0, 1.0));
        assert_component_eq!(black.lightness, 0.0, 1e-3);
    }

    #[test]
    fn red_in_lab_with_d65_white() {
        let lab = Lab::from_rgba(&Rgba::new(255, 0, 0, 1.0));
        assert_component_eq!(lab.lightness, 53.24, 0.01);
        assert_component_eq!(lab.a, 80.09, 0.01);
        assert_component_eq!(lab.b, 67.20, 0.01);
    }

    #[test]
    fn red_in_oklab() {
        let oklab = Oklab::from_rgba(&Rgba::new(255, 0, 0, 1.0));
        assert_component_eq!(oklab.lightness, 0.62796, 1e-4);
        assert_component_eq!(oklab.a, 0.22486, 1e-4);
        assert_component_eq!(oklab.b, 0.12585, 1e-4);

        let oklch = Oklch::from_rgba(&Rgba::new(255, 0, 0, 1.0));
        assert_component_eq!(oklch.chroma, 0.25768, 1e-4);
        assert_component_eq!(oklch.hue, 29.2339, 1e-2);
    }

    #[test]
    fn round_trips() {
        for source in [
            Rgba::new(210, 105, 30, 1.0),
            Rgba::new(0, 0, 0, 0.5),
            Rgba::new(1, 2, 3, 1.0),
            Rgba::new(0, 255, 255, 1.0),
            Rgba::new(128, 128, 128, 1.0),
        ] {
            assert_eq!(Lab::from_rgba(&source).to_rgba(), source);
            assert_eq!(Lch::from_rgba(&source).to_rgba(), source);
            assert_eq!(Oklab::from_rgba(&source).to_rgba(), source);
            assert_eq!(Oklch::from_rgba(&source).to_rgba(), source);
        }
    }

    #[test]
    fn gray_has_no_hue() {
        let oklch = Oklch::from_rgba(&Rgba::new(119, 119, 119, 1.0));
        assert!(oklch.flags.contains(Flags::HUE_IS_NONE));
        assert_eq!(oklch.chroma, 0.0);
    }
}
