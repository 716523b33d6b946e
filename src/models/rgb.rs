//! Model a color in the sRGB color space without gamma encoding, the starting
//! point of the matrix based conversions.

use crate::{
    color::{Component, Components, Rgba},
    math::{transform, transform_3x3, Transform},
    models::{
        xyz::{ToXyz, Xyz, D65},
        ToRgba,
    },
};

/// The sRGB transfer function.
mod gamma {
    use crate::color::Components;

    pub fn to_gamma_encoded(from: &Components) -> Components {
        from.map(|value| {
            let abs = value.abs();

            if abs > 0.0031308 {
                value.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
            } else {
                12.92 * value
            }
        })
    }

    pub fn to_linear_light(from: &Components) -> Components {
        from.map(|value| {
            let abs = value.abs();

            if abs <= 0.04045 {
                value / 12.92
            } else {
                value.signum() * ((abs + 0.055) / 1.055).powf(2.4)
            }
        })
    }
}

tinct_macros::gen_model! {
    /// A color in the sRGB color space with no gamma encoding.
    pub struct SrgbLinear {
        /// The red component of the color.
        pub red: Component,
        /// The green component of the color.
        pub green: Component,
        /// The blue component of the color.
        pub blue: Component,
    }
}

impl SrgbLinear {
    /// Apply the sRGB gamma encoding and return unit components.
    pub fn to_gamma_encoded(&self) -> Components {
        gamma::to_gamma_encoded(&self.to_components())
    }
}

/// Decode gamma encoded sRGB into linear light.
pub trait ToLinearLight {
    /// Convert this color to linear light sRGB.
    fn to_linear_light(&self) -> SrgbLinear;
}

impl ToLinearLight for Rgba {
    fn to_linear_light(&self) -> SrgbLinear {
        SrgbLinear::from_components(gamma::to_linear_light(&self.to_unit()), self.alpha)
    }
}

impl ToRgba for SrgbLinear {
    fn to_rgba(&self) -> Rgba {
        Rgba::from_unit(self.to_gamma_encoded(), self.alpha)
    }
}

impl From<Xyz<D65>> for SrgbLinear {
    fn from(value: Xyz<D65>) -> Self {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const FROM_XYZ: Transform = transform_3x3(
             3.2409699419045213, -0.9692436362808798,  0.05563007969699361,
            -1.5373831775700935,  1.8759675015077206, -0.20397695888897657,
            -0.4986107602930033,  0.04155505740717561, 1.0569715142428786,
        );

        Self::from_components(transform(&FROM_XYZ, value.to_components()), value.alpha)
    }
}

impl ToXyz for SrgbLinear {
    type WhitePoint = D65;

    fn to_xyz(&self) -> Xyz<D65> {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const TO_XYZ: Transform = transform_3x3(
            0.4123907992659595,  0.21263900587151036, 0.01933081871559185,
            0.35758433938387796, 0.7151686787677559,  0.11919477979462599,
            0.1804807884018343,  0.07219231536073371, 0.9505321522496606,
        );

        Xyz::from_components(transform(&TO_XYZ, self.to_components()), self.alpha)
    }
}
