//! Models are structs that represent a color in a specified color space or
//! form. Every model converts to and from the canonical [`Rgba`], so a
//! conversion between two models always goes through it.

use crate::color::Rgba;

mod cmyk;
mod hsl;
mod hwb;
mod lab;
mod ncol;
mod rgb;
mod xyz;

pub use cmyk::Cmyk;
pub use hsl::Hsl;
pub use hwb::Hwb;
pub use lab::{Lab, Lch, Oklab, Oklch, Polar, Rectangular};
pub use ncol::{HueSector, Ncol};
pub use rgb::{SrgbLinear, ToLinearLight};
pub use xyz::{ToXyz, WhitePoint, Xyz, XyzD65, D65};

/// Convert a model to the canonical [`Rgba`] color.
pub trait ToRgba {
    /// Convert this model to sRGB, rounding and clamping the channels.
    fn to_rgba(&self) -> Rgba;
}

/// Create a model from the canonical [`Rgba`] color.
pub trait FromRgba: Sized {
    /// Convert an sRGB color to this model.
    fn from_rgba(color: &Rgba) -> Self;
}

/// A color expressed in one of the supported non-RGB color spaces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorSpaceValue {
    /// Hue, saturation and lightness.
    Hsl(Hsl),
    /// Hue, whiteness and blackness.
    Hwb(Hwb),
    /// Cyan, magenta, yellow and key (black).
    Cmyk(Cmyk),
    /// CIE-Lab.
    Lab(Lab),
    /// CIE-Lch.
    Lch(Lch),
    /// Oklab.
    Oklab(Oklab),
    /// Oklch.
    Oklch(Oklch),
    /// Natural color.
    Ncol(Ncol),
}

impl ToRgba for ColorSpaceValue {
    fn to_rgba(&self) -> Rgba {
        match self {
            Self::Hsl(m) => m.to_rgba(),
            Self::Hwb(m) => m.to_rgba(),
            Self::Cmyk(m) => m.to_rgba(),
            Self::Lab(m) => m.to_rgba(),
            Self::Lch(m) => m.to_rgba(),
            Self::Oklab(m) => m.to_rgba(),
            Self::Oklch(m) => m.to_rgba(),
            Self::Ncol(m) => m.to_rgba(),
        }
    }
}

macro_rules! impl_from_model {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for ColorSpaceValue {
                fn from(value: $variant) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from_model!(Hsl, Hwb, Cmyk, Lab, Lch, Oklab, Oklch, Ncol);
