//! Model a color in the CIE-XYZ color space.

use crate::color::{Component, Components};

/// A reference white used to scale CIE-XYZ values.
pub trait WhitePoint: Clone + Copy + std::fmt::Debug + PartialEq {
    /// The XYZ coordinates of the reference white.
    const WHITE_POINT: Components;
}

/// CIE-XYZ color with a D65 white point reference.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct D65;

impl WhitePoint for D65 {
    #[allow(clippy::excessive_precision)]
    const WHITE_POINT: Components = Components(0.9504559270516716, 1.0, 1.0890577507598784);
}

/// Specify that a color model supports conversion to CIE-XYZ.
pub trait ToXyz {
    /// The white point of the resulting CIE-XYZ color.
    type WhitePoint: WhitePoint;

    /// Convert this color to CIE-XYZ.
    fn to_xyz(&self) -> Xyz<Self::WhitePoint>;
}

tinct_macros::gen_model! {
    /// A model for a color in the CIE-XYZ color space with a specified white point reference.
    pub struct Xyz<W: WhitePoint> {
        /// The X component of the color.
        pub x: Component,
        /// The Y component of the color.
        pub y: Component,
        /// The Z component of the color.
        pub z: Component,
    }
}

impl<W: WhitePoint> Xyz<W> {
    /// Return the components divided by the reference white.
    pub fn relative_to_white(&self) -> Components {
        Components(
            self.x / W::WHITE_POINT.0,
            self.y / W::WHITE_POINT.1,
            self.z / W::WHITE_POINT.2,
        )
    }
}

/// Model for a color in the CIE-XYZ color space with a D65 white point.
pub type XyzD65 = Xyz<D65>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_is_one_relative_to_white() {
        let white = XyzD65::from_components(D65::WHITE_POINT, 1.0);
        assert_eq!(white.relative_to_white(), Components(1.0, 1.0, 1.0));
        assert_eq!(white.to_array(), [white.x, white.y, white.z]);
    }
}
