//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};
use num_traits::Float;

use crate::color::{Component, Components};

/// A 3x3 matrix stored in the upper left of a 4x4 transform.
pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Create a [`Transform`] from a 3x3 matrix. The matrix is given in row-vector
/// order: each row holds the contribution of one input component to the three
/// outputs.
#[rustfmt::skip]
#[allow(clippy::too_many_arguments)]
pub const fn transform_3x3(
    m11: Component, m12: Component, m13: Component,
    m21: Component, m22: Component, m23: Component,
    m31: Component, m32: Component, m33: Component,
) -> Transform {
    Transform::new(
        m11, m12, m13, 0.0,
        m21, m22, m23, 0.0,
        m31, m32, m33, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, components: Components) -> Components {
    let Components(x, y, z) = components;
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(x, y, z));
    Components(x, y, z)
}

/// Return true if the value is close enough to zero to be treated as zero.
pub fn almost_zero<T: Float>(value: T) -> bool {
    value.abs() < T::epsilon()
}

/// Wrap a hue in degrees into `[0, 360)`.
pub fn normalize_hue<T: Float>(hue: T) -> T {
    let full = T::from(360.0).unwrap_or_else(T::zero);
    let hue = hue % full;
    let hue = if hue < T::zero() { hue + full } else { hue };
    // Adding 360 to a tiny negative value can round up to 360 itself.
    if hue >= full {
        T::zero()
    } else {
        hue
    }
}

/// The most decimal places [`round_to`] honors.
pub const MAX_PLACES: u8 = 9;

/// Round a value to the given number of decimal places, at most
/// [`MAX_PLACES`].
pub fn round_to<T: Float>(value: T, places: u8) -> T {
    let places = places.min(MAX_PLACES);
    let factor = T::from(10.0).unwrap_or_else(T::one).powi(places as i32);
    (value * factor).round() / factor
}

/// Round a hue to the given number of decimal places, keeping the result in
/// `[0, 360)`.
pub fn round_hue<T: Float>(hue: T, places: u8) -> T {
    normalize_hue(round_to(normalize_hue(hue), places))
}
