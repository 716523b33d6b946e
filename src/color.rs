//! The canonical [`Rgba`] color every notation is parsed into and rendered
//! from, and the float primitives the color models are built on.

use bitflags::bitflags;

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent three components of a color, used for the matrix math of the
/// conversions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

bitflags! {
    /// Flags to mark missing or powerless components of a color.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Flags : u8 {
        /// Set when the hue of a color is powerless, i.e. the color is
        /// achromatic and any hue would describe it.
        const HUE_IS_NONE = 1 << 0;
    }
}

/// A color in the sRGB color space with 8-bit channels. All notations are
/// converted through this representation.
///
/// Channels are always in `[0, 255]` and alpha in `[0.0, 1.0]`; the
/// constructors clamp anything outside those ranges.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    /// The red channel.
    pub red: u8,
    /// The green channel.
    pub green: u8,
    /// The blue channel.
    pub blue: u8,
    /// The alpha channel, where `1.0` is fully opaque.
    pub alpha: Component,
}

impl Rgba {
    /// Create a new color from 8-bit channels. Alpha is clamped to
    /// `[0.0, 1.0]`.
    pub fn new(red: u8, green: u8, blue: u8, alpha: Component) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: clamp_alpha(alpha),
        }
    }

    /// Create a fully opaque color.
    pub fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    /// Create a color from channels in the `[0, 255]` range, rounding to the
    /// nearest integer and clamping values outside the range.
    pub fn from_channels(
        red: Component,
        green: Component,
        blue: Component,
        alpha: Component,
    ) -> Self {
        Self::new(to_channel(red), to_channel(green), to_channel(blue), alpha)
    }

    /// Create a color from unit components in the `[0.0, 1.0]` range, as
    /// produced by the color model conversions.
    pub fn from_unit(components: Components, alpha: Component) -> Self {
        let Components(red, green, blue) = components.map(|v| v * 255.0);
        Self::from_channels(red, green, blue, alpha)
    }

    /// Return the channels scaled to the `[0.0, 1.0]` range.
    pub fn to_unit(&self) -> Components {
        Components(
            self.red as Component / 255.0,
            self.green as Component / 255.0,
            self.blue as Component / 255.0,
        )
    }

    /// Return true if the alpha channel is below fully opaque.
    pub fn is_translucent(&self) -> bool {
        self.alpha < 1.0
    }

    /// Return the alpha channel as an 8-bit value.
    pub fn alpha_byte(&self) -> u8 {
        to_channel(self.alpha * 255.0)
    }
}

/// Round a channel value to the nearest integer in `[0, 255]`. NaN becomes
/// zero.
pub(crate) fn to_channel(value: Component) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 255.0) as u8
}

/// Clamp an alpha value to `[0.0, 1.0]`. NaN becomes fully opaque.
pub(crate) fn clamp_alpha(alpha: Component) -> Component {
    if alpha.is_nan() {
        1.0
    } else {
        alpha.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_color_with_correct_channels() {
        let c = Rgba::new(10, 20, 30, 0.4);
        assert_eq!((c.red, c.green, c.blue), (10, 20, 30));
        assert_eq!(c.alpha, 0.4);

        let c = Rgba::opaque(10, 20, 30);
        assert_eq!(c, Rgba::new(10, 20, 30, 1.0));
    }

    #[test]
    fn channels_are_rounded_and_clamped() {
        let c = Rgba::from_channels(300.0, -10.0, 127.5, 1.0);
        assert_eq!((c.red, c.green, c.blue), (255, 0, 128));

        let c = Rgba::from_channels(Component::NAN, 0.49, 254.6, 1.0);
        assert_eq!((c.red, c.green, c.blue), (0, 0, 255));
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(Rgba::new(0, 0, 0, 1.5).alpha, 1.0);
        assert_eq!(Rgba::new(0, 0, 0, -0.5).alpha, 0.0);
        assert_eq!(Rgba::new(0, 0, 0, Component::NAN).alpha, 1.0);
    }

    #[test]
    fn unit_components() {
        let c = Rgba::from_unit(Components(1.0, 0.5, 0.0), 1.0);
        assert_eq!((c.red, c.green, c.blue), (255, 128, 0));

        let Components(r, g, b) = Rgba::new(255, 0, 51, 1.0).to_unit();
        assert_eq!(r, 1.0);
        assert_eq!(g, 0.0);
        assert_eq!(b, 0.2);
    }

    #[test]
    fn alpha_byte() {
        assert_eq!(Rgba::new(0, 0, 0, 1.0).alpha_byte(), 255);
        assert_eq!(Rgba::new(0, 0, 0, 0.5).alpha_byte(), 128);
        assert!(Rgba::new(0, 0, 0, 0.5).is_translucent());
        assert!(!Rgba::opaque(0, 0, 0).is_translucent());
    }
}
