//! Model a color with the CMYK notation. This is the naive device independent
//! form without any ink profile.

use crate::{
    color::{Component, Rgba},
    models::{FromRgba, ToRgba},
};

tinct_macros::gen_model! {
    /// A color specified with cyan, magenta, yellow and key (black)
    /// percentages.
    pub struct Cmyk {
        /// The cyan component of the color.
        pub cyan: Component,
        /// The magenta component of the color.
        pub magenta: Component,
        /// The yellow component of the color.
        pub yellow: Component,
        /// The key (black) component of the color.
        pub key: Component,
    }
}

impl FromRgba for Cmyk {
    fn from_rgba(color: &Rgba) -> Self {
        let unit = color.to_unit();
        let key = 1.0 - unit.0.max(unit.1).max(unit.2);

        // Pure black would divide by zero.
        if key >= 1.0 {
            return Cmyk::new(0.0, 0.0, 0.0, 100.0, color.alpha);
        }

        let ink = unit.map(|v| (1.0 - v - key) / (1.0 - key) * 100.0);
        Cmyk::new(ink.0, ink.1, ink.2, key * 100.0, color.alpha)
    }
}

impl ToRgba for Cmyk {
    fn to_rgba(&self) -> Rgba {
        let [cyan, magenta, yellow, key] = self.to_array().map(|v| (v / 100.0).clamp(0.0, 1.0));
        let white = 255.0 * (1.0 - key);

        Rgba::from_channels(
            white * (1.0 - cyan),
            white * (1.0 - magenta),
            white * (1.0 - yellow),
            self.alpha,
        )
    }
}
