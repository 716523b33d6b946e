//! tinct parses color values written in CSS-style notations and converts
//! them between color spaces.
//!
//! Every color is parsed into a canonical 8-bit [`Rgba`] value. Conversions
//! to other spaces are computed from it on demand and rendered back to text
//! with [`convert_color`].
//!
//! ```rust
//! let color = tinct::parse_color("rebeccapurple").unwrap();
//! assert_eq!((color.red, color.green, color.blue), (102, 51, 153));
//!
//! assert_eq!(
//!     tinct::convert_color("#663399", "hsl").unwrap(),
//!     "hsl(270.0, 50.0%, 40.0%)"
//! );
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod error;
mod format;
mod math;
pub mod models;
pub mod named;
mod parse;
#[cfg(test)]
mod test;

pub use color::{Component, Components, Flags, Rgba};
pub use convert::{convert_color, convert_color_with, describe_color, parse_color, ColorRecord};
pub use error::{Error, InvalidTargetFormatError, ParseError, Result};
pub use format::{format, format_value, Format, Precision};
