//! Entry points tying the parser, the color space models and the formatter
//! together.
//!
//! Every conversion goes through the canonical [`Rgba`] color:
//!
//! ```rust
//! let hex = tinct::convert_color("hsl(0, 100%, 50%)", "hex").unwrap();
//! assert_eq!(hex, "#FF0000");
//!
//! let cmyk = tinct::convert_color("rgb(0, 0, 0)", "cmyk").unwrap();
//! assert_eq!(cmyk, "cmyk(0.0%, 0.0%, 0.0%, 100.0%)");
//! ```

use std::collections::BTreeMap;

use crate::{
    color::{Component, Rgba},
    error::{ParseError, Result},
    format::{self, Format, Precision},
    parse,
};

/// Parse a color in any supported notation into its canonical form.
pub fn parse_color(input: &str) -> Result<Rgba, ParseError> {
    parse::parse(input).inspect_err(|err| {
        tracing::debug!(input, %err, "failed to parse color");
    })
}

/// Convert a color to the notation named by `target`, using the default
/// [`Precision`].
pub fn convert_color(input: &str, target: &str) -> Result<String> {
    convert_color_with(input, target, &Precision::default())
}

/// Convert a color to the notation named by `target`, rounding numbers as
/// configured by `precision`.
///
/// The target is validated before the input is parsed.
pub fn convert_color_with(input: &str, target: &str, precision: &Precision) -> Result<String> {
    let format = target.parse::<Format>().inspect_err(|err| {
        tracing::debug!(input, target, %err, "rejected target format");
    })?;

    let color = parse_color(input)?;
    let output = format::format(&color, format, precision);

    tracing::trace!(input, target = %format, output = %output, "converted color");

    Ok(output)
}

/// A parsed color along with its rendering in every supported format.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorRecord {
    /// The canonical color.
    pub color: Rgba,
    /// The CSS keyword naming the color, if there is one.
    pub name: Option<String>,
    /// The color written in each supported format.
    pub formats: BTreeMap<Format, String>,
}

impl ColorRecord {
    /// Build the record for a canonical color.
    pub fn new(color: Rgba, precision: &Precision) -> Self {
        let formats = Format::ALL
            .into_iter()
            .map(|target| (target, format::format(&color, target, precision)))
            .collect();

        Self {
            color,
            name: color.name().map(str::to_owned),
            formats,
        }
    }

    /// Return the color written in the given format.
    pub fn get(&self, format: Format) -> Option<&str> {
        self.formats.get(&format).map(String::as_str)
    }

    /// The alpha component of the color.
    pub fn alpha(&self) -> Component {
        self.color.alpha
    }
}

/// Parse a color and describe it in every supported format.
pub fn describe_color(input: &str) -> Result<ColorRecord> {
    let color = parse_color(input)?;
    Ok(ColorRecord::new(color, &Precision::default()))
}
