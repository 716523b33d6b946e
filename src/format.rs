//! Render colors in their canonical textual notation.
//!
//! Output is deterministic: numbers are rounded with [`round_to`] and printed
//! with a fixed number of decimals, so the same color always renders to the
//! same bytes.

use std::{fmt, str::FromStr};

use crate::{
    color::{Component, Flags, Rgba},
    error::InvalidTargetFormatError,
    math::{round_hue, round_to, MAX_PLACES},
    models::{Cmyk, ColorSpaceValue, FromRgba, Hsl, Hwb, Lab, Lch, Ncol, Oklab, Oklch},
};

/// The notations a color can be converted to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Format {
    /// `#RRGGBB`, or `#RRGGBBAA` for translucent colors.
    Hex,
    /// `rgb(r, g, b)`
    Rgb,
    /// `rgba(r, g, b, a)`
    Rgba,
    /// `hsl(h, s%, l%)`
    Hsl,
    /// `hsla(h, s%, l%, a)`
    Hsla,
    /// `hwb(h, w%, b%)`
    Hwb,
    /// `hwba(h, w%, b%, a)`
    Hwba,
    /// `cmyk(c%, m%, y%, k%)`
    Cmyk,
    /// `cmyka(c%, m%, y%, k%, a)`
    Cmyka,
    /// `lab(l a b)`
    Lab,
    /// `lch(l c h)`
    Lch,
    /// `oklab(l a b)`
    Oklab,
    /// `oklch(l c h)`
    Oklch,
    /// `ncol(Xp, w%, b%)`
    Ncol,
    /// `ncola(Xp, w%, b%, a)`
    Ncola,
}

impl Format {
    /// Every supported format.
    pub const ALL: [Format; 15] = [
        Format::Hex,
        Format::Rgb,
        Format::Rgba,
        Format::Hsl,
        Format::Hsla,
        Format::Hwb,
        Format::Hwba,
        Format::Cmyk,
        Format::Cmyka,
        Format::Lab,
        Format::Lch,
        Format::Oklab,
        Format::Oklch,
        Format::Ncol,
        Format::Ncola,
    ];

    /// The lower case identifier of the format.
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Hex => "hex",
            Format::Rgb => "rgb",
            Format::Rgba => "rgba",
            Format::Hsl => "hsl",
            Format::Hsla => "hsla",
            Format::Hwb => "hwb",
            Format::Hwba => "hwba",
            Format::Cmyk => "cmyk",
            Format::Cmyka => "cmyka",
            Format::Lab => "lab",
            Format::Lch => "lch",
            Format::Oklab => "oklab",
            Format::Oklch => "oklch",
            Format::Ncol => "ncol",
            Format::Ncola => "ncola",
        }
    }

    /// Return true if the notation always prints an alpha component.
    pub fn has_alpha(self) -> bool {
        matches!(
            self,
            Format::Rgba | Format::Hsla | Format::Hwba | Format::Cmyka | Format::Ncola
        )
    }

    /// Convert a color to the color space this format is written in. RGB
    /// based formats have no separate space and return `None`.
    pub fn to_space_value(self, color: &Rgba) -> Option<ColorSpaceValue> {
        Some(match self {
            Format::Hex | Format::Rgb | Format::Rgba => return None,
            Format::Hsl | Format::Hsla => Hsl::from_rgba(color).into(),
            Format::Hwb | Format::Hwba => Hwb::from_rgba(color).into(),
            Format::Cmyk | Format::Cmyka => Cmyk::from_rgba(color).into(),
            Format::Lab => Lab::from_rgba(color).into(),
            Format::Lch => Lch::from_rgba(color).into(),
            Format::Oklab => Oklab::from_rgba(color).into(),
            Format::Oklch => Oklch::from_rgba(color).into(),
            Format::Ncol | Format::Ncola => Ncol::from_rgba(color).into(),
        })
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = InvalidTargetFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Format::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| InvalidTargetFormatError(s.to_owned()))
    }
}

/// The number of decimals printed for each kind of number. Values above
/// nine are treated as nine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Precision {
    /// Hues in degrees.
    pub hue: u8,
    /// Percentages.
    pub percent: u8,
    /// Alpha, printed without trailing zeros.
    pub alpha: u8,
    /// CIE-Lab and CIE-Lch lightness, axes and chroma.
    pub lab: u8,
    /// Oklab and Oklch lightness, axes and chroma.
    pub oklab: u8,
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            hue: 1,
            percent: 1,
            alpha: 2,
            lab: 2,
            oklab: 4,
        }
    }
}

impl Precision {
    fn clamped(&self) -> Self {
        Self {
            hue: self.hue.min(MAX_PLACES),
            percent: self.percent.min(MAX_PLACES),
            alpha: self.alpha.min(MAX_PLACES),
            lab: self.lab.min(MAX_PLACES),
            oklab: self.oklab.min(MAX_PLACES),
        }
    }

    fn fixed(value: Component, places: u8) -> String {
        // Adding zero turns a negative zero into a positive one.
        let value = round_to(value, places) + 0.0;
        format!("{:.*}", places as usize, value)
    }

    fn hue(&self, hue: Component, flags: Flags) -> String {
        let hue = if flags.contains(Flags::HUE_IS_NONE) {
            0.0
        } else {
            round_hue(hue, self.hue)
        };
        format!("{:.*}", self.hue as usize, hue)
    }

    fn percent(&self, value: Component) -> String {
        format!("{}%", Self::fixed(value, self.percent))
    }

    fn alpha(&self, alpha: Component) -> String {
        let alpha = round_to(alpha, self.alpha) + 0.0;
        format!("{alpha}")
    }
}

/// Render a color in the given format.
pub fn format(color: &Rgba, format: Format, precision: &Precision) -> String {
    let precision = &precision.clamped();
    match format.to_space_value(color) {
        Some(value) => format_value(&value, format.has_alpha(), precision),
        None => format_rgb(color, format, precision),
    }
}

fn format_rgb(color: &Rgba, format: Format, precision: &Precision) -> String {
    let Rgba {
        red, green, blue, ..
    } = *color;

    match format {
        Format::Rgba => format!(
            "rgba({red}, {green}, {blue}, {})",
            precision.alpha(color.alpha)
        ),
        Format::Rgb => format!("rgb({red}, {green}, {blue})"),
        // Alpha that rounds to a full byte is written as opaque.
        _ if color.alpha_byte() < u8::MAX => {
            format!("#{red:02X}{green:02X}{blue:02X}{:02X}", color.alpha_byte())
        }
        _ => format!("#{red:02X}{green:02X}{blue:02X}"),
    }
}

/// Render a color space value. The `a` suffixed notation with a trailing
/// alpha is used when `with_alpha` is set. Lab based notations take no
/// suffix and print a `/ alpha` only for translucent colors.
pub fn format_value(value: &ColorSpaceValue, with_alpha: bool, precision: &Precision) -> String {
    let p = &precision.clamped();

    let (name, body, alpha) = match value {
        ColorSpaceValue::Hsl(hsl) => (
            "hsl",
            format!(
                "{}, {}, {}",
                p.hue(hsl.hue, hsl.flags),
                p.percent(hsl.saturation),
                p.percent(hsl.lightness)
            ),
            hsl.alpha,
        ),
        ColorSpaceValue::Hwb(hwb) => (
            "hwb",
            format!(
                "{}, {}, {}",
                p.hue(hwb.hue, hwb.flags),
                p.percent(hwb.whiteness),
                p.percent(hwb.blackness)
            ),
            hwb.alpha,
        ),
        ColorSpaceValue::Cmyk(cmyk) => (
            "cmyk",
            cmyk.to_array().map(|v| p.percent(v)).join(", "),
            cmyk.alpha,
        ),
        ColorSpaceValue::Ncol(ncol) => (
            "ncol",
            format!(
                "{}, {}, {}",
                ncol_hue(ncol, p.percent),
                p.percent(ncol.whiteness),
                p.percent(ncol.blackness)
            ),
            ncol.alpha,
        ),
        ColorSpaceValue::Lab(lab) => {
            let b = Precision::fixed(lab.b, p.lab);
            return lab_notation("lab", lab.lightness, lab.a, b, lab.alpha, p.lab, p);
        }
        ColorSpaceValue::Lch(lch) => {
            let hue = p.hue(lch.hue, lch.flags);
            return lab_notation("lch", lch.lightness, lch.chroma, hue, lch.alpha, p.lab, p);
        }
        ColorSpaceValue::Oklab(oklab) => {
            let b = Precision::fixed(oklab.b, p.oklab);
            let (l, a) = (oklab.lightness, oklab.a);
            return lab_notation("oklab", l, a, b, oklab.alpha, p.oklab, p);
        }
        ColorSpaceValue::Oklch(oklch) => {
            let hue = p.hue(oklch.hue, oklch.flags);
            let (l, c) = (oklch.lightness, oklch.chroma);
            return lab_notation("oklch", l, c, hue, oklch.alpha, p.oklab, p);
        }
    };

    if with_alpha {
        format!("{name}a({body}, {})", p.alpha(alpha))
    } else {
        format!("{name}({body})")
    }
}

fn ncol_hue(ncol: &Ncol, places: u8) -> String {
    let (mut sector, mut position) = if ncol.flags.contains(Flags::HUE_IS_NONE) {
        (ncol.sector, 0.0)
    } else {
        (ncol.sector, round_to(ncol.position, places) + 0.0)
    };

    if position >= 100.0 {
        sector = sector.next();
        position = 0.0;
    }

    format!("{sector}{position:.*}", places as usize)
}

fn lab_notation(
    name: &str,
    lightness: Component,
    second: Component,
    third: String,
    alpha: Component,
    places: u8,
    precision: &Precision,
) -> String {
    let alpha = if round_to(alpha, precision.alpha) < 1.0 {
        format!(" / {}", precision.alpha(alpha))
    } else {
        String::new()
    };

    format!(
        "{name}({} {} {third}{alpha})",
        Precision::fixed(lightness, places),
        Precision::fixed(second, places),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HueSector;

    fn render(color: Rgba, target: Format) -> String {
        format(&color, target, &Precision::default())
    }

    #[test]
    fn format_identifiers() {
        for target in Format::ALL {
            assert_eq!(target.as_str().parse::<Format>(), Ok(target));
            assert_eq!(target.to_string(), target.as_str());
        }
        assert_eq!("HSLA".parse::<Format>(), Ok(Format::Hsla));
        assert_eq!("OkLch".parse::<Format>(), Ok(Format::Oklch));
        assert_eq!(
            "invalid".parse::<Format>(),
            Err(InvalidTargetFormatError("invalid".into()))
        );
        assert!("".parse::<Format>().is_err());
    }

    #[test]
    fn hex() {
        assert_eq!(render(Rgba::new(255, 0, 0, 1.0), Format::Hex), "#FF0000");
        assert_eq!(render(Rgba::new(10, 171, 205, 1.0), Format::Hex), "#0AABCD");
        assert_eq!(render(Rgba::new(255, 0, 0, 0.5), Format::Hex), "#FF000080");
        assert_eq!(render(Rgba::new(0, 0, 0, 0.0), Format::Hex), "#00000000");
        assert_eq!(render(Rgba::new(255, 0, 0, 0.999), Format::Hex), "#FF0000");
        assert_eq!(render(Rgba::new(255, 0, 0, 0.998), Format::Hex), "#FF0000FE");
    }

    #[test]
    fn rgb() {
        let red = Rgba::new(255, 0, 0, 1.0);
        assert_eq!(render(red, Format::Rgb), "rgb(255, 0, 0)");
        assert_eq!(render(red, Format::Rgba), "rgba(255, 0, 0, 1)");
        assert_eq!(
            render(Rgba::new(1, 2, 3, 0.25), Format::Rgba),
            "rgba(1, 2, 3, 0.25)"
        );
        assert_eq!(
            render(Rgba::new(1, 2, 3, 128.0 / 255.0), Format::Rgba),
            "rgba(1, 2, 3, 0.5)"
        );
    }

    #[test]
    fn hsl_and_hwb() {
        let red = Rgba::new(255, 0, 0, 1.0);
        assert_eq!(render(red, Format::Hsl), "hsl(0.0, 100.0%, 50.0%)");
        assert_eq!(render(red, Format::Hsla), "hsla(0.0, 100.0%, 50.0%, 1)");
        assert_eq!(render(red, Format::Hwb), "hwb(0.0, 0.0%, 0.0%)");
        assert_eq!(
            render(Rgba::new(210, 105, 30, 0.5), Format::Hwba),
            "hwba(25.0, 11.8%, 17.6%, 0.5)"
        );
        assert_eq!(
            render(Rgba::new(128, 128, 128, 1.0), Format::Hsl),
            "hsl(0.0, 0.0%, 50.2%)"
        );
    }

    #[test]
    fn cmyk() {
        assert_eq!(
            render(Rgba::new(255, 0, 0, 1.0), Format::Cmyk),
            "cmyk(0.0%, 100.0%, 100.0%, 0.0%)"
        );
        assert_eq!(
            render(Rgba::new(0, 0, 0, 1.0), Format::Cmyk),
            "cmyk(0.0%, 0.0%, 0.0%, 100.0%)"
        );
        assert_eq!(
            render(Rgba::new(204, 102, 0, 0.3), Format::Cmyka),
            "cmyka(0.0%, 50.0%, 100.0%, 20.0%, 0.3)"
        );
    }

    #[test]
    fn lab_family() {
        let red = Rgba::new(255, 0, 0, 1.0);
        assert_eq!(render(red, Format::Lab), "lab(53.24 80.09 67.20)");
        assert_eq!(render(red, Format::Lch), "lch(53.24 104.55 40.0)");
        assert_eq!(render(red, Format::Oklab), "oklab(0.6280 0.2249 0.1258)");
        assert_eq!(render(red, Format::Oklch), "oklch(0.6280 0.2577 29.2)");

        let white = Rgba::new(255, 255, 255, 0.5);
        assert_eq!(render(white, Format::Lab), "lab(100.00 0.00 0.00 / 0.5)");
        assert_eq!(render(white, Format::Oklch), "oklch(1.0000 0.0000 0.0 / 0.5)");

        let almost_opaque = Rgba::new(255, 255, 255, 0.999);
        assert_eq!(render(almost_opaque, Format::Lab), "lab(100.00 0.00 0.00)");
    }

    #[test]
    fn ncol() {
        assert_eq!(
            render(Rgba::new(255, 0, 0, 1.0), Format::Ncol),
            "ncol(R0.0, 0.0%, 0.0%)"
        );
        assert_eq!(
            render(Rgba::new(128, 255, 0, 1.0), Format::Ncol),
            "ncol(Y49.8, 0.0%, 0.0%)"
        );
        assert_eq!(
            render(Rgba::new(0, 0, 255, 0.5), Format::Ncola),
            "ncola(B0.0, 0.0%, 0.0%, 0.5)"
        );
    }

    #[test]
    fn ncol_position_rounding_up_moves_to_the_next_sector() {
        let ncol = Ncol::new(HueSector::Magenta, 99.98, 0.0, 0.0, 1.0);
        assert_eq!(
            format_value(&ncol.into(), false, &Precision::default()),
            "ncol(R0.0, 0.0%, 0.0%)"
        );
    }

    #[test]
    fn hue_rounding_up_wraps_to_zero() {
        let hsl = Hsl::new(359.97, 100.0, 50.0, 1.0);
        assert_eq!(
            format_value(&hsl.into(), false, &Precision::default()),
            "hsl(0.0, 100.0%, 50.0%)"
        );
    }

    #[test]
    fn custom_precision() {
        let precision = Precision {
            hue: 0,
            percent: 2,
            alpha: 1,
            ..Precision::default()
        };
        assert_eq!(
            format(&Rgba::new(210, 105, 30, 0.25), Format::Hsla, &precision),
            "hsla(25, 75.00%, 47.06%, 0.3)"
        );
    }

    #[test]
    fn precision_is_capped() {
        let precision = Precision {
            hue: u8::MAX,
            percent: 40,
            ..Precision::default()
        };
        assert_eq!(
            format(&Rgba::new(255, 0, 0, 1.0), Format::Hsl, &precision),
            "hsl(0.000000000, 100.000000000%, 50.000000000%)"
        );
    }

    #[test]
    fn no_negative_zero() {
        let lab = Lab::new(50.0, -0.001, -0.0, 1.0);
        assert_eq!(
            format_value(&lab.into(), false, &Precision::default()),
            "lab(50.00 0.00 0.00)"
        );
    }
}
