//! Parse color values written in any of the supported notations.
//!
//! The notation is sniffed from the structure of the input: a leading `#` is
//! hex, a `name(` prefix is a function notation and a bare word is looked up
//! in the named color table. Components outside of their domain are clamped,
//! hues are wrapped into `[0, 360)`. Anything that does not fit a grammar
//! exactly is rejected rather than guessed at.

use std::str::FromStr;

use crate::{
    color::{Component, Rgba},
    error::ParseError,
    math::normalize_hue,
    models::{Cmyk, Hsl, HueSector, Hwb, Lab, Lch, Ncol, Oklab, Oklch, ToRgba},
    named,
};

/// Parse a color from any supported notation.
pub fn parse(input: &str) -> Result<Rgba, ParseError> {
    parse_trimmed(input.trim()).ok_or_else(|| ParseError::UnrecognizedFormat(input.to_owned()))
}

impl FromStr for Rgba {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

fn parse_trimmed(input: &str) -> Option<Rgba> {
    if input.is_empty() || !input.is_ascii() || input.contains(['\n', '\r']) {
        return None;
    }

    let input = input.to_ascii_lowercase();

    if let Some(hex) = input.strip_prefix('#') {
        return parse_hex(hex);
    }

    if let Some(open) = input.find('(') {
        let name = input[..open].trim_end();
        let args = input[open + 1..].strip_suffix(')')?;
        if args.contains(['(', ')']) {
            return None;
        }
        return parse_function(name, args);
    }

    if input.bytes().all(|b| b.is_ascii_alphabetic()) {
        return named::lookup(&input);
    }

    None
}

/// Parse the digits of a hex color, without the leading `#`.
///
/// The allowed formats are:
/// * RGB
/// * RGBA
/// * RRGGBB
/// * RRGGBBAA
fn parse_hex(hex: &str) -> Option<Rgba> {
    let nibbles = hex
        .bytes()
        .map(|b| (b as char).to_digit(16).map(|d| d as u8))
        .collect::<Option<Vec<u8>>>()?;

    let channels: Vec<u8> = match nibbles.len() {
        3 | 4 => nibbles.iter().map(|n| n * 17).collect(),
        6 | 8 => nibbles.chunks(2).map(|pair| pair[0] << 4 | pair[1]).collect(),
        _ => return None,
    };

    let color = Rgba::opaque(channels[0], channels[1], channels[2]);
    Some(match channels.get(3) {
        Some(&alpha) => Rgba::new(color.red, color.green, color.blue, alpha as Component / 255.0),
        None => color,
    })
}

fn parse_function(name: &str, args: &str) -> Option<Rgba> {
    match name {
        "rgb" | "rgba" => {
            let ([r, g, b], alpha) = split_args::<3>(args)?;
            let color = Rgba::from_channels(channel(r)?, channel(g)?, channel(b)?, 1.0);
            with_alpha(color, alpha)
        }
        "hsl" | "hsla" => {
            let ([h, s, l], alpha) = split_args::<3>(args)?;
            let hsl = Hsl::new(hue(h)?, percentage(s)?, percentage(l)?, 1.0);
            with_alpha(hsl.to_rgba(), alpha)
        }
        "hwb" | "hwba" => {
            let ([h, w, b], alpha) = split_args::<3>(args)?;
            let hwb = Hwb::new(hue(h)?, percentage(w)?, percentage(b)?, 1.0);
            with_alpha(hwb.to_rgba(), alpha)
        }
        "cmyk" | "cmyka" => {
            let ([c, m, y, k], alpha) = split_args::<4>(args)?;
            let cmyk = Cmyk::new(
                percentage(c)?,
                percentage(m)?,
                percentage(y)?,
                percentage(k)?,
                1.0,
            );
            with_alpha(cmyk.to_rgba(), alpha)
        }
        "lab" => {
            let ([l, a, b], alpha) = split_args::<3>(args)?;
            let lab = Lab::new(scaled(l, 100.0)?, scaled(a, 125.0)?, scaled(b, 125.0)?, 1.0);
            with_alpha(lab.to_rgba(), alpha)
        }
        "lch" => {
            let ([l, c, h], alpha) = split_args::<3>(args)?;
            let lch = Lch::new(scaled(l, 100.0)?, scaled(c, 150.0)?, hue(h)?, 1.0);
            with_alpha(lch.to_rgba(), alpha)
        }
        "oklab" => {
            let ([l, a, b], alpha) = split_args::<3>(args)?;
            let oklab = Oklab::new(scaled(l, 1.0)?, scaled(a, 0.4)?, scaled(b, 0.4)?, 1.0);
            with_alpha(oklab.to_rgba(), alpha)
        }
        "oklch" => {
            let ([l, c, h], alpha) = split_args::<3>(args)?;
            let oklch = Oklch::new(scaled(l, 1.0)?, scaled(c, 0.4)?, hue(h)?, 1.0);
            with_alpha(oklch.to_rgba(), alpha)
        }
        "ncol" | "ncola" => {
            let ([h, w, b], alpha) = split_args::<3>(args)?;
            let (sector, position) = ncol_hue(h)?;
            let ncol = Ncol::new(sector, position, percentage(w)?, percentage(b)?, 1.0);
            with_alpha(ncol.to_rgba(), alpha)
        }
        _ => None,
    }
}

/// Split the arguments of a function notation into `N` components and an
/// optional alpha.
///
/// Comma separated lists take the alpha as an extra trailing item. Space
/// separated lists take it either as an extra trailing item or after a `/`.
fn split_args<const N: usize>(args: &str) -> Option<([&str; N], Option<&str>)> {
    let mut tokens: Vec<&str> = Vec::with_capacity(N + 2);
    let mut slash = None;

    if args.contains(',') {
        for item in args.split(',') {
            let item = item.trim();
            if item.is_empty() || item.contains(|c: char| c.is_whitespace() || c == '/') {
                return None;
            }
            tokens.push(item);
        }
    } else {
        for (index, part) in args.split('/').enumerate() {
            match index {
                0 => tokens.extend(part.split_whitespace()),
                1 => {
                    let mut alpha = part.split_whitespace();
                    slash = Some(alpha.next()?);
                    if alpha.next().is_some() {
                        return None;
                    }
                }
                _ => return None,
            }
        }
    }

    let alpha = match (tokens.len(), slash) {
        (n, alpha) if n == N => alpha,
        (n, None) if n == N + 1 => tokens.pop(),
        _ => return None,
    };

    let components: [&str; N] = tokens.try_into().ok()?;
    Some((components, alpha))
}

/// Set the parsed alpha on a color. A missing alpha is fully opaque.
fn with_alpha(color: Rgba, alpha: Option<&str>) -> Option<Rgba> {
    let alpha = match alpha {
        Some(alpha) => alpha_value(alpha)?,
        None => 1.0,
    };
    Some(Rgba::new(color.red, color.green, color.blue, alpha))
}

/// Parse a number. `inf` and `nan` are rejected, finite values too large
/// for a [`Component`] saturate so that the domain clamps still apply.
fn number(token: &str) -> Option<Component> {
    if token.contains(|c: char| c.is_ascii_alphabetic() && c != 'e') {
        return None;
    }
    let value = token.parse::<f64>().ok()?;
    Some(value.clamp(Component::MIN as f64, Component::MAX as f64) as Component)
}

/// Parse a number with an optional `%` suffix, returning whether the suffix
/// was present.
fn number_or_percentage(token: &str) -> Option<(Component, bool)> {
    match token.strip_suffix('%') {
        Some(value) => Some((number(value)?, true)),
        None => Some((number(token)?, false)),
    }
}

/// An RGB channel, either absolute or a percentage of 255.
fn channel(token: &str) -> Option<Component> {
    let (value, is_percentage) = number_or_percentage(token)?;
    Some(if is_percentage { value / 100.0 * 255.0 } else { value })
}

/// An alpha value, either a fraction or a percentage.
fn alpha_value(token: &str) -> Option<Component> {
    let (value, is_percentage) = number_or_percentage(token)?;
    Some(if is_percentage { value / 100.0 } else { value })
}

/// A percentage clamped to `[0, 100]`. The `%` suffix is optional.
fn percentage(token: &str) -> Option<Component> {
    let (value, _) = number_or_percentage(token)?;
    Some(value.clamp(0.0, 100.0))
}

/// A hue in degrees with an optional `deg` suffix, wrapped into `[0, 360)`.
fn hue(token: &str) -> Option<Component> {
    let token = token.strip_suffix("deg").unwrap_or(token);
    number(token).map(normalize_hue)
}

/// A number where a percentage means a fraction of `full`.
fn scaled(token: &str, full: Component) -> Option<Component> {
    let (value, is_percentage) = number_or_percentage(token)?;
    Some(if is_percentage { value / 100.0 * full } else { value })
}

/// An NCol hue: a sector letter followed by the percentage through the
/// sector.
fn ncol_hue(token: &str) -> Option<(HueSector, Component)> {
    let mut chars = token.chars();
    let sector = HueSector::from_letter(chars.next()?)?;
    let position = percentage(chars.as_str())?;
    Some((sector, position))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba(input: &str) -> (u8, u8, u8, Component) {
        let c = parse(input).unwrap();
        (c.red, c.green, c.blue, c.alpha)
    }

    #[test]
    fn hex() {
        assert_eq!(rgba("#ff0000"), (255, 0, 0, 1.0));
        assert_eq!(rgba("#F00"), (255, 0, 0, 1.0));
        assert_eq!(rgba("#abc"), (0xaa, 0xbb, 0xcc, 1.0));
        assert_eq!(rgba("#aabbcc80"), (0xaa, 0xbb, 0xcc, 128.0 / 255.0));
        assert_eq!(rgba("#0000"), (0, 0, 0, 0.0));
        assert!(parse("#ff000").is_err());
        assert!(parse("#gg0000").is_err());
        assert!(parse("#").is_err());
    }

    #[test]
    fn equal_colors_compare_equal_whatever_the_notation() {
        let red = parse("#ff0000").unwrap();
        assert_eq!(parse("#ff0000ff"), Ok(red));
        assert_eq!(parse("rgba(255, 0, 0, 1)"), Ok(red));
        assert_eq!(parse("red"), Ok(red));
        assert_eq!(red, Rgba::new(255, 0, 0, 1.0));
    }

    #[test]
    fn rgb() {
        assert_eq!(rgba("rgb(255, 0, 0)"), (255, 0, 0, 1.0));
        assert_eq!(rgba("RGB(255 0 0)"), (255, 0, 0, 1.0));
        assert_eq!(rgba("rgb(100%, 50%, 0%)"), (255, 128, 0, 1.0));
        assert_eq!(rgba("rgba(255, 0, 0, 0.5)"), (255, 0, 0, 0.5));
        assert_eq!(rgba("rgba(255 0 0 / 50%)"), (255, 0, 0, 0.5));
        assert_eq!(rgba("rgb(255 0 0/0.25)"), (255, 0, 0, 0.25));
        assert_eq!(rgba("  rgb( 1 , 2 , 3 )  "), (1, 2, 3, 1.0));
    }

    #[test]
    fn rgb_is_clamped() {
        assert_eq!(rgba("rgb(300,300,300)"), (255, 255, 255, 1.0));
        assert_eq!(rgba("rgb(-10,-10,-10)"), (0, 0, 0, 1.0));
        assert_eq!(rgba("rgba(255,0,0,1.5)"), (255, 0, 0, 1.0));
        assert_eq!(rgba("rgba(255,0,0,-0.5)"), (255, 0, 0, 0.0));
        assert_eq!(rgba("rgb(1e40, 0, 0)"), (255, 0, 0, 1.0));
        assert_eq!(rgba("rgb(-1e40, 1e400, 0)"), (0, 255, 0, 1.0));
        assert_eq!(rgba("rgba(255, 0, 0, 1e40)"), (255, 0, 0, 1.0));
        assert_eq!(rgba("hsl(0, 1e40%, 50%)"), (255, 0, 0, 1.0));
    }

    #[test]
    fn hsl_hue_wraps() {
        assert_eq!(parse("hsl(360,100%,50%)"), parse("hsl(0,100%,50%)"));
        assert_eq!(parse("hsl(-30,100%,50%)"), parse("hsl(330,100%,50%)"));
        assert_eq!(parse("hsl(-30deg 100% 50%)"), parse("hsl(330,100%,50%)"));
        assert_eq!(rgba("hsl(0,100%,50%)"), (255, 0, 0, 1.0));
        assert_eq!(rgba("hsla(120, 100%, 25%, 0.5)"), (0, 128, 0, 0.5));
        assert_eq!(rgba("hsl(0, 150%, 50%)"), (255, 0, 0, 1.0));
    }

    #[test]
    fn hwb_and_cmyk() {
        assert_eq!(rgba("hwb(0, 20%, 20%)"), (204, 51, 51, 1.0));
        assert_eq!(rgba("hwba(0 0% 0% / 0.5)"), (255, 0, 0, 0.5));
        assert_eq!(rgba("cmyk(0%, 100%, 100%, 0%)"), (255, 0, 0, 1.0));
        assert_eq!(rgba("cmyk(0, 0, 0, 100)"), (0, 0, 0, 1.0));
        assert_eq!(rgba("cmyka(0%, 50%, 100%, 20%, 0.3)"), (204, 102, 0, 0.3));
        assert_eq!(rgba("cmyk(0%, 200%, 100%, -5%)"), (255, 0, 0, 1.0));
    }

    #[test]
    fn lab_family() {
        assert_eq!(rgba("lab(53.24 80.09 67.2)"), (255, 0, 0, 1.0));
        assert_eq!(rgba("lch(53.24 104.55 40)"), (255, 0, 0, 1.0));
        assert_eq!(rgba("oklab(0.628 0.2249 0.1258)"), (255, 0, 0, 1.0));
        assert_eq!(rgba("oklab(62.8% 0.2249 0.1258 / 0.5)"), (255, 0, 0, 0.5));
        assert_eq!(rgba("oklch(0.628 0.2577 29.23)"), (255, 0, 0, 1.0));
        assert_eq!(parse("oklch(0.628 0.2577 389.23)"), parse("oklch(0.628 0.2577 29.23)"));
        assert_eq!(rgba("lab(100 0 0)"), (255, 255, 255, 1.0));
    }

    #[test]
    fn ncol() {
        assert_eq!(rgba("ncol(R0, 0%, 0%)"), (255, 0, 0, 1.0));
        assert_eq!(rgba("ncol(G0 0% 0%)"), (0, 255, 0, 1.0));
        assert_eq!(rgba("ncol(y50, 0%, 0%)"), (128, 255, 0, 1.0));
        assert_eq!(rgba("ncola(B0, 0%, 50%, 0.5)"), (0, 0, 128, 0.5));
        assert!(parse("ncol(X10, 0%, 0%)").is_err());
        assert!(parse("ncol(R, 0%, 0%)").is_err());
    }

    #[test]
    fn named() {
        assert_eq!(rgba("red"), (255, 0, 0, 1.0));
        assert_eq!(rgba("  RebeccaPurple\t"), (0x66, 0x33, 0x99, 1.0));
    }

    #[test]
    fn malformed_input_is_rejected() {
        for input in [
            "",
            "   ",
            "not-a-color",
            "notacolor",
            "rgb(255, 0, 0",
            "rgb 255, 0, 0)",
            "rgb((255, 0, 0))",
            "rgb(255, 0)",
            "rgb(255, 0, 0, 1, 1)",
            "rgb(255,, 0, 0)",
            "rgb(255, 0, 0 / 1)",
            "rgb(255 0 / 0 / 1)",
            "rgb(255 0 0 /)",
            "rgb(a, b, c)",
            "rgb(inf, 0, 0)",
            "rgb(NaN, 0, 0)",
            "hsl(0, 100%, 50%)\nhsl(0, 100%, 50%)",
            "cmyk(0, 0, 0)",
            "lab(50, 0)",
            "xyz(0 0 0)",
            "#ff0000 extra",
            "ré",
        ] {
            assert_eq!(
                parse(input),
                Err(ParseError::UnrecognizedFormat(input.to_owned())),
                "{input:?}"
            );
        }
    }

    #[test]
    fn from_str() {
        let color: Rgba = "#00ff00".parse().unwrap();
        assert_eq!(color.green, 255);
    }
}
