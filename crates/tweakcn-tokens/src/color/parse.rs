//! Colour literal parsing.
//!
//! Notations are tried in a fixed order: hex, `rgb()`/`rgba()`,
//! `hsl()`/`hsla()`, then `oklch()`. A literal that matches none of them
//! yields `None`; callers treat that as "unparseable", never as a crash.
//!
//! Function channels may be separated by commas (with an optional fourth
//! alpha channel) or by whitespace (with an optional `/ alpha` suffix):
//!
//! ```rust
//! use tweakcn_tokens::color::parse_color;
//!
//! assert!(parse_color("rgba(255, 0, 0, 0.5)").is_some());
//! assert!(parse_color("hsl(0 100% 50% / 0.5)").is_some());
//! assert!(parse_color("oklch(0.62 0.19 260)").is_some());
//! assert!(parse_color("red").is_none());
//! ```

use super::convert::{hsl_to_rgb, oklch_to_rgb};
use super::{Hsl, Oklch, Rgba};

/// Parses a colour literal into normalized RGB.
///
/// Every channel of the result, alpha included, is clamped to `[0, 1]`.
pub fn parse_color(text: &str) -> Option<Rgba> {
    let s = text.trim();

    let parsed = if let Some(hex) = s.strip_prefix('#') {
        parse_hex(hex)
    } else if let Some(args) = function_args(s, &["rgba", "rgb"]) {
        parse_rgb(args)
    } else if let Some(args) = function_args(s, &["hsla", "hsl"]) {
        parse_hsl(args)
    } else if let Some(args) = function_args(s, &["oklch"]) {
        parse_oklch(args)
    } else {
        None
    };

    parsed.map(Rgba::clamped)
}

/// Parses the digits of a hex colour (without the `#` prefix).
///
/// Short forms duplicate each nibble; 4- and 8-digit forms carry alpha.
fn parse_hex(hex: &str) -> Option<Rgba> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|n| n * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let unit = |v: u8| v as f64 / 255.0;

    match hex.len() {
        3 | 4 => {
            let mut color = Rgba::new(unit(nibble(0)?), unit(nibble(1)?), unit(nibble(2)?));
            if hex.len() == 4 {
                color = color.with_alpha(unit(nibble(3)?));
            }
            Some(color)
        }
        6 | 8 => {
            let mut color = Rgba::new(unit(byte(0)?), unit(byte(2)?), unit(byte(4)?));
            if hex.len() == 8 {
                color = color.with_alpha(unit(byte(6)?));
            }
            Some(color)
        }
        _ => None,
    }
}

/// Parses `rgb()` channels: bare numbers on a 0–255 scale or percentages.
fn parse_rgb(args: &str) -> Option<Rgba> {
    let (channels, alpha) = split_channels(args)?;

    let channel = |raw: &str| match raw.strip_suffix('%') {
        Some(pct) => parse_unsigned(pct).map(|v| v / 100.0),
        None => parse_unsigned(raw).map(|v| v / 255.0),
    };

    Some(Rgba {
        r: channel(channels[0])?,
        g: channel(channels[1])?,
        b: channel(channels[2])?,
        a: parse_alpha(alpha)?,
    })
}

/// Parses `hsl()` channels: hue in degrees, saturation and lightness as
/// percentages.
fn parse_hsl(args: &str) -> Option<Rgba> {
    let (channels, alpha) = split_channels(args)?;

    let hue = channels[0].strip_suffix("deg").unwrap_or(channels[0]);
    let percent = |raw: &str| raw.strip_suffix('%').and_then(parse_unsigned);

    Some(hsl_to_rgb(Hsl {
        h: parse_unsigned(hue)?,
        s: percent(channels[1])? / 100.0,
        l: percent(channels[2])? / 100.0,
        a: parse_alpha(alpha)?,
    }))
}

/// Parses `oklch()` channels: three unitless numbers and an optional
/// `/ alpha`.
fn parse_oklch(args: &str) -> Option<Rgba> {
    let (body, alpha) = match args.split_once('/') {
        Some((body, alpha)) => (body, Some(alpha.trim())),
        None => (args, None),
    };

    let parts: Vec<&str> = body.split_whitespace().collect();
    if parts.len() != 3 {
        return None;
    }

    Some(oklch_to_rgb(Oklch {
        l: parse_unsigned(parts[0])?,
        c: parse_unsigned(parts[1])?,
        h: parse_unsigned(parts[2])?,
        a: parse_alpha(alpha)?,
    }))
}

/// Returns the text between the parentheses when `s` is a call to one of
/// `names` (case-insensitive, whitespace allowed before the parenthesis).
fn function_args<'a>(s: &'a str, names: &[&str]) -> Option<&'a str> {
    let open = s.find('(')?;
    let name = s[..open].trim_end();
    if !names.iter().any(|n| name.eq_ignore_ascii_case(n)) {
        return None;
    }
    s[open + 1..].strip_suffix(')')
}

/// Splits function arguments into exactly three channels plus an optional
/// alpha component.
fn split_channels(args: &str) -> Option<(Vec<&str>, Option<&str>)> {
    if args.contains(',') {
        let mut parts: Vec<&str> = args.split(',').map(str::trim).collect();
        let alpha = match parts.len() {
            3 => None,
            4 => parts.pop(),
            _ => return None,
        };
        return Some((parts, alpha));
    }

    let (body, alpha) = match args.split_once('/') {
        Some((body, alpha)) => (body, Some(alpha.trim())),
        None => (args, None),
    };
    let parts: Vec<&str> = body.split_whitespace().collect();
    if parts.len() != 3 {
        return None;
    }
    Some((parts, alpha))
}

/// Parses an optional alpha component.
///
/// The outer `Option` reports failure; the inner one whether alpha was
/// present at all.
fn parse_alpha(raw: Option<&str>) -> Option<Option<f64>> {
    match raw {
        None => Some(None),
        Some(raw) => parse_unsigned(raw).map(Some),
    }
}

/// Parses an unsigned decimal number (`12`, `12.5`, `.5`).
fn parse_unsigned(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    let digits = raw.bytes().filter(u8::is_ascii_digit).count();
    let dots = raw.bytes().filter(|b| *b == b'.').count();
    if digits == 0 || dots > 1 || digits + dots != raw.len() {
        return None;
    }
    raw.parse::<f64>().ok()
}
