//! Colour formatting.
//!
//! Numbers are rendered with one rule everywhere a channel is stringified:
//! integers print without a decimal point, everything else prints with
//! exactly four decimals (see [`format_number`]). Downstream stylesheets
//! are compared byte-for-byte, so this rule is part of the output format.

use tracing::debug;

use super::convert::{rgb_to_hsl, rgb_to_oklch};
use super::parse::parse_color;
use super::{ColorFormat, Rgba, TailwindVersion};
use crate::error::{Result, ThemeError};

/// Renders `value` with `digits` fractional digits.
///
/// Rounds half up on the exact binary value of `value`, the way
/// JavaScript's `Number.prototype.toFixed` does, rather than Rust's
/// round-half-to-even. Negative values keep their sign even when every
/// printed digit is zero.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    // Enough extra digits that the first dropped digit is exact.
    let exact = format!("{:.*}", digits + 40, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .map(|b| b - b'0')
        .collect();

    if frac_part.as_bytes().get(digits).is_some_and(|d| *d >= b'5') {
        let mut i = kept.len();
        loop {
            if i == 0 {
                kept.insert(0, 1);
                break;
            }
            i -= 1;
            if kept[i] == 9 {
                kept[i] = 0;
            } else {
                kept[i] += 1;
                break;
            }
        }
    }

    let split = kept.len() - digits;
    let mut out = String::with_capacity(kept.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(kept[..split].iter().map(|d| char::from(b'0' + d)));
    if digits > 0 {
        out.push('.');
        out.extend(kept[split..].iter().map(|d| char::from(b'0' + d)));
    }
    out
}

/// Renders a channel or component value.
///
/// Zero (and NaN) render as `"0"`, integers without a decimal point, and
/// everything else with exactly four decimals.
///
/// ```rust
/// use tweakcn_tokens::color::format_number;
///
/// assert_eq!(format_number(1.0), "1");
/// assert_eq!(format_number(0.333333), "0.3333");
/// assert_eq!(format_number(0.0), "0");
/// ```
pub fn format_number(value: f64) -> String {
    if value == 0.0 || value.is_nan() {
        "0".to_string()
    } else if value.fract() == 0.0 {
        format!("{}", value)
    } else {
        to_fixed(value, 4)
    }
}

fn channel_255(c: f64) -> u8 {
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}

fn render_hex(color: &Rgba) -> String {
    let mut hex = format!(
        "#{:02x}{:02x}{:02x}",
        channel_255(color.r),
        channel_255(color.g),
        channel_255(color.b)
    );
    if let Some(a) = color.translucent_alpha() {
        hex.push_str(&format!("{:02x}", channel_255(a)));
    }
    hex
}

fn render_rgb(color: &Rgba) -> String {
    let (r, g, b) = (
        channel_255(color.r),
        channel_255(color.g),
        channel_255(color.b),
    );
    match color.translucent_alpha() {
        Some(a) => format!("rgba({}, {}, {}, {})", r, g, b, format_number(a)),
        None => format!("rgb({}, {}, {})", r, g, b),
    }
}

fn render_hsl(color: &Rgba, version: TailwindVersion) -> String {
    let hsl = rgb_to_hsl(*color);
    let triplet = format!(
        "{} {}% {}%",
        format_number(hsl.h),
        format_number(hsl.s * 100.0),
        format_number(hsl.l * 100.0)
    );
    match version {
        TailwindVersion::V3 => triplet,
        TailwindVersion::V4 => format!("hsl({})", triplet),
    }
}

fn render_oklch(color: &Rgba) -> String {
    let oklch = rgb_to_oklch(*color);
    format!(
        "oklch({} {} {})",
        format_number(oklch.l),
        format_number(oklch.c),
        format_number(oklch.h)
    )
}

/// Renders an already-parsed colour in the target notation.
///
/// HSL output is a bare `H S% L%` triplet for Tailwind 3 and a full
/// `hsl(H S% L%)` function for Tailwind 4. RGB and hex carry alpha only
/// when it is below `1`; HSL and OKLCH output never carry alpha.
pub fn render_color(color: &Rgba, format: ColorFormat, version: TailwindVersion) -> String {
    match format {
        ColorFormat::Hex => render_hex(color),
        ColorFormat::Rgb => render_rgb(color),
        ColorFormat::Hsl => render_hsl(color, version),
        ColorFormat::Oklch => render_oklch(color),
    }
}

/// Converts a colour literal to the target notation, reporting failure.
pub fn try_format_color(text: &str, format: ColorFormat, version: TailwindVersion) -> Result<String> {
    let color = parse_color(text).ok_or_else(|| ThemeError::UnparseableColor(text.to_string()))?;
    Ok(render_color(&color, format, version))
}

/// Converts a colour literal to the target notation.
///
/// Never fails: input that does not parse is logged at debug level and
/// returned unchanged, so one bad token cannot abort a whole document.
pub fn format_color(text: &str, format: ColorFormat, version: TailwindVersion) -> String {
    match try_format_color(text, format, version) {
        Ok(formatted) => formatted,
        Err(err) => {
            debug!(color = text, %format, "failed to convert color: {}", err);
            text.to_string()
        }
    }
}
