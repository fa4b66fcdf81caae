//! Shadow composites.
//!
//! Eight `box-shadow` tokens are derived from six raw parameters of one
//! mode. Opacity is always rendered with two decimals, unlike channel
//! values elsewhere in the crate.

use tracing::warn;

use crate::color::to_fixed;
use crate::tokens::defaults::default_token;
use crate::tokens::{ThemeMode, ThemeStyles};

/// Composite shadow tokens, in emission order.
pub const SHADOW_TOKENS: [&str; 8] = [
    "shadow-2xs",
    "shadow-xs",
    "shadow-sm",
    "shadow",
    "shadow-md",
    "shadow-lg",
    "shadow-xl",
    "shadow-2xl",
];

const FALLBACK_OPACITY: f64 = 0.1;

/// How a composite token is built from the raw parameters.
enum Tier {
    /// One layer at a scaled opacity.
    Single(f64),
    /// Raw layer at full opacity plus a tighter layer with a fixed
    /// offset-y/blur pair and the spread reduced by one pixel.
    Layered(&'static str, &'static str),
}

fn tier(token: &str) -> Tier {
    match token {
        "shadow-2xs" | "shadow-xs" => Tier::Single(0.5),
        "shadow-2xl" => Tier::Single(2.5),
        "shadow-sm" | "shadow" => Tier::Layered("1px", "2px"),
        "shadow-md" => Tier::Layered("2px", "4px"),
        "shadow-lg" => Tier::Layered("4px", "6px"),
        _ => Tier::Layered("8px", "10px"),
    }
}

/// The eight composite shadow values of one mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadowMap {
    entries: Vec<(&'static str, String)>,
}

impl ShadowMap {
    /// Returns the composite value for a token such as `shadow-md`.
    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == token)
            .map(|(_, value)| value.as_str())
    }

    /// Iterates in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(name, value)| (*name, value.as_str()))
    }
}

/// Raw shadow parameters of one mode, resolved against the defaults.
struct ShadowParams<'a> {
    color: &'a str,
    opacity: f64,
    offset_x: &'a str,
    offset_y: &'a str,
    blur: &'a str,
    spread: &'a str,
    /// Spread of the second layer, `spread - 1` in pixels.
    inner_spread: String,
}

impl<'a> ShadowParams<'a> {
    fn resolve(styles: &'a ThemeStyles, mode: ThemeMode) -> Self {
        let props = styles.mode(mode);
        let param = |name: &str| -> &'a str {
            props
                .get(name)
                .or_else(|| default_token(mode, name))
                .unwrap_or_default()
        };

        let raw_opacity = param("shadow-opacity");
        let opacity = parse_float_prefix(raw_opacity).unwrap_or_else(|| {
            warn!(%mode, value = raw_opacity, "invalid shadow opacity, using {}", FALLBACK_OPACITY);
            FALLBACK_OPACITY
        });

        let spread = param("shadow-spread");
        let spread_px = parse_float_prefix(&spread.replace("px", "")).unwrap_or_else(|| {
            warn!(%mode, value = spread, "invalid shadow spread, treating as 0");
            0.0
        });

        Self {
            color: param("shadow-color"),
            opacity,
            offset_x: param("shadow-offset-x"),
            offset_y: param("shadow-offset-y"),
            blur: param("shadow-blur"),
            spread,
            inner_spread: format!("{}px", spread_px - 1.0),
        }
    }

    fn color(&self, multiplier: f64) -> String {
        format!("{} / {}", self.color, to_fixed(self.opacity * multiplier, 2))
    }

    fn outer_layer(&self, multiplier: f64) -> String {
        format!(
            "{} {} {} {} {}",
            self.offset_x,
            self.offset_y,
            self.blur,
            self.spread,
            self.color(multiplier)
        )
    }

    fn inner_layer(&self, offset_y: &str, blur: &str) -> String {
        format!(
            "{} {} {} {} {}",
            self.offset_x,
            offset_y,
            blur,
            self.inner_spread,
            self.color(1.0)
        )
    }
}

/// Derives the eight composite shadow tokens for `mode`.
///
/// Missing raw parameters fall back to the built-in defaults of the mode.
/// Unparseable opacity falls back to `0.1` and unparseable spread counts
/// as `0px`; both are logged.
pub fn compose_shadows(styles: &ThemeStyles, mode: ThemeMode) -> ShadowMap {
    let params = ShadowParams::resolve(styles, mode);

    let entries = SHADOW_TOKENS
        .iter()
        .map(|&token| {
            let value = match tier(token) {
                Tier::Single(multiplier) => params.outer_layer(multiplier),
                Tier::Layered(offset_y, blur) => format!(
                    "{}, {}",
                    params.outer_layer(1.0),
                    params.inner_layer(offset_y, blur)
                ),
            };
            (token, value)
        })
        .collect();

    ShadowMap { entries }
}

/// Parses the longest leading decimal number of `text`, ignoring leading
/// whitespace and any trailing unit (`"3px"` → `3.0`).
fn parse_float_prefix(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }
    text[..end].parse().ok()
}
