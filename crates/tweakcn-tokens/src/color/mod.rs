//! Colour literals: parsing, colour-space conversion and formatting.
//!
//! Four notations are understood on input and produced on output:
//!
//! | Notation | Example                     |
//! |----------|-----------------------------|
//! | hex      | `#3b82f6`, `#fff`, `#0008`  |
//! | rgb      | `rgb(59, 130, 246)`         |
//! | hsl      | `hsl(217 91% 60%)`          |
//! | oklch    | `oklch(0.62 0.19 260)`      |
//!
//! Every literal is parsed into an [`Rgba`] with channels in `[0, 1]`.
//! HSL and OKLCH are reached from there through the pairwise functions in
//! [`convert`]; there is no direct HSL ↔ OKLCH path.
//!
//! # Example
//!
//! ```rust
//! use tweakcn_tokens::color::{format_color, ColorFormat, TailwindVersion};
//!
//! let hsl = format_color("#ff0000", ColorFormat::Hsl, TailwindVersion::V4);
//! assert_eq!(hsl, "hsl(0 100% 50%)");
//!
//! // Anything unrecognised comes back untouched.
//! let same = format_color("not-a-color", ColorFormat::Hsl, TailwindVersion::V3);
//! assert_eq!(same, "not-a-color");
//! ```

pub mod convert;
pub mod format;
pub mod parse;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use convert::{hsl_to_rgb, oklch_to_rgb, rgb_to_hsl, rgb_to_oklch};
pub use format::{format_color, format_number, render_color, to_fixed, try_format_color};
pub use parse::parse_color;

/// A colour in normalized sRGB, every channel in `[0, 1]`.
///
/// `a` is `None` when the source literal carried no alpha channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: Option<f64>,
}

impl Rgba {
    /// Creates an opaque colour without an alpha channel.
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: None }
    }

    /// Returns the colour with the given alpha channel.
    pub fn with_alpha(mut self, a: f64) -> Self {
        self.a = Some(a);
        self
    }

    /// Returns the alpha value only when it makes the colour translucent.
    ///
    /// Alpha at or above `1` is treated as fully opaque and dropped from
    /// every output notation.
    pub fn translucent_alpha(&self) -> Option<f64> {
        self.a.filter(|a| *a < 1.0)
    }

    pub(crate) fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.map(|a| a.clamp(0.0, 1.0)),
        }
    }
}

/// Hue in degrees `[0, 360)`, saturation and lightness in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: Option<f64>,
}

/// Perceptual lightness, chroma (unbounded, `>= 0`) and hue in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
    pub a: Option<f64>,
}

/// Target notation for formatted colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    Hex,
    Rgb,
    #[default]
    Hsl,
    Oklch,
}

impl ColorFormat {
    /// Every format, in documentation order.
    pub const ALL: [ColorFormat; 4] = [
        ColorFormat::Hex,
        ColorFormat::Rgb,
        ColorFormat::Hsl,
        ColorFormat::Oklch,
    ];

    /// The lowercase name used on the command line and in serialized config.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorFormat::Hex => "hex",
            ColorFormat::Rgb => "rgb",
            ColorFormat::Hsl => "hsl",
            ColorFormat::Oklch => "oklch",
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(ColorFormat::Hex),
            "rgb" => Ok(ColorFormat::Rgb),
            "hsl" => Ok(ColorFormat::Hsl),
            "oklch" => Ok(ColorFormat::Oklch),
            other => Err(format!(
                "unknown color format '{}' (expected hex, rgb, hsl or oklch)",
                other
            )),
        }
    }
}

/// Major version of the Tailwind CSS framework the output targets.
///
/// Version 3 consumes bare `H S% L%` triplets and a JavaScript config
/// fragment; version 4 consumes full colour functions and an
/// `@theme inline` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TailwindVersion {
    #[default]
    #[serde(rename = "3")]
    V3,
    #[serde(rename = "4")]
    V4,
}

impl fmt::Display for TailwindVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TailwindVersion::V3 => f.write_str("3"),
            TailwindVersion::V4 => f.write_str("4"),
        }
    }
}

impl FromStr for TailwindVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s.strip_prefix('v').or_else(|| s.strip_prefix('V')).unwrap_or(s);
        match digits {
            "3" => Ok(TailwindVersion::V3),
            "4" => Ok(TailwindVersion::V4),
            other => Err(format!("unsupported tailwind version '{}' (expected 3 or 4)", other)),
        }
    }
}
