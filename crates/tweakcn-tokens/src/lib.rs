//! # tweakcn-tokens - Theme Tokens to CSS
//!
//! `tweakcn-tokens` turns shadcn-style theme presets into stylesheets. It
//! covers three layers:
//!
//! - [`color`]: parse hex, `rgb()`, `hsl()` and `oklch()` literals, convert
//!   between sRGB, HSL and OKLCH, and render any of the four notations.
//! - [`tokens`]: the token model ([`ThemeStyles`], [`ThemeEditorState`]),
//!   built-in defaults, and [`normalize`] for arbitrary preset documents.
//! - [`emit`] and [`shadow`]: the `:root` / `.dark` custom-property
//!   stylesheet, the Tailwind 4 `@theme inline` block and the Tailwind 3
//!   config fragment.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use tweakcn_tokens::tokens::normalize::{normalize_with, NormalizeOptions, SeededChartColors};
//! use tweakcn_tokens::{generate, ColorFormat, TailwindVersion, ThemeEditorState};
//!
//! let preset = json!({
//!     "styles": {
//!         "light": { "primary": "#3b82f6", "radius": "0.5rem" },
//!         "dark":  { "primary": "#60a5fa" }
//!     }
//! });
//!
//! let options = NormalizeOptions::new(ColorFormat::Hex, TailwindVersion::V4);
//! let styles = normalize_with(&preset, options, &mut SeededChartColors::new(1)).unwrap();
//!
//! let state = ThemeEditorState::new(styles);
//! let code = generate(&state, ColorFormat::Oklch, TailwindVersion::V4).unwrap();
//!
//! assert!(code.css.starts_with(":root {"));
//! assert!(code.css.contains("\n  --radius: 0.5rem;"));
//! assert!(code.css.contains("@theme inline {"));
//! assert!(code.tailwind_config.is_none());
//! ```
//!
//! ## Single Values
//!
//! ```rust
//! use tweakcn_tokens::{format_color, ColorFormat, TailwindVersion};
//!
//! assert_eq!(format_color("#3b82f6", ColorFormat::Rgb, TailwindVersion::V3), "rgb(59, 130, 246)");
//! assert_eq!(format_color("hsl(0 100% 50%)", ColorFormat::Hex, TailwindVersion::V3), "#ff0000");
//! ```
//!
//! ## Logging
//!
//! The crate logs through `tracing` and never prints. Colour parse failures
//! and each generated chart colour are reported at `debug`, a preset that
//! needed chart fallbacks at `info`, and malformed shadow parameters at
//! `warn`.

pub mod color;
pub mod emit;
mod error;
pub mod shadow;
pub mod tokens;

// Error type
pub use error::{Result, ThemeError};

// Colour exports
pub use color::{
    format_color, parse_color, render_color, try_format_color, ColorFormat, Rgba,
    TailwindVersion,
};

// Token model exports
pub use tokens::normalize::{normalize, normalize_with, ChartColorSource, NormalizeOptions};
pub use tokens::{HslAdjustments, ThemeEditorState, ThemeMode, ThemeStyleProps, ThemeStyles};

// Emission exports
pub use emit::{generate, generate_tailwind_config_code, generate_theme_code, ThemeCode};
pub use shadow::{compose_shadows, ShadowMap};
