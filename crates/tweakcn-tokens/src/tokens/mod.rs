//! Design tokens and the theme records built from them.
//!
//! A [`ThemeStyleProps`] maps token names (`background`, `chart-3`,
//! `shadow-blur`, `font-mono`, …) to string values for one mode. Two of
//! them form [`ThemeStyles`], and a [`ThemeEditorState`] wraps those with
//! the editor metadata the stylesheet emitter consumes.
//!
//! Token identity and output order are fixed by the emitter through the
//! name lists in this module ([`COLOR_TOKENS`], [`FONT_TOKENS`],
//! [`SHADOW_PARAM_TOKENS`]); the order tokens were inserted in is irrelevant.
//!
//! # Example
//!
//! ```rust
//! use tweakcn_tokens::tokens::{ThemeStyleProps, ThemeStyles};
//!
//! let light = ThemeStyleProps::new()
//!     .with("background", "#ffffff")
//!     .with("foreground", "#111827");
//! let dark = ThemeStyleProps::new()
//!     .with("background", "#0b1220")
//!     .with("foreground", "#e6eef8");
//!
//! let styles = ThemeStyles::new(light, dark);
//! assert_eq!(styles.light.get("background"), Some("#ffffff"));
//! ```

pub mod defaults;
pub mod normalize;

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::{hsl_to_rgb, rgb_to_hsl, Rgba};
use crate::error::Result;

/// Colour-bearing tokens, in emission order.
pub const COLOR_TOKENS: [&str; 32] = [
    "background",
    "foreground",
    "card",
    "card-foreground",
    "popover",
    "popover-foreground",
    "primary",
    "primary-foreground",
    "secondary",
    "secondary-foreground",
    "muted",
    "muted-foreground",
    "accent",
    "accent-foreground",
    "destructive",
    "destructive-foreground",
    "border",
    "input",
    "ring",
    "chart-1",
    "chart-2",
    "chart-3",
    "chart-4",
    "chart-5",
    "sidebar",
    "sidebar-foreground",
    "sidebar-primary",
    "sidebar-primary-foreground",
    "sidebar-accent",
    "sidebar-accent-foreground",
    "sidebar-border",
    "sidebar-ring",
];

/// Font stack tokens, in emission order.
pub const FONT_TOKENS: [&str; 3] = ["font-sans", "font-serif", "font-mono"];

/// Raw shadow parameters the shadow composites are derived from.
pub const SHADOW_PARAM_TOKENS: [&str; 6] = [
    "shadow-color",
    "shadow-opacity",
    "shadow-blur",
    "shadow-spread",
    "shadow-offset-x",
    "shadow-offset-y",
];

/// Light-mode letter spacing that means "no tracking customisation".
pub const NEUTRAL_LETTER_SPACING: &str = "0em";

// ─── ThemeMode ──────────────────────────────────────────────────────────────

/// Light or dark colour mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Both modes, in emission order.
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];

    /// CSS selector that scopes this mode's custom properties.
    pub fn selector(&self) -> &'static str {
        match self {
            ThemeMode::Light => ":root",
            ThemeMode::Dark => ".dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Light => f.write_str("light"),
            ThemeMode::Dark => f.write_str("dark"),
        }
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("unknown theme mode '{}'", other)),
        }
    }
}

// ─── ThemeStyleProps ────────────────────────────────────────────────────────

/// Token values for a single mode.
///
/// Unknown token names are kept so that presets round-trip, but only the
/// names the emitter knows about reach the generated stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeStyleProps {
    tokens: BTreeMap<String, String>,
}

impl ThemeStyleProps {
    /// Creates an empty token set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a token, returning `self` for chaining.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Sets a token, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.tokens.insert(name.into(), value.into());
    }

    /// Sets a token only when it is missing or empty.
    pub fn set_default(&mut self, name: &str, value: impl Into<String>) {
        if self.get(name).is_none() {
            self.tokens.insert(name.to_string(), value.into());
        }
    }

    /// Returns a token value; empty strings count as missing.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.tokens
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Returns true if the token is present and non-empty.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns true if no tokens are defined.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the number of defined tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Iterates over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tokens.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Rewrites every value in place.
    pub(crate) fn values_mut(&mut self) -> btree_map::ValuesMut<'_, String, String> {
        self.tokens.values_mut()
    }

    /// Merges another token set into this one; `other` wins on conflicts.
    pub fn merge(mut self, other: ThemeStyleProps) -> Self {
        self.tokens.extend(other.tokens);
        self
    }

    /// Fills every missing or empty token from `fallback`.
    pub fn or_defaults(mut self, fallback: &ThemeStyleProps) -> Self {
        for (name, value) in fallback.iter() {
            self.set_default(name, value);
        }
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ThemeStyleProps {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            tokens: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// ─── ThemeStyles ────────────────────────────────────────────────────────────

/// Light and dark token sets.
///
/// Both fields default to empty on deserialization so that a document
/// missing one mode still loads; the emitter rejects it with
/// [`ThemeError::MissingMode`](crate::ThemeError::MissingMode).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeStyles {
    #[serde(default)]
    pub light: ThemeStyleProps,
    #[serde(default)]
    pub dark: ThemeStyleProps,
}

impl ThemeStyles {
    /// Creates theme styles from the two mode token sets.
    pub fn new(light: ThemeStyleProps, dark: ThemeStyleProps) -> Self {
        Self { light, dark }
    }

    /// Returns the token set for `mode`.
    pub fn mode(&self, mode: ThemeMode) -> &ThemeStyleProps {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}

// ─── HslAdjustments ─────────────────────────────────────────────────────────

/// Global hue/saturation/lightness tweaks applied to every colour token.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HslAdjustments {
    /// Degrees added to the hue (wrapped into `[0, 360)`).
    pub hue_shift: f64,
    /// Factor applied to saturation (result clamped to `[0, 1]`).
    pub saturation_scale: f64,
    /// Factor applied to lightness (result clamped to `[0, 1]`).
    pub lightness_scale: f64,
}

impl Default for HslAdjustments {
    fn default() -> Self {
        Self {
            hue_shift: 0.0,
            saturation_scale: 1.0,
            lightness_scale: 1.0,
        }
    }
}

impl HslAdjustments {
    /// Returns true if applying these adjustments changes nothing.
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }

    /// Applies the adjustments to a colour, keeping its alpha.
    pub fn apply(&self, color: &Rgba) -> Rgba {
        if self.is_identity() {
            return *color;
        }
        let mut hsl = rgb_to_hsl(*color);
        hsl.h = (hsl.h + self.hue_shift).rem_euclid(360.0);
        hsl.s = (hsl.s * self.saturation_scale).clamp(0.0, 1.0);
        hsl.l = (hsl.l * self.lightness_scale).clamp(0.0, 1.0);
        hsl_to_rgb(hsl)
    }
}

// ─── ThemeEditorState ───────────────────────────────────────────────────────

/// The unit of input to the stylesheet emitter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeEditorState {
    /// Name of the preset these styles came from, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    pub styles: ThemeStyles,
    #[serde(default)]
    pub current_mode: ThemeMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hsl_adjustments: Option<HslAdjustments>,
}

impl ThemeEditorState {
    /// Wraps theme styles with default editor metadata.
    pub fn new(styles: ThemeStyles) -> Self {
        Self {
            styles,
            ..Self::default()
        }
    }

    /// Records the preset name, returning `self` for chaining.
    pub fn with_preset(mut self, preset: impl Into<String>) -> Self {
        self.preset = Some(preset.into());
        self
    }

    /// Sets the HSL adjustments, returning `self` for chaining.
    pub fn with_hsl_adjustments(mut self, adjustments: HslAdjustments) -> Self {
        self.hsl_adjustments = Some(adjustments);
        self
    }

    /// Loads editor state from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads editor state from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}
