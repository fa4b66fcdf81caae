//! Error types for token normalization and stylesheet generation.
//!
//! Colour parsing never produces an error on its own: an unrecognised
//! literal yields `None` and the formatting entry points pass the original
//! text through. [`ThemeError`] covers the structural failures that would
//! otherwise leave a generated document silently incomplete.

use thiserror::Error;

use crate::tokens::ThemeMode;

/// Errors raised while normalizing presets or emitting stylesheets.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The normalizer was handed a null or empty preset.
    #[error("no preset provided")]
    MissingPreset,

    /// The preset is present but not shaped like a token map.
    #[error("invalid preset: {reason}")]
    InvalidPreset { reason: String },

    /// The theme has no tokens for one of the two modes.
    #[error("invalid theme styles: missing {0} mode")]
    MissingMode(ThemeMode),

    /// A colour literal matched none of the supported notations.
    #[error("unparseable color: {0}")]
    UnparseableColor(String),

    /// JSON input failed to decode.
    #[error("failed to decode JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML input failed to decode.
    #[error("failed to decode YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for theme operations.
pub type Result<T> = std::result::Result<T, ThemeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_mode_display() {
        let err = ThemeError::MissingMode(ThemeMode::Dark);
        assert_eq!(err.to_string(), "invalid theme styles: missing dark mode");
    }

    #[test]
    fn test_unparseable_color_display() {
        let err = ThemeError::UnparseableColor("not-a-color".to_string());
        assert!(err.to_string().contains("not-a-color"));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ThemeError = json_err.into();
        assert!(matches!(err, ThemeError::Json(_)));
    }
}
