//! Preset catalogs.
//!
//! A catalog is a JSON or YAML document mapping preset ids to preset
//! objects, as published by the tweakcn registry:
//!
//! ```yaml
//! ocean-breeze:
//!   label: Ocean Breeze
//!   styles:
//!     light: { primary: "#0ea5e9" }
//!     dark: { primary: "#38bdf8" }
//! ```
//!
//! The document is only ever deserialized, never evaluated.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors raised while loading or querying a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid catalog YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("a preset catalog must be an object mapping ids to presets")]
    NotAnObject,

    #[error("preset not found: {0}")]
    NotFound(String),
}

/// Document format, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// YAML for `.yaml`/`.yml`, JSON for everything else.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                DocumentFormat::Yaml
            }
            _ => DocumentFormat::Json,
        }
    }
}

/// Parses a JSON or YAML document into a generic value.
pub fn parse_document(text: &str, format: DocumentFormat) -> Result<Value, CatalogError> {
    match format {
        DocumentFormat::Json => Ok(serde_json::from_str(text)?),
        DocumentFormat::Yaml => Ok(serde_yaml::from_str(text)?),
    }
}

/// One line of `tweakcn list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetSummary {
    pub id: String,
    pub label: String,
}

/// Presets keyed by id, in id order.
#[derive(Debug, Clone, Default)]
pub struct PresetCatalog {
    presets: Map<String, Value>,
}

impl PresetCatalog {
    /// Builds a catalog from a parsed document.
    pub fn from_value(value: Value) -> Result<Self, CatalogError> {
        match value {
            Value::Object(presets) => Ok(Self { presets }),
            _ => Err(CatalogError::NotAnObject),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Self::from_value(parse_document(json, DocumentFormat::Json)?)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        Self::from_value(parse_document(yaml, DocumentFormat::Yaml)?)
    }

    /// Loads a catalog file, picking the format from its extension.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_value(parse_document(&text, DocumentFormat::from_path(path))?)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Finds a preset by exact id, then by case-insensitive id or label.
    pub fn get(&self, name: &str) -> Result<&Value, CatalogError> {
        if let Some(preset) = self.presets.get(name) {
            return Ok(preset);
        }
        self.presets
            .iter()
            .find(|(id, preset)| {
                id.eq_ignore_ascii_case(name)
                    || str_field(preset, "label").is_some_and(|l| l.eq_ignore_ascii_case(name))
            })
            .map(|(_, preset)| preset)
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))
    }

    /// Lists every preset with its display label.
    ///
    /// The label falls back to the preset's `name`, then to its id.
    pub fn summaries(&self) -> Vec<PresetSummary> {
        self.presets
            .iter()
            .map(|(id, preset)| PresetSummary {
                id: id.clone(),
                label: str_field(preset, "label")
                    .or_else(|| str_field(preset, "name"))
                    .unwrap_or(id.as_str())
                    .to_string(),
            })
            .collect()
    }
}

fn str_field<'a>(preset: &'a Value, key: &str) -> Option<&'a str> {
    preset
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}
