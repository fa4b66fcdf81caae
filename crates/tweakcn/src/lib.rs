//! # tweakcn - Theme Presets on the Command Line
//!
//! The `tweakcn` binary wraps [`tweakcn_tokens`] with file handling:
//!
//! - [`catalog`]: load JSON or YAML preset catalogs and look presets up by
//!   id or label.
//! - [`cli`]: the clap command tree (`convert`, `generate`, `list`, `show`)
//!   and [`cli::run`], which executes a parsed command against any writer.
//!
//! Logging goes to stderr through `tracing-subscriber`; set `RUST_LOG` to
//! raise the default `warn` level.

pub mod catalog;
pub mod cli;

pub use catalog::{CatalogError, PresetCatalog, PresetSummary};
pub use cli::{run, Cli, Command};
