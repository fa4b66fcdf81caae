//! Command-line interface.
//!
//! Every command writes its result to the writer handed to [`run`], which
//! keeps stdout free of log output and lets tests capture it in memory.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::{debug, info, warn};
use tweakcn_tokens::tokens::normalize::{RandomChartColors, SeededChartColors};
use tweakcn_tokens::{
    format_color, generate, normalize_with, try_format_color, ChartColorSource, ColorFormat,
    HslAdjustments, NormalizeOptions, TailwindVersion, ThemeEditorState,
};

use crate::catalog::{parse_document, DocumentFormat, PresetCatalog};

/// Notation the normalizer writes before the emitter re-formats colours.
/// HSL functions keep four decimals and parse back, unlike bare triplets.
const INTERMEDIATE: NormalizeOptions = NormalizeOptions {
    target: ColorFormat::Hsl,
    tailwind: TailwindVersion::V4,
};

/// Convert colours and turn tweakcn theme presets into CSS.
#[derive(Debug, Parser)]
#[command(name = "tweakcn", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert a single colour literal
    Convert {
        /// Colour in hex, rgb(), hsl() or oklch() notation
        color: String,
        /// Target notation
        #[arg(long, short = 't', env = "TWEAKCN_FORMAT", default_value = "hsl")]
        to: ColorFormat,
        /// Tailwind major version (decides the HSL output shape)
        #[arg(long, env = "TWEAKCN_TAILWIND", default_value = "3")]
        tailwind: TailwindVersion,
        /// Fail instead of echoing input that does not parse
        #[arg(long)]
        strict: bool,
    },
    /// Generate the stylesheet for a preset
    Generate {
        /// Preset or catalog file (JSON or YAML), or `-` for stdin
        input: PathBuf,
        /// Treat the input as a catalog and pick this preset (id or label)
        #[arg(long, short = 'p')]
        preset: Option<String>,
        /// Colour notation of the emitted tokens
        #[arg(long, short = 'f', env = "TWEAKCN_FORMAT", default_value = "hsl")]
        format: ColorFormat,
        /// Tailwind major version
        #[arg(long, env = "TWEAKCN_TAILWIND", default_value = "3")]
        tailwind: TailwindVersion,
        /// Seed for generated chart colours, for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Also print the tailwind.config.js fragment (Tailwind 3 only)
        #[arg(long)]
        config: bool,
        /// Degrees added to every colour's hue
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        hue_shift: f64,
        /// Factor applied to every colour's saturation
        #[arg(long, default_value_t = 1.0)]
        saturation_scale: f64,
        /// Factor applied to every colour's lightness
        #[arg(long, default_value_t = 1.0)]
        lightness_scale: f64,
    },
    /// List the presets of a catalog
    List {
        /// Catalog file (JSON or YAML)
        catalog: PathBuf,
        /// Print a JSON array instead of tab-separated lines
        #[arg(long)]
        json: bool,
    },
    /// Print one preset of a catalog as JSON
    Show {
        /// Catalog file (JSON or YAML)
        catalog: PathBuf,
        /// Preset id or label
        name: String,
    },
}

/// Runs a parsed command, writing its output to `out`.
pub fn run(cli: Cli, out: &mut dyn Write) -> Result<()> {
    match cli.command {
        Command::Convert {
            color,
            to,
            tailwind,
            strict,
        } => {
            let converted = if strict {
                try_format_color(&color, to, tailwind)?
            } else {
                format_color(&color, to, tailwind)
            };
            writeln!(out, "{}", converted)?;
        }
        Command::Generate {
            input,
            preset,
            format,
            tailwind,
            seed,
            config,
            hue_shift,
            saturation_scale,
            lightness_scale,
        } => {
            let adjustments = HslAdjustments {
                hue_shift,
                saturation_scale,
                lightness_scale,
            };
            let request = GenerateRequest {
                input: &input,
                preset: preset.as_deref(),
                format,
                tailwind,
                seed,
                config,
                adjustments,
            };
            generate_command(&request, out)?;
        }
        Command::List { catalog, json } => {
            let catalog = load_catalog(&catalog)?;
            let summaries = catalog.summaries();
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&summaries)?)?;
            } else {
                for summary in summaries {
                    writeln!(out, "{}\t{}", summary.id, summary.label)?;
                }
            }
        }
        Command::Show { catalog, name } => {
            let catalog = load_catalog(&catalog)?;
            let preset = catalog.get(&name)?;
            writeln!(out, "{}", serde_json::to_string_pretty(preset)?)?;
        }
    }
    Ok(())
}

struct GenerateRequest<'a> {
    input: &'a Path,
    preset: Option<&'a str>,
    format: ColorFormat,
    tailwind: TailwindVersion,
    seed: Option<u64>,
    config: bool,
    adjustments: HslAdjustments,
}

fn generate_command(request: &GenerateRequest<'_>, out: &mut dyn Write) -> Result<()> {
    let document = read_document(request.input)?;

    let preset = match request.preset {
        Some(name) => {
            let catalog = PresetCatalog::from_value(document)
                .with_context(|| format!("{} is not a preset catalog", request.input.display()))?;
            catalog.get(name)?.clone()
        }
        None => document,
    };

    let mut charts: Box<dyn ChartColorSource> = match request.seed {
        Some(seed) => Box::new(SeededChartColors::new(seed)),
        None => Box::new(RandomChartColors),
    };
    let styles = normalize_with(&preset, INTERMEDIATE, charts.as_mut())
        .context("failed to normalize preset")?;
    debug!(
        light = styles.light.len(),
        dark = styles.dark.len(),
        "normalized preset"
    );

    let mut state = ThemeEditorState::new(styles);
    if let Some(name) = request.preset {
        state = state.with_preset(name);
    }
    if !request.adjustments.is_identity() {
        state = state.with_hsl_adjustments(request.adjustments);
    }

    let code = generate(&state, request.format, request.tailwind)?;
    info!(format = %request.format, tailwind = %request.tailwind, "generated stylesheet");

    writeln!(out, "{}", code.css)?;
    if request.config {
        match code.tailwind_config {
            Some(config) => writeln!(out, "\n{}", config)?,
            None => warn!("--config only applies to Tailwind 3; skipping"),
        }
    }
    Ok(())
}

fn load_catalog(path: &Path) -> Result<PresetCatalog> {
    PresetCatalog::load(path).with_context(|| format!("failed to load catalog {}", path.display()))
}

/// Reads a JSON or YAML document from a file, or from stdin for `-`.
fn read_document(path: &Path) -> Result<Value> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        // YAML is a superset of JSON, but JSON errors read better
        return parse_document(&text, DocumentFormat::Json)
            .or_else(|_| parse_document(&text, DocumentFormat::Yaml))
            .context("stdin is neither JSON nor YAML");
    }

    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    parse_document(&text, DocumentFormat::from_path(path))
        .with_context(|| format!("failed to parse {}", path.display()))
}
