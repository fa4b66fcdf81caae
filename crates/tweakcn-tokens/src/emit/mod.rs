//! Stylesheet and config emission.
//!
//! Both emitters start from the same resolved view of a
//! [`ThemeEditorState`]:
//!
//! - each mode must carry at least one token, otherwise the state is
//!   rejected with [`ThemeError::MissingMode`];
//! - every missing or empty token is filled from the mode's built-in
//!   defaults, so no declaration is ever emitted with an empty value;
//! - colour tokens get the editor's HSL adjustments and are rendered in
//!   the requested notation, while unparseable values pass through.
//!
//! [`generate`] bundles both outputs; the config fragment only exists for
//! Tailwind 3.

mod config;
mod css;

pub use config::generate_tailwind_config_code;
pub use css::generate_theme_code;

use tracing::debug;

use crate::color::{parse_color, render_color, ColorFormat, TailwindVersion};
use crate::error::{Result, ThemeError};
use crate::tokens::defaults::default_styles;
use crate::tokens::{HslAdjustments, ThemeEditorState, ThemeMode, ThemeStyles, COLOR_TOKENS};

/// Generated artifacts for one theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeCode {
    /// The `:root` / `.dark` stylesheet, plus the `@theme inline` block
    /// for Tailwind 4.
    pub css: String,
    /// The `tailwind.config.js` fragment; `None` for Tailwind 4.
    pub tailwind_config: Option<String>,
}

/// Generates the stylesheet and, for Tailwind 3, the config fragment.
pub fn generate(
    state: &ThemeEditorState,
    format: ColorFormat,
    version: TailwindVersion,
) -> Result<ThemeCode> {
    let css = generate_theme_code(state, format, version)?;
    let tailwind_config = match version {
        TailwindVersion::V3 => Some(generate_tailwind_config_code(state, format, version)?),
        TailwindVersion::V4 => None,
    };
    Ok(ThemeCode {
        css,
        tailwind_config,
    })
}

/// Rejects states where either mode has no tokens at all.
fn validate(state: &ThemeEditorState) -> Result<()> {
    for mode in ThemeMode::ALL {
        if state.styles.mode(mode).is_empty() {
            return Err(ThemeError::MissingMode(mode));
        }
    }
    Ok(())
}

/// Fills defaults and renders colour tokens for both modes.
fn resolve(
    state: &ThemeEditorState,
    format: ColorFormat,
    version: TailwindVersion,
) -> Result<ThemeStyles> {
    validate(state)?;

    let adjustments = state.hsl_adjustments.unwrap_or_default();
    let resolve_mode = |mode: ThemeMode| {
        let mut props = state
            .styles
            .mode(mode)
            .clone()
            .or_defaults(&default_styles(mode));
        for name in COLOR_TOKENS {
            if let Some(value) = props.get(name) {
                let rendered = render_token(value, &adjustments, format, version);
                props.set(name, rendered);
            }
        }
        props
    };

    Ok(ThemeStyles::new(
        resolve_mode(ThemeMode::Light),
        resolve_mode(ThemeMode::Dark),
    ))
}

fn render_token(
    value: &str,
    adjustments: &HslAdjustments,
    format: ColorFormat,
    version: TailwindVersion,
) -> String {
    match parse_color(value) {
        Some(color) => render_color(&adjustments.apply(&color), format, version),
        None => {
            debug!(color = value, %format, "failed to convert color, emitting as-is");
            value.to_string()
        }
    }
}
