//! The custom-property stylesheet.
//!
//! Output layout, in order:
//!
//! ```text
//! :root { colours, fonts, radius, raw shadow, shadows, tracking, spacing }
//!
//! .dark { colours, fonts, radius, raw shadow, shadows }
//!
//! @theme inline { ... }          (Tailwind 4 only)
//!
//! body { letter-spacing: ... }   (only with custom letter spacing)
//! ```
//!
//! Every declaration sits on its own line with two-space indentation.
//! Downstream tools diff this text, so ordering and whitespace are fixed.

use super::resolve;
use crate::color::{ColorFormat, TailwindVersion};
use crate::error::Result;
use crate::shadow::{compose_shadows, SHADOW_TOKENS};
use crate::tokens::{
    ThemeEditorState, ThemeMode, ThemeStyles, COLOR_TOKENS, FONT_TOKENS, NEUTRAL_LETTER_SPACING,
};

/// Raw shadow declarations as `(property, token)`, in emission order.
const RAW_SHADOW_VARS: [(&str, &str); 6] = [
    ("shadow-x", "shadow-offset-x"),
    ("shadow-y", "shadow-offset-y"),
    ("shadow-blur", "shadow-blur"),
    ("shadow-spread", "shadow-spread"),
    ("shadow-opacity", "shadow-opacity"),
    ("shadow-color", "shadow-color"),
];

/// Font variables are re-exposed in this order inside `@theme inline`.
const INLINE_FONT_ORDER: [&str; 3] = ["font-sans", "font-mono", "font-serif"];

const INLINE_RADII: [(&str, &str); 4] = [
    ("radius-sm", "calc(var(--radius) - 4px)"),
    ("radius-md", "calc(var(--radius) - 2px)"),
    ("radius-lg", "var(--radius)"),
    ("radius-xl", "calc(var(--radius) + 4px)"),
];

const TRACKING_SCALE: [(&str, &str); 6] = [
    ("tracking-tighter", "calc(var(--tracking-normal) - 0.05em)"),
    ("tracking-tight", "calc(var(--tracking-normal) - 0.025em)"),
    ("tracking-normal", "var(--tracking-normal)"),
    ("tracking-wide", "calc(var(--tracking-normal) + 0.025em)"),
    ("tracking-wider", "calc(var(--tracking-normal) + 0.05em)"),
    ("tracking-widest", "calc(var(--tracking-normal) + 0.1em)"),
];

const BODY_LETTER_SPACING: &str = "body {\n  letter-spacing: var(--tracking-normal);\n}";

/// Emits the full stylesheet for a theme.
///
/// # Errors
///
/// Returns [`ThemeError::MissingMode`](crate::ThemeError::MissingMode) if
/// either mode has no tokens.
///
/// # Example
///
/// ```rust
/// use tweakcn_tokens::{generate_theme_code, ColorFormat, TailwindVersion};
/// use tweakcn_tokens::tokens::{ThemeEditorState, ThemeStyleProps, ThemeStyles};
///
/// let light = ThemeStyleProps::new().with("primary", "#3b82f6");
/// let dark = ThemeStyleProps::new().with("primary", "#60a5fa");
/// let state = ThemeEditorState::new(ThemeStyles::new(light, dark));
///
/// let css = generate_theme_code(&state, ColorFormat::Hex, TailwindVersion::V3).unwrap();
/// assert!(css.starts_with(":root {\n  --background: #ffffff;"));
/// assert!(css.contains("\n  --primary: #3b82f6;"));
/// assert!(css.contains("\n\n.dark {"));
/// ```
pub fn generate_theme_code(
    state: &ThemeEditorState,
    format: ColorFormat,
    version: TailwindVersion,
) -> Result<String> {
    let styles = resolve(state, format, version)?;
    let custom_tracking = has_custom_tracking(&styles);

    let mut out = mode_block(&styles, ThemeMode::Light);
    out.push_str("\n\n");
    out.push_str(&mode_block(&styles, ThemeMode::Dark));

    if version == TailwindVersion::V4 {
        out.push_str("\n\n");
        out.push_str(&theme_inline_block(custom_tracking));
    }

    if custom_tracking {
        out.push_str("\n\n");
        out.push_str(BODY_LETTER_SPACING);
    }

    Ok(out)
}

fn has_custom_tracking(styles: &ThemeStyles) -> bool {
    styles.light.get("letter-spacing") != Some(NEUTRAL_LETTER_SPACING)
}

fn push_var(out: &mut String, name: &str, value: &str) {
    out.push_str(&format!("\n  --{}: {};", name, value));
}

/// Emits the `:root` or `.dark` block. `styles` must already be resolved.
fn mode_block(styles: &ThemeStyles, mode: ThemeMode) -> String {
    let props = styles.mode(mode);
    let token = |name: &str| props.get(name).unwrap_or_default();

    let mut out = format!("{} {{", mode.selector());

    for name in COLOR_TOKENS.iter().chain(FONT_TOKENS.iter()) {
        push_var(&mut out, name, token(name));
    }
    push_var(&mut out, "radius", token("radius"));

    for (property, name) in RAW_SHADOW_VARS {
        push_var(&mut out, property, token(name));
    }

    let shadows = compose_shadows(styles, mode);
    for (name, value) in shadows.iter() {
        push_var(&mut out, name, value);
    }

    if mode == ThemeMode::Light {
        push_var(&mut out, "tracking-normal", token("letter-spacing"));
        push_var(&mut out, "spacing", token("spacing"));
    }

    out.push_str("\n}");
    out
}

/// Emits the Tailwind 4 `@theme inline` block.
fn theme_inline_block(custom_tracking: bool) -> String {
    let mut out = String::from("@theme inline {");

    for name in COLOR_TOKENS {
        push_var(&mut out, &format!("color-{}", name), &format!("var(--{})", name));
    }

    out.push('\n');
    for name in INLINE_FONT_ORDER {
        push_var(&mut out, name, &format!("var(--{})", name));
    }

    out.push('\n');
    for (name, value) in INLINE_RADII {
        push_var(&mut out, name, value);
    }

    out.push('\n');
    for name in SHADOW_TOKENS {
        push_var(&mut out, name, &format!("var(--{})", name));
    }

    if custom_tracking {
        out.push('\n');
        for (name, value) in TRACKING_SCALE {
            push_var(&mut out, name, value);
        }
    }

    out.push_str("\n}");
    out
}
