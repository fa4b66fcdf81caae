//! The Tailwind 3 `tailwind.config.js` fragment.
//!
//! The fragment only references custom properties, so token values never
//! appear in it; the colour format decides whether each reference is
//! wrapped in `hsl(...)`.

use super::validate;
use crate::color::{ColorFormat, TailwindVersion};
use crate::error::Result;
use crate::tokens::ThemeEditorState;

/// Colour groups with a `DEFAULT` and `foreground` entry.
const PAIRED_GROUPS: [&str; 7] = [
    "primary",
    "secondary",
    "destructive",
    "muted",
    "accent",
    "popover",
    "card",
];

/// Sidebar entries as `(config key, token)`.
const SIDEBAR_ENTRIES: [(&str, &str); 8] = [
    ("DEFAULT", "sidebar"),
    ("foreground", "sidebar-foreground"),
    ("primary", "sidebar-primary"),
    ("\"primary-foreground\"", "sidebar-primary-foreground"),
    ("accent", "sidebar-accent"),
    ("\"accent-foreground\"", "sidebar-accent-foreground"),
    ("border", "sidebar-border"),
    ("ring", "sidebar-ring"),
];

const HEADER: &str = "/** @type {import('tailwindcss').Config} */
module.exports = {
  darkMode: [\"class\"],
  theme: {
    extend: {
      colors: {";

const FOOTER: &str = "
      },
      borderRadius: {
        xl: \"calc(var(--radius) + 4px)\",
        lg: \"var(--radius)\",
        md: \"calc(var(--radius) - 2px)\",
        sm: \"calc(var(--radius) - 4px)\",
      },
      fontFamily: {
        sans: [\"var(--font-sans)\"],
        serif: [\"var(--font-serif)\"],
        mono: [\"var(--font-mono)\"],
      },
    },
  },
}";

fn color_ref(format: ColorFormat, token: &str) -> String {
    match format {
        ColorFormat::Hsl => format!("\"hsl(var(--{}))\"", token),
        _ => format!("\"var(--{})\"", token),
    }
}

/// Emits the Tailwind 3 config fragment.
///
/// The fragment is identical for every theme that passes validation; only
/// the colour format changes it. `version` is accepted for symmetry with
/// [`generate_theme_code`](super::generate_theme_code).
pub fn generate_tailwind_config_code(
    state: &ThemeEditorState,
    format: ColorFormat,
    _version: TailwindVersion,
) -> Result<String> {
    validate(state)?;

    let entry = |out: &mut String, indent: &str, key: &str, token: &str| {
        out.push_str(&format!("\n{}{}: {},", indent, key, color_ref(format, token)));
    };

    let mut out = String::from(HEADER);

    for token in ["border", "input", "ring", "background", "foreground"] {
        entry(&mut out, "        ", token, token);
    }

    for group in PAIRED_GROUPS {
        out.push_str(&format!("\n        {}: {{", group));
        entry(&mut out, "          ", "DEFAULT", group);
        entry(&mut out, "          ", "foreground", &format!("{}-foreground", group));
        out.push_str("\n        },");
    }

    out.push_str("\n        sidebar: {");
    for (key, token) in SIDEBAR_ENTRIES {
        entry(&mut out, "          ", key, token);
    }
    out.push_str("\n        },");

    out.push_str("\n        chart: {");
    for i in 1..=5 {
        entry(&mut out, "          ", &i.to_string(), &format!("chart-{}", i));
    }
    out.push_str("\n        },");

    out.push_str(FOOTER);
    Ok(out)
}
