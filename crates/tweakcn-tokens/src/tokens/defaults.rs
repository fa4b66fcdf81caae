//! Built-in token tables.
//!
//! All tables are immutable `(name, value)` slices. [`default_styles`]
//! materializes the full token set for a mode; the normalizer fallbacks
//! are deliberately smaller and use hex so that they survive any target
//! notation.

use super::{ThemeMode, ThemeStyleProps};

/// Complete light-mode token set.
pub const LIGHT_DEFAULTS: &[(&str, &str)] = &[
    ("background", "oklch(1 0 0)"),
    ("foreground", "oklch(0.145 0 0)"),
    ("card", "oklch(1 0 0)"),
    ("card-foreground", "oklch(0.145 0 0)"),
    ("popover", "oklch(1 0 0)"),
    ("popover-foreground", "oklch(0.145 0 0)"),
    ("primary", "oklch(0.205 0 0)"),
    ("primary-foreground", "oklch(0.985 0 0)"),
    ("secondary", "oklch(0.97 0 0)"),
    ("secondary-foreground", "oklch(0.205 0 0)"),
    ("muted", "oklch(0.97 0 0)"),
    ("muted-foreground", "oklch(0.556 0 0)"),
    ("accent", "oklch(0.97 0 0)"),
    ("accent-foreground", "oklch(0.205 0 0)"),
    ("destructive", "oklch(0.577 0.245 27.325)"),
    ("destructive-foreground", "oklch(1 0 0)"),
    ("border", "oklch(0.922 0 0)"),
    ("input", "oklch(0.922 0 0)"),
    ("ring", "oklch(0.708 0 0)"),
    ("chart-1", "oklch(0.81 0.10 252)"),
    ("chart-2", "oklch(0.62 0.19 260)"),
    ("chart-3", "oklch(0.55 0.22 263)"),
    ("chart-4", "oklch(0.49 0.22 264)"),
    ("chart-5", "oklch(0.42 0.18 266)"),
    ("radius", "0.625rem"),
    ("sidebar", "oklch(0.985 0 0)"),
    ("sidebar-foreground", "oklch(0.145 0 0)"),
    ("sidebar-primary", "oklch(0.205 0 0)"),
    ("sidebar-primary-foreground", "oklch(0.985 0 0)"),
    ("sidebar-accent", "oklch(0.97 0 0)"),
    ("sidebar-accent-foreground", "oklch(0.205 0 0)"),
    ("sidebar-border", "oklch(0.922 0 0)"),
    ("sidebar-ring", "oklch(0.708 0 0)"),
    (
        "font-sans",
        "ui-sans-serif, system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, \
         'Helvetica Neue', Arial, 'Noto Sans', sans-serif, 'Apple Color Emoji', \
         'Segoe UI Emoji', 'Segoe UI Symbol', 'Noto Color Emoji'",
    ),
    (
        "font-serif",
        r#"ui-serif, Georgia, Cambria, "Times New Roman", Times, serif"#,
    ),
    (
        "font-mono",
        r#"ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, "Liberation Mono", "Courier New", monospace"#,
    ),
    ("shadow-color", "oklch(0 0 0)"),
    ("shadow-opacity", "0.1"),
    ("shadow-blur", "3px"),
    ("shadow-spread", "0px"),
    ("shadow-offset-x", "0"),
    ("shadow-offset-y", "1px"),
    ("letter-spacing", "0em"),
    ("spacing", "0.25rem"),
];

/// Tokens that differ from [`LIGHT_DEFAULTS`] in dark mode.
pub const DARK_OVERRIDES: &[(&str, &str)] = &[
    ("background", "oklch(0.145 0 0)"),
    ("foreground", "oklch(0.985 0 0)"),
    ("card", "oklch(0.205 0 0)"),
    ("card-foreground", "oklch(0.985 0 0)"),
    ("popover", "oklch(0.205 0 0)"),
    ("popover-foreground", "oklch(0.985 0 0)"),
    ("primary", "oklch(0.922 0 0)"),
    ("primary-foreground", "oklch(0.205 0 0)"),
    ("secondary", "oklch(0.269 0 0)"),
    ("secondary-foreground", "oklch(0.985 0 0)"),
    ("muted", "oklch(0.269 0 0)"),
    ("muted-foreground", "oklch(0.708 0 0)"),
    ("accent", "oklch(0.269 0 0)"),
    ("accent-foreground", "oklch(0.985 0 0)"),
    ("destructive", "oklch(0.704 0.191 22.216)"),
    ("destructive-foreground", "oklch(0.985 0 0)"),
    ("border", "oklch(0.275 0 0)"),
    ("input", "oklch(0.325 0 0)"),
    ("ring", "oklch(0.556 0 0)"),
    ("sidebar", "oklch(0.205 0 0)"),
    ("sidebar-foreground", "oklch(0.985 0 0)"),
    ("sidebar-primary", "oklch(0.488 0.243 264.376)"),
    ("sidebar-primary-foreground", "oklch(0.985 0 0)"),
    ("sidebar-accent", "oklch(0.269 0 0)"),
    ("sidebar-accent-foreground", "oklch(0.985 0 0)"),
    ("sidebar-border", "oklch(0.275 0 0)"),
    ("sidebar-ring", "oklch(0.439 0 0)"),
];

/// Required tokens the normalizer fills in for both modes.
pub const NORMALIZE_FALLBACKS: &[(&str, &str)] = &[
    ("background", "#ffffff"),
    ("foreground", "#111827"),
    ("card", "#ffffff"),
    ("card-foreground", "#111827"),
    ("border", "#e5e7eb"),
    ("input", "#f9fafb"),
    ("ring", "#eef2ff"),
    ("primary", "#3b82f6"),
    ("primary-foreground", "#ffffff"),
    ("radius", "0.375rem"),
    (
        "font-sans",
        "Inter, ui-sans-serif, system-ui, -apple-system, 'Segoe UI', Roboto",
    ),
    ("font-serif", "Georgia, 'Times New Roman', Times, serif"),
    (
        "font-mono",
        "ui-monospace, SFMono-Regular, Menlo, Monaco, 'Roboto Mono'",
    ),
];

/// Raw shadow parameters the normalizer fills in for both modes.
pub const SHADOW_FALLBACKS: &[(&str, &str)] = &[
    ("shadow-offset-x", "0px"),
    ("shadow-offset-y", "1px"),
    ("shadow-blur", "3px"),
    ("shadow-spread", "0px"),
    ("shadow-opacity", "0.08"),
    ("shadow-color", "0 0% 0%"),
];

/// Dark background used when a preset has no dark tokens and no light
/// background to borrow.
pub const DARK_BACKGROUND_FALLBACK: &str = "#0b1220";

/// Dark foreground counterpart of [`DARK_BACKGROUND_FALLBACK`].
pub const DARK_FOREGROUND_FALLBACK: &str = "#e6eef8";

/// Looks up the built-in default of a single token.
pub fn default_token(mode: ThemeMode, name: &str) -> Option<&'static str> {
    let find = |table: &[(&'static str, &'static str)]| {
        table.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
    };
    match mode {
        ThemeMode::Light => find(LIGHT_DEFAULTS),
        ThemeMode::Dark => find(DARK_OVERRIDES).or_else(|| find(LIGHT_DEFAULTS)),
    }
}

/// Returns the complete default token set for `mode`.
pub fn default_styles(mode: ThemeMode) -> ThemeStyleProps {
    let light: ThemeStyleProps = LIGHT_DEFAULTS.iter().copied().collect();
    match mode {
        ThemeMode::Light => light,
        ThemeMode::Dark => light.merge(DARK_OVERRIDES.iter().copied().collect()),
    }
}
