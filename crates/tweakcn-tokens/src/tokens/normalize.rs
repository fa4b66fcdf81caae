//! Preset normalization.
//!
//! Turns an arbitrary preset document into a complete [`ThemeStyles`]:
//!
//! 1. Unwrap a top-level `styles` object when there is one.
//! 2. Split into light and dark. A document without `light`/`dark` keys is
//!    a flat token map and applies to both modes.
//! 3. If dark mode ended up empty, borrow the light background/foreground.
//! 4. Fill required tokens, chart accents and raw shadow parameters.
//! 5. Rewrite every colour-looking value into the target notation.
//!
//! Chart accents missing from light mode are generated by a
//! [`ChartColorSource`]; dark mode copies the light value. Tests inject
//! [`SeededChartColors`] to make that path reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{Map, Value};
use tracing::{debug, info};

use super::defaults::{
    DARK_BACKGROUND_FALLBACK, DARK_FOREGROUND_FALLBACK, NORMALIZE_FALLBACKS, SHADOW_FALLBACKS,
};
use super::{ThemeStyleProps, ThemeStyles};
use crate::color::{format_color, ColorFormat, TailwindVersion};
use crate::error::{Result, ThemeError};

const CHART_TOKENS: [&str; 5] = ["chart-1", "chart-2", "chart-3", "chart-4", "chart-5"];

/// Target notation for colour values written by the normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NormalizeOptions {
    pub target: ColorFormat,
    pub tailwind: TailwindVersion,
}

impl NormalizeOptions {
    pub fn new(target: ColorFormat, tailwind: TailwindVersion) -> Self {
        Self { target, tailwind }
    }
}

// ─── Chart colour sources ───────────────────────────────────────────────────

/// Supplies fallback colours for missing chart accents.
pub trait ChartColorSource {
    /// Returns a six-digit hex colour such as `#4a90d9`.
    fn next_color(&mut self) -> String;
}

fn hex_from_rng<R: Rng>(rng: &mut R) -> String {
    format!("#{:06x}", rng.random_range(0..=0xFF_FFFFu32))
}

/// Draws chart colours from the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomChartColors;

impl ChartColorSource for RandomChartColors {
    fn next_color(&mut self) -> String {
        hex_from_rng(&mut rand::rng())
    }
}

/// Draws chart colours from a seeded generator, so the same seed always
/// yields the same sequence.
#[derive(Debug, Clone)]
pub struct SeededChartColors {
    rng: StdRng,
}

impl SeededChartColors {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ChartColorSource for SeededChartColors {
    fn next_color(&mut self) -> String {
        hex_from_rng(&mut self.rng)
    }
}

// ─── Normalization ──────────────────────────────────────────────────────────

/// Normalizes a preset to HSL (Tailwind 3) with random chart fallbacks.
pub fn normalize(preset: &Value) -> Result<ThemeStyles> {
    normalize_with(preset, NormalizeOptions::default(), &mut RandomChartColors)
}

/// Normalizes a preset with explicit options and chart colour source.
pub fn normalize_with(
    preset: &Value,
    options: NormalizeOptions,
    charts: &mut dyn ChartColorSource,
) -> Result<ThemeStyles> {
    let root = match preset {
        Value::Null => return Err(ThemeError::MissingPreset),
        Value::Object(map) if map.is_empty() => return Err(ThemeError::MissingPreset),
        Value::Object(map) => map,
        other => {
            return Err(ThemeError::InvalidPreset {
                reason: format!("expected an object, found {}", json_kind(other)),
            })
        }
    };

    let styles = match root.get("styles") {
        Some(Value::Object(styles)) => styles,
        Some(Value::Null) | None => root,
        Some(other) => {
            return Err(ThemeError::InvalidPreset {
                reason: format!("`styles` must be an object, found {}", json_kind(other)),
            })
        }
    };

    let (mut light, mut dark) = split_modes(styles);

    if dark.is_empty() {
        let background = light.get("background").unwrap_or(DARK_BACKGROUND_FALLBACK);
        let foreground = light.get("foreground").unwrap_or(DARK_FOREGROUND_FALLBACK);
        dark = ThemeStyleProps::new()
            .with("background", background)
            .with("foreground", foreground);
    }

    for (name, value) in NORMALIZE_FALLBACKS {
        light.set_default(name, *value);
        dark.set_default(name, *value);
    }

    let mut generated_charts = 0;
    for name in CHART_TOKENS {
        if !light.contains(name) {
            let generated = charts.next_color();
            debug!(token = name, color = %generated, "generated fallback chart color");
            light.set(name, generated);
            generated_charts += 1;
        }
        if let Some(value) = light.get(name).map(str::to_string) {
            dark.set_default(name, value);
        }
    }

    if generated_charts > 0 {
        info!(count = generated_charts, "generated fallback chart colors");
    }

    for (name, value) in SHADOW_FALLBACKS {
        light.set_default(name, *value);
        dark.set_default(name, *value);
    }

    normalize_colors(&mut light, options);
    normalize_colors(&mut dark, options);

    Ok(ThemeStyles::new(light, dark))
}

/// Returns true if `value` should be treated as a colour literal.
pub fn looks_like_color(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    ["#", "rgb", "hsl", "lch"].iter().any(|m| lower.contains(m))
}

fn normalize_colors(props: &mut ThemeStyleProps, options: NormalizeOptions) {
    for value in props.values_mut() {
        if looks_like_color(value) {
            *value = format_color(value, options.target, options.tailwind);
        }
    }
}

fn split_modes(styles: &Map<String, Value>) -> (ThemeStyleProps, ThemeStyleProps) {
    let mode = |key: &str| match styles.get(key) {
        Some(Value::Object(tokens)) => Some(props_from_object(tokens)),
        _ => None,
    };

    match (mode("light"), mode("dark")) {
        (None, None) => {
            let flat = props_from_object(styles);
            (flat.clone(), flat)
        }
        (light, dark) => (light.unwrap_or_default(), dark.unwrap_or_default()),
    }
}

fn props_from_object(tokens: &Map<String, Value>) -> ThemeStyleProps {
    let mut props = ThemeStyleProps::new();
    for (name, value) in tokens {
        match value {
            Value::String(s) => props.set(name.as_str(), s.as_str()),
            Value::Number(n) => props.set(name.as_str(), n.to_string()),
            other => debug!(token = %name, kind = json_kind(other), "skipping token that is neither a string nor a number"),
        }
    }
    props
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tracing_subscriber::layer::SubscriberExt;

    /// Always returns the same colour, so assertions can name it.
    struct FixedChartColors(&'static str);

    impl ChartColorSource for FixedChartColors {
        fn next_color(&mut self) -> String {
            self.0.to_string()
        }
    }

    fn hex_options() -> NormalizeOptions {
        NormalizeOptions::new(ColorFormat::Hex, TailwindVersion::V3)
    }

    // =========================================================================
    // Input validation
    // =========================================================================

    #[test]
    fn test_null_preset_is_missing() {
        assert!(matches!(normalize(&Value::Null), Err(ThemeError::MissingPreset)));
    }

    #[test]
    fn test_empty_object_is_missing() {
        assert!(matches!(normalize(&json!({})), Err(ThemeError::MissingPreset)));
    }

    #[test]
    fn test_non_object_is_invalid() {
        let err = normalize(&json!("ocean")).unwrap_err();
        assert!(matches!(err, ThemeError::InvalidPreset { .. }));
        assert!(err.to_string().contains("a string"));
    }

    #[test]
    fn test_non_object_styles_is_invalid() {
        let err = normalize(&json!({ "styles": [1, 2] })).unwrap_err();
        assert!(matches!(err, ThemeError::InvalidPreset { .. }));
    }

    // =========================================================================
    // Mode splitting
    // =========================================================================

    #[test]
    fn test_flat_preset_applies_to_both_modes() {
        let styles = normalize_with(
            &json!({ "background": "#112233", "radius": "1rem" }),
            hex_options(),
            &mut FixedChartColors("#abcdef"),
        )
        .unwrap();
        assert_eq!(styles.light.get("background"), Some("#112233"));
        assert_eq!(styles.dark.get("background"), Some("#112233"));
        assert_eq!(styles.dark.get("radius"), Some("1rem"));
    }

    #[test]
    fn test_styles_wrapper_is_unwrapped() {
        let styles = normalize_with(
            &json!({
                "label": "Ocean",
                "styles": {
                    "light": { "primary": "#0000ff" },
                    "dark": { "primary": "#000088" }
                }
            }),
            hex_options(),
            &mut FixedChartColors("#abcdef"),
        )
        .unwrap();
        assert_eq!(styles.light.get("primary"), Some("#0000ff"));
        assert_eq!(styles.dark.get("primary"), Some("#000088"));
        assert!(!styles.light.contains("label"));
    }

    #[test]
    fn test_empty_dark_borrows_light_background() {
        let styles = normalize_with(
            &json!({ "light": { "background": "#fafafa", "foreground": "#101010" } }),
            hex_options(),
            &mut FixedChartColors("#abcdef"),
        )
        .unwrap();
        assert_eq!(styles.dark.get("background"), Some("#fafafa"));
        assert_eq!(styles.dark.get("foreground"), Some("#101010"));
    }

    #[test]
    fn test_empty_dark_without_light_colors_uses_dark_fallbacks() {
        let styles = normalize_with(
            &json!({ "light": { "radius": "0rem" }, "dark": {} }),
            hex_options(),
            &mut FixedChartColors("#abcdef"),
        )
        .unwrap();
        assert_eq!(styles.dark.get("background"), Some("#0b1220"));
        assert_eq!(styles.dark.get("foreground"), Some("#e6eef8"));
        // light still gets the generic fallback
        assert_eq!(styles.light.get("background"), Some("#ffffff"));
    }

    // =========================================================================
    // Fallbacks
    // =========================================================================

    #[test]
    fn test_required_tokens_are_filled() {
        let styles = normalize_with(
            &json!({ "light": { "primary": "#ff0000" }, "dark": { "primary": "#00ff00" } }),
            hex_options(),
            &mut FixedChartColors("#abcdef"),
        )
        .unwrap();
        for props in [&styles.light, &styles.dark] {
            for (name, _) in NORMALIZE_FALLBACKS.iter().chain(SHADOW_FALLBACKS) {
                assert!(props.contains(name), "missing {}", name);
            }
        }
        assert_eq!(styles.light.get("primary"), Some("#ff0000"));
        assert_eq!(styles.light.get("radius"), Some("0.375rem"));
        assert_eq!(styles.dark.get("shadow-opacity"), Some("0.08"));
    }

    #[test]
    fn test_empty_string_is_treated_as_missing() {
        let styles = normalize_with(
            &json!({ "radius": "" }),
            hex_options(),
            &mut FixedChartColors("#abcdef"),
        )
        .unwrap();
        assert_eq!(styles.light.get("radius"), Some("0.375rem"));
    }

    #[test]
    fn test_numeric_tokens_are_stringified() {
        let styles = normalize_with(
            &json!({ "shadow-opacity": 0.2 }),
            hex_options(),
            &mut FixedChartColors("#abcdef"),
        )
        .unwrap();
        assert_eq!(styles.light.get("shadow-opacity"), Some("0.2"));
    }

    // =========================================================================
    // Chart colours
    // =========================================================================

    #[test]
    fn test_missing_light_charts_are_generated_and_copied_to_dark() {
        let styles = normalize_with(
            &json!({ "light": { "chart-2": "#222222" }, "dark": { "chart-3": "#333333" } }),
            hex_options(),
            &mut FixedChartColors("#abcdef"),
        )
        .unwrap();
        assert_eq!(styles.light.get("chart-1"), Some("#abcdef"));
        assert_eq!(styles.light.get("chart-2"), Some("#222222"));
        assert_eq!(styles.dark.get("chart-1"), Some("#abcdef"));
        assert_eq!(styles.dark.get("chart-2"), Some("#222222"));
        assert_eq!(styles.dark.get("chart-3"), Some("#333333"));
    }

    /// Counts events at `WARN` or above.
    struct WarningCounter(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for WarningCounter {
        fn on_event(
            &self,
            event: &tracing::Event<'_>,
            _ctx: tracing_subscriber::layer::Context<'_, S>,
        ) {
            if *event.metadata().level() <= tracing::Level::WARN {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    #[test]
    fn test_generating_charts_stays_below_warn() {
        let warnings = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(WarningCounter(warnings.clone()));

        let styles = tracing::subscriber::with_default(subscriber, || {
            normalize_with(
                &json!({ "light": { "primary": "#111111" } }),
                hex_options(),
                &mut FixedChartColors("#abcdef"),
            )
            .unwrap()
        });

        assert_eq!(styles.light.get("chart-5"), Some("#abcdef"));
        assert_eq!(warnings.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_seeded_charts_are_reproducible() {
        let preset = json!({ "background": "#ffffff" });
        let a = normalize_with(&preset, hex_options(), &mut SeededChartColors::new(7)).unwrap();
        let b = normalize_with(&preset, hex_options(), &mut SeededChartColors::new(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generated_chart_colors_are_six_digit_hex() {
        let mut source = SeededChartColors::new(42);
        for _ in 0..64 {
            let color = source.next_color();
            assert_eq!(color.len(), 7);
            assert!(color.starts_with('#'));
            assert!(color[1..].bytes().all(|b| b.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn test_random_chart_colors_are_six_digit_hex() {
        let color = RandomChartColors.next_color();
        assert_eq!(color.len(), 7);
    }

    // =========================================================================
    // Colour normalization
    // =========================================================================

    #[test]
    fn test_looks_like_color() {
        assert!(looks_like_color("#fff"));
        assert!(looks_like_color("RGB(1, 2, 3)"));
        assert!(looks_like_color("hsl(0 0% 0%)"));
        assert!(looks_like_color("oklch(0.5 0.1 200)"));
        assert!(!looks_like_color("0.375rem"));
        assert!(!looks_like_color("Georgia, serif"));
        assert!(!looks_like_color("0 0% 0%"));
    }

    #[test]
    fn test_default_options_write_bare_hsl() {
        let styles = normalize_with(
            &json!({ "primary": "#ff0000" }),
            NormalizeOptions::default(),
            &mut FixedChartColors("#00ff00"),
        )
        .unwrap();
        assert_eq!(styles.light.get("primary"), Some("0 100% 50%"));
        assert_eq!(styles.light.get("chart-1"), Some("120 100% 50%"));
        assert_eq!(styles.light.get("background"), Some("0 0% 100%"));
    }

    #[test]
    fn test_non_color_tokens_are_untouched() {
        let styles = normalize_with(
            &json!({ "radius": "0.5rem", "font-sans": "Inter, sans-serif" }),
            NormalizeOptions::default(),
            &mut FixedChartColors("#00ff00"),
        )
        .unwrap();
        assert_eq!(styles.light.get("radius"), Some("0.5rem"));
        assert_eq!(styles.light.get("font-sans"), Some("Inter, sans-serif"));
    }

    #[test]
    fn test_unparseable_color_like_value_is_kept() {
        let styles = normalize_with(
            &json!({ "primary": "#zzzzzz" }),
            NormalizeOptions::default(),
            &mut FixedChartColors("#00ff00"),
        )
        .unwrap();
        assert_eq!(styles.light.get("primary"), Some("#zzzzzz"));
    }

    #[test]
    fn test_v4_target_writes_hsl_functions() {
        let styles = normalize_with(
            &json!({ "primary": "rgb(0, 0, 255)" }),
            NormalizeOptions::new(ColorFormat::Hsl, TailwindVersion::V4),
            &mut FixedChartColors("#00ff00"),
        )
        .unwrap();
        assert_eq!(styles.light.get("primary"), Some("hsl(240 100% 50%)"));
    }
}
