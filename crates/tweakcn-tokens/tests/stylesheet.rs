//! Stylesheet tests that read the emitted CSS back with `cssparser`.

use cssparser::{
    AtRuleParser, CowRcStr, DeclarationParser, ParseError, Parser, ParserInput, ParserState,
    QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser, StyleSheetParser,
};
use serde_json::json;
use tweakcn_tokens::tokens::normalize::SeededChartColors;
use tweakcn_tokens::tokens::COLOR_TOKENS;
use tweakcn_tokens::{
    generate, generate_theme_code, normalize_with, parse_color, ColorFormat, NormalizeOptions,
    TailwindVersion, ThemeEditorState, ThemeStyleProps, ThemeStyles,
};

// ============================================================================
// CSS reader
// ============================================================================

/// A top-level rule: its prelude (`:root`, `@theme inline`, ...) and
/// declarations in source order.
#[derive(Debug)]
struct Rule {
    prelude: String,
    declarations: Vec<(String, String)>,
}

impl Rule {
    fn get(&self, name: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

struct RuleReader;

fn rest_of_input<'i>(input: &mut Parser<'i, '_>) -> &'i str {
    let start = input.position();
    while input.next().is_ok() {}
    input.slice_from(start).trim()
}

fn read_declarations(input: &mut Parser<'_, '_>) -> Vec<(String, String)> {
    let mut reader = DeclarationReader;
    RuleBodyParser::new(input, &mut reader)
        .map(|item| item.unwrap_or_else(|(err, slice)| panic!("bad declaration {:?}: {:?}", slice, err)))
        .collect()
}

impl<'i> QualifiedRuleParser<'i> for RuleReader {
    type Prelude = String;
    type QualifiedRule = Rule;
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        Ok(rest_of_input(input).to_string())
    }

    fn parse_block<'t>(
        &mut self,
        prelude: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::QualifiedRule, ParseError<'i, Self::Error>> {
        Ok(Rule {
            prelude,
            declarations: read_declarations(input),
        })
    }
}

impl<'i> AtRuleParser<'i> for RuleReader {
    type Prelude = String;
    type AtRule = Rule;
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        Ok(format!("@{} {}", name.as_ref(), rest_of_input(input)))
    }

    fn parse_block<'t>(
        &mut self,
        prelude: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::AtRule, ParseError<'i, Self::Error>> {
        Ok(Rule {
            prelude,
            declarations: read_declarations(input),
        })
    }
}

struct DeclarationReader;

impl<'i> DeclarationParser<'i> for DeclarationReader {
    type Declaration = (String, String);
    type Error = ();

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Declaration, ParseError<'i, Self::Error>> {
        Ok((name.as_ref().to_string(), rest_of_input(input).to_string()))
    }
}

impl<'i> AtRuleParser<'i> for DeclarationReader {
    type Prelude = ();
    type AtRule = (String, String);
    type Error = ();
}

impl<'i> QualifiedRuleParser<'i> for DeclarationReader {
    type Prelude = ();
    type QualifiedRule = (String, String);
    type Error = ();
}

impl<'i> RuleBodyItemParser<'i, (String, String), ()> for DeclarationReader {
    fn parse_declarations(&self) -> bool {
        true
    }
    fn parse_qualified(&self) -> bool {
        false
    }
}

fn read_stylesheet(css: &str) -> Vec<Rule> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut reader = RuleReader;
    StyleSheetParser::new(&mut parser, &mut reader)
        .map(|rule| rule.unwrap_or_else(|(err, slice)| panic!("bad rule {:?}: {:?}", slice, err)))
        .collect()
}

// ============================================================================
// Fixtures
// ============================================================================

fn state(light: ThemeStyleProps, dark: ThemeStyleProps) -> ThemeEditorState {
    ThemeEditorState::new(ThemeStyles::new(light, dark))
}

fn plain_state() -> ThemeEditorState {
    state(
        ThemeStyleProps::new().with("primary", "#3b82f6"),
        ThemeStyleProps::new().with("primary", "#60a5fa"),
    )
}

fn preludes(rules: &[Rule]) -> Vec<&str> {
    rules.iter().map(|r| r.prelude.as_str()).collect()
}

// ============================================================================
// Structure
// ============================================================================

#[test]
fn v3_stylesheet_has_light_and_dark_blocks() {
    let css = generate_theme_code(&plain_state(), ColorFormat::Hsl, TailwindVersion::V3).unwrap();
    let rules = read_stylesheet(&css);

    assert_eq!(preludes(&rules), [":root", ".dark"]);
    // colours, fonts, radius, raw shadow, shadows, tracking, spacing
    assert_eq!(rules[0].declarations.len(), 32 + 3 + 1 + 6 + 8 + 2);
    assert_eq!(rules[1].declarations.len(), 32 + 3 + 1 + 6 + 8);
}

#[test]
fn v4_stylesheet_appends_inline_theme() {
    let css = generate_theme_code(&plain_state(), ColorFormat::Oklch, TailwindVersion::V4).unwrap();
    let rules = read_stylesheet(&css);

    assert_eq!(preludes(&rules), [":root", ".dark", "@theme inline"]);
    let inline = &rules[2];
    assert_eq!(inline.declarations.len(), 32 + 3 + 4 + 8);
    for name in COLOR_TOKENS {
        let expected = format!("var(--{})", name);
        assert_eq!(inline.get(&format!("--color-{}", name)), Some(expected.as_str()));
    }
    assert_eq!(inline.get("--radius-md"), Some("calc(var(--radius) - 2px)"));
}

#[test]
fn custom_tracking_adds_scale_and_body_rule() {
    let css = generate_theme_code(
        &state(
            ThemeStyleProps::new().with("letter-spacing", "0.025em"),
            ThemeStyleProps::new().with("primary", "#000000"),
        ),
        ColorFormat::Hsl,
        TailwindVersion::V4,
    )
    .unwrap();
    let rules = read_stylesheet(&css);

    assert_eq!(preludes(&rules), [":root", ".dark", "@theme inline", "body"]);
    assert_eq!(rules[0].get("--tracking-normal"), Some("0.025em"));
    assert_eq!(rules[2].declarations.len(), 32 + 3 + 4 + 8 + 6);
    assert_eq!(rules[3].get("letter-spacing"), Some("var(--tracking-normal)"));
}

#[test]
fn every_declaration_has_a_value() {
    for version in [TailwindVersion::V3, TailwindVersion::V4] {
        let css = generate_theme_code(&plain_state(), ColorFormat::Rgb, version).unwrap();
        for rule in read_stylesheet(&css) {
            for (name, value) in &rule.declarations {
                assert!(!value.is_empty(), "{} in {} is empty", name, rule.prelude);
            }
        }
    }
}

// ============================================================================
// Values
// ============================================================================

#[test]
fn colour_values_parse_in_every_format() {
    let targets = [
        (ColorFormat::Hex, TailwindVersion::V3),
        (ColorFormat::Rgb, TailwindVersion::V3),
        (ColorFormat::Hsl, TailwindVersion::V4),
        (ColorFormat::Oklch, TailwindVersion::V4),
    ];
    for (format, version) in targets {
        let css = generate_theme_code(&plain_state(), format, version).unwrap();
        let rules = read_stylesheet(&css);
        for rule in &rules[..2] {
            for name in COLOR_TOKENS {
                let value = rule.get(&format!("--{}", name)).unwrap();
                assert!(
                    parse_color(value).is_some(),
                    "{} = {:?} ({})",
                    name,
                    value,
                    format
                );
            }
        }
    }
}

#[test]
fn v3_hsl_values_are_bare_triplets() {
    let css = generate_theme_code(&plain_state(), ColorFormat::Hsl, TailwindVersion::V3).unwrap();
    let rules = read_stylesheet(&css);
    assert_eq!(rules[0].get("--primary"), Some("217.2193 91.2195% 59.8039%"));
    assert_eq!(rules[0].get("--background"), Some("0 0% 100%"));
}

#[test]
fn shadow_declarations_compose_from_raw_parameters() {
    let light = ThemeStyleProps::new()
        .with("shadow-color", "hsl(220 40% 10%)")
        .with("shadow-opacity", "0.2")
        .with("shadow-offset-x", "1px")
        .with("shadow-offset-y", "2px")
        .with("shadow-blur", "6px")
        .with("shadow-spread", "1px");
    let css = generate_theme_code(
        &state(light, ThemeStyleProps::new().with("primary", "#000")),
        ColorFormat::Hex,
        TailwindVersion::V3,
    )
    .unwrap();
    let root = &read_stylesheet(&css)[0];

    assert_eq!(root.get("--shadow-x"), Some("1px"));
    assert_eq!(root.get("--shadow-color"), Some("hsl(220 40% 10%)"));
    assert_eq!(
        root.get("--shadow-lg"),
        Some("1px 2px 6px 1px hsl(220 40% 10%) / 0.20, 1px 4px 6px 0px hsl(220 40% 10%) / 0.20")
    );
    assert_eq!(root.get("--shadow-2xl"), Some("1px 2px 6px 1px hsl(220 40% 10%) / 0.50"));
}

// ============================================================================
// End to end
// ============================================================================

#[test]
fn preset_to_stylesheet_is_reproducible_with_a_seed() {
    let preset = json!({
        "name": "harbor",
        "styles": {
            "light": { "primary": "rgb(14, 116, 144)", "radius": "0.75rem" },
            "dark": { "primary": "hsl(192 82% 31%)" }
        }
    });
    let options = NormalizeOptions::new(ColorFormat::Hsl, TailwindVersion::V4);

    let run = || {
        let styles = normalize_with(&preset, options, &mut SeededChartColors::new(99)).unwrap();
        generate(&ThemeEditorState::new(styles), ColorFormat::Oklch, TailwindVersion::V3).unwrap()
    };
    let first = run();
    let second = run();

    assert_eq!(first, second);
    let rules = read_stylesheet(&first.css);
    assert_eq!(rules[0].get("--radius"), Some("0.75rem"));
    assert!(rules[1].get("--chart-3").unwrap().starts_with("oklch("));
    assert!(first.tailwind_config.unwrap().contains("ring: \"var(--ring)\","));
}
