#![cfg(test)]
/*!
Theme selector lint for the web build.

Purpose:
- Ensure the selectors the upload panel and results card toggle from Rust
  remain present in the unified theme: ui/assets/theme/main.css
- `hidden` and `drop-area--highlight` are applied by state changes; losing them
  leaves the results card permanently visible or the drag feedback invisible.

If you intentionally rename or remove a selector:
    1. Update the Dioxus component markup.
    2. Adjust REQUIRED_SELECTORS accordingly.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".hidden",
    ".visually-hidden",
    // Buttons
    ".button {",
    ".button--primary",
    // Upload panel
    ".drop-area",
    ".drop-area--highlight",
    ".loading",
    ".loading__spinner",
    // Results card
    ".results-card",
    ".results-card__header",
    ".results-card__meta",
    ".report-grid",
    ".metric",
    ".metric__label",
    ".metric__value",
    ".report-chart",
    ".report-chart__canvas",
    // Responsive block
    "@media (max-width: 640px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 1_500,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn hidden_class_really_hides() {
    let block = THEME_CSS
        .split(".hidden {")
        .nth(1)
        .and_then(|rest| rest.split('}').next())
        .unwrap_or_default();
    assert!(
        block.contains("display: none"),
        "`.hidden` no longer sets display: none"
    );
}
