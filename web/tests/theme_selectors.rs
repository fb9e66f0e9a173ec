#![cfg(test)]
/*!
Selector lint for the web stylesheet.

The Rust components emit class names and ids the stylesheet has to style: the
hidden panel, the hover preview and its `active` state, both theme palettes. A
substring check is enough to catch a rename on one side only.

If you intentionally rename a selector, update the component markup and
REQUIRED_SELECTORS together.
*/

const MAIN_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/main.css"));

const REQUIRED_SELECTORS: &[&str] = &[
    ":root",
    "body {",
    "[data-theme=\"dark\"]",
    ".visually-hidden",
    // Theme switch
    ".theme-toggle",
    ".theme-switch__slider",
    // Listing cards and hover previews
    ".listing-small-card",
    ".listing-small-card-stat-body-item",
    ".listing-small-card-stat-preview",
    ".listing-small-card-stat-preview.active",
    // Statistics panel
    ".stats-toggle",
    ".stat-panel-card",
    ".interval",
    ".days-select",
    "@media (max-width: 720px)",
];

#[test]
fn stylesheet_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !MAIN_CSS.contains(*sel))
        .collect();

    assert!(
        missing.is_empty(),
        "Missing {} required CSS selectors/tokens:\n{:?}",
        missing.len(),
        missing
    );
}

#[test]
fn stylesheet_not_trivially_empty() {
    let non_ws_len = MAIN_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 3_000,
        "Stylesheet appears unexpectedly small ({non_ws_len} non-whitespace chars)"
    );
}

#[test]
fn dark_palette_overrides_every_light_colour_token() {
    let (light, dark) = MAIN_CSS
        .split_once("[data-theme=\"dark\"]")
        .expect("dark palette block");
    let light_root = light.split_once(":root").expect(":root block").1;
    let dark_block = dark.split_once('}').expect("closed dark block").0;

    for token in ["--bg:", "--surface:", "--border:", "--text:", "--accent:"] {
        assert!(light_root.contains(token), "light palette lacks {token}");
        assert!(dark_block.contains(token), "dark palette lacks {token}");
    }
}
