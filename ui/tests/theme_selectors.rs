/*!
Theme selector lint.

Components reference these class names and element ids directly; if a
refactor renames one in `assets/theme/main.css` the page silently loses its
styling. A substring check is enough to catch that early.

When a selector is intentionally renamed, update the component markup and
REQUIRED_SELECTORS together.
*/

const THEME_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/theme/main.css"));
const NAVBAR_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/styling/navbar.css"));

const REQUIRED_SELECTORS: &[&str] = &[
    ":root",
    "body {",
    ".page {",
    ".visually-hidden",
    // Buttons
    ".button {",
    ".button--primary",
    ".button--ghost",
    ".btn-dataset--selected",
    // Explorer
    ".explorer__summary",
    ".explorer-card",
    ".explorer-query__form",
    ".explorer__panels",
    "#selectedDataset",
    // Panels & results
    ".panel__header",
    ".panel__body",
    ".panel__toggle-icon",
    ".query-results",
    ".data-table__cell",
    ".quality-badge__glyph",
    ".quality-badge__error",
    // Metadata editor
    ".metadata-editor__form",
    ".metadata-editor__error",
    ".config-notice",
    "@media (max-width: 720px)",
];

const NAVBAR_SELECTORS: &[&str] = &[
    ".navbar {",
    ".navbar__inner",
    ".navbar__brand-mark",
    ".navbar__links",
    ".navbar__link",
    ".navbar__locale",
];

fn missing<'a>(css: &str, selectors: &[&'a str]) -> Vec<&'a str> {
    selectors
        .iter()
        .copied()
        .filter(|sel| !css.contains(sel))
        .collect()
}

#[test]
fn theme_contains_required_selectors() {
    let missing = missing(THEME_CSS, REQUIRED_SELECTORS);
    assert!(
        missing.is_empty(),
        "Missing {} required CSS selectors in theme:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn navbar_stylesheet_contains_required_selectors() {
    let missing = missing(NAVBAR_CSS, NAVBAR_SELECTORS);
    assert!(missing.is_empty(), "Missing navbar selectors:\n{}", missing.join("\n"));
}

#[test]
fn panel_heights_are_left_to_inline_styles() {
    // Collapsed/expanded heights are set inline by the panel component.
    assert!(!THEME_CSS.contains("30vh"));
}
