//! Localized strings for the explorer UI.
//!
//! Catalogs live under `i18n/<locale>/catalog-ui.ftl` and are embedded at
//! compile time (always on wasm, via `debug-embed`). `en-US` is the fallback
//! and reference catalog; other locales must define every key it defines.
//!
//! ```ignore
//! i18n::init(); // idempotent
//! let label = t!("nav-explorer");
//! ```
use std::sync::Once;

use dioxus::logger::tracing::{debug, warn};
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Look up a message through the shared loader, optionally with Fluent
/// arguments (`name = value`).
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; also the catalog file stem.
const DOMAIN: &str = "catalog-ui";
const FALLBACK_LANGUAGE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE.parse().unwrap_or_default();
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load catalogs for the user's preferred languages. Safe to call repeatedly.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            Ok(selected) => debug!(?selected, "languages selected"),
            Err(err) => warn!(%err, "language selection failed; using fallback strings"),
        }
    });
}

/// Switch language at runtime. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        debug!(tag, "ignoring unparseable language tag");
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// The highest-priority language currently loaded.
pub fn current_language() -> String {
    LOADER
        .current_languages()
        .first()
        .map(ToString::to_string)
        .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string())
}

/// Embedded locale tags, sorted, for the language picker.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(str::to_string))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_locales_are_listed() {
        assert_eq!(available_languages(), vec!["en-US".to_string(), "fr-FR".to_string()]);
    }

    #[test]
    fn lookups_resolve_to_text() {
        init();
        assert!(!t!("dataset-select").is_empty());
        assert!(!t!("nav-explorer").is_empty());
    }

    #[test]
    fn switching_to_a_known_locale_changes_strings() {
        init();
        set_language("fr-FR").unwrap();
        assert_eq!(current_language(), "fr-FR");
        assert_eq!(t!("nav-explorer"), "Explorateur");

        set_language("en-US").unwrap();
        assert_eq!(current_language(), "en-US");
        assert_eq!(t!("nav-explorer"), "Explorer");
    }

    #[test]
    fn unparseable_tags_are_ignored() {
        assert!(set_language("not a tag!").is_ok());
    }
}
