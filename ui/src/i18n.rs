//! Widget translations.
//!
//! Messages live in `i18n/<locale>/listing-stats-ui.ftl` and are embedded into
//! the binary. en-US is the fallback every other locale is completed from.
//! Lookups go through [`t!`](crate::t), which checks message ids against the
//! en-US file at compile time.
//!
//! The language is global. Components that render translated text call
//! [`use_language`] so they re-render when the header switches it.

use std::sync::Once;

use dioxus::prelude::*;
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::{debug, warn};
use unic_langid::{langid, LanguageIdentifier};

pub use i18n_embed_fl::fl;

pub const FALLBACK_LANGUAGE: &str = "en-US";

/// `t!("stats-toggle")`, `t!("stat-monthly", count = 12)`
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

// Must match the .ftl file name in every locale folder.
const DOMAIN: &str = "listing-stats-ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> =
    Lazy::new(|| FluentLanguageLoader::new(DOMAIN, langid!("en-US")));

static INIT: Once = Once::new();

#[derive(Debug, thiserror::Error)]
pub enum I18nError {
    #[error("`{0}` is not a language tag")]
    InvalidTag(String),
    #[error("no translation embedded for `{0}`")]
    Unsupported(String),
    #[error(transparent)]
    Select(#[from] i18n_embed::I18nEmbedError),
}

/// Load the user's preferred languages once; later calls do nothing.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            Ok(selected) => debug!(?selected, "translations loaded"),
            Err(err) => warn!(%err, "language selection failed; using {FALLBACK_LANGUAGE}"),
        }
    });
}

/// Switch every subsequent lookup to `tag`. The current language stays active
/// when `tag` is malformed or has no embedded translation.
pub fn set_language(tag: &str) -> Result<(), I18nError> {
    let lang: LanguageIdentifier = tag
        .parse()
        .map_err(|_| I18nError::InvalidTag(tag.to_string()))?;
    if !available_languages().iter().any(|code| code == tag) {
        return Err(I18nError::Unsupported(tag.to_string()));
    }
    i18n_embed::select(&*LOADER, &Localizations, &[lang])?;
    Ok(())
}

/// Language lookups currently resolve in.
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// Locale folders embedded in the binary, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(str::to_string))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Current language code as shared by the launcher through a `Signal<String>`
/// context. Reading it subscribes the calling component to language switches.
pub fn use_language() -> String {
    try_use_context::<Signal<String>>()
        .map(|code| code())
        .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string())
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
    fn both_locales_are_embedded() {
        assert_eq!(available_languages(), ["en-US", "ru-RU"]);
    }

    // One test so the global loader is not switched under a concurrent one.
    #[test]
    fn switching_language_changes_lookups() {
        init();
        set_language("ru-RU").unwrap();
        assert_eq!(fl!(&*LOADER, "stats-toggle"), "Статистика");

        assert!(matches!(set_language("zz-ZZ"), Err(I18nError::Unsupported(_))));
        assert!(matches!(set_language("not a tag"), Err(I18nError::InvalidTag(_))));
        assert_eq!(fl!(&*LOADER, "stats-toggle"), "Статистика");

        set_language(FALLBACK_LANGUAGE).unwrap();
        assert_eq!(fl!(&*LOADER, "stats-toggle"), "Statistics");
    }
}
