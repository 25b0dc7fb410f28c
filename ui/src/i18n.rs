//! Localized strings for the report page.
//!
//! Every `.ftl` bundle under `i18n/<locale>/backtest-report-ui.ftl` is
//! embedded at compile time; `en-US` is the fallback and the reference for
//! the other locales. Literal ids go through [`t!`](crate::t) (checked at
//! compile time by `fl!`), ids that live in data, like metric labels, go
//! through [`tr`].
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Literal-id lookup with optional named arguments, routed through [`LOADER`].
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; also the bundle file stem.
const DOMAIN: &str = "backtest-report-ui";
const FALLBACK: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK.parse().expect("fallback tag is well formed");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    #[error("`{0}` is not a language tag")]
    InvalidTag(String),
    #[error("no bundle could be loaded for `{tag}`: {source}")]
    Load {
        tag: String,
        #[source]
        source: i18n_embed::I18nEmbedError,
    },
}

/// Load the bundles matching the browser/OS preferences. Runs once.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            Ok(selected) => tracing::debug!(?selected, "locales loaded"),
            Err(err) => tracing::warn!("locale selection failed ({err}); using {FALLBACK}"),
        }
    });
}

/// Switch the active language. Unknown but well-formed tags fall back to `en-US`.
pub fn set_language(tag: &str) -> Result<(), LocaleError> {
    init();
    let lang: LanguageIdentifier = tag
        .parse()
        .map_err(|_| LocaleError::InvalidTag(tag.to_string()))?;
    i18n_embed::select(&*LOADER, &Localizations, &[lang])
        .map(|_| ())
        .map_err(|source| LocaleError::Load {
            tag: tag.to_string(),
            source,
        })
}

/// Tag of the language currently answering lookups.
pub fn current_language() -> String {
    init();
    LOADER.current_language().to_string()
}

/// Locales with an embedded bundle, sorted.
pub fn available_languages() -> Vec<String> {
    let bundle = format!("/{DOMAIN}.ftl");
    let mut langs: Vec<String> = Localizations::iter()
        .filter_map(|path| path.strip_suffix(bundle.as_str()).map(str::to_string))
        .collect();
    langs.sort();
    langs.dedup();
    langs
}

/// Runtime lookup for ids that are not literals at the call site.
pub fn tr(id: &str) -> String {
    init();
    LOADER.get(id)
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
