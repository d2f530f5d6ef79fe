// SPDX-License-Identifier: GPL-3.0-only

//! Localization
//!
//! Fluent bundles are embedded from `i18n/` at build time. Static strings go
//! through the [`fl!`](crate::fl) macro; keyed lookups from the scan flow go
//! through [`FluentTranslator`].

use crate::backends::Translator;
use crate::constants::{FALLBACK_LANGUAGE, SUPPORTED_LANGUAGES};
use crate::errors::{AppError, AppResult};
use i18n_embed::fluent::{FluentLanguageLoader, fluent_language_loader};
use i18n_embed::unic_langid::LanguageIdentifier;
use i18n_embed::{DefaultLocalizer, LanguageLoader, Localizer};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::{debug, info};

#[derive(RustEmbed)]
#[folder = "i18n/"]
struct Localizations;

pub static LANGUAGE_LOADER: LazyLock<FluentLanguageLoader> = LazyLock::new(|| {
    let loader: FluentLanguageLoader = fluent_language_loader!();

    loader
        .load_fallback_language(&Localizations)
        .expect("Error while loading fallback language");
    // Isolation marks show up as garbage in most terminals
    loader.set_use_isolating(false);

    loader
});

#[macro_export]
macro_rules! fl {
    ($message_id:literal) => {{
        i18n_embed_fl::fl!($crate::i18n::LANGUAGE_LOADER, $message_id)
    }};

    ($message_id:literal, $($args:expr),*) => {{
        i18n_embed_fl::fl!($crate::i18n::LANGUAGE_LOADER, $message_id, $($args), *)
    }};
}

#[must_use]
pub fn localizer() -> Box<dyn Localizer> {
    Box::new(DefaultLocalizer::new(&*LANGUAGE_LOADER, &Localizations))
}

/// Pick the UI language for a device language code
///
/// The code is split into tokens ("es-ES" → "es", "ES") and the first
/// supported language found among them wins. No match falls back to English.
pub fn select_language(device_code: &str) -> &'static str {
    let tokens: Vec<&str> = device_code
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|token| !token.is_empty())
        .collect();

    SUPPORTED_LANGUAGES
        .iter()
        .copied()
        .find(|lang| tokens.iter().any(|token| token.eq_ignore_ascii_case(lang)))
        .unwrap_or(FALLBACK_LANGUAGE)
}

/// The language code the desktop reports, if any
pub fn device_language() -> Option<String> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
        .first()
        .map(|lang| lang.to_string())
}

/// Load the bundle matching `device_code` and return the chosen language
pub fn init(device_code: &str) -> AppResult<&'static str> {
    let language = select_language(device_code);
    let id: LanguageIdentifier = language
        .parse()
        .map_err(|e| AppError::I18n(format!("{}: {}", language, e)))?;

    localizer()
        .select(&[id])
        .map_err(|e| AppError::I18n(e.to_string()))?;

    info!(device_code, language, "Selected UI language");
    Ok(language)
}

/// Keyed lookup over the embedded Fluent bundles
#[derive(Debug, Default, Clone, Copy)]
pub struct FluentTranslator;

impl Translator for FluentTranslator {
    fn translate(&self, key: &str, args: &[(&str, &str)]) -> String {
        if !LANGUAGE_LOADER.has(key) {
            debug!(key, "No translation, using key");
            return key.to_string();
        }

        if args.is_empty() {
            LANGUAGE_LOADER.get(key)
        } else {
            let args: HashMap<&str, String> = args
                .iter()
                .map(|(name, value)| (*name, value.to_string()))
                .collect();
            LANGUAGE_LOADER.get_args(key, args)
        }
    }
}
