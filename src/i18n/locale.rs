//! Locale type: closed, validated locale representation.
//!
//! A `Locale` can only be obtained from the registry, so no code path can
//! hold a locale outside the supported set.

use crate::i18n::{I18nError, LocaleConfig, LocaleRegistry};
use serde::{Serialize, Serializer};
use std::fmt;

/// A supported locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    /// Canonical path segment key (e.g., "cat", "es")
    key: &'static str,
}

impl Locale {
    pub const CATALAN: Locale = Locale { key: "cat" };
    pub const SPANISH: Locale = Locale { key: "es" };
    pub const ENGLISH: Locale = Locale { key: "en" };

    /// Resolve a URL path segment (canonical key or legacy alias).
    ///
    /// Returns `None` for anything outside the supported set. Callers that
    /// need a locale unconditionally should fall back to
    /// [`Locale::default_locale`].
    pub fn from_segment(segment: &str) -> Option<Locale> {
        LocaleRegistry::get()
            .get_by_segment(segment)
            .map(|config| Locale { key: config.key })
    }

    /// Strictly parse a canonical locale key.
    ///
    /// Used for explicit user input (e.g., a language-switch request) where an
    /// unknown value should be reported instead of silently defaulted.
    ///
    /// # Example
    /// ```ignore
    /// let spanish = Locale::parse("es")?;
    /// ```
    pub fn parse(key: &str) -> Result<Locale, I18nError> {
        LocaleRegistry::get()
            .get_by_key(key)
            .map(|config| Locale { key: config.key })
            .ok_or_else(|| I18nError::UnknownLocale(key.to_string()))
    }

    /// Get the default locale.
    pub fn default_locale() -> Locale {
        let config = LocaleRegistry::get().default_config();
        Locale { key: config.key }
    }

    /// All supported locales in registry order.
    pub fn all() -> Vec<Locale> {
        LocaleRegistry::get()
            .list()
            .into_iter()
            .map(|config| Locale { key: config.key })
            .collect()
    }

    /// Canonical path segment key (e.g., "cat").
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Get the full locale configuration from the registry.
    ///
    /// # Panics
    /// Panics if the key is not found in the registry. This cannot happen for
    /// a `Locale` built through the constructors above.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_key(self.key)
            .expect("Locale key should always be valid")
    }

    /// English name (e.g., "Catalan").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Native display name (e.g., "Català").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Uppercase code for UI (e.g., "CAT").
    pub fn short_code(&self) -> &'static str {
        self.config().short_code
    }

    /// BCP-47 tag for `<html lang>` and hreflang (e.g., "ca-ES").
    pub fn html_lang(&self) -> &'static str {
        self.config().html_lang
    }

    /// Open Graph locale (e.g., "ca_ES").
    pub fn og_locale(&self) -> &'static str {
        self.config().og_locale
    }

    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::default_locale()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key)
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key)
    }
}
