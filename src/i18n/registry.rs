//! Locale registry: Single source of truth for all supported locales.
//!
//! Every representation of a locale used by the site lives here: the URL path
//! segment, the uppercase code shown in the language switcher, the BCP-47 tag
//! used for `<html lang>` and hreflang, and the Open Graph locale. The registry
//! is a lazily initialised singleton and is immutable after first access.

use std::sync::OnceLock;

/// Configuration for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// Path segment key (e.g., "cat", "es", "en")
    pub key: &'static str,

    /// Legacy path segments that resolve to this locale but are never emitted
    pub aliases: &'static [&'static str],

    /// English name of the locale (e.g., "Catalan")
    pub name: &'static str,

    /// Native display name (e.g., "Català")
    pub native_name: &'static str,

    /// Uppercase code for the language switcher (e.g., "CAT")
    pub short_code: &'static str,

    /// BCP-47 tag for `<html lang>` and hreflang (e.g., "ca-ES")
    pub html_lang: &'static str,

    /// Open Graph locale (e.g., "ca_ES")
    pub og_locale: &'static str,

    /// Whether this is the default locale (exactly one should be true)
    pub is_default: bool,
}

impl LocaleConfig {
    /// Whether `segment` names this locale, either by key or by alias.
    pub fn matches_segment(&self, segment: &str) -> bool {
        self.key == segment || self.aliases.contains(&segment)
    }
}

/// Global locale registry singleton.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its canonical key.
    ///
    /// # Returns
    /// * `Some(&LocaleConfig)` if the key is a canonical locale key
    /// * `None` otherwise (aliases are not accepted here)
    pub fn get_by_key(&self, key: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.key == key)
    }

    /// Get a locale configuration by a URL path segment.
    ///
    /// Accepts canonical keys and legacy aliases. Matching is case-sensitive.
    pub fn get_by_segment(&self, segment: &str) -> Option<&LocaleConfig> {
        self.locales
            .iter()
            .find(|locale| locale.matches_segment(segment))
    }

    /// Get all locales in registry order.
    pub fn list(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().collect()
    }

    /// Get the default locale configuration.
    ///
    /// # Panics
    /// Panics if no default locale is found or if multiple default locales
    /// are defined (this indicates a configuration error).
    pub fn default_config(&self) -> &LocaleConfig {
        let defaults: Vec<_> = self
            .locales
            .iter()
            .filter(|locale| locale.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default locale found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default locales found in registry"),
        }
    }

    /// Check if a path segment names a supported locale (key or alias).
    pub fn is_supported(&self, segment: &str) -> bool {
        self.get_by_segment(segment).is_some()
    }
}

/// Default locale configurations.
///
/// Catalan is the default. `ca` is kept as an alias because older links and
/// the first published sitemap used it as the Catalan path segment.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            key: "cat",
            aliases: &["ca"],
            name: "Catalan",
            native_name: "Català",
            short_code: "CAT",
            html_lang: "ca-ES",
            og_locale: "ca_ES",
            is_default: true,
        },
        LocaleConfig {
            key: "es",
            aliases: &[],
            name: "Spanish",
            native_name: "Español",
            short_code: "ES",
            html_lang: "es-ES",
            og_locale: "es_ES",
            is_default: false,
        },
        LocaleConfig {
            key: "en",
            aliases: &[],
            name: "English",
            native_name: "English",
            short_code: "EN",
            html_lang: "en-US",
            og_locale: "en_US",
            is_default: false,
        },
    ]
}
