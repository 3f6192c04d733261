//! Locale-preserving link building.
//!
//! Every navigational href the site renders (header, footer, in-content
//! links, skip links) goes through this module so a link never leaves the
//! locale currently being viewed. Switching locale is the one exception and
//! uses [`LinkBuilder::switch_link`].

use crate::i18n::resolver::{build_localized_path, resolve_locale, strip_locale};
use crate::i18n::Locale;

/// Build a link to `target` in the locale of `current_path`.
///
/// Equivalent to `build_localized_path(resolve_locale(current_path), ...)`.
pub fn build_localized_link(
    current_path: &str,
    target: &str,
    hash: Option<&str>,
    query: Option<&str>,
) -> String {
    build_localized_path(resolve_locale(current_path), target, hash, query)
}

/// Link builder bound to the locale of one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkBuilder {
    locale: Locale,
}

impl LinkBuilder {
    /// Resolve the locale of `current_path` once for a whole render.
    pub fn for_path(current_path: &str) -> Self {
        Self {
            locale: resolve_locale(current_path),
        }
    }

    pub fn for_locale(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Link to a bare path in the bound locale.
    pub fn link(&self, target: &str) -> String {
        build_localized_path(self.locale, target, None, None)
    }

    /// Link to a bare path in the bound locale with fragment and query.
    pub fn link_with(&self, target: &str, hash: Option<&str>, query: Option<&str>) -> String {
        build_localized_path(self.locale, target, hash, query)
    }

    /// Href for the language switcher: the same page as `current_path` in `locale`.
    pub fn switch_link(current_path: &str, locale: Locale) -> String {
        build_localized_path(locale, &strip_locale(current_path), None, None)
    }

    /// Whether `current_path` is the page `target` points at, ignoring locale
    /// prefix and trailing slashes.
    pub fn is_current(current_path: &str, target: &str) -> bool {
        let current = strip_locale(current_path);
        let target = strip_locale(target);
        current.trim_end_matches('/') == target.trim_end_matches('/')
    }
}
