//! Per-route locale alternates.
//!
//! The page head, the SEO metadata and the sitemap all need "this page in
//! every locale". They all get it from [`RouteAlternates`] so the three can
//! never disagree.

use crate::i18n::resolver::{build_localized_path, strip_locale};
use crate::i18n::Locale;
use serde::Serialize;
use std::collections::BTreeMap;

/// Hreflang key for the fallback alternate.
pub const X_DEFAULT: &str = "x-default";

/// One locale's version of a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternateLink {
    pub locale: Locale,
    /// Localized path (e.g., "/en/about")
    pub path: String,
    /// Absolute URL (e.g., "https://example.com/en/about")
    pub url: String,
}

/// Every locale's version of one bare route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteAlternates {
    pub bare_path: String,
    pub links: Vec<AlternateLink>,
}

impl RouteAlternates {
    /// Build alternates for `bare_path` under `site_url` (no trailing slash).
    ///
    /// A locale prefix on `bare_path` is stripped first, so passing the
    /// current request path works too.
    pub fn for_path(site_url: &str, bare_path: &str) -> Self {
        let bare_path = strip_locale(bare_path);
        let links = Locale::all()
            .into_iter()
            .map(|locale| {
                let path = build_localized_path(locale, &bare_path, None, None);
                AlternateLink {
                    locale,
                    url: format!("{}{}", site_url, path),
                    path,
                }
            })
            .collect();

        Self { bare_path, links }
    }

    pub fn get(&self, locale: Locale) -> Option<&AlternateLink> {
        self.links.iter().find(|link| link.locale == locale)
    }

    /// The default locale's version.
    pub fn x_default(&self) -> &AlternateLink {
        self.get(Locale::default_locale())
            .expect("alternates contain every locale")
    }

    /// Hreflang map: BCP-47 tag to absolute URL, plus `x-default`.
    pub fn hreflang_map(&self) -> BTreeMap<String, String> {
        let mut map: BTreeMap<String, String> = self
            .links
            .iter()
            .map(|link| (link.locale.html_lang().to_string(), link.url.clone()))
            .collect();
        map.insert(X_DEFAULT.to_string(), self.x_default().url.clone());
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::resolver::resolve_locale;

    const SITE: &str = "https://example.com";

    #[test]
    fn test_one_link_per_locale_in_order() {
        let alternates = RouteAlternates::for_path(SITE, "/about");
        let paths: Vec<_> = alternates.links.iter().map(|l| l.path.as_str()).collect();
        assert_eq!(paths, vec!["/cat/about", "/es/about", "/en/about"]);
    }

    #[test]
    fn test_urls_are_absolute() {
        let alternates = RouteAlternates::for_path(SITE, "/");
        assert_eq!(alternates.get(Locale::SPANISH).unwrap().url, "https://example.com/es");
    }

    #[test]
    fn test_localized_input_is_stripped() {
        let from_bare = RouteAlternates::for_path(SITE, "/services");
        let from_localized = RouteAlternates::for_path(SITE, "/en/services");
        assert_eq!(from_bare, from_localized);
        assert_eq!(from_localized.bare_path, "/services");
    }

    #[test]
    fn test_hreflang_map_keys() {
        let map = RouteAlternates::for_path(SITE, "/portfolio").hreflang_map();
        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["ca-ES", "en-US", "es-ES", "x-default"]);
        assert_eq!(map["x-default"], "https://example.com/cat/portfolio");
    }

    #[test]
    fn test_each_link_resolves_to_its_locale() {
        let alternates = RouteAlternates::for_path(SITE, "/blog");
        for link in &alternates.links {
            assert_eq!(resolve_locale(&link.path), link.locale);
        }
    }
}
