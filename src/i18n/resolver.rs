//! Locale resolution for URL paths.
//!
//! Pure functions that derive the active locale from a path, remove the
//! locale prefix to obtain the bare (locale-independent) path, and build a
//! localized path from a locale and a bare path.
//!
//! Paths passed to `resolve_locale` and `strip_locale` are plain paths without
//! query or fragment. Use [`split_location`] first when holding a full
//! location string.

use crate::i18n::Locale;

/// A location split into path, query and fragment.
///
/// `query` and `hash` are stored without their leading `?` / `#`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub query: Option<String>,
    pub hash: Option<String>,
}

impl Location {
    /// A location with only a path.
    pub fn from_path(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: None,
            hash: None,
        }
    }
}

/// Split `"/es/about?ref=x#team"` into path, query and hash.
///
/// Empty query or hash components are dropped.
pub fn split_location(location: &str) -> Location {
    let (before_hash, hash) = match location.split_once('#') {
        Some((before, hash)) => (before, Some(hash)),
        None => (location, None),
    };
    let (path, query) = match before_hash.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (before_hash, None),
    };

    Location {
        path: path.to_string(),
        query: query.filter(|q| !q.is_empty()).map(str::to_string),
        hash: hash.filter(|h| !h.is_empty()).map(str::to_string),
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

/// Resolve the locale named by the first non-empty path segment.
///
/// Unknown or missing segments resolve to the default locale; this never fails.
pub fn resolve_locale(path: &str) -> Locale {
    segments(path)
        .next()
        .and_then(Locale::from_segment)
        .unwrap_or_else(Locale::default_locale)
}

/// Whether the first segment of `path` names a supported locale.
pub fn has_locale_prefix(path: &str) -> bool {
    segments(path)
        .next()
        .map(|segment| Locale::from_segment(segment).is_some())
        .unwrap_or(false)
}

/// Remove the locale prefix from a path.
///
/// Every leading locale segment is removed (`/es/en/about` becomes `/about`),
/// so the result never starts with a locale segment and applying the function
/// twice equals applying it once. A path without a locale prefix is returned
/// unchanged.
pub fn strip_locale(path: &str) -> String {
    let all: Vec<&str> = segments(path).collect();
    let prefix_len = all
        .iter()
        .take_while(|segment| Locale::from_segment(segment).is_some())
        .count();

    if prefix_len == 0 {
        return path.to_string();
    }

    format!("/{}", all[prefix_len..].join("/"))
}

/// Build `/{locale}{bare_path}[?query][#hash]`.
///
/// The bare path gets a leading `/` if it lacks one and any locale prefix it
/// still carries is stripped, so the result is never double-prefixed. The
/// home page (`""` or `/`) maps to `/{locale}` with no trailing slash. A
/// leading `?` on `query` or `#` on `hash` is tolerated; empty values are
/// ignored.
pub fn build_localized_path(
    locale: Locale,
    bare_path: &str,
    hash: Option<&str>,
    query: Option<&str>,
) -> String {
    let normalized = if bare_path.starts_with('/') {
        strip_locale(bare_path)
    } else {
        strip_locale(&format!("/{}", bare_path))
    };

    let mut path = format!("/{}", locale.key());
    if !normalized.trim_matches('/').is_empty() {
        path.push_str(&normalized);
    }

    if let Some(query) = query
        .map(|q| q.strip_prefix('?').unwrap_or(q))
        .filter(|q| !q.is_empty())
    {
        path.push('?');
        path.push_str(query);
    }

    if let Some(hash) = hash
        .map(|h| h.strip_prefix('#').unwrap_or(h))
        .filter(|h| !h.is_empty())
    {
        path.push('#');
        path.push_str(hash);
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_BARE_PATHS: &[&str] = &["/", "", "/about", "/services", "/blog/my-post"];

    // ==================== resolve_locale Tests ====================

    #[test]
    fn test_resolve_locale_prefixed() {
        assert_eq!(resolve_locale("/es/services"), Locale::SPANISH);
        assert_eq!(resolve_locale("/en"), Locale::ENGLISH);
        assert_eq!(resolve_locale("/cat/about"), Locale::CATALAN);
    }

    #[test]
    fn test_resolve_locale_alias() {
        assert_eq!(resolve_locale("/ca/about"), Locale::CATALAN);
    }

    #[test]
    fn test_resolve_locale_defaults() {
        assert_eq!(resolve_locale("/unknown/foo"), Locale::default_locale());
        assert_eq!(resolve_locale(""), Locale::default_locale());
        assert_eq!(resolve_locale("/"), Locale::default_locale());
        assert_eq!(resolve_locale("/about"), Locale::default_locale());
    }

    #[test]
    fn test_resolve_locale_ignores_empty_segments() {
        assert_eq!(resolve_locale("//en//about"), Locale::ENGLISH);
    }

    #[test]
    fn test_resolve_locale_only_first_segment() {
        assert_eq!(resolve_locale("/about/en"), Locale::default_locale());
    }

    // ==================== strip_locale Tests ====================

    #[test]
    fn test_strip_locale_removes_prefix() {
        assert_eq!(strip_locale("/es/about"), "/about");
        assert_eq!(strip_locale("/en/blog/my-post"), "/blog/my-post");
        assert_eq!(strip_locale("/ca/about"), "/about");
    }

    #[test]
    fn test_strip_locale_home() {
        assert_eq!(strip_locale("/es"), "/");
        assert_eq!(strip_locale("/es/"), "/");
    }

    #[test]
    fn test_strip_locale_unprefixed_unchanged() {
        assert_eq!(strip_locale("/about"), "/about");
        assert_eq!(strip_locale("/"), "/");
        assert_eq!(strip_locale(""), "");
        assert_eq!(strip_locale("/unknown/foo"), "/unknown/foo");
    }

    #[test]
    fn test_strip_locale_stacked_prefixes() {
        assert_eq!(strip_locale("/es/en/about"), "/about");
        assert_eq!(strip_locale("/ca/cat/x"), "/x");
    }

    #[test]
    fn test_strip_locale_idempotent() {
        for path in [
            "/es/about",
            "/about",
            "",
            "/",
            "/en",
            "/es/en/about",
            "/cat/services/",
            "/unknown/foo",
        ] {
            let once = strip_locale(path);
            assert_eq!(strip_locale(&once), once, "path: {}", path);
        }
    }

    // ==================== build_localized_path Tests ====================

    #[test]
    fn test_build_localized_path_basic() {
        assert_eq!(build_localized_path(Locale::ENGLISH, "/about", None, None), "/en/about");
    }

    #[test]
    fn test_build_localized_path_home_has_no_trailing_slash() {
        assert_eq!(build_localized_path(Locale::SPANISH, "/", None, None), "/es");
        assert_eq!(build_localized_path(Locale::SPANISH, "", None, None), "/es");
    }

    #[test]
    fn test_build_localized_path_adds_leading_slash() {
        assert_eq!(build_localized_path(Locale::CATALAN, "contact", None, None), "/cat/contact");
    }

    #[test]
    fn test_build_localized_path_query_then_hash() {
        assert_eq!(
            build_localized_path(Locale::ENGLISH, "/services", Some("pricing"), Some("plan=pro")),
            "/en/services?plan=pro#pricing"
        );
    }

    #[test]
    fn test_build_localized_path_tolerates_markers_and_empties() {
        assert_eq!(
            build_localized_path(Locale::ENGLISH, "/services", Some("#pricing"), Some("?a=1")),
            "/en/services?a=1#pricing"
        );
        assert_eq!(
            build_localized_path(Locale::ENGLISH, "/services", Some(""), Some("")),
            "/en/services"
        );
        assert_eq!(
            build_localized_path(Locale::ENGLISH, "/", Some("top"), None),
            "/en#top"
        );
    }

    #[test]
    fn test_no_double_prefixing() {
        assert_eq!(
            build_localized_path(Locale::ENGLISH, &strip_locale("/es/about"), None, None),
            "/en/about"
        );
        assert_eq!(build_localized_path(Locale::ENGLISH, "/es/about", None, None), "/en/about");
    }

    #[test]
    fn test_round_trip_sample() {
        for locale in Locale::all() {
            for path in SAMPLE_BARE_PATHS {
                let localized = build_localized_path(locale, path, None, None);
                assert_eq!(resolve_locale(&localized), locale, "path: {}", localized);
            }
        }
    }

    // ==================== split_location Tests ====================

    #[test]
    fn test_split_location_full() {
        let location = split_location("/es/about?ref=nav#team");
        assert_eq!(location.path, "/es/about");
        assert_eq!(location.query.as_deref(), Some("ref=nav"));
        assert_eq!(location.hash.as_deref(), Some("team"));
    }

    #[test]
    fn test_split_location_question_mark_inside_hash() {
        let location = split_location("/en#faq?x");
        assert_eq!(location.path, "/en");
        assert_eq!(location.query, None);
        assert_eq!(location.hash.as_deref(), Some("faq?x"));
    }

    #[test]
    fn test_split_location_empty_parts_dropped() {
        let location = split_location("/en?#");
        assert_eq!(location, Location::from_path("/en"));
    }

    #[test]
    fn test_has_locale_prefix() {
        assert!(has_locale_prefix("/es/about"));
        assert!(has_locale_prefix("/ca"));
        assert!(!has_locale_prefix("/about"));
        assert!(!has_locale_prefix(""));
    }
}
