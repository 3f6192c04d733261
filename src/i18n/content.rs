//! Pages of the site and per-locale content lookup.
//!
//! Translations are held in a [`LocaleTable`], which refuses to be built
//! unless it has exactly one entry for every supported locale. Lookups can
//! therefore never miss.

use crate::i18n::strings::{
    NavigationItem, SiteStrings, CATALAN_STRINGS, ENGLISH_STRINGS, SPANISH_STRINGS,
};
use crate::i18n::{I18nError, Locale};
use std::sync::OnceLock;

/// A content page, identified by its bare path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Services,
    Portfolio,
    Blog,
    Contact,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::About,
        Page::Services,
        Page::Portfolio,
        Page::Blog,
        Page::Contact,
    ];

    pub fn bare_path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Services => "/services",
            Page::Portfolio => "/portfolio",
            Page::Blog => "/blog",
            Page::Contact => "/contact",
        }
    }

    /// Page identifier used in metadata; `None` for the home page.
    pub fn slug(self) -> Option<&'static str> {
        match self {
            Page::Home => None,
            _ => Some(&self.bare_path()[1..]),
        }
    }

    /// Look up a page by bare path. Trailing slashes are ignored.
    pub fn from_bare_path(path: &str) -> Option<Page> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Page::ALL
            .into_iter()
            .find(|page| page.bare_path() == normalized)
    }

    /// Navigation entry for this page in `strings`.
    pub fn navigation_item(self, strings: &SiteStrings) -> NavigationItem {
        let nav = &strings.navigation;
        match self {
            Page::Home => nav.home,
            Page::About => nav.about,
            Page::Services => nav.services,
            Page::Portfolio => nav.portfolio,
            Page::Blog => nav.blog,
            Page::Contact => nav.contact,
        }
    }
}

/// A value for every supported locale.
#[derive(Debug, Clone)]
pub struct LocaleTable<T> {
    entries: Vec<(Locale, T)>,
}

impl<T> LocaleTable<T> {
    /// Build a table, failing if any locale is missing or listed twice.
    pub fn new(entries: Vec<(Locale, T)>) -> Result<Self, I18nError> {
        for locale in Locale::all() {
            match entries.iter().filter(|(l, _)| *l == locale).count() {
                0 => return Err(I18nError::MissingTranslation(locale.key())),
                1 => {}
                _ => return Err(I18nError::DuplicateTranslation(locale.key())),
            }
        }
        Ok(Self { entries })
    }

    pub fn get(&self, locale: Locale) -> &T {
        self.entries
            .iter()
            .find(|(l, _)| *l == locale)
            .map(|(_, value)| value)
            .expect("LocaleTable holds every locale")
    }

    pub fn iter(&self) -> impl Iterator<Item = (Locale, &T)> {
        self.entries.iter().map(|(locale, value)| (*locale, value))
    }
}

static SITE_STRINGS: OnceLock<LocaleTable<&'static SiteStrings>> = OnceLock::new();

fn build_site_strings() -> Result<LocaleTable<&'static SiteStrings>, I18nError> {
    LocaleTable::new(vec![
        (Locale::CATALAN, &CATALAN_STRINGS),
        (Locale::SPANISH, &SPANISH_STRINGS),
        (Locale::ENGLISH, &ENGLISH_STRINGS),
    ])
}

/// Build and install the process-wide translation table.
///
/// Call once at startup so an incomplete table fails before serving traffic.
pub fn load_site_strings() -> Result<&'static LocaleTable<&'static SiteStrings>, I18nError> {
    if let Some(table) = SITE_STRINGS.get() {
        return Ok(table);
    }
    let table = build_site_strings()?;
    Ok(SITE_STRINGS.get_or_init(|| table))
}

/// Strings for `locale`.
pub fn strings_for(locale: Locale) -> &'static SiteStrings {
    SITE_STRINGS
        .get_or_init(|| build_site_strings().expect("built-in translations cover every locale"))
        .get(locale)
}

/// Navigation items for `locale` in menu order.
pub fn navigation_items(locale: Locale) -> Vec<NavigationItem> {
    strings_for(locale).navigation_items()
}
