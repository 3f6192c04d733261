//! Translation table validation.
//!
//! Catches mistakes in the per-locale string tables that the type system
//! cannot: navigation hrefs that are not bare paths (or that carry a locale
//! prefix and would be double-prefixed), empty strings, and templates that
//! lost their placeholder in translation.

use crate::i18n::content::strings_for;
use crate::i18n::resolver::has_locale_prefix;
use crate::i18n::strings::SiteStrings;
use crate::i18n::Locale;
use regex::Regex;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a string table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that would produce broken pages or links
    pub errors: Vec<String>,

    /// Non-critical issues (e.g., accessibility gaps)
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }

    fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for per-locale string tables.
pub struct ContentValidator;

static BARE_PATH_REGEX: OnceLock<Regex> = OnceLock::new();

impl ContentValidator {
    /// Validate the string table of one locale.
    pub fn validate(locale: Locale, strings: &SiteStrings) -> ValidationReport {
        let mut report = ValidationReport::new();

        for item in strings.navigation_items() {
            if !Self::is_bare_path(item.href) {
                report.errors.push(format!(
                    "[{}] navigation href '{}' is not a bare path",
                    locale, item.href
                ));
            } else if has_locale_prefix(item.href) {
                report.errors.push(format!(
                    "[{}] navigation href '{}' carries a locale prefix",
                    locale, item.href
                ));
            }

            if item.name.trim().is_empty() {
                report
                    .errors
                    .push(format!("[{}] navigation item '{}' has no name", locale, item.href));
            }

            match item.aria_label {
                Some(label) if !label.trim().is_empty() => {}
                _ => report.warnings.push(format!(
                    "[{}] navigation item '{}' has no accessible label",
                    locale, item.href
                )),
            }
        }

        if !strings.ui.change_language.contains("{language}") {
            report.errors.push(format!(
                "[{}] change_language template is missing the {{language}} placeholder",
                locale
            ));
        }

        let required = [
            ("ui.skip_to_content", strings.ui.skip_to_content),
            ("ui.main_navigation", strings.ui.main_navigation),
            ("hero.title", strings.hero.title),
            ("footer.rights_reserved", strings.footer.rights_reserved),
            ("cookies.message", strings.cookies.message),
            ("not_found.title", strings.not_found.title),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                report
                    .errors
                    .push(format!("[{}] {} is empty", locale, field));
            }
        }

        report
    }

    /// Validate the installed tables of every supported locale.
    pub fn validate_all() -> ValidationReport {
        let mut report = ValidationReport::new();
        for locale in Locale::all() {
            report.merge(Self::validate(locale, strings_for(locale)));
        }
        report
    }

    fn is_bare_path(href: &str) -> bool {
        let regex = BARE_PATH_REGEX
            .get_or_init(|| Regex::new(r"^/([a-z0-9\-]+(/[a-z0-9\-]+)*)?$").unwrap());
        regex.is_match(href)
    }
}
