//! Locale routing metrics.
//!
//! Counts how requests are resolved: pages rendered per locale, paths that
//! fell back to the default locale, legacy alias redirects, explicit locale
//! switches and not-found responses. Exposed through the health endpoint.

use crate::i18n::Locale;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Locale routing counters.
pub struct LocaleMetrics {
    /// Pages rendered, indexed by registry position
    pages_rendered: Vec<AtomicUsize>,

    /// Requests without a recognised locale segment
    default_fallbacks: AtomicUsize,

    /// Requests redirected from a legacy alias segment
    alias_redirects: AtomicUsize,

    /// Explicit locale switches that issued a navigation
    locale_switches: AtomicUsize,

    /// Not-found responses
    not_found: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<LocaleMetrics> = OnceLock::new();

impl LocaleMetrics {
    pub fn new() -> Self {
        Self {
            pages_rendered: Locale::all().iter().map(|_| AtomicUsize::new(0)).collect(),
            default_fallbacks: AtomicUsize::new(0),
            alias_redirects: AtomicUsize::new(0),
            locale_switches: AtomicUsize::new(0),
            not_found: AtomicUsize::new(0),
        }
    }

    /// Get the global metrics instance.
    pub fn global() -> &'static LocaleMetrics {
        METRICS.get_or_init(LocaleMetrics::new)
    }

    fn locale_index(locale: Locale) -> Option<usize> {
        Locale::all().iter().position(|l| *l == locale)
    }

    pub fn record_page_rendered(&self, locale: Locale) {
        if let Some(counter) = Self::locale_index(locale).and_then(|i| self.pages_rendered.get(i)) {
            counter.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_default_fallback(&self) {
        self.default_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_alias_redirect(&self) {
        self.alias_redirects.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_locale_switch(&self) {
        self.locale_switches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_not_found(&self) {
        self.not_found.fetch_add(1, Ordering::Relaxed);
    }

    pub fn pages_rendered(&self, locale: Locale) -> usize {
        Self::locale_index(locale)
            .and_then(|i| self.pages_rendered.get(i))
            .map(|counter| counter.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    pub fn default_fallbacks(&self) -> usize {
        self.default_fallbacks.load(Ordering::Relaxed)
    }

    pub fn alias_redirects(&self) -> usize {
        self.alias_redirects.load(Ordering::Relaxed)
    }

    pub fn locale_switches(&self) -> usize {
        self.locale_switches.load(Ordering::Relaxed)
    }

    pub fn not_found(&self) -> usize {
        self.not_found.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let pages_by_locale: BTreeMap<String, usize> = Locale::all()
            .into_iter()
            .map(|locale| (locale.key().to_string(), self.pages_rendered(locale)))
            .collect();
        let pages_rendered = pages_by_locale.values().sum();

        MetricsReport {
            pages_rendered,
            pages_by_locale,
            default_fallbacks: self.default_fallbacks(),
            alias_redirects: self.alias_redirects(),
            locale_switches: self.locale_switches(),
            not_found: self.not_found(),
        }
    }
}

impl Default for LocaleMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of the locale routing counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Total pages rendered across all locales
    pub pages_rendered: usize,

    /// Pages rendered keyed by locale path key
    pub pages_by_locale: BTreeMap<String, usize>,

    pub default_fallbacks: usize,
    pub alias_redirects: usize,
    pub locale_switches: usize,
    pub not_found: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_metrics_are_zero() {
        let report = LocaleMetrics::new().report();
        assert_eq!(report.pages_rendered, 0);
        assert_eq!(report.pages_by_locale.len(), 3);
        assert!(report.pages_by_locale.values().all(|count| *count == 0));
    }

    #[test]
    fn test_pages_rendered_per_locale() {
        let metrics = LocaleMetrics::new();
        metrics.record_page_rendered(Locale::SPANISH);
        metrics.record_page_rendered(Locale::SPANISH);
        metrics.record_page_rendered(Locale::ENGLISH);

        assert_eq!(metrics.pages_rendered(Locale::SPANISH), 2);
        assert_eq!(metrics.pages_rendered(Locale::CATALAN), 0);

        let report = metrics.report();
        assert_eq!(report.pages_rendered, 3);
        assert_eq!(report.pages_by_locale["es"], 2);
        assert_eq!(report.pages_by_locale["en"], 1);
    }

    #[test]
    fn test_routing_counters() {
        let metrics = LocaleMetrics::new();
        metrics.record_default_fallback();
        metrics.record_alias_redirect();
        metrics.record_alias_redirect();
        metrics.record_locale_switch();
        metrics.record_not_found();

        let report = metrics.report();
        assert_eq!(report.default_fallbacks, 1);
        assert_eq!(report.alias_redirects, 2);
        assert_eq!(report.locale_switches, 1);
        assert_eq!(report.not_found, 1);
    }

    #[test]
    fn test_global_is_singleton() {
        assert!(std::ptr::eq(LocaleMetrics::global(), LocaleMetrics::global()));
    }

    #[test]
    fn test_report_serializes() {
        let json = serde_json::to_value(LocaleMetrics::new().report()).unwrap();
        assert_eq!(json["pages_by_locale"]["cat"], 0);
        assert_eq!(json["locale_switches"], 0);
    }
}
