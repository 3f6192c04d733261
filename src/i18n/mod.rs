//! Internationalization (i18n) module for the multilingual site.
//!
//! All locale logic lives here: which locales exist, how a URL path maps to a
//! locale, how links keep the active locale, and the per-locale content
//! tables.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported locales and their representations
//! - `locale`: Closed `Locale` value type
//! - `resolver`: Resolve, strip and build localized paths
//! - `link`: Locale-preserving links for rendered components
//! - `switcher`: User-triggered locale switching
//! - `alternates`: Every locale's URL for one route (hreflang, sitemap)
//! - `strings` / `content`: Translation tables and page definitions
//! - `validator`: Translation table validation
//! - `metrics`: Locale routing counters
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::{build_localized_link, resolve_locale, Locale};
//!
//! assert_eq!(resolve_locale("/es/services"), Locale::SPANISH);
//! assert_eq!(build_localized_link("/en/services", "/contact", None, None), "/en/contact");
//! ```

mod alternates;
mod content;
mod error;
mod link;
mod locale;
mod metrics;
mod registry;
mod resolver;
mod strings;
mod switcher;
mod validator;

pub use alternates::{AlternateLink, RouteAlternates, X_DEFAULT};
pub use content::{load_site_strings, navigation_items, strings_for, LocaleTable, Page};
pub use error::I18nError;
pub use link::{build_localized_link, LinkBuilder};
pub use locale::Locale;
pub use metrics::{LocaleMetrics, MetricsReport};
pub use registry::{LocaleConfig, LocaleRegistry};
pub use resolver::{
    build_localized_path, has_locale_prefix, resolve_locale, split_location, strip_locale,
    Location,
};
pub use strings::{NavigationItem, SiteStrings};
pub use switcher::{FocusTarget, LocaleSwitchController, Navigator, SwitchOutcome, SwitchState};
pub use validator::{ContentValidator, ValidationReport};
