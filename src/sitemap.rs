//! Sitemap generation.
//!
//! One entry per (route, locale) with hreflang alternates taken from
//! [`RouteAlternates`], so every entry agrees with the page's SEO metadata.

use crate::html::escape;
use crate::i18n::{Locale, Page, RouteAlternates};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::{self, Write};

/// A route listed in the sitemap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SitemapRoute {
    pub page: Page,
    pub priority: f32,
}

/// Static route list of the site.
pub const STATIC_ROUTES: &[SitemapRoute] = &[
    SitemapRoute { page: Page::Home, priority: 1.0 },
    SitemapRoute { page: Page::About, priority: 0.8 },
    SitemapRoute { page: Page::Services, priority: 0.9 },
    SitemapRoute { page: Page::Portfolio, priority: 0.7 },
    SitemapRoute { page: Page::Blog, priority: 0.6 },
    SitemapRoute { page: Page::Contact, priority: 0.8 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeFrequency::Weekly => f.write_str("weekly"),
            ChangeFrequency::Monthly => f.write_str("monthly"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapEntry {
    pub url: String,
    pub locale: Locale,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
    /// Hreflang tag (and `x-default`) to absolute URL
    pub alternates: BTreeMap<String, String>,
}

/// Generate sitemap entries, route-major and locale-minor.
pub fn generate(site_url: &str, routes: &[SitemapRoute], now: DateTime<Utc>) -> Vec<SitemapEntry> {
    let mut entries = Vec::with_capacity(routes.len() * Locale::all().len());

    for route in routes {
        let alternates = RouteAlternates::for_path(site_url, route.page.bare_path());
        let hreflang = alternates.hreflang_map();
        let change_frequency = match route.page {
            Page::Home => ChangeFrequency::Weekly,
            _ => ChangeFrequency::Monthly,
        };

        for link in &alternates.links {
            entries.push(SitemapEntry {
                url: link.url.clone(),
                locale: link.locale,
                last_modified: now,
                change_frequency,
                priority: route.priority,
                alternates: hreflang.clone(),
            });
        }
    }

    entries
}

/// Serialize entries as a sitemaps.org urlset with xhtml alternates.
pub fn render_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" \
         xmlns:xhtml=\"http://www.w3.org/1999/xhtml\">\n",
    );

    // Writing to a String cannot fail.
    for entry in entries {
        let _ = writeln!(xml, "  <url>");
        let _ = writeln!(xml, "    <loc>{}</loc>", escape(&entry.url));
        for (hreflang, url) in &entry.alternates {
            let _ = writeln!(
                xml,
                "    <xhtml:link rel=\"alternate\" hreflang=\"{}\" href=\"{}\"/>",
                escape(hreflang),
                escape(url)
            );
        }
        let _ = writeln!(
            xml,
            "    <lastmod>{}</lastmod>",
            entry.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true)
        );
        let _ = writeln!(xml, "    <changefreq>{}</changefreq>", entry.change_frequency);
        let _ = writeln!(xml, "    <priority>{:.1}</priority>", entry.priority);
        let _ = writeln!(xml, "  </url>");
    }

    xml.push_str("</urlset>\n");
    xml
}
