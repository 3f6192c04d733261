//! HTML page rendering.
//!
//! Builds the shared layout (skip link, header navigation, language switcher,
//! footer, cookie banner) around each page. The active locale is resolved
//! once from the request path and every href goes through [`LinkBuilder`].

use crate::html::escape;
use crate::i18n::{strings_for, LinkBuilder, Locale, Page, SiteStrings};
use crate::seo::{generate_metadata, SITE_NAME};
use std::fmt::Write;

/// Id of the main content region, target of the skip link.
pub const MAIN_CONTENT_ID: &str = "main-content";

/// Id of the primary heading, focused after a locale switch.
pub const PRIMARY_HEADING_ID: &str = "page-title";

const LEGAL_PATHS: [&str; 3] = ["/privacy-policy", "/cookie-policy", "/terms-of-use"];

/// Render `page` for a request to `current_path`.
///
/// `current_path` is the request path; its locale decides every string and href.
pub fn render_page(site_url: &str, current_path: &str, page: Page) -> String {
    let links = LinkBuilder::for_path(current_path);
    let locale = links.locale();
    let strings = strings_for(locale);
    let metadata = generate_metadata(site_url, locale, Some(page));

    let heading = match page {
        Page::Home => strings.hero.title,
        _ => page.navigation_item(strings).name,
    };
    let body = match page {
        Page::Home => render_hero(&links, strings),
        _ => format!("<p>{}</p>\n", escape(&metadata.description)),
    };

    render_document(
        locale,
        &metadata.to_head_html(),
        current_path,
        &links,
        strings,
        heading,
        &body,
    )
}

/// Render the localized not-found page for `current_path`.
pub fn render_not_found(current_path: &str) -> String {
    let links = LinkBuilder::for_path(current_path);
    let locale = links.locale();
    let strings = strings_for(locale);

    let head = format!(
        "<title>{} | {}</title>\n<meta name=\"robots\" content=\"noindex, follow\">\n",
        escape(strings.not_found.title),
        SITE_NAME
    );
    let body = format!(
        "<p>{}</p>\n<p><a href=\"{}\">{}</a></p>\n",
        escape(strings.not_found.message),
        escape(&links.link("/")),
        escape(strings.not_found.back_home)
    );

    render_document(
        locale,
        &head,
        current_path,
        &links,
        strings,
        strings.not_found.title,
        &body,
    )
}

fn render_document(
    locale: Locale,
    head: &str,
    current_path: &str,
    links: &LinkBuilder,
    strings: &SiteStrings,
    heading: &str,
    body: &str,
) -> String {
    let mut html = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(html, "<!DOCTYPE html>");
    let _ = writeln!(html, "<html lang=\"{}\">", locale.html_lang());
    let _ = writeln!(html, "<head>");
    let _ = writeln!(html, "<meta charset=\"utf-8\">");
    let _ = writeln!(
        html,
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">"
    );
    html.push_str(head);
    let _ = writeln!(html, "</head>");
    let _ = writeln!(html, "<body>");
    let _ = writeln!(
        html,
        "<a class=\"skip-link\" href=\"{}\">{}</a>",
        escape(&links.link_with(current_path, Some(MAIN_CONTENT_ID), None)),
        escape(strings.ui.skip_to_content)
    );
    html.push_str(&render_header(current_path, links, strings));
    let _ = writeln!(html, "<main id=\"{}\" tabindex=\"-1\">", MAIN_CONTENT_ID);
    let _ = writeln!(
        html,
        "<h1 id=\"{}\" tabindex=\"-1\">{}</h1>",
        PRIMARY_HEADING_ID,
        escape(heading)
    );
    html.push_str(body);
    let _ = writeln!(html, "</main>");
    html.push_str(&render_footer(links, strings));
    html.push_str(&render_cookie_banner(strings));
    let _ = writeln!(html, "</body>");
    let _ = writeln!(html, "</html>");

    html
}

fn render_header(current_path: &str, links: &LinkBuilder, strings: &SiteStrings) -> String {
    let mut html = String::new();
    let active_locale = links.locale();

    let _ = writeln!(html, "<header>");
    let _ = writeln!(
        html,
        "<a class=\"logo\" href=\"{}\">{}</a>",
        escape(&links.link("/")),
        SITE_NAME
    );

    let _ = writeln!(
        html,
        "<nav aria-label=\"{}\">",
        escape(strings.ui.main_navigation)
    );
    let _ = writeln!(html, "<ul>");
    for item in strings.navigation_items() {
        let current = if LinkBuilder::is_current(current_path, item.href) {
            " aria-current=\"page\""
        } else {
            ""
        };
        let label = item
            .aria_label
            .map(|label| format!(" aria-label=\"{}\"", escape(label)))
            .unwrap_or_default();
        let _ = writeln!(
            html,
            "<li><a href=\"{}\"{}{}>{}</a></li>",
            escape(&links.link(item.href)),
            label,
            current,
            escape(item.name)
        );
    }
    let _ = writeln!(html, "</ul>");
    let _ = writeln!(html, "</nav>");

    let _ = writeln!(
        html,
        "<div class=\"language-switcher\" role=\"group\" aria-label=\"{}\">",
        escape(strings.ui.select_language)
    );
    for locale in Locale::all() {
        let current = if locale == active_locale {
            " aria-current=\"true\""
        } else {
            ""
        };
        let _ = writeln!(
            html,
            "<a href=\"{}\" hreflang=\"{}\" lang=\"{}\" aria-label=\"{}\"{}>{}</a>",
            escape(&LinkBuilder::switch_link(current_path, locale)),
            locale.html_lang(),
            locale.html_lang(),
            escape(&strings.change_language_label(locale.native_name())),
            current,
            locale.short_code()
        );
    }
    let _ = writeln!(html, "</div>");

    let _ = writeln!(html, "<form class=\"language-form\" method=\"get\" action=\"/switch\">");
    let _ = writeln!(
        html,
        "<input type=\"hidden\" name=\"from\" value=\"{}\">",
        escape(current_path)
    );
    let _ = writeln!(
        html,
        "<select name=\"to\" aria-label=\"{}\">",
        escape(strings.ui.select_language)
    );
    for locale in Locale::all() {
        let selected = if locale == active_locale { " selected" } else { "" };
        let _ = writeln!(
            html,
            "<option value=\"{}\"{}>{}</option>",
            locale.key(),
            selected,
            escape(locale.native_name())
        );
    }
    let _ = writeln!(html, "</select>");
    let _ = writeln!(
        html,
        "<button type=\"submit\">{}</button>",
        escape(strings.ui.select_language)
    );
    let _ = writeln!(html, "</form>");
    let _ = writeln!(html, "</header>");

    html
}

fn render_hero(links: &LinkBuilder, strings: &SiteStrings) -> String {
    let hero = &strings.hero;
    let mut html = String::new();

    let _ = writeln!(html, "<section class=\"hero\">");
    let _ = writeln!(html, "<p class=\"trust-badge\">{}</p>", escape(hero.trust_badge));
    let _ = writeln!(html, "<p>{}</p>", escape(hero.subtitle));
    let _ = writeln!(
        html,
        "<a class=\"cta\" href=\"{}\" aria-label=\"{}\">{}</a>",
        escape(&links.link(Page::Contact.bare_path())),
        escape(hero.go_to_contact_label),
        escape(hero.cta)
    );
    let _ = writeln!(
        html,
        "<a class=\"cta-secondary\" href=\"{}\" aria-label=\"{}\">{}</a>",
        escape(&links.link(Page::Services.bare_path())),
        escape(hero.view_services_label),
        escape(hero.secondary_cta)
    );
    let _ = writeln!(html, "</section>");

    html
}

fn render_footer(links: &LinkBuilder, strings: &SiteStrings) -> String {
    let footer = &strings.footer;
    let mut html = String::new();

    let _ = writeln!(html, "<footer role=\"contentinfo\">");
    let _ = writeln!(html, "<p>{}</p>", escape(footer.description));
    let _ = writeln!(html, "<ul class=\"legal\">");
    let labels = [footer.privacy_policy, footer.cookie_policy, footer.terms_of_use];
    for (path, label) in LEGAL_PATHS.iter().zip(labels) {
        let _ = writeln!(
            html,
            "<li><a href=\"{}\">{}</a></li>",
            escape(&links.link(path)),
            escape(label)
        );
    }
    let _ = writeln!(html, "</ul>");
    let _ = writeln!(
        html,
        "<p>&copy; {} {}</p>",
        SITE_NAME,
        escape(footer.rights_reserved)
    );
    let _ = writeln!(html, "</footer>");

    html
}

fn render_cookie_banner(strings: &SiteStrings) -> String {
    let cookies = &strings.cookies;
    let mut html = String::new();

    let _ = writeln!(
        html,
        "<div class=\"cookie-banner\" role=\"dialog\" aria-labelledby=\"cookie-banner-title\">"
    );
    let _ = writeln!(html, "<h2 id=\"cookie-banner-title\">{}</h2>", escape(cookies.title));
    let _ = writeln!(html, "<p>{}</p>", escape(cookies.message));
    for (name, label, description, badge) in [
        ("essential", cookies.essential, cookies.essential_description, cookies.required),
        ("analytics", cookies.analytics, cookies.analytics_description, cookies.optional),
        ("marketing", cookies.marketing, cookies.marketing_description, cookies.optional),
    ] {
        let _ = writeln!(
            html,
            "<label><input type=\"checkbox\" name=\"{}\"{}> {} <small>{}</small></label>",
            name,
            if name == "essential" { " checked disabled" } else { "" },
            escape(label),
            escape(badge)
        );
        let _ = writeln!(html, "<p class=\"cookie-description\">{}</p>", escape(description));
    }
    let _ = writeln!(
        html,
        "<button type=\"button\" data-consent=\"all\">{}</button>",
        escape(cookies.accept_all)
    );
    let _ = writeln!(
        html,
        "<button type=\"button\" data-consent=\"selected\">{}</button>",
        escape(cookies.accept_selected)
    );
    let _ = writeln!(
        html,
        "<button type=\"button\" data-consent=\"essential\">{}</button>",
        escape(cookies.reject_all)
    );
    let _ = writeln!(html, "</div>");

    html
}
