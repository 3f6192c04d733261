//! HTTP surface of the site.
//!
//! Every page request goes through [`route_request`], which decides from the
//! path alone whether to render, redirect to the canonical localized path, or
//! answer not-found. Handlers only translate that decision into a response.

use crate::config::Config;
use crate::i18n::{
    build_localized_path, has_locale_prefix, split_location, strip_locale, Locale, LocaleMetrics,
    LocaleSwitchController, MetricsReport, Navigator, Page,
};
use crate::render::{render_not_found, render_page};
use crate::sitemap::{self, STATIC_ROUTES};
use anyhow::{Context, Result};
use axum::{
    extract::{Query, State},
    http::{header, HeaderValue, Method, StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

/// What to do with a page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render `page` in `locale`.
    Render { locale: Locale, page: Page },
    /// Permanent redirect (301) to the canonical form of a localized path:
    /// legacy alias segment, stacked locale segments or trailing slash.
    Canonicalize { target: String, from_alias: bool },
    /// Permanent redirect (308) of an unprefixed page to the default locale.
    DefaultLocale { target: String },
    /// Localized not-found page.
    NotFound,
}

/// Decide how to answer a page request for `path`.
pub fn route_request(path: &str) -> RouteDecision {
    let first_segment = path.split('/').find(|segment| !segment.is_empty());

    let Some((segment, locale)) =
        first_segment.and_then(|segment| Locale::from_segment(segment).map(|l| (segment, l)))
    else {
        return match Page::from_bare_path(path) {
            Some(page) => RouteDecision::DefaultLocale {
                target: build_localized_path(Locale::default_locale(), page.bare_path(), None, None),
            },
            None => RouteDecision::NotFound,
        };
    };

    if segment != locale.key() {
        return RouteDecision::Canonicalize {
            target: build_localized_path(locale, path, None, None),
            from_alias: true,
        };
    }

    match Page::from_bare_path(&strip_locale(path)) {
        Some(page) => {
            let canonical = build_localized_path(locale, page.bare_path(), None, None);
            if canonical == path {
                RouteDecision::Render { locale, page }
            } else {
                RouteDecision::Canonicalize {
                    target: canonical,
                    from_alias: false,
                }
            }
        }
        None => RouteDecision::NotFound,
    }
}

/// Build the application router.
pub fn router(config: Arc<Config>) -> Router {
    Router::new()
        .route("/", get(root_redirect))
        .route("/sitemap.xml", get(sitemap_xml))
        .route("/robots.txt", get(robots_txt))
        .route("/health", get(health))
        .route("/switch", get(switch_locale))
        .fallback(page)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::REFERRER_POLICY,
            HeaderValue::from_static("origin-when-cross-origin"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { config })
}

/// Bind and serve until Ctrl-C.
pub async fn serve(config: Config) -> Result<()> {
    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!(address = %address, site_url = %config.site_url, "Server listening");

    axum::serve(listener, router(Arc::new(config)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

fn with_query(target: String, query: Option<&str>) -> String {
    match query.filter(|q| !q.is_empty()) {
        Some(query) => format!("{}?{}", target, query),
        None => target,
    }
}

/// Redirect with `status`, answering 400 when `target` is not a valid header value.
fn redirect(status: StatusCode, target: &str) -> Response {
    match HeaderValue::from_str(target) {
        Ok(location) => (status, [(header::LOCATION, location)]).into_response(),
        Err(_) => {
            warn!(target = %target, "Refusing redirect to invalid location");
            StatusCode::BAD_REQUEST.into_response()
        }
    }
}

async fn root_redirect() -> Redirect {
    LocaleMetrics::global().record_default_fallback();
    Redirect::temporary(&build_localized_path(Locale::default_locale(), "/", None, None))
}

async fn page(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let path = uri.path();
    let metrics = LocaleMetrics::global();
    if !has_locale_prefix(path) {
        metrics.record_default_fallback();
    }

    match route_request(path) {
        RouteDecision::Render { locale, page } => {
            metrics.record_page_rendered(locale);
            Html(render_page(&state.config.site_url, path, page)).into_response()
        }
        RouteDecision::Canonicalize { target, from_alias } => {
            if from_alias {
                metrics.record_alias_redirect();
            }
            debug!(from = %path, to = %target, "Redirecting to canonical path");
            redirect(StatusCode::MOVED_PERMANENTLY, &with_query(target, uri.query()))
        }
        RouteDecision::DefaultLocale { target } => {
            debug!(from = %path, to = %target, "Redirecting to default locale");
            redirect(StatusCode::PERMANENT_REDIRECT, &with_query(target, uri.query()))
        }
        RouteDecision::NotFound => {
            metrics.record_not_found();
            debug!(path = %path, "Page not found");
            (StatusCode::NOT_FOUND, Html(render_not_found(path))).into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
struct SwitchParams {
    to: String,
    from: Option<String>,
}

/// Captures the navigation issued by the switch controller as a redirect target.
#[derive(Debug, Default)]
struct RedirectNavigator {
    target: Option<String>,
}

impl Navigator for RedirectNavigator {
    fn navigate(&mut self, path: &str) {
        self.target = Some(path.to_string());
    }
}

async fn switch_locale(Query(params): Query<SwitchParams>) -> Response {
    let locale = match Locale::parse(&params.to) {
        Ok(locale) => locale,
        Err(e) => {
            warn!(requested = %params.to, "Rejected locale switch: {}", e);
            return (StatusCode::BAD_REQUEST, e.to_string()).into_response();
        }
    };

    let location = split_location(params.from.as_deref().unwrap_or("/"));
    let mut controller = LocaleSwitchController::new(RedirectNavigator::default());
    controller.select(locale, &location);

    // Already active: send the visitor back to the canonical form of `from`.
    let target = controller.into_navigator().target.unwrap_or_else(|| {
        build_localized_path(
            locale,
            &location.path,
            location.hash.as_deref(),
            location.query.as_deref(),
        )
    });

    redirect(StatusCode::SEE_OTHER, &target)
}

async fn sitemap_xml(State(state): State<AppState>) -> Response {
    let entries = sitemap::generate(&state.config.site_url, STATIC_ROUTES, Utc::now());
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        sitemap::render_xml(&entries),
    )
        .into_response()
}

async fn robots_txt(State(state): State<AppState>) -> Response {
    let body = format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n",
        state.config.site_url
    );
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response()
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    metrics: MetricsReport,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        metrics: LocaleMetrics::global().report(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== route_request Tests ====================

    #[test]
    fn test_route_renders_localized_pages() {
        assert_eq!(
            route_request("/es/services"),
            RouteDecision::Render { locale: Locale::SPANISH, page: Page::Services }
        );
        assert_eq!(
            route_request("/cat"),
            RouteDecision::Render { locale: Locale::CATALAN, page: Page::Home }
        );
    }

    #[test]
    fn test_route_alias_redirects_to_canonical() {
        assert_eq!(
            route_request("/ca/about"),
            RouteDecision::Canonicalize { target: "/cat/about".to_string(), from_alias: true }
        );
        assert_eq!(
            route_request("/ca"),
            RouteDecision::Canonicalize { target: "/cat".to_string(), from_alias: true }
        );
    }

    #[test]
    fn test_route_trailing_slash_and_stacked_prefix() {
        assert_eq!(
            route_request("/en/about/"),
            RouteDecision::Canonicalize { target: "/en/about".to_string(), from_alias: false }
        );
        assert_eq!(
            route_request("/es/en/about"),
            RouteDecision::Canonicalize { target: "/es/about".to_string(), from_alias: false }
        );
        assert_eq!(
            route_request("/es/"),
            RouteDecision::Canonicalize { target: "/es".to_string(), from_alias: false }
        );
    }

    #[test]
    fn test_route_unprefixed_page_redirects_to_default() {
        assert_eq!(
            route_request("/about"),
            RouteDecision::DefaultLocale { target: "/cat/about".to_string() }
        );
    }

    #[test]
    fn test_route_not_found() {
        assert_eq!(route_request("/es/missing"), RouteDecision::NotFound);
        assert_eq!(route_request("/fr/about"), RouteDecision::NotFound);
        assert_eq!(route_request("/privacy-policy"), RouteDecision::NotFound);
    }

    // ==================== Helper Tests ====================

    #[test]
    fn test_with_query() {
        assert_eq!(with_query("/cat/about".to_string(), Some("a=1")), "/cat/about?a=1");
        assert_eq!(with_query("/cat/about".to_string(), Some("")), "/cat/about");
        assert_eq!(with_query("/cat/about".to_string(), None), "/cat/about");
    }

    #[test]
    fn test_redirect_rejects_control_characters() {
        let response = redirect(StatusCode::SEE_OTHER, "/en/about\nSet-Cookie: x=1");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = redirect(StatusCode::SEE_OTHER, "/en/about#team");
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/en/about#team");
    }

    #[test]
    fn test_redirect_navigator_records_target() {
        let mut navigator = RedirectNavigator::default();
        navigator.navigate("/en/about");
        assert_eq!(navigator.target.as_deref(), Some("/en/about"));
    }
}
