//! Sitemap export binary - prints the sitemap XML to stdout
//!
//! Usage:
//!   cargo run --bin sitemap > public/sitemap.xml
//!
//! Optional:
//! - SITE_URL (defaults to https://ivantechcoach.com)

use anyhow::Result;
use chrono::Utc;
use ivan_tech_coach::config::{normalize_site_url, DEFAULT_SITE_URL};
use ivan_tech_coach::sitemap::{generate, render_xml, STATIC_ROUTES};
use tracing::info;

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout stays valid XML
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ivan_tech_coach=info".parse()?),
        )
        .init();

    let site_url = normalize_site_url(
        &std::env::var("SITE_URL").unwrap_or_else(|_| DEFAULT_SITE_URL.to_string()),
    )?;

    let entries = generate(&site_url, STATIC_ROUTES, Utc::now());
    info!("Exporting {} sitemap entries for {}", entries.len(), site_url);

    print!("{}", render_xml(&entries));
    Ok(())
}
