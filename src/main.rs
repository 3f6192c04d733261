use anyhow::{bail, Result};
use ivan_tech_coach::config::Config;
use ivan_tech_coach::i18n::{load_site_strings, ContentValidator, Locale};
use ivan_tech_coach::server;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ivan_tech_coach=info".parse()?),
        )
        .init();

    info!("Starting Ivan Tech Coach site");

    let config = Config::from_env()?;

    // Refuse to start with missing or broken translations
    load_site_strings()?;
    let report = ContentValidator::validate_all();
    for warning in &report.warnings {
        warn!("Content warning: {}", warning);
    }
    if report.has_errors() {
        for error in &report.errors {
            error!("Content error: {}", error);
        }
        bail!("Content validation failed with {} error(s)", report.errors.len());
    }

    info!(
        locales = ?Locale::all().iter().map(|l| l.key()).collect::<Vec<_>>(),
        default = %Locale::default_locale(),
        "Locales loaded"
    );

    server::serve(config).await
}
