use anyhow::{bail, Context, Result};

pub const DEFAULT_SITE_URL: &str = "https://ivantechcoach.com";

#[derive(Debug, Clone)]
pub struct Config {
    // Site
    /// Public origin used for canonical, hreflang and sitemap URLs (no trailing slash)
    pub site_url: String,

    // Server
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let site_url = std::env::var("SITE_URL").unwrap_or_else(|_| DEFAULT_SITE_URL.to_string());

        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got '{}'", value))?,
            Err(_) => 3000,
        };

        Ok(Self {
            site_url: normalize_site_url(&site_url)?,
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
        })
    }

    /// Address the server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Trim trailing slashes and require an http(s) scheme.
pub fn normalize_site_url(url: &str) -> Result<String> {
    let trimmed = url.trim().trim_end_matches('/');
    let host = match trimmed.split_once("://") {
        Some(("http", host)) | Some(("https", host)) => host,
        _ => bail!("SITE_URL must start with http:// or https://, got '{}'", url),
    };
    if host.is_empty() {
        bail!("SITE_URL has no host: '{}'", url);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var("SITE_URL");
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = Config::from_env().unwrap();
        assert_eq!(config.site_url, DEFAULT_SITE_URL);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("SITE_URL", "https://staging.example.com/");
        std::env::set_var("HOST", "127.0.0.1");
        std::env::set_var("PORT", "8080");

        let config = Config::from_env().unwrap();
        assert_eq!(config.site_url, "https://staging.example.com");
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_port() {
        clear_env();
        std::env::set_var("PORT", "not-a-port");
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("PORT"));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_site_url() {
        clear_env();
        std::env::set_var("SITE_URL", "example.com");
        assert!(Config::from_env().is_err());
        clear_env();
    }

    #[test]
    fn test_normalize_site_url() {
        assert_eq!(normalize_site_url("http://localhost:3000//").unwrap(), "http://localhost:3000");
        assert!(normalize_site_url("https://").is_err());
        assert!(normalize_site_url("http://").is_err());
        assert!(normalize_site_url("ftp://example.com").is_err());
    }
}
