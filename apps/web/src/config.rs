use anyhow::{Context, Result};
use tracing::warn;

use crate::i18n::Locale;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream product API serving the upload/matching business logic.
    pub api_base_url: String,
    /// Locale used for legacy redirects and as the translation fallback.
    pub default_locale: Locale,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            api_base_url: require_env("API_BASE_URL")?,
            default_locale: default_locale_from_env(),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads DEFAULT_LOCALE. Absent defaults to `en`; an unsupported value is
/// logged and degrades to `en` rather than failing startup.
fn default_locale_from_env() -> Locale {
    match std::env::var("DEFAULT_LOCALE") {
        Ok(code) => Locale::parse(&code).unwrap_or_else(|| {
            warn!("DEFAULT_LOCALE '{code}' is not a supported locale, using 'en'");
            Locale::En
        }),
        Err(_) => Locale::En,
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
