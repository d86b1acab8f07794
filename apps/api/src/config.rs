use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_API_URL;
use crate::numerology::Locale;

/// Application configuration loaded from environment variables.
/// A missing API key is allowed at startup; lookups are blocked until it is set.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub openai_api_url: String,
    pub llm_timeout_secs: u64,
    pub locale: Locale,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            openai_api_key: var("OPENAI_API_KEY").filter(|k| !k.trim().is_empty()),
            openai_api_url: var("OPENAI_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            llm_timeout_secs: var("LLM_TIMEOUT_SECS")
                .unwrap_or_else(|| "60".to_string())
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            locale: var("FORTUNE_LOCALE")
                .map(|v| v.parse::<Locale>())
                .transpose()?
                .unwrap_or_default(),
            port: var("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert!(config.openai_api_key.is_none());
        assert_eq!(config.openai_api_url, DEFAULT_API_URL);
        assert_eq!(config.llm_timeout_secs, 60);
        assert_eq!(config.locale, Locale::English);
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let config = config_from(&[("OPENAI_API_KEY", "   ")]).unwrap();
        assert!(config.openai_api_key.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("FORTUNE_LOCALE", "ko"),
            ("LLM_TIMEOUT_SECS", "15"),
            ("PORT", "3000"),
        ])
        .unwrap();

        assert_eq!(config.openai_api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.locale, Locale::Korean);
        assert_eq!(config.llm_timeout_secs, 15);
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_invalid_values_fail_startup() {
        assert!(config_from(&[("PORT", "eighty")]).is_err());
        assert!(config_from(&[("LLM_TIMEOUT_SECS", "-1")]).is_err());
        assert!(config_from(&[("FORTUNE_LOCALE", "fr")]).is_err());
    }
}
