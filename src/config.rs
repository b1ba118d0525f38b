use anyhow::{Context, Result};
use std::env;

pub const DEFAULT_PORT: u16 = 4200;
const DEFAULT_BASE_URL: &str = "https://api.currencyapi.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Runtime settings, resolved once at startup and passed explicitly into the
/// handler state. The API key is a secret: it must never be logged and never
/// appear in a response.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: String,
    pub port: u16,
    pub upstream_base_url: String,
    pub upstream_timeout_secs: u64,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = get("CURRENCYAPI_KEY")
            .filter(|key| !key.trim().is_empty())
            .context("CURRENCYAPI_KEY must be set")?;

        let port = match get("CURRENCY_PROXY_PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("invalid CURRENCY_PROXY_PORT: {raw}"))?,
            None => DEFAULT_PORT,
        };

        let upstream_base_url = get("CURRENCYAPI_BASE_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let upstream_timeout_secs = match get("CURRENCYAPI_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("invalid CURRENCYAPI_TIMEOUT_SECS: {raw}"))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_key,
            port,
            upstream_base_url,
            upstream_timeout_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn missing_api_key_is_a_startup_error() {
        let env = vars(&[]);
        let err = Settings::from_vars(|k| env.get(k).cloned()).unwrap_err();
        assert!(err.to_string().contains("CURRENCYAPI_KEY"));
    }

    #[test]
    fn blank_api_key_is_rejected() {
        let env = vars(&[("CURRENCYAPI_KEY", "   ")]);
        assert!(Settings::from_vars(|k| env.get(k).cloned()).is_err());
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let env = vars(&[("CURRENCYAPI_KEY", "secret")]);
        let settings = Settings::from_vars(|k| env.get(k).cloned()).unwrap();
        assert_eq!(settings.api_key, "secret");
        assert_eq!(settings.port, DEFAULT_PORT);
        assert_eq!(settings.upstream_base_url, "https://api.currencyapi.com");
        assert_eq!(settings.upstream_timeout_secs, 30);
    }

    #[test]
    fn trailing_slash_is_trimmed_from_base_url() {
        let env = vars(&[
            ("CURRENCYAPI_KEY", "secret"),
            ("CURRENCYAPI_BASE_URL", "http://127.0.0.1:9000/"),
        ]);
        let settings = Settings::from_vars(|k| env.get(k).cloned()).unwrap();
        assert_eq!(settings.upstream_base_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn invalid_port_is_a_startup_error() {
        let env = vars(&[
            ("CURRENCYAPI_KEY", "secret"),
            ("CURRENCY_PROXY_PORT", "not-a-port"),
        ]);
        let err = Settings::from_vars(|k| env.get(k).cloned()).unwrap_err();
        assert!(err.to_string().contains("CURRENCY_PROXY_PORT"));
    }
}
