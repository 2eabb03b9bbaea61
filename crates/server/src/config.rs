//! Server configuration from environment variables.
//!
//! | Variable                  | Default        |
//! |---------------------------|----------------|
//! | `LEDE_ADDR`               | `0.0.0.0:3000` |
//! | `LEDE_CONFIG`             | settings discovery |
//! | `LEDE_FETCH_TIMEOUT_SECS` | settings value |

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use lede_core::Settings;

const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub settings: Settings,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests need not touch the
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let addr = lookup("LEDE_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr.parse().with_context(|| format!("Invalid LEDE_ADDR: {}", addr))?;

        let settings_path = lookup("LEDE_CONFIG").map(PathBuf::from);
        let mut settings = Settings::discover(settings_path.as_deref()).context("Failed to load settings")?;

        if let Some(timeout) = lookup("LEDE_FETCH_TIMEOUT_SECS") {
            settings.fetch.timeout =
                timeout.parse().with_context(|| format!("Invalid LEDE_FETCH_TIMEOUT_SECS: {}", timeout))?;
        }

        Ok(Self { addr, settings })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("LEDE_ADDR", "127.0.0.1:8080"),
            ("LEDE_FETCH_TIMEOUT_SECS", "7"),
        ]))
        .unwrap();

        assert_eq!(config.addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.settings.fetch.timeout, 7);
    }

    #[test]
    fn test_invalid_addr() {
        assert!(ServerConfig::from_lookup(lookup(&[("LEDE_ADDR", "nowhere")])).is_err());
    }

    #[test]
    fn test_invalid_timeout() {
        assert!(ServerConfig::from_lookup(lookup(&[("LEDE_FETCH_TIMEOUT_SECS", "soon")])).is_err());
    }

    #[test]
    fn test_missing_settings_file() {
        let result = ServerConfig::from_lookup(lookup(&[("LEDE_CONFIG", "/nonexistent/lede.toml")]));
        assert!(result.is_err());
    }
}
