//! Runtime Configuration
//!
//! Resolved at build time from `CHORE_BOARD_API_URL` and `CHORE_BOARD_LOG`;
//! a static bundle has no process environment to read later.

use std::str::FromStr;

use log::LevelFilter;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppConfig {
    /// Backend base URL, no trailing slash
    pub api_url: &'static str,
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(option_env!("CHORE_BOARD_API_URL"), option_env!("CHORE_BOARD_LOG"))
    }

    pub fn from_values(api_url: Option<&'static str>, log_level: Option<&str>) -> Self {
        let api_url = api_url
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL);
        let log_level = log_level
            .and_then(|level| LevelFilter::from_str(level.trim()).ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);
        Self { api_url, log_level }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_url, "http://127.0.0.1:5000");
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_values(Some("https://chores.example.com/api/"), Some("debug"));
        assert_eq!(config.api_url, "https://chores.example.com/api");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_blank_and_invalid_fall_back() {
        let config = AppConfig::from_values(Some("  "), Some("loud"));
        assert_eq!(config, AppConfig::default());
    }
}
