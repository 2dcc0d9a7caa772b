//! Frontend configuration module
//!
//! Values are baked in at compile time from the build environment so the
//! static bundle can be served from any host without a runtime config file.

use log::{Level, LevelFilter};

const DEFAULT_API_BASE_URL: &str = "/api";
const DEFAULT_SUPPORT_URL: &str = "mailto:soporte@finetune-english.com";

/// Frontend configuration for API access, logging and external links
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Base URL of the academy API, without a trailing slash
    pub api_base_url: String,
    /// Console log verbosity
    pub log_level: LevelFilter,
    /// Where users are sent for help from the login screens
    pub support_url: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self::from_values(
            option_env!("FINETUNE_API_BASE_URL"),
            option_env!("FINETUNE_LOG_LEVEL"),
            option_env!("FINETUNE_SUPPORT_URL"),
        )
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    fn from_values(
        api_base_url: Option<&str>,
        log_level: Option<&str>,
        support_url: Option<&str>,
    ) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();
        let log_level = log_level
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(LevelFilter::Info);
        let support_url = support_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_SUPPORT_URL)
            .to_string();

        Self {
            api_base_url,
            log_level,
            support_url,
        }
    }

    /// Get the API base URL
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Level to initialise the console logger with, or `None` when logging
    /// is switched off
    pub fn console_level(&self) -> Option<Level> {
        self.log_level.to_level()
    }

    /// Get the support URL
    pub fn support_url(&self) -> &str {
        &self.support_url
    }
}
