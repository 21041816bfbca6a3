//! Client configuration.
//!
//! Values come from the environment (or any lookup closure, for tests) and can
//! be overridden by front ends before the store is built.

use std::collections::HashMap;
use std::env;
use std::time::Duration;

use chrono::Locale;

use crate::notify::DEFAULT_TOAST_DURATION;
use crate::util::{is_http_url, normalize_text_option};
use crate::{Error, Result};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_LOCALE: &str = "en_US";

const ENV_API_BASE_URL: &str = "IDEAS_API_BASE_URL";
const ENV_LOCALE: &str = "IDEAS_LOCALE";
const ENV_TOAST_SECS: &str = "IDEAS_TOAST_SECS";
const ENV_HTTP_TIMEOUT_SECS: &str = "IDEAS_HTTP_TIMEOUT_SECS";

/// Runtime settings for a note store client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base address of the REST collection, without trailing slash
    pub api_base_url: String,
    /// Locale for weekday labels and display dates
    pub locale: Locale,
    /// How long a notification stays visible
    pub toast_duration: Duration,
    /// Optional connect timeout for store requests
    pub http_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            locale: Locale::en_US,
            toast_duration: DEFAULT_TOAST_DURATION,
            http_timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self> {
        let values: HashMap<String, String> = env::vars().collect();
        Self::from_lookup(|name| values.get(name).cloned())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(url) = normalize_text_option(lookup(ENV_API_BASE_URL)) {
            config.set_api_base_url(&url)?;
        }
        if let Some(locale) = normalize_text_option(lookup(ENV_LOCALE)) {
            config.set_locale(&locale)?;
        }
        if let Some(secs) = normalize_text_option(lookup(ENV_TOAST_SECS)) {
            let secs = parse_secs(&secs, ENV_TOAST_SECS, 1..=60)?;
            config.toast_duration = Duration::from_secs(secs);
        }
        if let Some(secs) = normalize_text_option(lookup(ENV_HTTP_TIMEOUT_SECS)) {
            let secs = parse_secs(&secs, ENV_HTTP_TIMEOUT_SECS, 1..=300)?;
            config.http_timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Validate and set the store base URL.
    pub fn set_api_base_url(&mut self, raw: &str) -> Result<()> {
        let url = normalize_text_option(Some(raw.to_string()))
            .ok_or_else(|| Error::Config("API base URL must not be empty".to_string()))?;
        if !is_http_url(&url) {
            return Err(Error::Config(
                "API base URL must start with http:// or https://".to_string(),
            ));
        }
        self.api_base_url = url.trim_end_matches('/').to_string();
        Ok(())
    }

    /// Set the display locale from a POSIX-style name such as `pt_BR`.
    pub fn set_locale(&mut self, raw: &str) -> Result<()> {
        self.locale = parse_locale(raw)?;
        Ok(())
    }
}

/// Parse a locale name, accepting `pt-BR` as well as `pt_BR`.
pub fn parse_locale(raw: &str) -> Result<Locale> {
    let name = raw.trim().replace('-', "_");
    let name = name.split('.').next().unwrap_or_default();
    Locale::try_from(name).map_err(|_| Error::Config(format!("unsupported locale '{raw}'")))
}

fn parse_secs(raw: &str, name: &str, range: std::ops::RangeInclusive<u64>) -> Result<u64> {
    let (min, max) = (*range.start(), *range.end());
    let secs = raw.parse::<u64>().map_err(|_| {
        Error::Config(format!("{name} must be an integer in [{min}, {max}]"))
    })?;
    if !range.contains(&secs) {
        return Err(Error::Config(format!("{name} must be in [{min}, {max}]")));
    }
    Ok(secs)
}
