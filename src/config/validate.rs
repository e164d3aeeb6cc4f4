// src/config/validate.rs

use crate::config::model::{RawSiteConfig, SiteConfig};
use crate::errors::{Result, WatchignoreError};

impl TryFrom<RawSiteConfig> for SiteConfig {
    type Error = WatchignoreError;

    fn try_from(raw: RawSiteConfig) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(SiteConfig::new_unchecked(raw))
    }
}

/// Run every semantic check on a freshly deserialized config.
pub fn validate_raw_config(cfg: &RawSiteConfig) -> Result<()> {
    validate_source(cfg)?;
    validate_destination(cfg)?;
    validate_entries("exclude", &cfg.exclude)?;
    if let Some(files) = &cfg.config {
        validate_entries("config", files)?;
    }
    Ok(())
}

fn validate_source(cfg: &RawSiteConfig) -> Result<()> {
    if let Some(src) = &cfg.source {
        if src.as_os_str().is_empty() {
            return Err(WatchignoreError::ConfigError(
                "`source` must not be empty".to_string(),
            ));
        }
    }
    Ok(())
}

fn validate_destination(cfg: &RawSiteConfig) -> Result<()> {
    if let Some(dest) = &cfg.destination {
        if dest.as_os_str().is_empty() {
            return Err(WatchignoreError::ConfigError(
                "`destination` must not be empty".to_string(),
            ));
        }
    }
    Ok(())
}

fn validate_entries(key: &str, entries: &[String]) -> Result<()> {
    for (idx, entry) in entries.iter().enumerate() {
        if entry.trim().is_empty() {
            return Err(WatchignoreError::ConfigError(format!(
                "`{key}` entry #{idx} is empty"
            )));
        }
    }
    Ok(())
}
