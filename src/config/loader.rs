// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{RawSiteConfig, SiteConfig};
use crate::errors::Result;

/// Load a site config from a given path and return the raw `RawSiteConfig`.
///
/// This only performs TOML deserialization; use [`load_and_validate`] for
/// the semantic checks.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawSiteConfig> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawSiteConfig = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a site config from path and validate it.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<SiteConfig> {
    let raw_config = load_from_path(&path)?;
    let config = SiteConfig::try_from(raw_config)?;
    debug!(path = ?path.as_ref(), "loaded site config");
    Ok(config)
}

/// Like [`load_and_validate`], but a missing file yields the defaults.
///
/// Used for the implicit default path, where having no config is normal.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<SiteConfig> {
    let path = path.as_ref();
    if !path.exists() {
        debug!(?path, "no site config found; using defaults");
        return Ok(SiteConfig::default());
    }
    load_and_validate(path)
}

/// Config file looked up in the working directory when `--config` is absent.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("_config.toml")
}
