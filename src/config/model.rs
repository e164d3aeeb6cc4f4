// src/config/model.rs

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Config file names looked up in the source when `config` is not set.
pub const DEFAULT_CONFIG_FILES: [&str; 3] = ["_config.yml", "_config.yaml", "_config.toml"];

/// Site output directory used when `destination` is not set.
pub const DEFAULT_DESTINATION: &str = "_site";

/// Site configuration exactly as read from TOML, before validation.
///
/// ```toml
/// source = "."
/// destination = "_site"
/// exclude = ["node_modules", "Gemfile.lock"]
/// config = ["_config.toml"]
/// ```
///
/// Every key is optional.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawSiteConfig {
    /// Site source directory. Relative values are taken relative to the
    /// directory holding the config file.
    #[serde(default)]
    pub source: Option<PathBuf>,

    /// Output directory. Relative values are taken relative to the source.
    #[serde(default)]
    pub destination: Option<PathBuf>,

    /// Paths, relative to the source, that the generator skips.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Config files that should not trigger rebuilds when edited.
    #[serde(default)]
    pub config: Option<Vec<String>>,
}

/// Validated site configuration. Build one through `TryFrom<RawSiteConfig>`
/// or the loader.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    raw: RawSiteConfig,
}

impl SiteConfig {
    pub(crate) fn new_unchecked(raw: RawSiteConfig) -> Self {
        Self { raw }
    }

    pub fn source(&self) -> Option<&PathBuf> {
        self.raw.source.as_ref()
    }

    pub fn exclude(&self) -> &[String] {
        &self.raw.exclude
    }

    /// Resolve into the options handed to an ignore-path source.
    ///
    /// `base_dir` anchors a relative (or missing) `source`; `source_override`
    /// wins over the configured one.
    pub fn resolve(&self, base_dir: &Path, source_override: Option<PathBuf>) -> SiteOptions {
        let source = match source_override.or_else(|| self.raw.source.clone()) {
            Some(src) if src.is_absolute() => src,
            Some(src) => base_dir.join(src),
            None => base_dir.to_path_buf(),
        };
        let source = crate::ignore::path_utils::normalize(&source);

        let destination = self
            .raw
            .destination
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DESTINATION));

        let config_files = match &self.raw.config {
            Some(files) => files.clone(),
            None => DEFAULT_CONFIG_FILES.iter().map(|s| s.to_string()).collect(),
        };

        SiteOptions {
            source,
            destination,
            exclude: self.raw.exclude.clone(),
            config_files,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new_unchecked(RawSiteConfig::default())
    }
}

/// Options passed to [`crate::ignore::SiteIgnorePaths`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteOptions {
    /// Absolute site source directory.
    pub source: PathBuf,
    /// Output directory; relative values are resolved against `source`.
    pub destination: PathBuf,
    pub exclude: Vec<String>,
    pub config_files: Vec<String>,
}

impl SiteOptions {
    /// Options with the default destination and config files.
    pub fn new(source: impl Into<PathBuf>) -> Self {
        let source: PathBuf = source.into();
        SiteConfig::default().resolve(&source, None)
    }
}
