// src/config/mod.rs

//! Site configuration loading and validation.
//!
//! - TOML-backed data model (`model.rs`).
//! - Loading a config file from disk (`loader.rs`).
//! - Basic sanity checks (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path, load_or_default};
pub use model::{
    RawSiteConfig, SiteConfig, SiteOptions, DEFAULT_CONFIG_FILES, DEFAULT_DESTINATION,
};
pub use validate::validate_raw_config;
