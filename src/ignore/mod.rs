// src/ignore/mod.rs

//! Ignore patterns for a site watcher.
//!
//! This module is responsible for:
//! - The `*.TMP` rule and the pattern type itself (`pattern`).
//! - Wrapping any ignore-path source so it also yields the `*.TMP` rule
//!   (`extend`).
//! - A base source derived from the site config (`site`).
//! - Testing paths against a finished list (`matcher`).
//!
//! It does **not** watch anything; it only produces and evaluates the list a
//! watcher would be configured with.

pub mod extend;
pub mod matcher;
pub mod path_utils;
pub mod pattern;
pub mod site;

pub use extend::{extend_ignore_paths, with_tmp_ignore, IgnorePathSource, TmpIgnore};
pub use matcher::IgnoreMatcher;
pub use pattern::{tmp_pattern, IgnorePattern, TMP_PATTERN_SOURCE};
pub use site::{SiteIgnorePaths, METADATA_FILE};
