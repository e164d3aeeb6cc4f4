// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs;
pub mod ignore;
pub mod logging;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{default_config_path, load_and_validate, load_or_default, SiteOptions};
use crate::ignore::path_utils::{normalize, relative_str};
use crate::ignore::{IgnoreMatcher, IgnorePathSource, SiteIgnorePaths, TmpIgnore};

/// High-level entry point used by `main.rs`.
///
/// Loads the site config, computes the ignore list (site base + `*.TMP`)
/// and writes either the list or one verdict per requested path to `out`.
pub fn run(args: CliArgs, out: &mut dyn Write) -> Result<()> {
    let options = site_options(&args)?;
    info!(source = ?options.source, "computing ignore paths");

    let source = TmpIgnore::new(SiteIgnorePaths::new());
    let patterns = source
        .listen_ignore_paths(&options)
        .context("computing ignore paths")?;
    debug!(count = patterns.len(), "ignore paths computed");

    let matcher = IgnoreMatcher::new(patterns);

    if args.paths.is_empty() {
        for pattern in matcher.patterns() {
            writeln!(out, "{pattern}")?;
        }
        return Ok(());
    }

    for path in &args.paths {
        let rel = relativize(&options.source, path);
        let verdict = if matcher.is_ignored(&rel) {
            "ignored"
        } else {
            "watched"
        };
        writeln!(out, "{verdict} {path}")?;
    }

    Ok(())
}

/// Build [`SiteOptions`] from `--config` / `--source`.
///
/// An explicit `--config` must exist; the implicit default may be absent.
fn site_options(args: &CliArgs) -> Result<SiteOptions> {
    let (config_path, cfg) = match &args.config {
        Some(path) => {
            let path = PathBuf::from(path);
            let cfg = load_and_validate(&path)
                .with_context(|| format!("loading site config {:?}", path))?;
            (path, cfg)
        }
        None => {
            let path = default_config_path();
            let cfg = load_or_default(&path)
                .with_context(|| format!("loading site config {:?}", path))?;
            (path, cfg)
        }
    };

    // `--source` is relative to where the command runs, `source` in the
    // file is relative to the file.
    let cwd = std::env::current_dir().context("reading current directory")?;
    let source_override = args.source.as_ref().map(|s| cwd.join(s));
    Ok(cfg.resolve(&config_root_dir(&cwd, &config_path), source_override))
}

/// Directory a config file's relative `source` is anchored at.
///
/// Falls back to the current working directory for a bare filename.
fn config_root_dir(cwd: &Path, config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => cwd.join(parent),
        _ => cwd.to_path_buf(),
    }
}

/// Paths given on the command line may be absolute or already relative to
/// the source; patterns expect the latter, without `.` or `..` components.
fn relativize(source: &Path, path: &str) -> String {
    let p = normalize(Path::new(path));
    if p.is_absolute() {
        if let Some(rel) = relative_str(source, &p) {
            return rel;
        }
    }
    p.to_string_lossy().replace('\\', "/")
}
