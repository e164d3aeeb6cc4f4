#![allow(dead_code)]

use std::path::PathBuf;

use watchignore::config::{RawSiteConfig, SiteConfig, SiteOptions};
use watchignore::fs::mock::MockFileSystem;

/// Builder for `SiteConfig` to simplify test setup.
#[derive(Default)]
pub struct SiteConfigBuilder {
    config: RawSiteConfig,
}

impl SiteConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(mut self, source: &str) -> Self {
        self.config.source = Some(PathBuf::from(source));
        self
    }

    pub fn destination(mut self, destination: &str) -> Self {
        self.config.destination = Some(PathBuf::from(destination));
        self
    }

    pub fn exclude(mut self, entry: &str) -> Self {
        self.config.exclude.push(entry.to_string());
        self
    }

    pub fn config_file(mut self, name: &str) -> Self {
        self.config
            .config
            .get_or_insert_with(Vec::new)
            .push(name.to_string());
        self
    }

    pub fn raw(self) -> RawSiteConfig {
        self.config
    }

    pub fn build(self) -> SiteConfig {
        SiteConfig::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

/// An in-memory site rooted at `root` with the usual layout: a config file,
/// a generated `_site/` and some content.
pub struct SiteFixture {
    pub root: PathBuf,
    pub fs: MockFileSystem,
}

impl SiteFixture {
    pub fn new(root: &str) -> Self {
        let root = PathBuf::from(root);
        let fs = MockFileSystem::new();
        fs.add_dir(&root);
        Self { root, fs }
    }

    /// The usual layout: `_config.yml`, `_site/index.html`, `_posts/hello.md`.
    pub fn standard(root: &str) -> Self {
        Self::new(root)
            .with_file("_config.yml")
            .with_file("_site/index.html")
            .with_file("_posts/hello.md")
    }

    pub fn with_file(self, rel: &str) -> Self {
        self.fs.add_file(self.root.join(rel));
        self
    }

    pub fn with_dir(self, rel: &str) -> Self {
        self.fs.add_dir(self.root.join(rel));
        self
    }

    pub fn options(&self) -> SiteOptions {
        SiteOptions::new(&self.root)
    }
}
