// src/ignore/matcher.rs

use crate::ignore::pattern::IgnorePattern;

/// Decides whether a change to a path should be ignored.
///
/// Paths are expected relative to the site source, with forward slashes,
/// which is what the watcher hands to its ignore patterns.
#[derive(Debug, Clone, Default)]
pub struct IgnoreMatcher {
    patterns: Vec<IgnorePattern>,
}

impl IgnoreMatcher {
    pub fn new(patterns: Vec<IgnorePattern>) -> Self {
        Self { patterns }
    }

    pub fn patterns(&self) -> &[IgnorePattern] {
        &self.patterns
    }

    /// First pattern matching `rel_path`, if any.
    pub fn matching_pattern(&self, rel_path: &str) -> Option<&IgnorePattern> {
        self.patterns.iter().find(|p| p.is_match(rel_path))
    }

    pub fn is_ignored(&self, rel_path: &str) -> bool {
        self.matching_pattern(rel_path).is_some()
    }

    /// Split `paths` into `(ignored, watched)`, keeping the input order in
    /// both halves.
    pub fn partition<'a, I>(&self, paths: I) -> (Vec<&'a str>, Vec<&'a str>)
    where
        I: IntoIterator<Item = &'a str>,
    {
        paths.into_iter().partition(|p| self.is_ignored(p))
    }
}

impl From<Vec<IgnorePattern>> for IgnoreMatcher {
    fn from(patterns: Vec<IgnorePattern>) -> Self {
        Self::new(patterns)
    }
}
