// src/ignore/pattern.rs

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::errors::Result;

/// Source text of the rule that keeps `*.TMP` files from triggering rebuilds.
///
/// Case-insensitive, and the path has to end right after `TMP`:
/// `build.TMP` and `a/b/c.tmp` match, `name.TMPX` does not.
pub const TMP_PATTERN_SOURCE: &str = r"(?i).*\.TMP$";

static TMP_PATTERN: LazyLock<IgnorePattern> = LazyLock::new(|| IgnorePattern {
    regex: Regex::new(TMP_PATTERN_SOURCE).expect("TMP_PATTERN_SOURCE is a valid regex"),
});

/// The fixed `*.TMP` ignore rule, compiled once per process.
pub fn tmp_pattern() -> &'static IgnorePattern {
    &TMP_PATTERN
}

/// A single ignore rule: a regular expression tested against paths relative
/// to the site source (forward slashes, e.g. `"_posts/draft.md"`).
///
/// Equality compares the source text, not the compiled automaton.
#[derive(Clone)]
pub struct IgnorePattern {
    regex: Regex,
}

impl IgnorePattern {
    /// Compile `source` as a regular expression.
    pub fn new(source: &str) -> Result<Self> {
        Ok(Self {
            regex: Regex::new(source)?,
        })
    }

    /// Pattern matching every path that starts with the literal `path`.
    ///
    /// Directory prefixes should carry their trailing `/` so that `_site/`
    /// does not also swallow `_site_backup.md`.
    pub fn prefix(path: &str) -> Result<Self> {
        Self::new(&format!("^{}", regex::escape(path)))
    }

    pub fn is_match(&self, rel_path: &str) -> bool {
        self.regex.is_match(rel_path)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl PartialEq for IgnorePattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for IgnorePattern {}

impl fmt::Debug for IgnorePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IgnorePattern").field(&self.as_str()).finish()
    }
}

impl fmt::Display for IgnorePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
