use watchignore::ignore::{tmp_pattern, IgnoreMatcher, IgnorePattern};
use watchignore::ignore::path_utils::{normalize, relative_str, sanitized_path};
use watchignore_test_utils::patterns;

use std::path::{Path, PathBuf};

#[test]
fn empty_matcher_ignores_nothing() {
    let matcher = IgnoreMatcher::default();

    assert!(!matcher.is_ignored("anything.TMP"));
    assert!(matcher.patterns().is_empty());
}

#[test]
fn reports_first_matching_pattern() {
    let mut list = patterns(&["^_site/", "^_site/assets/"]);
    list.push(tmp_pattern().clone());
    let matcher = IgnoreMatcher::from(list);

    assert_eq!(
        matcher.matching_pattern("_site/assets/app.css").map(IgnorePattern::as_str),
        Some("^_site/")
    );
    assert_eq!(
        matcher.matching_pattern("notes.tmp"),
        Some(tmp_pattern())
    );
    assert_eq!(matcher.matching_pattern("index.md"), None);
}

#[test]
fn partition_preserves_order() {
    let matcher = IgnoreMatcher::new(vec![
        IgnorePattern::prefix("_site/").unwrap(),
        tmp_pattern().clone(),
    ]);
    let paths = ["a.md", "_site/x.html", "b.TMP", "c.md", "_site/y.html"];

    let (ignored, watched) = matcher.partition(paths.iter().copied());

    assert_eq!(ignored, vec!["_site/x.html", "b.TMP", "_site/y.html"]);
    assert_eq!(watched, vec!["a.md", "c.md"]);
}

#[test]
fn relative_str_uses_forward_slashes() {
    let rel = relative_str(Path::new("/site"), Path::new("/site/_posts/a.md"));
    assert_eq!(rel.as_deref(), Some("_posts/a.md"));

    assert_eq!(relative_str(Path::new("/site"), Path::new("/other/a.md")), None);
}

#[test]
fn sanitized_path_never_escapes_base() {
    let base = Path::new("/site");

    assert_eq!(sanitized_path(base, Path::new("../../etc/passwd")), PathBuf::from("/site/etc/passwd"));
    assert_eq!(sanitized_path(base, Path::new("a/./b/../c")), PathBuf::from("/site/a/c"));
    assert_eq!(sanitized_path(base, Path::new("/site/x")), PathBuf::from("/site/x"));
    assert_eq!(sanitized_path(base, Path::new("/x")), PathBuf::from("/site/x"));
}

#[test]
fn normalize_is_lexical() {
    assert_eq!(normalize(Path::new("/a/b/../c/.")), PathBuf::from("/a/c"));
    assert_eq!(normalize(Path::new("/..")), PathBuf::from("/"));
    assert_eq!(normalize(Path::new("../x")), PathBuf::from("../x"));
}
