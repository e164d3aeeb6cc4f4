use watchignore::ignore::{tmp_pattern, IgnorePattern, TMP_PATTERN_SOURCE};

#[test]
fn matches_tmp_suffix_in_any_case() {
    let tmp = tmp_pattern();
    for path in ["build.TMP", "a/b/c.tmp", "FILE.Tmp", "_posts/.draft.tMp", ".TMP"] {
        assert!(tmp.is_match(path), "expected {path:?} to match");
    }
}

#[test]
fn requires_tmp_at_end_of_path() {
    let tmp = tmp_pattern();
    for path in ["name.TMPX", "build.TMP.bak", "tmp/index.html", "fileTMP", "a.tmp/b.md"] {
        assert!(!tmp.is_match(path), "expected {path:?} not to match");
    }
}

#[test]
fn source_text_is_stable() {
    assert_eq!(tmp_pattern().as_str(), TMP_PATTERN_SOURCE);
    assert_eq!(tmp_pattern().to_string(), TMP_PATTERN_SOURCE);
    assert!(std::ptr::eq(tmp_pattern(), tmp_pattern()));
}

#[test]
fn prefix_pattern_escapes_metacharacters() {
    let p = IgnorePattern::prefix(".jekyll-metadata").unwrap();

    assert!(p.is_match(".jekyll-metadata"));
    assert!(!p.is_match("xjekyll-metadata"));
    assert!(!p.is_match("sub/.jekyll-metadata"));
}

#[test]
fn invalid_regex_is_reported() {
    let err = IgnorePattern::new("(unclosed").unwrap_err();
    assert!(err.to_string().contains("Invalid ignore pattern"));
}
