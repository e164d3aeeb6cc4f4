// src/ignore/extend.rs

//! The ignore-path extender.
//!
//! A watcher asks an [`IgnorePathSource`] for the patterns it should skip.
//! Everything here wraps such a source and appends [`tmp_pattern`] to
//! whatever it returns, leaving the base result otherwise untouched.

use tracing::trace;

use crate::errors::Result;
use crate::ignore::pattern::{tmp_pattern, IgnorePattern};

/// Something that computes the ignore list for a given options value.
///
/// `O` is opaque to this module; it is only ever borrowed and handed on.
pub trait IgnorePathSource<O: ?Sized> {
    fn listen_ignore_paths(&self, options: &O) -> Result<Vec<IgnorePattern>>;
}

impl<O, F> IgnorePathSource<O> for F
where
    O: ?Sized,
    F: Fn(&O) -> Result<Vec<IgnorePattern>>,
{
    fn listen_ignore_paths(&self, options: &O) -> Result<Vec<IgnorePattern>> {
        self(options)
    }
}

/// Call `base` with `options` and append the `*.TMP` rule to its result.
///
/// Base entries keep their order and come first. A base error is returned
/// as-is and nothing is appended.
pub fn extend_ignore_paths<O, S>(base: &S, options: &O) -> Result<Vec<IgnorePattern>>
where
    O: ?Sized,
    S: IgnorePathSource<O> + ?Sized,
{
    let mut patterns = base.listen_ignore_paths(options)?;
    trace!(base_len = patterns.len(), pattern = %tmp_pattern(), "appending tmp ignore pattern");
    patterns.push(tmp_pattern().clone());
    Ok(patterns)
}

/// An [`IgnorePathSource`] that delegates to `S` and appends the `*.TMP` rule.
///
/// Each layer of wrapping appends its own copy; `TmpIgnore<TmpIgnore<S>>`
/// yields the rule twice.
#[derive(Debug, Clone, Default)]
pub struct TmpIgnore<S> {
    base: S,
}

impl<S> TmpIgnore<S> {
    pub fn new(base: S) -> Self {
        Self { base }
    }

    /// The wrapped source.
    pub fn base(&self) -> &S {
        &self.base
    }

    pub fn into_inner(self) -> S {
        self.base
    }
}

impl<O, S> IgnorePathSource<O> for TmpIgnore<S>
where
    O: ?Sized,
    S: IgnorePathSource<O>,
{
    fn listen_ignore_paths(&self, options: &O) -> Result<Vec<IgnorePattern>> {
        extend_ignore_paths(&self.base, options)
    }
}

/// Closure form of [`TmpIgnore`].
pub fn with_tmp_ignore<O, S>(base: S) -> impl Fn(&O) -> Result<Vec<IgnorePattern>>
where
    O: ?Sized,
    S: IgnorePathSource<O>,
{
    move |options: &O| extend_ignore_paths(&base, options)
}
