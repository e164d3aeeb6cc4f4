pub mod builders;

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

use watchignore::errors::Result;
use watchignore::ignore::IgnorePattern;

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
///
/// Enable levels with e.g.:
/// `RUST_LOG=debug cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}

/// Compile each source string into an `IgnorePattern`, panicking on bad input.
pub fn patterns(sources: &[&str]) -> Vec<IgnorePattern> {
    sources
        .iter()
        .map(|s| IgnorePattern::new(s).expect("test pattern should compile"))
        .collect()
}

/// A base ignore-path source that always returns `sources`, whatever the
/// options.
pub fn fixed_base<O: ?Sized>(
    sources: &[&str],
) -> impl Fn(&O) -> Result<Vec<IgnorePattern>> + use<O> {
    let list = patterns(sources);
    move |_: &O| Ok(list.clone())
}
