//! Diagnostics go to stderr so stdout only carries the result line

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset
const QUIET_DIRECTIVES: &str = "fib_cli=warn,fib_core=warn";

/// Build the filter directive string
///
/// `RUST_LOG` replaces the quiet default entirely. `verbose` appends `debug`
/// for this workspace's crates; later directives for a target win.
pub fn filter_directives(rust_log: Option<&str>, verbose: bool) -> String {
    let base = rust_log.unwrap_or(QUIET_DIRECTIVES);
    if verbose {
        format!("{},fib_cli=debug,fib_core=debug", base)
    } else {
        base.to_string()
    }
}

/// Install the global subscriber
pub fn init(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = EnvFilter::new(filter_directives(rust_log.as_deref(), verbose));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
