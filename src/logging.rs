use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT_ONCE: Once = Once::new();

/// Install the stderr subscriber. Later calls are no-ops.
///
/// `RUST_LOG` takes precedence; otherwise `verbose` selects between
/// `debug` and `warn` for this crate.
pub fn init(verbose: bool) {
    INIT_ONCE.call_once(|| {
        let default_filter = if verbose {
            "linediff=debug,ldiff=debug"
        } else {
            "linediff=warn,ldiff=warn"
        };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

        // Another subscriber may already be installed (tests, embedding apps).
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
