//! Diagnostic logging to stderr.
//!
//! `BAPPLE_LOG` takes an `EnvFilter` directive (e.g. `bapple=debug`) and
//! overrides the `-v` count. User-facing progress lines are plain
//! `println!`/`eprintln!` and do not go through here.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive.
pub const LOG_ENV: &str = "BAPPLE_LOG";

/// Level used when `BAPPLE_LOG` is unset.
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the global subscriber; a second call is a no-op.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
