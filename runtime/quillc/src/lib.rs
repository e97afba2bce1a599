//! Quill runtime CLI.
//!
//! Runs Quill scripts and imports notebook modules from the command line.
//! All execution flows through one [`ImportContext`](quill_import::ImportContext)
//! per invocation, so `import` statements inside scripts and notebooks
//! resolve against the same search path and module registry.

pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for CLI diagnostics.
///
/// Respects the `RUST_LOG` environment variable; stays silent when it is
/// unset. Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
