// rota/src/logger.rs
//! Logging setup for the `rota` binary.
//!
//! Logs go to stderr so they never mix with normalized output on stdout.
//! `RUST_LOG` is honoured unless a level is forced from the command line.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Initializes `env_logger`. A `Some` level overrides `RUST_LOG`; `None` falls
/// back to `RUST_LOG`, then to `warn`. Calling it twice is harmless.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.target(Target::Stderr).format_timestamp(None);
    let _ = builder.try_init();
}
