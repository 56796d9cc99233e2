// textscan/src/logger.rs
//! Logger initialization for the textscan CLI.
//!
//! Respects `RUST_LOG` unless an explicit level override is supplied by the
//! CLI flags (`--quiet`, `--debug`).
//! License: MIT OR Apache-2.0

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the global logger. An explicit `level` wins over `RUST_LOG`;
/// with `None`, `RUST_LOG` is honored and defaults to `warn`.
///
/// Safe to call more than once; only the first initialization takes effect.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    let _ = builder.format_timestamp(None).try_init();
}
