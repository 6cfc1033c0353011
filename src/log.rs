// src/log.rs
//
// File logging for both front ends. Events go to `.store/debug.log`;
// the CLI can also echo them to stderr. Filter comes from PROFILE_SCRAPE_LOG.

use std::fs;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::consts::{LOG_ENV, LOG_FILE, STORE_DIR};

#[doc(hidden)]
pub use tracing as __tracing;

/// Install the global subscriber. Safe to call more than once; later calls are no-ops.
pub fn init(echo_stderr: bool) {
    let file_layer = match open_log_file() {
        Ok(appender) => Some(
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(appender),
        ),
        Err(e) => {
            if echo_stderr {
                eprintln!("Warning: file logging disabled: {e}");
            }
            None
        }
    };

    let console_layer = echo_stderr.then(|| {
        fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
    });

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .try_init();
}

fn open_log_file() -> Result<RollingFileAppender, Box<dyn std::error::Error>> {
    fs::create_dir_all(STORE_DIR)?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE)
        .build(STORE_DIR)?;
    Ok(appender)
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::__tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::__tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        $crate::log::__tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::__tracing::error!($($arg)*)
    };
}
