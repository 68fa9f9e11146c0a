/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

//! Forwarding of pkglog package logger records through a slog [`Logger`],
//! so code using either facility ends up in one log stream.

use slog::{Drain, Logger, slog_o};
use slog_scope::GlobalLoggerGuard;

mod level;
pub use level::{NoSuchLevel, Severity};

mod filter;
pub use filter::RuntimeLevelFilter;

mod forward;
pub use forward::SlogForwarder;

mod opts;
pub use opts::{LogLevelArgsExt, SeverityValueParser, get_log_level};

/// Set the minimum severity of both facilities in one call.
///
/// The pkglog threshold is derived from `severity` through the level
/// translation, the slog side threshold is applied by
/// [`RuntimeLevelFilter`], and the redirected std `log` facade follows via
/// [`log::set_max_level`]. There is no per facility setter, the thresholds
/// always move together.
pub fn set_level(severity: Severity) {
    filter::set_threshold(severity);
    pkglog::set_global_level(severity.to_log_level());
    log::set_max_level(severity.to_log_filter());
}

/// Route pkglog and the std `log` facade through `logger`.
///
/// Installs a [`SlogForwarder`] as the pkglog sink, sets the scope global
/// logger to `logger` behind a [`RuntimeLevelFilter`], and redirects the
/// std `log` facade through slog-stdlog so its records take one trip into
/// the same stream instead of keeping their own output. The returned guard
/// keeps the global logger alive.
pub fn use_logger(logger: Logger) -> Result<GlobalLoggerGuard, log::SetLoggerError> {
    pkglog::set_sink(SlogForwarder::new(logger.clone()));

    let drain = RuntimeLevelFilter::new(logger).fuse();
    let scope_guard = slog_scope::set_global_logger(Logger::root(drain, slog_o!()));

    slog_stdlog::init()?;
    Ok(scope_guard)
}
