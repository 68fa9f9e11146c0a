/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt::Arguments;

use slog::{Logger, slog_debug, slog_error, slog_info, slog_o, slog_warn};

use pkglog::{LogLevel, LogSink};

use crate::Severity;

/// pkglog sink that re-emits every record through a slog [`Logger`].
///
/// The destination logger is fixed at construction. Each record is tagged
/// with a `package` field carrying the originating package name.
pub struct SlogForwarder {
    logger: Logger,
}

impl SlogForwarder {
    pub fn new(logger: Logger) -> Self {
        SlogForwarder { logger }
    }
}

impl LogSink for SlogForwarder {
    fn emit(&self, pkg: &str, level: LogLevel, _skip: usize, args: Arguments<'_>) {
        let logger = self.logger.new(slog_o!("package" => pkg.to_string()));
        match Severity::from(level) {
            // pkglog exits or panics itself after a CRITICAL record has been
            // emitted, this side only records the message
            Severity::Panic | Severity::Fatal | Severity::Error => {
                slog_error!(logger, "{}", args)
            }
            Severity::Warn => slog_warn!(logger, "{}", args),
            Severity::Info => slog_info!(logger, "{}", args),
            Severity::Debug => slog_debug!(logger, "{}", args),
        }
    }

    fn flush(&self) {}
}
