/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt::Arguments;
use std::process;

use super::LogLevel;

/// Leveled logging handle for one source package.
///
/// All methods take pre-built [`Arguments`], use [`format_args!`] at the
/// call site.
pub struct PackageLogger {
    package: &'static str,
}

impl PackageLogger {
    pub fn new(package: &'static str) -> Self {
        PackageLogger { package }
    }

    pub fn package(&self) -> &'static str {
        self.package
    }

    fn log(&self, level: LogLevel, args: Arguments<'_>) {
        if !crate::level_enabled(level) {
            return;
        }
        crate::emit_to_sink(self.package, level, 1, args);
    }

    pub fn error(&self, args: Arguments<'_>) {
        self.log(LogLevel::Error, args);
    }

    pub fn warning(&self, args: Arguments<'_>) {
        self.log(LogLevel::Warning, args);
    }

    pub fn notice(&self, args: Arguments<'_>) {
        self.log(LogLevel::Notice, args);
    }

    pub fn info(&self, args: Arguments<'_>) {
        self.log(LogLevel::Info, args);
    }

    pub fn debug(&self, args: Arguments<'_>) {
        self.log(LogLevel::Debug, args);
    }

    pub fn trace(&self, args: Arguments<'_>) {
        self.log(LogLevel::Trace, args);
    }

    /// Emit a CRITICAL record, flush the sink, then exit the process.
    /// Termination always happens after the sink has returned.
    pub fn fatal(&self, args: Arguments<'_>) -> ! {
        self.log(LogLevel::Critical, args);
        crate::flush();
        process::exit(1)
    }

    /// Emit a CRITICAL record, flush the sink, then panic with the same
    /// message.
    pub fn panic(&self, args: Arguments<'_>) -> ! {
        self.log(LogLevel::Critical, args);
        crate::flush();
        panic!("{args}")
    }
}
