/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

//! Package scoped leveled logging facade. Records are handed to a pluggable
//! [`LogSink`], this crate does no formatting or output of its own.

use std::fmt::Arguments;
use std::sync::atomic::{AtomicI8, Ordering};
use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwapOption;

mod level;
pub use level::{InvalidLogLevel, LogLevel};

mod logger;
pub use logger::PackageLogger;

/// Destination for every record emitted through this facade.
pub trait LogSink {
    /// Receive one record. `skip` is the number of call frames between the
    /// sink and the originating log statement, sinks that do not resolve
    /// code positions may ignore it.
    fn emit(&self, pkg: &str, level: LogLevel, skip: usize, args: Arguments<'_>);

    fn flush(&self);
}

static GLOBAL_LEVEL: AtomicI8 = AtomicI8::new(LogLevel::Info.code());

static GLOBAL_SINK: LazyLock<ArcSwapOption<Box<dyn LogSink + Send + Sync>>> =
    LazyLock::new(|| ArcSwapOption::new(None));

/// Set the process wide minimum severity. Records less severe than `level`
/// are dropped before reaching the sink.
pub fn set_global_level(level: LogLevel) {
    GLOBAL_LEVEL.store(level.code(), Ordering::Relaxed);
}

pub fn global_level() -> LogLevel {
    LogLevel::try_from(GLOBAL_LEVEL.load(Ordering::Relaxed))
        .expect("global log level holds an undefined level code")
}

pub fn level_enabled(level: LogLevel) -> bool {
    level <= global_level()
}

/// Install the sink that will receive all subsequent records, replacing any
/// previously installed one.
pub fn set_sink<S>(sink: S)
where
    S: LogSink + Send + Sync + 'static,
{
    let sink: Box<dyn LogSink + Send + Sync> = Box::new(sink);
    GLOBAL_SINK.store(Some(Arc::new(sink)));
}

pub fn flush() {
    if let Some(sink) = GLOBAL_SINK.load_full() {
        sink.flush();
    }
}

pub(crate) fn emit_to_sink(pkg: &str, level: LogLevel, skip: usize, args: Arguments<'_>) {
    let guard = GLOBAL_SINK.load();
    if let Some(sink) = guard.as_ref() {
        sink.emit(pkg, level, skip, args);
    }
}
