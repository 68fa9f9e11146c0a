/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::sync::atomic::{AtomicU8, Ordering};

use slog::{Drain, OwnedKVList, Record};

use crate::Severity;

static FILTER_SEVERITY: AtomicU8 = AtomicU8::new(Severity::Info as u8);

pub(crate) fn set_threshold(severity: Severity) {
    FILTER_SEVERITY.store(severity as u8, Ordering::Relaxed);
}

fn threshold() -> Severity {
    match FILTER_SEVERITY.load(Ordering::Relaxed) {
        0 => Severity::Panic,
        1 => Severity::Fatal,
        2 => Severity::Error,
        3 => Severity::Warn,
        4 => Severity::Info,
        5 => Severity::Debug,
        v => unreachable!("undefined severity index {v}"),
    }
}

/// Drain that applies the process wide threshold set through
/// [`set_level`](crate::set_level), so the threshold of the destination
/// logger can follow later `set_level` calls.
pub struct RuntimeLevelFilter<D> {
    drain: D,
}

impl<D> RuntimeLevelFilter<D> {
    pub fn new(drain: D) -> Self {
        RuntimeLevelFilter { drain }
    }
}

impl<D: Drain> Drain for RuntimeLevelFilter<D> {
    type Ok = Option<D::Ok>;
    type Err = D::Err;

    fn log(&self, record: &Record, values: &OwnedKVList) -> Result<Self::Ok, Self::Err> {
        if record.level().is_at_least(threshold().to_slog_level()) {
            self.drain.log(record, values).map(Some)
        } else {
            Ok(None)
        }
    }
}
