/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Severity of a package logger record, ordered from most to least severe.
///
/// The numeric discriminant is the wire code accepted by [`LogLevel::from_str`]
/// for all levels except `Critical`, which has no numeric form.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(i8)]
pub enum LogLevel {
    // unrecoverable errors, the process is expected to end after emitting one
    Critical = -1,
    // errors that can be handled but indicate troubling behavior
    Error = 0,
    // conditions that will likely turn into errors if left alone
    Warning = 1,
    // normal but significant events
    Notice = 2,
    // routine operational messages
    Info = 3,
    // verbose diagnostics
    Debug = 4,
    // per-record diagnostics, extremely noisy
    Trace = 5,
}

#[derive(Debug, Error)]
#[error("undefined log level {0:?}")]
pub struct InvalidLogLevel(String);

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Critical => "CRITICAL",
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARNING",
            LogLevel::Notice => "NOTICE",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }

    pub fn char_code(&self) -> char {
        match self {
            LogLevel::Critical => 'C',
            LogLevel::Error => 'E',
            LogLevel::Warning => 'W',
            LogLevel::Notice => 'N',
            LogLevel::Info => 'I',
            LogLevel::Debug => 'D',
            LogLevel::Trace => 'T',
        }
    }

    pub const fn code(self) -> i8 {
        self as i8
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<i8> for LogLevel {
    type Error = InvalidLogLevel;

    fn try_from(value: i8) -> Result<Self, InvalidLogLevel> {
        match value {
            -1 => Ok(LogLevel::Critical),
            0 => Ok(LogLevel::Error),
            1 => Ok(LogLevel::Warning),
            2 => Ok(LogLevel::Notice),
            3 => Ok(LogLevel::Info),
            4 => Ok(LogLevel::Debug),
            5 => Ok(LogLevel::Trace),
            _ => Err(InvalidLogLevel(value.to_string())),
        }
    }
}

impl FromStr for LogLevel {
    type Err = InvalidLogLevel;

    /// Exact match on the full name, the single letter code, or the numeric
    /// code. `Critical` has no numeric code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CRITICAL" | "C" => Ok(LogLevel::Critical),
            "ERROR" | "E" | "0" => Ok(LogLevel::Error),
            "WARNING" | "W" | "1" => Ok(LogLevel::Warning),
            "NOTICE" | "N" | "2" => Ok(LogLevel::Notice),
            "INFO" | "I" | "3" => Ok(LogLevel::Info),
            "DEBUG" | "D" | "4" => Ok(LogLevel::Debug),
            "TRACE" | "T" | "5" => Ok(LogLevel::Trace),
            _ => Err(InvalidLogLevel(s.to_string())),
        }
    }
}
