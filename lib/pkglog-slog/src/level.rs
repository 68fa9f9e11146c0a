/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use pkglog::LogLevel;

/// Unified severity for forwarded records, ordered from most to least
/// severe. The canonical textual form is the lowercase name.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Panic,
    Fatal,
    Error,
    Warn,
    Info,
    Debug,
}

#[derive(Debug, Error)]
#[error("no such log level {0:?}")]
pub struct NoSuchLevel(String);

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Panic => "panic",
            Severity::Fatal => "fatal",
            Severity::Error => "error",
            Severity::Warn => "warn",
            Severity::Info => "info",
            Severity::Debug => "debug",
        }
    }

    /// Equivalent pkglog threshold for this severity.
    ///
    /// The least severe value maps to `Trace` so that it keeps every pkglog
    /// record visible, there is no trace severity on this side.
    pub fn to_log_level(self) -> LogLevel {
        match self {
            Severity::Panic | Severity::Fatal => LogLevel::Critical,
            Severity::Error => LogLevel::Error,
            Severity::Warn => LogLevel::Warning,
            Severity::Info => LogLevel::Info,
            Severity::Debug => LogLevel::Trace,
        }
    }

    /// slog level carrying records of this severity. slog has no level
    /// above `Critical`, both `Panic` and `Fatal` land there.
    pub fn to_slog_level(self) -> slog::Level {
        match self {
            Severity::Panic | Severity::Fatal => slog::Level::Critical,
            Severity::Error => slog::Level::Error,
            Severity::Warn => slog::Level::Warning,
            Severity::Info => slog::Level::Info,
            Severity::Debug => slog::Level::Debug,
        }
    }

    /// Equivalent threshold for the std `log` facade once it is redirected
    /// through slog.
    pub fn to_log_filter(self) -> log::LevelFilter {
        match self {
            Severity::Panic | Severity::Fatal | Severity::Error => log::LevelFilter::Error,
            Severity::Warn => log::LevelFilter::Warn,
            Severity::Info => log::LevelFilter::Info,
            Severity::Debug => log::LevelFilter::Trace,
        }
    }
}

impl From<LogLevel> for Severity {
    fn from(level: LogLevel) -> Severity {
        match level {
            // CRITICAL could be either fatal or panic, the pkglog call path
            // is the one that exits or panics after the record is emitted
            LogLevel::Critical => Severity::Fatal,
            LogLevel::Error => Severity::Error,
            LogLevel::Warning => Severity::Warn,
            // no notice severity on this side, squash to info
            LogLevel::Notice => Severity::Info,
            LogLevel::Info => Severity::Info,
            LogLevel::Debug => Severity::Debug,
            // no trace severity on this side, squash to debug
            LogLevel::Trace => Severity::Debug,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = NoSuchLevel;

    /// Accept the textual forms of both level models, the pkglog one first.
    /// All matches are exact and case sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(level) = LogLevel::from_str(s) {
            return Ok(Severity::from(level));
        }
        match s {
            "panic" => Ok(Severity::Panic),
            "fatal" => Ok(Severity::Fatal),
            "error" => Ok(Severity::Error),
            "warn" => Ok(Severity::Warn),
            "info" => Ok(Severity::Info),
            "debug" => Ok(Severity::Debug),
            _ => Err(NoSuchLevel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OLD_LEVELS: [LogLevel; 7] = [
        LogLevel::Critical,
        LogLevel::Error,
        LogLevel::Warning,
        LogLevel::Notice,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ];

    const SEVERITIES: [Severity; 6] = [
        Severity::Panic,
        Severity::Fatal,
        Severity::Error,
        Severity::Warn,
        Severity::Info,
        Severity::Debug,
    ];

    #[test]
    fn from_log_level_all_levels() {
        assert!(matches!(Severity::from(LogLevel::Critical), Severity::Fatal));
        assert!(matches!(Severity::from(LogLevel::Error), Severity::Error));
        assert!(matches!(Severity::from(LogLevel::Warning), Severity::Warn));
        assert!(matches!(Severity::from(LogLevel::Notice), Severity::Info));
        assert!(matches!(Severity::from(LogLevel::Info), Severity::Info));
        assert!(matches!(Severity::from(LogLevel::Debug), Severity::Debug));
        assert!(matches!(Severity::from(LogLevel::Trace), Severity::Debug));
    }

    #[test]
    fn to_log_level_all_severities() {
        assert!(matches!(Severity::Panic.to_log_level(), LogLevel::Critical));
        assert!(matches!(Severity::Fatal.to_log_level(), LogLevel::Critical));
        assert!(matches!(Severity::Error.to_log_level(), LogLevel::Error));
        assert!(matches!(Severity::Warn.to_log_level(), LogLevel::Warning));
        assert!(matches!(Severity::Info.to_log_level(), LogLevel::Info));
        assert!(matches!(Severity::Debug.to_log_level(), LogLevel::Trace));
    }

    #[test]
    fn mapping_is_monotonic() {
        let mapped: Vec<Severity> = OLD_LEVELS.iter().map(|l| Severity::from(*l)).collect();
        assert!(mapped.windows(2).all(|w| w[0] <= w[1]));

        let mapped: Vec<LogLevel> = SEVERITIES.iter().map(|s| s.to_log_level()).collect();
        assert!(mapped.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn lossy_round_trip() {
        // the two levels with no counterpart collapse and stay collapsed
        assert!(matches!(
            Severity::from(LogLevel::Notice).to_log_level(),
            LogLevel::Info
        ));
        assert!(matches!(
            Severity::from(Severity::from(LogLevel::Notice).to_log_level()),
            Severity::Info
        ));
        assert!(matches!(
            Severity::from(LogLevel::Trace).to_log_level(),
            LogLevel::Trace
        ));
    }

    #[test]
    fn parse_both_models() {
        let table: [(&str, Severity); 26] = [
            ("panic", Severity::Panic),
            ("CRITICAL", Severity::Fatal),
            ("C", Severity::Fatal),
            ("fatal", Severity::Fatal),
            ("ERROR", Severity::Error),
            ("0", Severity::Error),
            ("E", Severity::Error),
            ("error", Severity::Error),
            ("WARNING", Severity::Warn),
            ("1", Severity::Warn),
            ("W", Severity::Warn),
            ("warn", Severity::Warn),
            ("NOTICE", Severity::Info),
            ("2", Severity::Info),
            ("N", Severity::Info),
            ("INFO", Severity::Info),
            ("3", Severity::Info),
            ("I", Severity::Info),
            ("info", Severity::Info),
            ("DEBUG", Severity::Debug),
            ("4", Severity::Debug),
            ("D", Severity::Debug),
            ("debug", Severity::Debug),
            ("TRACE", Severity::Debug),
            ("5", Severity::Debug),
            ("T", Severity::Debug),
        ];

        for (s, expected) in table {
            let parsed = Severity::from_str(s)
                .unwrap_or_else(|e| panic!("parsing {s:?} failed: {e}"));
            assert_eq!(parsed, expected, "parsing {s:?}");
        }
    }

    #[test]
    fn parse_invalid() {
        assert!(Severity::from_str("not-a-level").is_err());
        assert!(Severity::from_str("").is_err());
        assert!(Severity::from_str("Panic").is_err());
        assert!(Severity::from_str("FATAL").is_err());
        assert!(Severity::from_str("6").is_err());
    }

    #[test]
    fn canonical_name_round_trip() {
        for severity in SEVERITIES {
            assert_eq!(Severity::from_str(severity.as_str()).unwrap(), severity);
            assert_eq!(format!("{severity}"), severity.as_str());
        }
    }
}
