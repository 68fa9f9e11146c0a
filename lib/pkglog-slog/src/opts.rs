/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::ffi::OsStr;
use std::str::FromStr;

use clap::builder::{TypedValueParser, ValueParserFactory};
use clap::error::ErrorKind;
use clap::{Arg, ArgMatches, Command};

use crate::Severity;

const ARGS_LOG_LEVEL: &str = "log-level";

/// clap parser for [`Severity`], accepting the textual forms of both level
/// models. Parse failures surface as usage errors.
#[derive(Clone, Copy)]
pub struct SeverityValueParser;

impl TypedValueParser for SeverityValueParser {
    type Value = Severity;

    fn parse_ref(
        &self,
        cmd: &Command,
        _arg: Option<&Arg>,
        value: &OsStr,
    ) -> Result<Severity, clap::Error> {
        let Some(s) = value.to_str() else {
            return Err(clap::Error::new(ErrorKind::InvalidUtf8).with_cmd(cmd));
        };
        Severity::from_str(s).map_err(|e| cmd.clone().error(ErrorKind::InvalidValue, e))
    }
}

impl ValueParserFactory for Severity {
    type Parser = SeverityValueParser;

    fn value_parser() -> Self::Parser {
        SeverityValueParser
    }
}

pub trait LogLevelArgsExt {
    fn append_log_level_arg(self) -> Self;
}

impl LogLevelArgsExt for Command {
    fn append_log_level_arg(self) -> Self {
        self.arg(
            Arg::new(ARGS_LOG_LEVEL)
                .help("Minimum log severity, by name or code of either level model")
                .num_args(1)
                .value_name("LEVEL")
                .value_parser(SeverityValueParser)
                .short('l')
                .long(ARGS_LOG_LEVEL),
        )
    }
}

pub fn get_log_level(args: &ArgMatches) -> Option<Severity> {
    args.get_one::<Severity>(ARGS_LOG_LEVEL).copied()
}
