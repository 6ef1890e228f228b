// Compact Bits - Free and Open Source Software Statement
//
// This project, compact-bits, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/logging.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file sets up log4rs for the binary, located in the utils subdirectory.
// A YAML config file takes precedence; otherwise a stderr console appender is
// built at the requested level so stdout stays clean for results.
//
// Tree Location:
// - src/utils/logging.rs (logging setup)
// - Depends on: log, log4rs, anyhow

use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::Path;

const STDERR_APPENDER: &str = "stderr";
const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l}):5} {t} - {m}{n}";

/// Build the fallback console configuration
pub fn console_config(level: LevelFilter) -> Result<Config> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();

    Config::builder()
        .appender(Appender::builder().build(STDERR_APPENDER, Box::new(stderr)))
        .build(Root::builder().appender(STDERR_APPENDER).build(level))
        .context("Invalid console logging configuration")
}

pub fn init_logging(config_file: Option<&Path>, level: LevelFilter) -> Result<()> {
    match config_file {
        Some(path) => log4rs::init_file(path, Default::default())
            .with_context(|| format!("Could not load log4rs config {:?}", path)),
        None => {
            log4rs::init_config(console_config(level)?).context("Could not set up logging")?;
            Ok(())
        }
    }
}


// Changelog:
// - v1.0.0 (2026-10-14): Initial logging setup.
//   - log4rs YAML config file or programmatic stderr console appender.
