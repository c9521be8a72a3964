//! CLI argument parsing via clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Render a bash prompt from a JSON theme and print it to stdout.
#[derive(Debug, Parser)]
#[command(name = "prompt-theme", version)]
pub struct Args {
    /// Path to the JSON theme file.
    #[arg(short = 't', long = "theme", value_name = "FILE")]
    pub theme: PathBuf,

    /// Diagnostics written to stderr at or above this level.
    #[arg(long = "log-level", value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Disable colored log output.
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Prefix log lines with the local time.
    #[arg(long = "log-time")]
    pub log_time: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => Self::Off,
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}
