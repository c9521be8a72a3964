//! Logger for the `log` crate.
//!
//! `PromptLogger` writes one line per record to stderr. Stdout carries the
//! rendered prompt and must never receive diagnostics.

use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crossterm::tty::IsTty;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use time::{OffsetDateTime, format_description::OwnedFormatItem};

use crate::color::ColorDepth;
use crate::style::{Effect, Style};

const DEFAULT_TIME_FORMAT: &str = "[hour]:[minute]:[second]";

/// Stderr logger with optional timestamps and colored level names.
///
/// # Thread Safety
///
/// The writer sits behind a mutex that recovers from poison, so a panic on one
/// thread never silences logging on the others.
pub struct PromptLogger {
    level: LevelFilter,
    show_time: bool,
    show_level: bool,
    color: bool,
    time_format: OwnedFormatItem,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl PromptLogger {
    /// Create a logger writing to stderr.
    ///
    /// Color is on when stderr is a terminal and `NO_COLOR` is unset.
    #[must_use]
    pub fn new() -> Self {
        let color = io::stderr().is_tty() && std::env::var_os("NO_COLOR").is_none();
        let time_format = time::format_description::parse_owned::<2>(DEFAULT_TIME_FORMAT)
            .unwrap_or_else(|_| OwnedFormatItem::Literal(Vec::<u8>::new().into_boxed_slice()));
        Self {
            level: LevelFilter::Warn,
            show_time: false,
            show_level: true,
            color,
            time_format,
            writer: Mutex::new(Box::new(io::stderr())),
        }
    }

    /// Set the minimum log level.
    #[must_use]
    pub fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Enable or disable timestamps.
    #[must_use]
    pub fn show_time(mut self, show: bool) -> Self {
        self.show_time = show;
        self
    }

    /// Enable or disable log levels.
    #[must_use]
    pub fn show_level(mut self, show: bool) -> Self {
        self.show_level = show;
        self
    }

    /// Force colored level names on or off.
    #[must_use]
    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Override time format. Invalid descriptions keep the current format.
    #[must_use]
    pub fn time_format(mut self, format: &str) -> Self {
        if let Ok(parsed) = time::format_description::parse_owned::<2>(format) {
            self.time_format = parsed;
        }
        self
    }

    /// Send output somewhere other than stderr.
    #[must_use]
    pub fn writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.writer = Mutex::new(Box::new(writer));
        self
    }

    /// Install as the global logger.
    ///
    /// # Errors
    ///
    /// Fails if a global logger is already set.
    pub fn init(self) -> Result<(), SetLoggerError> {
        log::set_max_level(self.level);
        log::set_boxed_logger(Box::new(self))
    }

    fn format_time(&self) -> String {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        now.format(&self.time_format)
            .unwrap_or_else(|_| now.to_string())
    }

    fn level_style(level: Level) -> Style {
        let style = Style::new(ColorDepth::Standard);
        match level {
            Level::Trace => style.effect(Effect::Dim),
            Level::Debug => style.fg("blue").effect(Effect::Dim),
            Level::Info => style.fg("green"),
            Level::Warn => style.fg("yellow"),
            Level::Error => style.fg("red").effect(Effect::Bold),
        }
    }

    fn format_record(&self, record: &Record<'_>) -> String {
        let mut line = String::new();

        if self.show_time {
            line.push_str(&self.format_time());
            line.push(' ');
        }

        if self.show_level {
            let padded = format!("{:<5}", record.level());
            if self.color {
                let styled = Self::level_style(record.level())
                    .render(&padded)
                    .unwrap_or(padded);
                line.push_str(&styled);
            } else {
                line.push_str(&padded);
            }
            line.push(' ');
        }

        line.push_str(&record.args().to_string());
        line
    }

    fn lock_writer(&self) -> MutexGuard<'_, Box<dyn Write + Send>> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for PromptLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Log for PromptLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = self.format_record(record);
        // Nowhere left to report a failed diagnostic write.
        let _ = writeln!(self.lock_writer(), "{line}");
    }

    fn flush(&self) {
        let _ = self.lock_writer().flush();
    }
}
