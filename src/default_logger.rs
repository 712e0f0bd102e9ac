use std::any::Any;
use std::fmt::Arguments;
use std::io::{self, Write};
use termcolor::{ColorChoice, WriteColor};

use crate::exit::{ExitHandler, FATAL_EXIT_CODE};
use crate::level::LogLevel;
use crate::logger::Logger;
use crate::sink::Sink;

const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Leveled logger writing one line per message to a [`Sink`].
///
/// Messages below the configured level are dropped. A line looks like:
///
/// ```text
/// <prefix>2024/05/01 12:00:00 [INFO] user 42 joined
/// ```
///
/// A fatal message that passes the filter is written and then the exit
/// handler is called, which ends the process by default.
#[derive(Debug)]
pub struct DefaultLogger {
    enabled: bool,
    level: LogLevel,
    prefix: String,
    sink: Sink,
    timestamps: bool,
    exit: ExitHandler,
}

impl DefaultLogger {
    /// Logger writing to standard output.
    pub fn new(level: LogLevel, prefix: impl Into<String>) -> Self {
        Self::with_sink(level, prefix, Sink::stdout(ColorChoice::Never))
    }

    pub fn with_sink(level: LogLevel, prefix: impl Into<String>, sink: Sink) -> Self {
        Self {
            enabled: true,
            level,
            prefix: prefix.into(),
            sink,
            timestamps: true,
            exit: ExitHandler::default(),
        }
    }

    pub fn timestamps(mut self, timestamps: bool) -> Self {
        self.timestamps = timestamps;
        self
    }

    pub fn exit_handler(mut self, exit: ExitHandler) -> Self {
        self.exit = exit;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn accepts(&self, level: LogLevel) -> bool {
        self.enabled && level >= self.level && level != LogLevel::Off
    }

    fn render(
        &self,
        out: &mut dyn WriteColor,
        level: LogLevel,
        args: Arguments<'_>,
    ) -> io::Result<()> {
        write!(out, "{}", self.prefix)?;
        if self.timestamps {
            write!(out, "{} ", chrono::Local::now().format(TIMESTAMP_FORMAT))?;
        }
        out.set_color(&level.color())?;
        write!(out, "[{}]", level)?;
        out.reset()?;
        write!(out, " {}", args)
    }
}

impl Logger for DefaultLogger {
    fn log(&self, level: LogLevel, args: Arguments<'_>) {
        if !self.accepts(level) {
            return;
        }
        if let Err(e) = self.sink.write_line(|out| self.render(out, level, args)) {
            warn!("Unable to write log line to {:?}: {}", self.sink, e);
        }
        if level == LogLevel::Fatal {
            self.exit.exit(FATAL_EXIT_CODE);
        }
    }

    fn log_mode(&self) -> LogLevel {
        if !self.enabled {
            return LogLevel::Off;
        }
        self.level
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
