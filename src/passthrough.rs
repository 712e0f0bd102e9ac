use std::any::Any;
use std::fmt::{self, Arguments};
use std::io::Write;

use log::{Metadata, Record};
use termcolor::ColorChoice;

use crate::exit::{ExitHandler, FATAL_EXIT_CODE};
use crate::level::LogLevel;
use crate::logger::Logger;
use crate::sink::Sink;

/// Hands every message to an external `log::Log` writer.
///
/// The writer is treated as unleveled: its own `enabled` check is never
/// consulted and this logger does no severity filtering of its own. The only
/// gate is the `enabled` flag. Records carry `"[<TAG>] <message>"` as their
/// arguments.
///
/// A fatal message on an enabled logger is always written, the writer is
/// flushed, and then the exit handler is called.
pub struct PassthroughLogger {
    writer: Box<dyn log::Log>,
    enabled: bool,
    exit: ExitHandler,
}

impl PassthroughLogger {
    pub fn new(writer: Box<dyn log::Log>, enabled: bool) -> Self {
        Self {
            writer,
            enabled,
            exit: ExitHandler::default(),
        }
    }

    /// Passthrough to a plain writer on standard error, for hosts that want
    /// unleveled output without bringing their own writer.
    pub fn stderr(enabled: bool) -> Self {
        let writer = StreamWriter::new("", Sink::stderr(ColorChoice::Never));
        Self::new(Box::new(writer), enabled)
    }

    pub fn exit_handler(mut self, exit: ExitHandler) -> Self {
        self.exit = exit;
        self
    }

    fn write(&self, level: log::Level, tag: LogLevel, args: Arguments<'_>) {
        self.writer.log(
            &Record::builder()
                .level(level)
                .target(module_path!())
                .args(format_args!("[{}] {}", tag, args))
                .build(),
        );
    }
}

impl Logger for PassthroughLogger {
    fn log(&self, level: LogLevel, args: Arguments<'_>) {
        if !self.enabled {
            return;
        }
        let record_level = match level.to_log_level() {
            Some(record_level) => record_level,
            None => return,
        };
        self.write(record_level, level, args);
        if level == LogLevel::Fatal {
            self.writer.flush();
            self.exit.exit(FATAL_EXIT_CODE);
        }
    }

    fn log_mode(&self) -> LogLevel {
        if !self.enabled {
            return LogLevel::Off;
        }
        LogLevel::Debug
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Debug for PassthroughLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PassthroughLogger")
            .field("enabled", &self.enabled)
            .field("exit", &self.exit)
            .finish()
    }
}

/// `log::Log` writer that prints every record as `<prefix><args>` on its own line.
///
/// It accepts records of any level.
pub struct StreamWriter {
    prefix: String,
    sink: Sink,
}

impl StreamWriter {
    pub fn new(prefix: impl Into<String>, sink: Sink) -> Self {
        Self {
            prefix: prefix.into(),
            sink,
        }
    }
}

impl log::Log for StreamWriter {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let result = self
            .sink
            .write_line(|out| write!(out, "{}{}", self.prefix, record.args()));
        if let Err(e) = result {
            warn!("Unable to write log line to {:?}: {}", self.sink, e);
        }
    }

    fn flush(&self) {
        if let Err(e) = self.sink.flush() {
            warn!("Unable to flush {:?}: {}", self.sink, e);
        }
    }
}
