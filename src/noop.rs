use std::any::Any;
use std::fmt::Arguments;

use crate::level::LogLevel;
use crate::logger::Logger;

/// A logger that discards every message, fatal ones included.
///
/// Selected whenever logging is disabled in the configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl NoOpLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for NoOpLogger {
    #[inline]
    fn log(&self, _level: LogLevel, _args: Arguments<'_>) {}

    fn log_mode(&self) -> LogLevel {
        LogLevel::Off
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
