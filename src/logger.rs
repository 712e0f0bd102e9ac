use std::any::Any;
use std::fmt::Arguments;

use crate::level::LogLevel;

/// Leveled logging capability handed to every unit of work in the host.
///
/// Implementations are shared as `Arc<dyn Logger>` across threads, so every
/// method takes `&self` and must be safe to call concurrently. No method
/// returns an error: a message that is filtered out and a message that could
/// not be written look the same to the caller.
///
/// Messages are format arguments. The `log_*!` macros build them:
///
/// ```
/// use botlog::{log_info, new_logger, LogConfig, Logger};
///
/// let logger = new_logger(LogConfig::default());
/// log_info!(logger, "user {} joined", 42);
/// ```
pub trait Logger: Send + Sync + Any {
    /// Emit a message at the given severity.
    ///
    /// The convenience methods delegate here. A `Fatal` message ends the
    /// process after it is written unless the implementation says otherwise.
    fn log(&self, level: LogLevel, args: Arguments<'_>);

    /// The minimum severity this logger writes, or `Off` when it writes
    /// nothing. Callers can check it before building expensive messages.
    fn log_mode(&self) -> LogLevel;

    fn as_any(&self) -> &dyn Any;

    fn debug(&self, args: Arguments<'_>) {
        self.log(LogLevel::Debug, args);
    }

    fn info(&self, args: Arguments<'_>) {
        self.log(LogLevel::Info, args);
    }

    fn warn(&self, args: Arguments<'_>) {
        self.log(LogLevel::Warn, args);
    }

    fn error(&self, args: Arguments<'_>) {
        self.log(LogLevel::Error, args);
    }

    fn fatal(&self, args: Arguments<'_>) {
        self.log(LogLevel::Fatal, args);
    }
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        {
            use $crate::Logger as _;
            $logger.debug(format_args!($($arg)*))
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        {
            use $crate::Logger as _;
            $logger.info(format_args!($($arg)*))
        }
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        {
            use $crate::Logger as _;
            $logger.warn(format_args!($($arg)*))
        }
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        {
            use $crate::Logger as _;
            $logger.error(format_args!($($arg)*))
        }
    };
}

#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)*) => {
        {
            use $crate::Logger as _;
            $logger.fatal(format_args!($($arg)*))
        }
    };
}
