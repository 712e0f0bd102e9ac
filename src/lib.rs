//! Pluggable, leveled logging for bot runtimes.
//!
//! The host builds a [`LogConfig`] once at startup and turns it into a single
//! shared [`Logger`] with [`new_logger`]. Every unit of work receives a clone
//! of that `Arc<dyn Logger>` and logs through the `log_*!` macros.
//!
//! ```
//! use botlog::{log_info, new_logger, LogConfig, LogLevel, Logger};
//!
//! let logger = new_logger(LogConfig::enabled().with_level(LogLevel::Warn));
//! assert_eq!(logger.log_mode(), LogLevel::Warn);
//! log_info!(logger, "dropped, below the warn floor");
//! ```

#[macro_use]
extern crate log;
#[macro_use]
extern crate lazy_static;

#[macro_use]
mod logger;

mod config;
mod default_logger;
mod exit;
mod factory;
pub mod global;
mod level;
mod noop;
mod passthrough;
mod sink;

pub use config::LogConfig;
pub use default_logger::DefaultLogger;
pub use exit::{ExitHandler, FATAL_EXIT_CODE};
pub use factory::{logger_for, new_logger};
pub use level::{LogLevel, ParseLevelError};
pub use logger::Logger;
pub use noop::NoOpLogger;
pub use passthrough::{PassthroughLogger, StreamWriter};
pub use sink::{SharedBuffer, Sink};
pub use termcolor::ColorChoice;
