use std::fmt;
use std::sync::Arc;

use crate::level::LogLevel;
use crate::logger::Logger;

/// Logging settings supplied by the host at startup.
///
/// `enable` has the highest priority: when it is false no logging happens,
/// whatever the other fields say.
#[derive(Clone, Default)]
pub struct LogConfig {
    pub enable: bool,
    /// Minimum severity written by the default logger.
    pub level: LogLevel,
    /// Prepended to every line written by the default logger.
    pub prefix: String,
    /// Host supplied logger, used as-is instead of building the default one.
    pub logger: Option<Arc<dyn Logger>>,
}

impl LogConfig {
    pub fn enabled() -> Self {
        Self {
            enable: true,
            ..Self::default()
        }
    }

    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }
}

impl fmt::Debug for LogConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogConfig")
            .field("enable", &self.enable)
            .field("level", &self.level)
            .field("prefix", &self.prefix)
            .field("logger", &self.logger.as_ref().map(|_| "<custom>"))
            .finish()
    }
}
