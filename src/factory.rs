use std::sync::Arc;

use crate::config::LogConfig;
use crate::default_logger::DefaultLogger;
use crate::logger::Logger;
use crate::noop::NoOpLogger;

/// Build the logger described by `config`.
///
/// The first matching rule wins:
///
/// 1. `enable` is false: a [`NoOpLogger`], even when a logger was supplied.
/// 2. A logger was supplied: that exact instance is returned.
/// 3. Otherwise a [`DefaultLogger`] on stdout using `level` and `prefix`.
pub fn new_logger(config: LogConfig) -> Arc<dyn Logger> {
    if !config.enable {
        debug!("Logging disabled, using NoOpLogger");
        return Arc::new(NoOpLogger);
    }

    if let Some(logger) = config.logger {
        debug!("Using logger supplied by the host");
        return logger;
    }

    debug!(
        "Using DefaultLogger with level {} and prefix {:?}",
        config.level, config.prefix
    );
    Arc::new(DefaultLogger::new(config.level, config.prefix))
}

/// Host-level default: no configuration at all means logging is disabled.
pub fn logger_for(config: Option<LogConfig>) -> Arc<dyn Logger> {
    new_logger(config.unwrap_or_default())
}
