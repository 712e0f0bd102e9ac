//! Process-wide logger for hosts that prefer a global over passing the
//! instance around.
//!
//! The logger can be installed once. Until then [`logger`] hands out a
//! shared [`NoOpLogger`].

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::logger::Logger;
use crate::noop::NoOpLogger;

lazy_static! {
    static ref GLOBAL_LOGGER: RwLock<Option<Arc<dyn Logger>>> = RwLock::new(None);
    static ref FALLBACK_LOGGER: Arc<dyn Logger> = Arc::new(NoOpLogger);
}

/// Returned by [`init`] when a global logger was already installed.
pub struct SetLoggerError;

impl fmt::Display for SetLoggerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A global logger has already been installed")
    }
}

impl fmt::Debug for SetLoggerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SetLoggerError")
    }
}

impl std::error::Error for SetLoggerError {}

pub fn init(logger: Arc<dyn Logger>) -> Result<(), SetLoggerError> {
    let mut global = GLOBAL_LOGGER
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    if global.is_some() {
        return Err(SetLoggerError);
    }
    *global = Some(logger);
    Ok(())
}

pub fn logger() -> Arc<dyn Logger> {
    let global = GLOBAL_LOGGER.read().unwrap_or_else(PoisonError::into_inner);
    match global.as_ref() {
        Some(logger) => logger.clone(),
        None => FALLBACK_LOGGER.clone(),
    }
}

pub fn is_initialized() -> bool {
    GLOBAL_LOGGER
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .is_some()
}
