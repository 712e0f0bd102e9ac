use std::fmt;
use std::str::FromStr;
use termcolor::{Color, ColorSpec};

/// Severity of a log message, ordered from most to least verbose.
///
/// `Off` is only meaningful as a filter threshold: a leveled logger set to
/// `Off` accepts nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
    Off,
}

const UNKNOWN_TAG: &str = "UNKNOWN";

impl LogLevel {
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
        LogLevel::Off,
    ];

    /// Uppercase tag written between brackets in every log line.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
            LogLevel::Off => "OFF",
        }
    }

    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.get(usize::from(ordinal)).copied()
    }

    /// Render a raw ordinal, for levels read from somewhere other than this enum.
    pub fn tag_for(ordinal: u8) -> &'static str {
        match Self::from_ordinal(ordinal) {
            Some(level) => level.as_str(),
            None => UNKNOWN_TAG,
        }
    }

    /// Map onto the `log` crate's levels. Fatal has no counterpart there and
    /// is reported as an error; `Off` is never emitted.
    pub fn to_log_level(&self) -> Option<log::Level> {
        match self {
            LogLevel::Debug => Some(log::Level::Debug),
            LogLevel::Info => Some(log::Level::Info),
            LogLevel::Warn => Some(log::Level::Warn),
            LogLevel::Error | LogLevel::Fatal => Some(log::Level::Error),
            LogLevel::Off => None,
        }
    }

    pub fn color(&self) -> ColorSpec {
        let mut cs = ColorSpec::new();
        match self {
            LogLevel::Debug => {
                cs.set_fg(Some(Color::Blue)).set_intense(true);
            }
            LogLevel::Info => {
                cs.set_fg(Some(Color::Green));
            }
            LogLevel::Warn => {
                cs.set_fg(Some(Color::Yellow));
            }
            LogLevel::Error => {
                cs.set_fg(Some(Color::Red));
            }
            LogLevel::Fatal => {
                cs.set_fg(Some(Color::Red)).set_intense(true).set_bold(true);
            }
            LogLevel::Off => (),
        }
        cs
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Debug
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct ParseLevelError {
    pub input: String,
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown log level '{}'. Expected one of: debug, info, warn, error, fatal, off",
            self.input
        )
    }
}

impl fmt::Debug for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParseLevelError({:?})", self.input)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        Self::ALL
            .iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(value))
            .copied()
            .ok_or_else(|| ParseLevelError {
                input: value.to_string(),
            })
    }
}
