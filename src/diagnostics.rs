use log::{Level, LevelFilter, Metadata, Record};

/// Prints botlog's own diagnostics to stderr, keeping stdout for the
/// messages being emitted.
pub struct DiagnosticLogger {
    level: Level,
}

impl DiagnosticLogger {
    pub fn new(debug: bool) -> Self {
        let level = if debug { Level::Debug } else { Level::Warn };
        Self { level }
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.level.to_level_filter()
    }
}

impl log::Log for DiagnosticLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}
