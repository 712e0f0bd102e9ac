#[macro_use]
extern crate log;

mod diagnostics;
mod options;

use std::sync::Arc;

use botlog::{
    new_logger, ColorChoice, DefaultLogger, LogConfig, Logger, PassthroughLogger, Sink,
    StreamWriter,
};
use diagnostics::DiagnosticLogger;
use options::Options;

fn main() {
    let options = options::fetch_options();
    init_diagnostics(options.debug);

    let logger = new_logger(log_config(&options));
    debug!("Effective log level: {}", logger.log_mode());
    for _ in 0..options.repeat {
        logger.log(options.severity, format_args!("{}", options.message));
    }
}

// Build the host configuration. Output tweaks the factory doesn't know about
// (color, no timestamps, passthrough) are handled by supplying our own logger.
fn log_config(options: &Options) -> LogConfig {
    let color = if options.color() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let config = LogConfig {
        enable: options.enable,
        level: options.level,
        prefix: options.prefix.clone(),
        logger: None,
    };

    if options.passthrough {
        let writer = StreamWriter::new(options.prefix.clone(), Sink::stdout(color));
        let logger: Arc<dyn Logger> = Arc::new(PassthroughLogger::new(Box::new(writer), true));
        return config.with_logger(logger);
    }
    if !options.timestamps || options.color() {
        let sink = Sink::stdout(color);
        let logger = DefaultLogger::with_sink(options.level, options.prefix.clone(), sink)
            .timestamps(options.timestamps);
        return config.with_logger(Arc::new(logger));
    }
    config
}

fn init_diagnostics(debug: bool) {
    let logger = DiagnosticLogger::new(debug);
    let level = logger.level_filter();
    let result = log::set_boxed_logger(Box::new(logger)).map(|()| log::set_max_level(level));
    match result {
        Ok(_) => (),
        Err(error) => {
            eprintln!(
                "An error occurred while initializing the logger. \
                Cannot continue.\n{:?}",
                error
            );
            std::process::exit(1)
        }
    }
}
