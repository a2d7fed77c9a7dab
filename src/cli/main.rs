//! Command-line interface entry point for `calcdemo`

mod args;

use args::Cli;
use calc_demo::config::Config;
use calc_demo::demo;
use calc_demo::logger::{default_threshold, ConsoleLogger, Level, Logger};
use clap::Parser;
use std::io;

fn main() {
    let args = Cli::parse();

    // Config files are opt-in; a bare run only sees the compiled-in defaults
    let loaded = match &args.config {
        Some(path) => Config::load_from(path),
        None if args.user_config => Config::load(),
        None => Ok(Config::from_defaults()),
    };
    let mut config = loaded.unwrap_or_else(|e| {
        eprintln!("✗ {e}; using defaults");
        Config::from_defaults()
    });
    config.apply_overrides(&args.to_config_overrides());

    let threshold = config.logging.threshold().unwrap_or_else(|| {
        eprintln!(
            "✗ Unknown log level '{}'; using {}",
            config.logging.level,
            default_threshold()
        );
        default_threshold()
    });
    let scenario = config.demo.scenario().unwrap_or_else(|| {
        eprintln!("✗ Unknown scenario '{}'; using default", config.demo.scenario);
        demo::Scenario::default()
    });

    let logger = build_logger(&config, threshold);

    if let Err(e) = demo::run(scenario, &mut io::stdout(), &logger) {
        logger.error(&format!("Failed to write demo output: {e}"));
    }
}

/// File logger when configured and openable, console logger otherwise.
fn build_logger(config: &Config, threshold: Level) -> Box<dyn Logger> {
    #[cfg(feature = "file-logging")]
    if let Some(path) = config.logging.file_path() {
        match calc_demo::logger::FileLogger::open(&path) {
            Ok(logger) => return Box::new(logger.with_threshold(threshold)),
            Err(e) => eprintln!(
                "✗ Failed to initialize file logging at {}: {e}",
                path.display()
            ),
        }
    }
    #[cfg(not(feature = "file-logging"))]
    if config.logging.file_path().is_some() {
        eprintln!("✗ File logging is not compiled in; logging to the console");
    }

    Box::new(ConsoleLogger::with_threshold(threshold))
}
