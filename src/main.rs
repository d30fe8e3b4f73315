// src/main.rs

//! Entry point for `life-term`: configuration, logging, then the frame loop.

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use log::info;

use life_term::app::App;
use life_term::config::{self, Config, Invocation};

fn main() -> Result<()> {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "life-term".to_string());
    let config = match config::parse_args(args)? {
        Invocation::Usage => {
            print!("{}", config::usage(&program));
            return Ok(());
        }
        Invocation::Run(config) => config,
    };

    init_logging(&config)?;
    info!("Starting life-term...");

    App::new(&config)?.run()
}

/// Routes the `log` macros to the configured file.
///
/// The simulation owns the terminal, so logs cannot go to stderr. The
/// filter is adjustable through `RUST_LOG` and defaults to info.
fn init_logging(config: &Config) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.behavior.log_file)
        .with_context(|| {
            format!(
                "could not open log file {}",
                config.behavior.log_file.display()
            )
        })?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_micros()
        .init();
    Ok(())
}
