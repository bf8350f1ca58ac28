use std::{error::Error, io, process::ExitCode};

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod core;
mod shell;
mod toolkit;
mod utils;

use crate::core::executor::Executor;
use config::Config;
use shell::{Session, Shell};
use toolkit::Toolkit;

fn main() -> Result<ExitCode, Box<dyn Error>> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let toolkit = Toolkit::new(Executor::new(config.timeout())).with_top_delay(config.top_delay);
    let mut session = Session::new(toolkit);

    if !config.command.is_empty() {
        let succeeded = session.run_once(&config.command, &mut io::stdout())?;
        return Ok(if succeeded {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let mut shell = Shell::new(session, config.history_path())?;
    match shell.run() {
        Ok(_) => {}
        Err(e) => eprintln!("{}", e),
    }

    Ok(ExitCode::SUCCESS)
}
