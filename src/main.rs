//! # Greeter
//!
//! Asks for your name and says hello.
//!
//! # Commands:
//!
//! - Write your name
//! - Leave: quit

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use env_logger::{Builder, Env};
use log::info;

use greeter::{Config, Outcome};

fn logger_init() {
    let env = Env::default().filter_or("RUST_LOG", "warn");
    Builder::from_env(env).init();
}

fn run_greeter() -> Result<Outcome> {
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    let outcome =
        greeter::run(&mut input, &mut output, &Config::default()).context("Greeting failed!")?;
    Ok(outcome)
}

fn main() -> ExitCode {
    logger_init();
    match run_greeter() {
        Ok(outcome) => {
            info!("Finished with {outcome:?}.");
            ExitCode::SUCCESS
        }
        Err(err_msg) => {
            eprintln!("Error: {err_msg:#}");
            ExitCode::FAILURE
        }
    }
}
