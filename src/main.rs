// Passport batch validator: reads a batch file, prints the first valid
// records and the total.

use clap::Parser;
use log::error;
use passcheck::utils::{BatchConfig, Cli};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = BatchConfig::from_cli(Cli::parse());

    match passcheck::run(&config, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Error validating passports: {}", err);
            ExitCode::FAILURE
        }
    }
}
