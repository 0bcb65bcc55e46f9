//! Entry point for the msinm command-line interface.
#![forbid(unsafe_code)]

use std::{process, str::FromStr};

use clap::Parser;
use log::LevelFilter;
use msinm_cli::Cli;

fn main() {
    let cli = Cli::parse();

    let log_level = LevelFilter::from_str(&cli.log_level).unwrap_or_else(|_| {
        eprintln!("invalid log level {:?}, using 'warn'", cli.log_level);
        LevelFilter::Warn
    });
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    match msinm_cli::run(cli) {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("msinm: {err}");
            process::exit(2);
        }
    }
}
