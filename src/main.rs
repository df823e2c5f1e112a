use crate::cli::Cli;
use clap::Parser;
use colored::*;
use std::process::ExitCode;

mod cli;
mod matcher;

fn main() -> ExitCode {
    match Cli::parse().run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err.to_string().bold().red());
            ExitCode::FAILURE
        }
    }
}
