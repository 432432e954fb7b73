use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod domain;
mod services;

use cli::{Cli, Commands};
use commands::{handle_diagnose, handle_reproduce};
use services::config::{load_config, resolve_package, resolve_python, resolve_uv};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let config = load_config()?;
    let package = resolve_package(cli.package.as_deref(), &config);

    match &cli.command {
        Some(Commands::Diagnose { python }) => {
            let python = resolve_python(python.as_deref(), &config);
            let issues = handle_diagnose(cli.json, &package, &python)?;
            Ok(ExitCode::from(issues.min(255) as u8))
        }
        Some(Commands::Reproduce { uv }) => {
            let uv = resolve_uv(uv.as_deref(), &config);
            handle_reproduce(cli.json, &package, &uv)?;
            Ok(ExitCode::SUCCESS)
        }
        // Bare invocation runs the reproduction.
        None => {
            let uv = resolve_uv(None, &config);
            handle_reproduce(cli.json, &package, &uv)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
