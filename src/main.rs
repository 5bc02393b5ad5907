//! clientgen - containerized OpenAPI client build orchestrator
//!
//! Sequences the client build lifecycle: guard the generator output
//! directory, run the containerized OpenAPI generator ephemerally, and manage
//! the virtual environment the generated package is installed into.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod error;
mod operations;
mod ownership;
mod process;
mod progress;
mod project;
mod ui;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let globals = cli.globals();

    // No subcommand runs the full default sequence
    let command = cli.command.unwrap_or(Commands::All);

    let result = match command {
        Commands::All => commands::all::run(&globals),
        Commands::PrepareEnvironment => commands::prepare::run(&globals),
        Commands::GuardDirectory => commands::guard::run(&globals),
        Commands::RunGenerator => commands::generate::run(&globals),
        Commands::InstallPackage => commands::install::run(&globals),
        Commands::UninstallPackage => commands::uninstall::run(&globals),
        Commands::Clean(args) => commands::clean::run(&globals, args),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
