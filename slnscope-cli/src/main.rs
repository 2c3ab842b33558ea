mod app;
mod commands;
mod output;

use clap::Parser;

use crate::app::{Cli, Command};

fn main() -> anyhow::Result<()> {
    ctrlc::set_handler(|| {
        eprintln!("\nCancelled.");
        std::process::exit(130);
    })
    .expect("failed to set Ctrl+C handler");

    let cli = Cli::parse();

    // Show slnscope info+ on stderr unless --json; --verbose enables debug; RUST_LOG overrides
    if !cli.global.json {
        let level = if cli.global.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        env_logger::Builder::new()
            .filter_module("slnscope", level)
            .parse_default_env()
            .target(env_logger::Target::Stderr)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false)
            .init();
    }

    match &cli.command {
        Command::Info { path } => commands::info::run(path, &cli.global),
        Command::Projects { path } => commands::projects::run(path, &cli.global),
        Command::Frameworks { path } => commands::frameworks::run(path, &cli.global),
        Command::Packages { path, name } => {
            commands::packages::run(path, name.as_deref(), &cli.global)
        }
        Command::Check { path } => commands::check::run(path, &cli.global),
        Command::Scan { path } => commands::scan::run(path, &cli.global),
    }
}
