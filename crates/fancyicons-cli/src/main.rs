//! fancyicons CLI - browse the bundled icon font families and check their fonts

mod cli;
mod commands;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{Cli, Commands};

fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let registry =
        fancyicons_families::default_registry().context("failed to build the icon registry")?;
    log::debug!("registered {} families", registry.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let ok = match &cli.command {
        Commands::Families(args) => commands::families::run(&registry, args, &mut out)?,
        Commands::Find(args) => commands::find::run(&registry, args, &mut out)?,
        Commands::List(args) => commands::list::run(&registry, args, &mut out)?,
        Commands::Verify(args) => {
            let loader = commands::verify::loader_for(args);
            log::info!("loading fonts from {}", loader.config().font_dir.display());
            commands::verify::run(&registry, &loader, &mut out)?
        },
    };
    out.flush()?;

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
