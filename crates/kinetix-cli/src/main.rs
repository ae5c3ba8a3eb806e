mod cli;
mod commands;
mod config;
mod data;
mod error;
mod logging;
mod utils;

use crate::cli::{Cli, Commands};
use crate::error::{CliError, Result};
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    info!("🚀 Kinetix CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let data_dir = cli.data_dir.as_deref();
    let command_result = match cli.command {
        Commands::Scan(args) => {
            info!("Dispatching to 'scan' command.");
            commands::scan::run(args, data_dir, cli.quiet)
        }
        Commands::Omega(args) => {
            info!("Dispatching to 'omega' command.");
            commands::omega::run(args, data_dir)
        }
        Commands::Equilibrium(args) => {
            info!("Dispatching to 'equilibrium' command.");
            commands::equilibrium::run(args, data_dir)
        }
        Commands::Data(args) => {
            info!("Dispatching to 'data' command.");
            commands::data::run(args, data_dir)
        }
    };

    match &command_result {
        Ok(_) => info!("✅ Command completed successfully."),
        Err(e) => error!("❌ Command failed: {}", e),
    }

    command_result
}
