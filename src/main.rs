use clap::Parser;
use console::Term;
use std::path::Path;

mod animation;
mod cli;
mod core;
mod generators;
mod logging;
mod models;

use crate::cli::handlers::{handle_generate, handle_reveal};
use crate::cli::{Args, CliCommand};
use crate::core::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    let mut config = Config::load();
    args.apply(&mut config)?;

    logging::init(&config)?;
    log::info!("Starting passreveal");
    config.log_warnings();
    log::debug!("Loaded config: {:?}", config);

    // inquire reads Ctrl+C itself while a prompt is open; this covers the
    // reveal animation and everything outside a prompt.
    ctrlc::set_handler(|| {
        log::info!("Ctrl+C received, shutting down");
        // The reveal hides the cursor; give it back before leaving.
        let _ = Term::stdout().show_cursor();
        println!();
        std::process::exit(130);
    })?;

    match args.command.clone().unwrap_or(CliCommand::Menu) {
        CliCommand::Generate { count } => {
            for password in handle_generate(&config, count)? {
                println!("{}", password);
            }
        }
        CliCommand::Reveal => handle_reveal(&config).await?,
        CliCommand::Menu => cli::menu::run_cli_menu(&config).await?,
    }

    log::info!("passreveal finished");
    Ok(())
}
