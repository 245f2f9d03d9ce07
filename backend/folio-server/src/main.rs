use folio_server::cli::{Cli, Commands};
use folio_server::{commands, logger};

use std::error::Error;

use clap::Parser;
use log::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional; real environment variables win
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Each command validates the sections it needs
    let config = folio_config::Config::load()?;

    // Construct log file path if configured
    let log_file_path = match config.logging.file {
        Some(ref filename) => {
            let log_dir = config.log_dir()?;
            std::fs::create_dir_all(&log_dir)?;
            Some(log_dir.join(filename))
        }
        None => None,
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting folio-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => commands::serve(&config).await?,
        Commands::CreateUser {
            name,
            email,
            password,
            role,
        } => commands::create_user(&config, &name, &email, &password, &role).await?,
    }

    Ok(())
}
