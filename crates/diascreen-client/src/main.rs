use std::sync::Arc;

use clap::{Parser, Subcommand};
use eyre::Result;

use diascreen_client::commands;
use diascreen_client::config::{self, ClientConfig};
use diascreen_client::state::AppState;
use diascreen_remote::{ApiEndpoint, HttpRemote};

mod terminal;

#[derive(Parser)]
#[command(name = "diascreen")]
#[command(about = "Diabetes symptom screening client")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive client (default)
    Run,
    /// Store the prediction service address
    Configure {
        /// Base URL, e.g. http://127.0.0.1:5000
        #[arg(long)]
        api_url: Option<String>,
        /// Print the stored configuration
        #[arg(long)]
        show: bool,
        /// Remove the stored configuration
        #[arg(long, conflicts_with_all = ["api_url", "show"])]
        reset: bool,
    },
    /// Check that the service is reachable
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let state = connect()?;
            terminal::run(state).await?;
        }
        Commands::Configure {
            api_url,
            show,
            reset,
        } => configure(api_url, show, reset)?,
        Commands::Check => {
            let state = connect()?;
            let banner = commands::check_service(&state)
                .await
                .map_err(|e| eyre::eyre!("service check failed: {e}"))?;
            println!("{banner}");
        }
    }

    Ok(())
}

fn connect() -> Result<AppState> {
    let (endpoint, source) = config::resolve_endpoint()?;
    tracing::info!(endpoint = %endpoint, ?source, "using prediction service");
    Ok(AppState::new(Arc::new(HttpRemote::new(endpoint))))
}

fn configure(api_url: Option<String>, show: bool, reset: bool) -> Result<()> {
    if reset {
        config::delete_config()?;
        println!("Configuration removed.");
        return Ok(());
    }

    if let Some(raw) = api_url {
        let endpoint = ApiEndpoint::parse(&raw).map_err(|e| eyre::eyre!("{e}"))?;
        let path = config::save_config(&ClientConfig::new(&endpoint))?;
        println!("Saved {endpoint} to {}", path.display());
    }

    if show {
        match config::load_config()? {
            Some(cfg) => {
                println!("api_url:        {}", cfg.api_url);
                println!("config_version: {}", cfg.config_version);
                println!("created_at:     {}", cfg.created_at);
            }
            None => println!("No configuration stored at {}", config::config_path()?.display()),
        }
    }

    Ok(())
}
