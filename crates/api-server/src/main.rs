//! Auth API - register, login and token-protected profile over HTTP.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_server_lib::config::ApiConfig;

#[derive(Parser)]
#[command(name = "auth-api")]
#[command(about = "Minimal authentication API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Bind address (defaults to AUTH_API_HOST or 0.0.0.0)
        #[arg(long)]
        host: Option<String>,
        /// Listen port (defaults to PORT or 3000)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port } => {
            let config = ApiConfig::from_env()?.with_addr(host, port);
            api_server_lib::run_server(config).await?;
        }
    }

    Ok(())
}
