use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fluxkit::config::Config;
use fluxkit::runtime::run_demo;
use fluxkit::server::AppServer;

#[derive(Parser)]
#[command(name = "fluxkit", version, about = "Redux-style state store demo")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the backend server (forecasts, feedback, counter hub).
    Serve {
        /// Address to bind, host:port. Overrides the config file.
        #[arg(long)]
        bind: Option<String>,
    },
    /// Run the scripted client demo against a running server.
    Demo {
        /// Base URL of the backend server. Overrides the config file.
        #[arg(long)]
        server: Option<String>,
        /// Storage file for persisted feature state.
        #[arg(long)]
        storage: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let mut config = Config::load()?;

    match cli.command {
        Command::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| config.server.bind_addr.clone());
            let mut server = AppServer::new();
            server.try_bind(&bind).await?;

            let shutdown = server.shutdown_handle();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    shutdown.signal();
                }
            });

            server.run().await?;
        }
        Command::Demo { server, storage } => {
            if let Some(server) = server {
                let base = server.trim_end_matches('/').to_string();
                config.client.hub_url = format!("{}/counterhub", base.replacen("http", "ws", 1));
                config.client.base_url = base;
            }
            run_demo(&config, storage).await?;
        }
    }
    Ok(())
}
