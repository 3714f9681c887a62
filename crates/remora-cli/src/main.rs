//! Remora CLI - drive a remote browser-automation server
//!
//! Usage:
//!   remora content <url>               Open a page and print its content
//!   remora screenshot <url> -o f.png   Open a page and save a screenshot

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use remora_client::{Connector, Session};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "remora")]
#[command(version, about = "Client for a remote browser-automation server")]
struct Cli {
    /// Base URL of the browser-automation server
    #[arg(short, long, default_value = "http://localhost:8081")]
    server: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Navigate to a page and print its content
    Content {
        /// Page to open
        url: String,

        /// Seconds the server should wait for the page to settle
        #[arg(short, long, default_value = "10")]
        wait: i32,
    },

    /// Navigate to a page and save a screenshot
    Screenshot {
        /// Page to open
        url: String,

        /// Seconds the server should wait for the page to settle
        #[arg(short, long, default_value = "10")]
        wait: i32,

        /// Output file for the raw image bytes
        #[arg(short, long, default_value = "screenshot.png")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set up logging")?;

    let connector = Connector::builder(cli.server.as_str())
        .timeout(Duration::from_secs(cli.timeout))
        .build();

    let session = connector
        .create_session()
        .await
        .with_context(|| format!("Failed to create session on {}", connector.base_url()))?;
    info!("Created session {}", session.id());

    // Always attempt to delete the session; the first failure wins.
    let outcome = run_command(&cli.command, &session).await;
    let deleted = session.delete().await;

    outcome?;
    deleted.context("Failed to delete session")?;
    info!("Deleted session {}", session.id());
    Ok(())
}

async fn run_command(command: &Commands, session: &Session) -> Result<()> {
    match command {
        Commands::Content { url, wait } => {
            session
                .goto(url)
                .await
                .with_context(|| format!("Failed to open {}", url))?;
            session.implicit_wait(*wait).await?;
            let content = session
                .page_content()
                .await
                .context("Failed to read page content")?;
            println!("{content}");
        }
        Commands::Screenshot { url, wait, output } => {
            session
                .goto(url)
                .await
                .with_context(|| format!("Failed to open {}", url))?;
            session.implicit_wait(*wait).await?;
            let image = session
                .screenshot()
                .await
                .context("Failed to capture screenshot")?;
            std::fs::write(output, &image)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            info!("Wrote {} bytes to {}", image.len(), output.display());
        }
    }
    Ok(())
}
