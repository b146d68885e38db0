//! cite-resolver - Entry Point
//!
//! Serves the citation lookup endpoint, or resolves a single query from the shell.

use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cite_resolver::{CitationResolver, config::Config, formatters, server::CitationServer};

#[derive(Parser, Debug)]
#[command(name = "cite-resolver")]
#[command(about = "Resolve paper titles and arXiv URLs into citations")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    /// Per-request timeout in seconds (overrides CITE_TIMEOUT_SECS)
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP endpoint
    Serve {
        /// HTTP server port
        #[arg(long, default_value = "8089", env = "PORT")]
        port: u16,
    },
    /// Resolve one query and print the result
    Lookup {
        /// Paper title or arXiv URL
        query: String,

        /// Print only the best match as an inline citation
        #[arg(long)]
        one: bool,
    },
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    let mut config = Config::from_env()?;
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs))?;
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        dblp = %config.dblp_search_url,
        arxiv = %config.arxiv_api_url,
        "Starting cite-resolver"
    );

    let resolver = CitationResolver::new(&config)?;

    match cli.command {
        Command::Serve { port } => {
            tracing::info!(port, "Running in HTTP mode");
            CitationServer::new(resolver).run_http(port).await?;
        }
        Command::Lookup { query, one: true } => {
            println!("{}", resolver.resolve_one(&query).await?);
        }
        Command::Lookup { query, one: false } => {
            let candidates = resolver.resolve(&query).await;
            println!("{}", serde_json::to_string_pretty(&formatters::candidates_json(&candidates))?);
        }
    }

    Ok(())
}
