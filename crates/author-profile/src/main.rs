//! Author Profile Analysis - Entry Point
//!
//! Serves the rankings over HTTP or prints them once as JSON.

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use author_profile::config::{Config, limits};
use author_profile::server::ProfileServer;
use author_profile::service::ProfileService;

#[derive(Parser, Debug)]
#[command(name = "author-profile")]
#[command(about = "Citation-rate and co-author rankings from OpenAlex")]
#[command(version)]
struct Cli {
    /// Contact e-mail for the OpenAlex polite pool
    #[arg(long, global = true, env = "OPENALEX_MAILTO")]
    mailto: Option<String>,

    /// OpenAlex API base URL
    #[arg(long, global = true, env = "OPENALEX_API_URL")]
    api_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the JSON HTTP service
    Serve {
        /// HTTP server port
        #[arg(long, default_value = "8000", env = "PORT")]
        port: u16,
    },
    /// Print the paper and co-author rankings for one author
    Rank {
        /// OpenAlex author ID (A123... or full URL)
        author_id: String,
    },
    /// Search authors by name
    Search {
        /// Name to search for
        name: String,

        /// Number of candidates
        #[arg(long, default_value_t = limits::SEARCH_PER_PAGE)]
        per_page: u32,
    },
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
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
    if cli.mailto.is_some() {
        config.mailto = cli.mailto;
    }
    if let Some(url) = cli.api_url {
        config = config.with_api_url(url);
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        api_url = %config.api_url,
        polite_pool = config.has_mailto(),
        "Starting author profile analysis"
    );

    let service = ProfileService::from_config(&config)?;

    match cli.command {
        Command::Serve { port } => {
            ProfileServer::new(service).run_http(port).await?;
        }
        Command::Rank { author_id } => {
            let report = service.ranking(&author_id).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Search { name, per_page } => {
            let results = service.search_authors(&name, per_page).await?;
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
    }

    Ok(())
}
