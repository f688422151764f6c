mod http;
mod output;

use std::io::Write;
use std::time::Duration;

use clap::{Parser, Subcommand};
use recommend::service::{Coordinator, RecommendService};
use recommend::state::Settlement;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::http::HttpRecommendService;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("recommendation service error: {0}")]
    Recommend(#[from] recommend::RecommendError),
    #[error("recommendation request failed")]
    RequestFailed,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "recommend-cli", about = "Query the assessment recommendation service")]
struct Cli {
    #[arg(long, env = "RECOMMENDER_BASE_URL", default_value = recommend::DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, env = "RECOMMENDER_TIMEOUT_SECS", help = "Request timeout; waits indefinitely when unset")]
    timeout_secs: Option<u64>,

    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Probe the service health endpoint.
    Ping,
    /// Submit one hiring-context query and print the recommendations.
    Query {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        #[arg(long, default_value_t = false, help = "Print the records as JSON instead of a table")]
        json: bool,
    },
    /// Read queries from stdin, one per line.
    Repl,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let service = HttpRecommendService::new(&cli.base_url, cli.timeout_secs.map(Duration::from_secs))?;
    tracing::debug!(base_url = service.base_url(), "recommendation service configured");
    let coordinator = Coordinator::new(service);

    match cli.command {
        Command::Ping => run_ping(&coordinator).await,
        Command::Query { text, json } => run_query(&coordinator, &text.join(" "), json).await,
        Command::Repl => run_repl(&coordinator).await,
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

async fn run_ping<S: RecommendService>(coordinator: &Coordinator<S>) -> Result<(), CliError> {
    let body = coordinator.probe_health().await?;
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}

async fn run_query<S: RecommendService>(coordinator: &Coordinator<S>, text: &str, json: bool) -> Result<(), CliError> {
    coordinator.set_query(text);
    let settlement = coordinator.submit().await;

    if json && settlement != Some(Settlement::Failed) {
        let rendered = coordinator.with_state(|s| serde_json::to_string_pretty(s.results()))?;
        println!("{rendered}");
    } else {
        print!("{}", output::screen_text(&coordinator.screen()));
    }

    match settlement {
        Some(Settlement::Failed) => Err(CliError::RequestFailed),
        _ => Ok(()),
    }
}

async fn run_repl<S: RecommendService>(coordinator: &Coordinator<S>) -> Result<(), CliError> {
    let session = repl_loop(coordinator);
    tokio::pin!(session);

    // The probe is diagnostic only; the session never waits on it.
    tokio::select! {
        result = &mut session => return result,
        () = log_health(coordinator) => {}
    }
    session.await
}

async fn repl_loop<S: RecommendService>(coordinator: &Coordinator<S>) -> Result<(), CliError> {
    print!("{}", output::screen_text(&coordinator.screen()));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            return Ok(());
        };
        if matches!(line.trim(), ":q" | ":quit") {
            return Ok(());
        }

        coordinator.set_query(line);
        if let Some(settlement) = coordinator.submit().await {
            tracing::debug!(?settlement, seq = coordinator.with_state(|s| s.latest_seq()), "query settled");
            print!("{}", output::screen_text(&coordinator.screen()));
        }
    }
}

async fn log_health<S: RecommendService>(coordinator: &Coordinator<S>) {
    match coordinator.probe_health().await {
        Ok(body) => tracing::info!(%body, "recommendation service health"),
        Err(error) => tracing::warn!(%error, "recommendation service health probe failed"),
    }
}
