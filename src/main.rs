//! `topsis` - rank alternatives from the command line or serve the ranking API.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::error::ErrorKind;
use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use topsis_rank::adapters::{app_router, CsvResultWriter, CsvTableReader, ResendMailer, TopsisAppState};
use topsis_rank::application::{RankError, RankFileCommand, RankFileHandler};
use topsis_rank::config::{AppConfig, ConfigError};
use topsis_rank::ports::{DeliveryError, ResultMailer};

/// Log directive for one-shot CLI runs when `RUST_LOG` is unset.
const CLI_LOG_LEVEL: &str = "warn";

#[derive(Parser, Debug)]
#[command(name = "topsis", version, about = "Rank alternatives with TOPSIS")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ranks a CSV file and writes the result with score and rank columns.
    Rank(RankArgs),
    /// Serves the interactive ranking API.
    Serve,
}

#[derive(Args, Debug)]
struct RankArgs {
    /// Input CSV: identifier column followed by numeric criteria.
    input: PathBuf,
    /// Comma-separated positive weights, one per criterion (e.g. "1,1,1,2").
    #[arg(allow_hyphen_values = true)]
    weights: String,
    /// Comma-separated impacts, "+" for benefit and "-" for cost (e.g. "+,+,-,+").
    #[arg(allow_hyphen_values = true)]
    impacts: String,
    /// Output CSV path.
    output: PathBuf,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Rank(#[from] RankError),

    #[error("Failed to start email delivery: {0}")]
    Mailer(#[from] DeliveryError),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            eprintln!("Error: {}", one_line(&e));
            return ExitCode::FAILURE;
        }
    };

    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Rank(args) => {
            init_tracing(CLI_LOG_LEVEL, false);
            rank(args).await
        }
        Commands::Serve => {
            let config = AppConfig::load()?;
            init_tracing(&config.server.log_level, config.server.json_logs());
            serve(config).await
        }
    }
}

/// Collapses clap's multi-line report into one line, keeping the usage.
fn one_line(error: &clap::Error) -> String {
    let rendered = error.render().to_string();
    rendered
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("For more information"))
        .map(|line| line.strip_prefix("error: ").unwrap_or(line))
        .collect::<Vec<_>>()
        .join(" ")
}

async fn rank(args: RankArgs) -> Result<(), CliError> {
    let handler = RankFileHandler::new(
        Arc::new(CsvTableReader::new()),
        Arc::new(CsvResultWriter::new()),
    );

    let outcome = handler
        .handle(RankFileCommand {
            input: args.input,
            weights: args.weights,
            impacts: args.impacts,
            output: args.output,
        })
        .await?;

    println!(
        "TOPSIS result successfully saved to {}",
        outcome.written_to.display()
    );
    Ok(())
}

async fn serve(config: AppConfig) -> Result<(), CliError> {
    config.validate().map_err(ConfigError::from)?;

    let mailer: Option<Arc<dyn ResultMailer>> = match &config.email {
        Some(email) => Some(Arc::new(ResendMailer::new(email.clone())?)),
        None => None,
    };
    if mailer.is_none() {
        info!("Email delivery disabled; results are download-only");
    }

    let state = TopsisAppState::new(mailer, &config.output);
    let app = app_router(state, &config.server);

    let addr = config.server.socket_addr().map_err(ConfigError::from)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, email = config.email_enabled(), "TOPSIS server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Installs the global subscriber. `RUST_LOG` wins over `default_directive`.
fn init_tracing(default_directive: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
