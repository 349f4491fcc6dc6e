//! Fetches the Steam app list and saves `AppId,Name` pairs to CSV.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

mod config;
mod console;
mod error;
mod model;
mod services;

use config::FetchConfig;
use error::PipelineError;
use services::fetch::Fetcher;
use services::pipeline::{self, PipelineConfig};

#[derive(Parser)]
#[command(
    name = "steam-applist",
    about = "Fetch Steam app list and save AppId+Name to CSV.",
    version
)]
struct Cli {
    /// Steam API key. Accepted for compatibility; GetAppList does not use it.
    #[arg(short = 'k', long, env = "STEAM_API_KEY", default_value = "", hide_env_values = true)]
    api_key: String,

    /// Output CSV file.
    #[arg(short, long, default_value = config::DEFAULT_OUT)]
    out: PathBuf,

    /// Also save raw JSON to steam_applist.json.
    #[arg(long)]
    json: bool,

    /// Catalog endpoint.
    #[arg(long, env = "STEAM_APPLIST_URL", default_value = config::DEFAULT_URL)]
    url: String,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = config::TIMEOUT_SECS)]
    timeout: u64,

    /// Maximum number of fetch attempts.
    #[arg(long, default_value_t = config::MAX_ATTEMPTS)]
    attempts: u32,

    /// Backoff base in seconds; attempt N waits N times this.
    #[arg(long, default_value_t = config::BACKOFF_SECS)]
    backoff: f64,

    /// Exit without waiting for Enter.
    #[arg(long)]
    no_wait: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Cli {
    fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            endpoint: self.url.clone(),
            api_key: self.api_key.clone(),
            timeout: Duration::from_secs(self.timeout),
            max_attempts: self.attempts,
            backoff: self.backoff,
        }
    }

    fn json_dump(&self) -> Option<PathBuf> {
        self.json.then(|| PathBuf::from(config::JSON_DUMP_FILE))
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let json_dump = cli.json_dump();
    let cfg = PipelineConfig {
        out: &cli.out,
        json_dump: json_dump.as_deref(),
    };

    let result = Fetcher::new(cli.fetch_config())
        .map_err(PipelineError::from)
        .and_then(|fetcher| pipeline::run(&fetcher, &cfg));

    let code = match result {
        Ok(report) => {
            tracing::debug!(
                apps = report.apps_written,
                json = report.json_dumped,
                "run complete"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::from(e.exit_code())
        }
    };

    console::wait_for_ack(!cli.no_wait);
    code
}
