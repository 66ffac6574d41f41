use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use plan_cli::{app, logging, report};
use plan_core::{PipelineOutcome, ServiceConfig};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Personal financial planner.
///
/// Loads a financial profile, sends it to the analysis service for goal
/// suggestions, a feasibility analysis and investment picks, and prints the
/// results.
#[derive(Debug, Parser)]
struct Cli {
    /// Profile file (TOML). Without it nothing is sent to the service.
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Extra loans to append to the profile (CSV).
    #[arg(long)]
    loans: Option<PathBuf>,

    /// Extra goals to append to the profile (CSV).
    #[arg(long)]
    goals: Option<PathBuf>,

    /// Analysis service backend to use.
    #[arg(long, default_value = "http")]
    backend: String,

    /// Base URL of the analysis service.
    #[arg(long, default_value = "http://localhost:8000")]
    url: String,

    /// Per-request timeout in seconds. Waits indefinitely when omitted.
    #[arg(long)]
    timeout: Option<u64>,

    /// Log level or EnvFilter directive. Overrides `RUST_LOG`.
    #[arg(long)]
    log_level: Option<String>,

    /// Also append log output to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_level.as_deref(), cli.log_file.as_deref())?;

    let config = ServiceConfig {
        backend: cli.backend,
        base_url: cli.url,
        timeout_secs: cli.timeout,
    };

    let form = app::load_form(
        cli.profile.as_deref(),
        cli.loans.as_deref(),
        cli.goals.as_deref(),
    )?;

    debug!("using {} backend at {}", config.backend, config.base_url);
    let registry = app::build_registry();

    match app::run_plan(&registry, &config, form.as_ref()).await? {
        PipelineOutcome::NoInput => {
            eprintln!("No profile given. Fill in a profile file and pass it with --profile.");
            Ok(ExitCode::from(2))
        }
        PipelineOutcome::Completed(store) => {
            print!("{}", report::render_report(&store));
            Ok(ExitCode::SUCCESS)
        }
    }
}
