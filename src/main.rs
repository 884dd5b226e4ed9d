//! Outcome heatmap generator
//!
//! Usage:
//!   outcome-heatmap                                  # every job in config/graphs.toml
//!   outcome-heatmap --jobs my_graphs.toml --threads 4
//!   outcome-heatmap render "Connect 4" ../game/connect4.csv connect4.png
//!   outcome-heatmap --font /path/to/font.ttf render ...
//!
//! Exits non-zero if any chart failed; the remaining charts are still written.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use outcome_heatmap::constants::JOBS_FILE;
use outcome_heatmap::{ChartConfig, JobList, create_graph, init_logging, run_batch};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(version, about = "Render win/loss/tie heatmaps over pairs of search depths")]
struct Cli {
    /// Font used for all chart text (default: search system fonts)
    #[arg(long, global = true)]
    font: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Job list (TOML with [[job]] title/input/output entries)
    #[arg(long, default_value = JOBS_FILE)]
    jobs: PathBuf,

    /// Worker threads for the batch (0 = one per core)
    #[arg(long, default_value_t = 0)]
    threads: usize,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single chart
    Render {
        title: String,
        input: PathBuf,
        output: PathBuf,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(if cli.verbose { "debug" } else { "info" });

    let config = ChartConfig {
        font_path: cli.font.clone(),
    };

    match cli.command {
        Some(Command::Render {
            title,
            input,
            output,
        }) => {
            create_graph(&title, &input, &output, &config)
                .with_context(|| format!("chart {title:?} failed"))?;
            Ok(ExitCode::SUCCESS)
        }
        None => run_job_list(&cli.jobs, cli.threads, &config),
    }
}

fn run_job_list(path: &Path, threads: usize, config: &ChartConfig) -> Result<ExitCode> {
    let list = JobList::from_file(path)?;
    let font = config.load_font()?;

    info!("Rendering {} charts from {}", list.jobs.len(), path.display());
    let reports = run_batch(&list.jobs, font, threads);

    // Each failure was already logged by the batch as it happened
    let failed: Vec<_> = reports
        .iter()
        .filter(|r| !r.is_ok())
        .map(|r| r.job.title.as_str())
        .collect();
    info!(
        "{} of {} charts written",
        reports.len() - failed.len(),
        reports.len()
    );
    if !failed.is_empty() {
        error!("Failed: {}", failed.join(", "));
    }

    Ok(if failed.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
