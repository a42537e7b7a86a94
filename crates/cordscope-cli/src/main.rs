mod charts;
mod report;

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};

use cordscope_core::{ExitCode, ExplorerError};
use cordscope_tui::app::App;

/// Fixed relative path of the metadata file, per the dataset layout.
const DEFAULT_INPUT: &str = "metadata.csv";

// ─── CLI Definition ─────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "cordscope",
    about = "CORD-19 metadata explorer — interactive dashboard and console report",
    version,
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the metadata CSV.
    #[arg(long, global = true, default_value = DEFAULT_INPUT)]
    input: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard (the default).
    Dashboard,

    /// Print the full console report and render the three charts.
    Report {
        /// Directory the PNG charts are written to.
        #[arg(long, default_value = "charts")]
        charts_dir: PathBuf,

        /// Do not open the rendered charts with the system viewer.
        #[arg(long)]
        no_open: bool,
    },

    /// Print a compact dataset summary.
    Stats {
        /// Output in JSON format (for scripts).
        #[arg(long)]
        json: bool,
    },
}

// ─── Entry Point ────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    let code = match run(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {e:#}");
            exit_code_for(&e)
        }
    };
    process::exit(code as i32);
}

fn run(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or(Commands::Dashboard) {
        Commands::Dashboard => {
            let mut app = App::new(cli.input);
            cordscope_tui::run_tui(&mut app)
        }
        Commands::Report {
            charts_dir,
            no_open,
        } => report::run(&cli.input, &charts_dir, !no_open),
        Commands::Stats { json } => report::stats(&cli.input, json),
    }
}

fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<ExplorerError>() {
        Some(ExplorerError::MissingFile(_)) => ExitCode::NotFound,
        _ => ExitCode::GeneralError,
    }
}
