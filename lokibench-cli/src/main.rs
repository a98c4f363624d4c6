use clap::{Parser, Subcommand};
use lokibench_metrics::PromDuration;
use std::path::PathBuf;

mod export;
mod queries;

use export::run_export_csv;
use queries::{QuerySet, run_queries_command};

/// Failures surfaced by CLI commands
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Reporter(#[from] lokibench_reporters::ReporterError),
    #[error(transparent)]
    Report(#[from] lokibench_report::ReportError),
}

#[derive(Parser, Debug)]
#[command(name = "lokibench", version)]
#[command(about = "Lokibench CLI - Loki benchmark queries and reports")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the Prometheus queries of a measurement set
    Queries {
        /// Measurement set to print
        #[arg(long, value_enum, default_value_t = QuerySet::All)]
        set: QuerySet,
        /// Range-vector window, Prometheus duration syntax
        #[arg(long, default_value = "5m")]
        window: PromDuration,
        /// Restrict the resources set to one job
        #[arg(long)]
        job: Option<String>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Write every measurement of an experiment file to its own CSV file
    ExportCsv {
        /// measurements.json to export
        input: PathBuf,
        /// Output directory (overrides configuration)
        #[arg(long)]
        report_dir: Option<PathBuf>,
        /// Reporter configuration file
        #[arg(long, default_value = "lokibench.json")]
        config: PathBuf,
    },
    /// Render a README comparing several benchmark runs
    Report {
        /// Run directories containing measurements.json and benchmark.yaml
        #[arg(required = true)]
        dirs: Vec<PathBuf>,
        /// Handlebars template replacing the built-in one
        #[arg(long)]
        template: Option<PathBuf>,
    },
}

fn run_report(dirs: &[PathBuf], template: Option<&PathBuf>) -> Result<PathBuf, CliError> {
    let template = template.map(std::fs::read_to_string).transpose()?;
    Ok(lokibench_report::generate(dirs, template.as_deref())?)
}

fn main() {
    // Initialize JSON logging once.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env();
    let env_filter = match "info".parse() {
        Ok(directive) => env_filter.add_directive(directive),
        Err(_) => env_filter,
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .json()
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Queries {
            set,
            window,
            job,
            json,
        } => {
            if let Err(e) = run_queries_command(set, window, job.as_deref(), json) {
                tracing::error!(error = %e, "Queries command failed");
                std::process::exit(1);
            }
        }
        Commands::ExportCsv {
            input,
            report_dir,
            config,
        } => match run_export_csv(&input, report_dir, &config) {
            Ok(count) => println!("Exported {} measurement(s) from {}", count, input.display()),
            Err(e) => {
                tracing::error!(error = %e, input = %input.display(), "CSV export failed");
                std::process::exit(1);
            }
        },
        Commands::Report { dirs, template } => match run_report(&dirs, template.as_ref()) {
            Ok(path) => println!("Report written to {}", path.display()),
            Err(e) => {
                tracing::error!(error = %e, "Report generation failed");
                std::process::exit(1);
            }
        },
    }
}
