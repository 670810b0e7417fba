mod commands;
mod output;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "ceilmap",
    version,
    about = "Extract room and ceiling-height tables from architectural floor-plan PDFs"
)]
struct Cli {
    /// Log pipeline details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
pub struct PatternArgs {
    /// Predefined pattern set (default: "default")
    #[arg(short, long = "preset", value_name = "NAME", conflicts_with = "patterns")]
    preset: Option<String>,

    /// Custom JSON pattern file
    #[arg(long = "patterns", value_name = "FILE")]
    patterns: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract room/ceiling-height rows from one or more PDFs
    Extract {
        /// PDF files to process, in output order
        #[arg(required = true)]
        input_files: Vec<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Write a workbook with "Raw Data" and "Matrix View" sheets
        #[arg(
            short = 'O',
            long = "out",
            value_name = "FILE",
            num_args = 0..=1,
            default_missing_value = ceilmap_core::tabulate::xlsx::DEFAULT_FILE_NAME
        )]
        out: Option<PathBuf>,

        #[command(flatten)]
        patterns: PatternArgs,
    },
    /// Print extraction statistics for one PDF as JSON
    Analyze {
        /// Path to PDF file
        input_file: PathBuf,

        #[command(flatten)]
        patterns: PatternArgs,
    },
    /// Manage and inspect pattern sets
    Patterns {
        #[command(subcommand)]
        action: PatternsAction,
    },
}

#[derive(Subcommand)]
enum PatternsAction {
    /// List predefined pattern sets
    List,
    /// Print a predefined pattern set as JSON
    Show {
        /// Preset name (e.g., "default")
        preset: String,
    },
    /// Validate a custom pattern file
    Validate {
        /// Path to JSON pattern file
        file: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Extract {
            input_files,
            format,
            out,
            patterns,
        } => commands::extract::run(input_files, &format, out, &patterns),
        Commands::Analyze {
            input_file,
            patterns,
        } => commands::analyze::run(input_file, &patterns),
        Commands::Patterns { action } => match action {
            PatternsAction::List => commands::patterns::list(),
            PatternsAction::Show { preset } => commands::patterns::show(&preset),
            PatternsAction::Validate { file } => commands::patterns::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
