//! rainbow CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "rainbow", version, about = "Times-tables worksheet generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a worksheet
    Generate {
        /// Level to draw questions from (case-insensitive, unknown falls back to the default)
        #[arg(long)]
        level: Option<String>,

        /// Printable sheet: no editable answers, no reveal button
        #[arg(long)]
        printable: bool,

        /// Seed for a reproducible sheet
        #[arg(long)]
        seed: Option<u64>,

        /// Output format: html, text, json, all
        #[arg(long, default_value = "html")]
        format: String,

        /// Output directory
        #[arg(long)]
        output: Option<PathBuf>,

        /// Append an answer key to text output
        #[arg(long)]
        answers: bool,

        /// Generator attempts allowed before giving up
        #[arg(long)]
        max_attempts: Option<usize>,

        /// Custom level file
        #[arg(long)]
        levels: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Score answers against a saved worksheet
    Check {
        /// Worksheet JSON written by `generate --format json`
        #[arg(long)]
        worksheet: PathBuf,

        /// File with one answer per line, in question order
        #[arg(long)]
        answers: PathBuf,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// List available levels
    Levels {
        /// Custom level file
        #[arg(long)]
        levels: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate a level file
    Validate {
        /// Path to level TOML file
        #[arg(long)]
        levels: PathBuf,
    },

    /// Create starter config and level file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rainbow=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            level,
            printable,
            seed,
            format,
            output,
            answers,
            max_attempts,
            levels,
            config,
        } => commands::generate::execute(commands::generate::GenerateArgs {
            level,
            printable,
            seed,
            format,
            output,
            answers,
            max_attempts,
            levels,
            config,
        }),
        Commands::Check {
            worksheet,
            answers,
            format,
        } => commands::check::execute(worksheet, answers, format),
        Commands::Levels { levels, config } => commands::levels::execute(levels, config),
        Commands::Validate { levels } => commands::validate::execute(levels),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
