mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "termcal")]
#[command(about = "Turn a course timetable into an .ics calendar")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a timetable JSON file into an .ics calendar
    Generate {
        /// Timetable document (`-` reads stdin)
        input: PathBuf,

        /// Write the calendar here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// List every generated event
        #[arg(short, long)]
        verbose: bool,
    },
    /// Check a timetable for missing required fields
    Validate {
        /// Timetable document (`-` reads stdin)
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output,
            verbose,
        } => commands::generate::run(&input, output.as_deref(), verbose),
        Commands::Validate { input } => commands::validate::run(&input),
    }
}
