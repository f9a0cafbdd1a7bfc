//! examiner CLI — define an exam, take it, and get graded.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;
mod console;
mod session;

#[derive(Parser)]
#[command(name = "examiner", version, about = "Console exam builder and grader")]
struct Cli {
    /// Log debug detail to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Define an exam interactively (or load one) and take it
    Take {
        /// Exam definition TOML to take instead of building one interactively
        #[arg(long)]
        definition: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate exam definition TOML files
    Validate {
        /// Path to exam definition file or directory
        #[arg(long)]
        definition: PathBuf,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and example exam definition
    Init,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("examiner={default_level}").parse().unwrap())
                .add_directive(format!("examiner_core={default_level}").parse().unwrap()),
        )
        .init();

    let result = match cli.command {
        Commands::Take { definition, config } => commands::take::execute(definition, config),
        Commands::Validate {
            definition,
            format,
            config,
        } => commands::validate::execute(definition, format, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
