//! ymldiff CLI
//!
//! Semantic comparison of two YAML files

use clap::{Parser, ValueEnum};
use ymldiff_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per event, info level and up
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "ymldiff", version)]
#[command(about = "Compare YAML files semantically", long_about = None)]
struct Cli {
    #[command(flatten)]
    compare: commands::compare::CompareArgs,

    /// Print debug logs to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Format of the logs written to stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

impl Cli {
    fn log_profile(&self) -> Profile {
        match (self.log_format, self.verbose) {
            (LogFormat::Json, _) => Profile::Production,
            (LogFormat::Text, true) => Profile::Development,
            (LogFormat::Text, false) => Profile::Quiet,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    init(cli.log_profile());

    if let Err(e) = commands::compare::execute(cli.compare) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
