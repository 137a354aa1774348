//! Compare command
//!
//! Usage: ymldiff [OPTIONS] <OLD> <NEW>

use clap::{Args, ValueEnum};
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use ymldiff_core::errors::{ExError, YmlDiffError};
use ymldiff_core::render::{render_report, RenderOptions};
use ymldiff_engine::{compare_files, CompareOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Line-oriented report
    Text,
    /// The comparison as pretty-printed JSON
    Json,
}

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Original YAML file
    pub old: PathBuf,

    /// Modified YAML file
    pub new: PathBuf,

    /// Do not print YAML comments
    #[arg(short = 'c', long)]
    pub disable_comments: bool,

    /// Print a bare `---` instead of `--- # YAML Document: i/N`
    #[arg(short = 'd', long)]
    pub no_doc_comment: bool,

    /// Disable colored output
    #[arg(short = 'n', long)]
    pub no_color: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl CompareArgs {
    fn render_options(&self) -> RenderOptions {
        RenderOptions::default()
            .with_color(use_color(self.no_color))
            .with_comments(!self.disable_comments)
            .with_doc_separator_comments(!self.no_doc_comment)
    }
}

/// Colors need a terminal on stdout and no opt-out from flag or `NO_COLOR`.
fn use_color(no_color_flag: bool) -> bool {
    let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    !no_color_flag && !no_color_env && std::io::stdout().is_terminal()
}

/// Execute compare command
pub fn execute(args: CompareArgs) -> Result<(), Box<dyn std::error::Error>> {
    let comparison = compare_files(&CompareOptions::new(&args.old, &args.new))?;

    let output = match args.format {
        OutputFormat::Text => render_report(&comparison, &args.render_options()),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&comparison).map_err(|e| {
                ExError::from(YmlDiffError::Serialization {
                    message: e.to_string(),
                })
            })?;
            json.push('\n');
            json
        }
    };

    tracing::debug!(
        documents = comparison.documents.len(),
        changes = comparison.change_count(),
        "writing report"
    );

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
