//! Command line surface.

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing::debug;

use crate::app::copy::{CopyRequest, Copier, NotificationTitles};
use crate::app::selection;
use crate::domain::errors::SelectionError;
use crate::domain::model::{FormatMode, Selection};
use crate::infra::clipboard::Clipboard;
use crate::infra::config::Config;
use crate::infra::notify::notifier_for;

const EXAMPLES: &str = "\
Examples:
  ct file.txt                # Copy entire file
  ct -l 5 file.txt           # Copy line 5
  ct --line 1,3,5 file.txt   # Copy lines 1, 3, and 5
  ct -w --line 2,4 file.txt  # Copy lines 2 and 4 without line numbers";

#[derive(Debug, Parser)]
#[command(
    name = "ct",
    version,
    about = "Copy files, or selected lines of files, to the system clipboard",
    override_usage = "ct [OPTIONS] <FILE>...",
    after_help = EXAMPLES
)]
pub struct Cli {
    /// Single line number to copy (ignored unless greater than 0)
    #[arg(short = 'l', value_name = "N", default_value_t = 0, allow_negative_numbers = true)]
    pub line_number: i64,

    /// Line numbers separated by comma (e.g., 1,3,5)
    #[arg(long = "line", value_name = "LIST", allow_hyphen_values = true)]
    pub line_numbers: Option<String>,

    /// Copy selected lines without their line numbers
    #[arg(short = 'w', long = "without-line-numbers")]
    pub without_line_numbers: bool,

    /// Silent mode (no notifications)
    #[arg(short = 's', long)]
    pub silent: bool,

    /// Files to copy, in order
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl Cli {
    /// Parse the process arguments, accepting the single-dash `-line` spelling.
    pub fn parse_from_env() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    pub fn selection(&self) -> Result<Selection, SelectionError> {
        selection::resolve(self.line_number, self.line_numbers.as_deref())
    }

    pub fn format_mode(&self) -> FormatMode {
        FormatMode::from_strip_flag(self.without_line_numbers)
    }
}

/// Rewrite `-line` and `-line=LIST` to their `--line` forms. Arguments after `--` are untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut positional_only = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if positional_only {
                return arg;
            }
            let rewritten = match arg.to_str() {
                Some("--") => {
                    positional_only = true;
                    None
                }
                Some(text) if text == "-line" || text.starts_with("-line=") => {
                    Some(OsString::from(format!("-{text}")))
                }
                _ => None,
            };
            rewritten.unwrap_or(arg)
        })
        .collect()
}

/// Entry point for the `ct` binary.
pub fn run() -> Result<()> {
    let cli = Cli::parse_from_env();

    if cli.files.is_empty() {
        eprintln!("{}", Cli::command().render_help());
        std::process::exit(1);
    }

    let selection = cli.selection().context("Error parsing line numbers")?;
    let config = Config::load()?;
    debug!(?selection, files = cli.files.len(), "resolved request");

    let request = CopyRequest {
        paths: cli.files.clone(),
        selection,
        format: cli.format_mode(),
    };

    let mut clipboard = Clipboard::new();
    let notifier = notifier_for(&config, cli.silent);
    let summary = Copier::new(
        &mut clipboard,
        notifier.as_ref(),
        NotificationTitles::from_config(&config),
    )
    .run(&request)?;

    println!("{}", summary.message());
    Ok(())
}
