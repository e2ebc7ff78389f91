//! Reading every input file and copying the combined result to the clipboard.

use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, error, warn};

use crate::app::reader::read_selection;
use crate::domain::errors::CopyError;
use crate::domain::model::{FileOutcome, FormatMode, RunSummary, Selection};
use crate::infra::config::Config;

/// Destination for the final payload.
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<()>;

    fn read_text(&mut self) -> Result<String>;
}

/// Best-effort user-facing notifications. Errors are logged by the caller and never fatal.
pub trait Notifier {
    fn notify(&self, title: &str, message: &str) -> Result<()>;
}

/// What to copy from each file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyRequest {
    pub paths: Vec<PathBuf>,
    pub selection: Selection,
    pub format: FormatMode,
}

/// Notification titles used by [`Copier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationTitles {
    pub summary: String,
    pub error: String,
}

impl NotificationTitles {
    pub fn from_config(config: &Config) -> Self {
        Self {
            summary: config.notifications.title(),
            error: config.notifications.error_title(),
        }
    }
}

impl Default for NotificationTitles {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Drives one invocation: read files in order, tolerate per-file failures, write the clipboard
/// once.
pub struct Copier<'a> {
    clipboard: &'a mut dyn ClipboardSink,
    notifier: &'a dyn Notifier,
    titles: NotificationTitles,
}

impl<'a> Copier<'a> {
    pub fn new(
        clipboard: &'a mut dyn ClipboardSink,
        notifier: &'a dyn Notifier,
        titles: NotificationTitles,
    ) -> Self {
        Self {
            clipboard,
            notifier,
            titles,
        }
    }

    /// Read every path in order. Failures are logged and notified but do not stop the batch.
    pub fn read_all(&self, request: &CopyRequest) -> Vec<FileOutcome> {
        request
            .paths
            .iter()
            .map(|path| {
                let outcome = FileOutcome {
                    path: path.clone(),
                    result: read_selection(path, &request.selection, request.format),
                };
                self.report_failure(&outcome);
                outcome
            })
            .collect()
    }

    /// Read, aggregate, and copy. Fails only when no file could be read or the clipboard
    /// write fails.
    pub fn run(&mut self, request: &CopyRequest) -> Result<RunSummary, CopyError> {
        let outcomes = self.read_all(request);
        let summary = RunSummary::from_outcomes(outcomes);

        if summary.succeeded == 0 {
            return Err(CopyError::AllFilesFailed {
                failed: summary.failed,
            });
        }

        debug!(bytes = summary.payload.len(), "writing payload to clipboard");
        self.clipboard
            .write_text(&summary.payload)
            .map_err(CopyError::Clipboard)?;

        self.send(&self.titles.summary, &summary.message());
        Ok(summary)
    }

    fn report_failure(&self, outcome: &FileOutcome) {
        let Err(err) = &outcome.result else {
            return;
        };
        let message = format!("Error reading '{}': {err}", outcome.path.display());
        error!("{message}");
        self.send(&self.titles.error, &message);
    }

    fn send(&self, title: &str, message: &str) {
        if let Err(err) = self.notifier.notify(title, message) {
            warn!("Warning: {err:#}");
        }
    }
}
