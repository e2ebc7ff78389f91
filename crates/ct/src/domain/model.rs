//! Domain models for line selections, per-file outcomes, and run summaries.

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::domain::errors::ReadError;

/// Separator placed between the outputs of consecutive files.
pub const PAYLOAD_SEPARATOR: &str = "\n\n";

/// Which 1-based lines to keep from every input file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// Keep every line verbatim.
    #[default]
    All,
    /// Keep only the listed line numbers. Never empty, every entry is `>= 1`.
    Lines(BTreeSet<usize>),
}

impl Selection {
    /// Selection holding a single line.
    pub fn single(line: usize) -> Self {
        Selection::Lines(BTreeSet::from([line]))
    }

    pub fn contains(&self, line: usize) -> bool {
        match self {
            Selection::All => true,
            Selection::Lines(lines) => lines.contains(&line),
        }
    }
}

/// How kept lines of an explicit selection are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatMode {
    /// `"<n>. <text>"`
    #[default]
    Numbered,
    /// The line text as-is.
    Raw,
}

impl FormatMode {
    pub fn from_strip_flag(without_line_numbers: bool) -> Self {
        if without_line_numbers {
            FormatMode::Raw
        } else {
            FormatMode::Numbered
        }
    }

    pub fn render(self, line_no: usize, text: &str) -> String {
        match self {
            FormatMode::Numbered => format!("{line_no}. {text}"),
            FormatMode::Raw => text.to_owned(),
        }
    }
}

/// Result of reading one input path.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: Result<String, ReadError>,
}

/// Totals and the combined clipboard payload for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failed: usize,
    pub payload: String,
}

impl RunSummary {
    /// Fold per-file outcomes in input order. Failed files contribute nothing to the payload.
    pub fn from_outcomes(outcomes: Vec<FileOutcome>) -> Self {
        let mut parts = Vec::with_capacity(outcomes.len());
        let mut failed = 0;
        for outcome in outcomes {
            match outcome.result {
                Ok(text) => parts.push(text),
                Err(_) => failed += 1,
            }
        }

        Self {
            succeeded: parts.len(),
            failed,
            payload: parts.join(PAYLOAD_SEPARATOR),
        }
    }

    /// One-line human readable summary printed on success.
    pub fn message(&self) -> String {
        let mut message = format!("Successfully copied {} file(s) to clipboard", self.succeeded);
        if self.failed > 0 {
            message.push_str(&format!(" ({} failed)", self.failed));
        }
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(path: &str, text: &str) -> FileOutcome {
        FileOutcome {
            path: path.into(),
            result: Ok(text.to_owned()),
        }
    }

    fn missing(path: &str) -> FileOutcome {
        FileOutcome {
            path: path.into(),
            result: Err(ReadError::NoMatchingLines { path: path.into() }),
        }
    }

    #[test]
    fn numbered_mode_prefixes_line_number() {
        assert_eq!(FormatMode::Numbered.render(7, "let x = 1;"), "7. let x = 1;");
        assert_eq!(FormatMode::Raw.render(7, "let x = 1;"), "let x = 1;");
    }

    #[test]
    fn all_selection_contains_every_line() {
        assert!(Selection::All.contains(1));
        assert!(Selection::All.contains(10_000));
        assert!(Selection::single(4).contains(4));
        assert!(!Selection::single(4).contains(5));
    }

    #[test]
    fn summary_joins_successes_in_order_and_counts_failures() {
        let summary = RunSummary::from_outcomes(vec![
            ok("a.txt", "x\ny\nz"),
            missing("gone.txt"),
            ok("b.txt", "p\nq"),
        ]);
        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.payload, "x\ny\nz\n\np\nq");
        assert_eq!(
            summary.message(),
            "Successfully copied 2 file(s) to clipboard (1 failed)"
        );
    }

    #[test]
    fn message_omits_failure_suffix_when_clean() {
        let summary = RunSummary::from_outcomes(vec![ok("a.txt", "x")]);
        assert_eq!(summary.message(), "Successfully copied 1 file(s) to clipboard");
    }
}
