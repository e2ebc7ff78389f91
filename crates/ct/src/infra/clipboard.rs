//! Clipboard integration utilities.

use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::{Context, Result, anyhow};
use tracing::{debug, warn};

use crate::app::copy::ClipboardSink;

/// Places a clipboard write can go to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Backend {
    /// The in-process `arboard` handle.
    System,
    /// External executables such as `xclip` or `pbcopy`.
    Commands,
}

/// Cross-platform clipboard helper with fallbacks for headless environments.
pub struct Clipboard {
    primary: Option<arboard::Clipboard>,
}

impl Clipboard {
    /// Attempt to initialize the system clipboard. When unavailable we fall back to shell-based
    /// clipboard utilities.
    pub fn new() -> Self {
        let primary = match arboard::Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(err) => {
                debug!(error = %err, "system clipboard unavailable, using command fallbacks");
                None
            }
        };
        Self { primary }
    }

    /// Copy text to the clipboard, trying each backend in platform order.
    ///
    /// The error of the last backend tried is kept as the cause when all of them fail.
    pub fn copy(&mut self, text: &str) -> Result<()> {
        let mut last_error = None;
        for backend in copy_order() {
            let attempt = match backend {
                Backend::System => self.system_copy(text),
                Backend::Commands => command_copy(copy_commands(), text),
            };
            match attempt {
                Ok(()) => return Ok(()),
                Err(err) => {
                    debug!(?backend, "clipboard backend failed: {err:#}");
                    last_error = Some(err);
                }
            }
        }

        let err = last_error.unwrap_or_else(|| anyhow!("no clipboard backend configured"));
        Err(err.context("failed to copy text to clipboard using available backends"))
    }

    /// Read the current clipboard text.
    pub fn paste(&mut self) -> Result<String> {
        if let Some(primary) = self.primary.as_mut()
            && let Ok(text) = primary.get_text()
        {
            return Ok(text);
        }

        fallback_paste()
    }

    fn system_copy(&mut self, text: &str) -> Result<()> {
        let primary = self
            .primary
            .as_mut()
            .context("system clipboard unavailable")?;
        if let Err(err) = primary.set_text(text.to_owned()) {
            self.primary = None;
            return Err(anyhow!("system clipboard rejected text: {err}"));
        }
        if LOSES_SELECTION_ON_EXIT {
            warn!(
                "copied through the in-process clipboard; contents survive exit only if a \
                 clipboard manager takes them over"
            );
        }
        Ok(())
    }
}

impl Default for Clipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardSink for Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.copy(text)
    }

    fn read_text(&mut self) -> Result<String> {
        self.paste()
    }
}

/// On X11 and Wayland the selection belongs to a live process. `xclip` and `wl-copy` fork and
/// keep serving it after `ct` exits, while an `arboard` handle dies with us.
const LOSES_SELECTION_ON_EXIT: bool = cfg!(all(unix, not(target_os = "macos")));

fn copy_order() -> [Backend; 2] {
    if LOSES_SELECTION_ON_EXIT {
        [Backend::Commands, Backend::System]
    } else {
        [Backend::System, Backend::Commands]
    }
}

fn command_copy(commands: Vec<&[&str]>, text: &str) -> Result<()> {
    let mut last_error = None;
    for command in commands {
        match try_command_copy(command, text) {
            Ok(()) => return Ok(()),
            Err(err) => {
                debug!("clipboard command failed: {err:#}");
                last_error = Some(err);
            }
        }
    }

    Err(last_error.unwrap_or_else(|| anyhow!("no clipboard commands available on this platform")))
}

fn fallback_paste() -> Result<String> {
    for command in paste_commands() {
        if let Ok(text) = try_command_paste(command) {
            return Ok(text);
        }
    }

    Err(anyhow!(
        "failed to read clipboard using available backends"
    ))
}

fn try_command_copy(command: &[&str], text: &str) -> Result<()> {
    let (program, args) = command
        .split_first()
        .context("clipboard command missing program")?;

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("failed to spawn clipboard command: {program}"))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .context("failed to write clipboard contents")?;
    }

    let status = child
        .wait()
        .with_context(|| format!("clipboard command did not exit cleanly: {program}"))?;
    if status.success() {
        Ok(())
    } else {
        Err(anyhow!("clipboard command exited with status {status}"))
    }
}

fn try_command_paste(command: &[&str]) -> Result<String> {
    let (program, args) = command
        .split_first()
        .context("clipboard command missing program")?;

    let output = Command::new(program)
        .args(args)
        .stderr(Stdio::null())
        .output()
        .with_context(|| format!("failed to run clipboard command: {program}"))?;
    if !output.status.success() {
        return Err(anyhow!("clipboard command exited with status {}", output.status));
    }
    String::from_utf8(output.stdout).context("clipboard contents are not valid UTF-8")
}

#[cfg(target_os = "macos")]
fn copy_commands() -> Vec<&'static [&'static str]> {
    vec![&["pbcopy"]]
}

#[cfg(target_os = "macos")]
fn paste_commands() -> Vec<&'static [&'static str]> {
    vec![&["pbpaste"]]
}

#[cfg(all(unix, not(target_os = "macos")))]
fn copy_commands() -> Vec<&'static [&'static str]> {
    vec![&["xclip", "-selection", "clipboard"], &["wl-copy"]]
}

#[cfg(all(unix, not(target_os = "macos")))]
fn paste_commands() -> Vec<&'static [&'static str]> {
    vec![&["xclip", "-selection", "clipboard", "-o"], &["wl-paste", "--no-newline"]]
}

#[cfg(target_os = "windows")]
fn copy_commands() -> Vec<&'static [&'static str]> {
    vec![&["powershell.exe", "-NoProfile", "-Command", "Set-Clipboard"]]
}

#[cfg(target_os = "windows")]
fn paste_commands() -> Vec<&'static [&'static str]> {
    vec![&["powershell.exe", "-NoProfile", "-Command", "Get-Clipboard -Raw"]]
}

#[cfg(not(any(unix, target_os = "windows")))]
fn copy_commands() -> Vec<&'static [&'static str]> {
    Vec::new()
}

#[cfg(not(any(unix, target_os = "windows")))]
fn paste_commands() -> Vec<&'static [&'static str]> {
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_command_is_rejected() {
        let err = try_command_copy(&[], "text").unwrap_err();
        assert!(err.to_string().contains("missing program"));
        assert!(try_command_paste(&[]).is_err());
    }

    #[test]
    fn unknown_program_fails_to_spawn() {
        let err = try_command_copy(&["ct-no-such-clipboard-tool"], "text").unwrap_err();
        assert!(err.to_string().contains("failed to spawn"));
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    #[test]
    fn linux_prefers_persistent_command_backends() {
        assert_eq!(copy_order(), [Backend::Commands, Backend::System]);
    }

    #[cfg(any(target_os = "macos", target_os = "windows"))]
    #[test]
    fn native_clipboard_is_tried_first_elsewhere() {
        assert_eq!(copy_order(), [Backend::System, Backend::Commands]);
    }

    #[cfg(unix)]
    #[test]
    fn command_copy_falls_through_to_a_working_command() {
        let failing: &[&str] = &["sh", "-c", "cat >/dev/null; exit 3"];
        let working: &[&str] = &["sh", "-c", "cat >/dev/null"];
        command_copy(vec![failing, working], "text").unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn command_copy_keeps_the_last_failure_as_cause() {
        let missing: &[&str] = &["ct-no-such-clipboard-tool"];
        let failing: &[&str] = &["sh", "-c", "cat >/dev/null; exit 3"];
        let err = command_copy(vec![missing, failing], "text").unwrap_err();
        assert!(format!("{err:#}").contains("exited with status"));
    }

    #[test]
    fn empty_command_list_is_an_error() {
        let err = command_copy(Vec::new(), "text").unwrap_err();
        assert!(err.to_string().contains("no clipboard commands"));
    }

    #[cfg(unix)]
    #[test]
    fn command_paste_captures_stdout() {
        let text = try_command_paste(&["printf", "hello"]).unwrap();
        assert_eq!(text, "hello");
    }

    #[cfg(unix)]
    #[test]
    fn command_copy_reports_nonzero_exit() {
        let err = try_command_copy(&["sh", "-c", "cat >/dev/null; exit 3"], "text").unwrap_err();
        assert!(err.to_string().contains("exited with status"));
    }
}
