//! Desktop notifications.

use std::time::Duration;

use anyhow::{Result, anyhow};
use notify_rust::{Notification, Timeout};

use crate::app::copy::Notifier;
use crate::infra::config::Config;

/// Sends notifications through the platform notification service.
#[derive(Debug, Clone)]
pub struct DesktopNotifier {
    timeout: Duration,
}

impl DesktopNotifier {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, title: &str, message: &str) -> Result<()> {
        let timeout = u32::try_from(self.timeout.as_millis()).unwrap_or(u32::MAX);
        Notification::new()
            .summary(title)
            .body(message)
            .timeout(Timeout::Milliseconds(timeout))
            .show()
            .map(|_| ())
            .map_err(|err| anyhow!("notification failed: {err}"))
    }
}

/// Swallows every notification; used for `--silent`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _title: &str, _message: &str) -> Result<()> {
        Ok(())
    }
}

/// Pick the notifier for this run. The `--silent` flag and a disabled config both mute output.
pub fn notifier_for(config: &Config, silent: bool) -> Box<dyn Notifier> {
    if silent || !config.notifications.enabled() {
        Box::new(SilentNotifier)
    } else {
        Box::new(DesktopNotifier::new(config.notifications.timeout()))
    }
}
