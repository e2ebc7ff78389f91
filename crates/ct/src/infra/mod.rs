//! Infrastructure adapters for the clipboard, desktop notifications, config, and logging.

pub mod clipboard;
pub mod config;
pub mod logging;
pub mod notify;
