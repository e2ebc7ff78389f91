//! Core types shared by the reader, the copy driver, and the CLI.

pub mod errors;
pub mod model;
