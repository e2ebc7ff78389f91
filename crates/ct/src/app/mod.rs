//! Application layer orchestrating domain logic and infrastructure.

pub mod copy;
pub mod reader;
pub mod selection;
