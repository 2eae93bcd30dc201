//! CLI command implementations

pub mod message;
pub mod resolve;
pub mod steps;
pub mod update;
