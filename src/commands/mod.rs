//! Command handlers for the CLI

pub mod play;
