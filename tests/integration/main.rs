//! Integration tests for the bapple binary

mod helpers;

mod cli_test;
#[cfg(unix)]
mod config_test;
#[cfg(unix)]
mod playback_test;
