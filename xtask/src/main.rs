//! Project maintenance tasks: `cargo run -p xtask -- man`

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask", about = "bapple maintenance tasks")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate the bapple(1) man page
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man { out_dir } => generate_man(out_dir),
    }
}

fn generate_man(out_dir: PathBuf) -> Result<()> {
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let cmd = bapple::cli::Cli::command();
    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd).render(&mut buffer)?;

    let path = out_dir.join("bapple.1");
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}
