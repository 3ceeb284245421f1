//! Command-line definition.
//!
//! Lives in the library so `xtask` can render the man page from it.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Shown under `--help`.
pub const ATTRIBUTION: &str = "\
Bad Apple!! - original song by Alstroemeria Records (feat. nomico),
shadow-art PV by Anira. Frames are drawn by chafa; decoding and audio by FFmpeg.

The video is expected at ~/.bapple-cache/badapple.mp4 (see --cache-dir).";

#[cfg(not(feature = "release"))]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("BAPPLE_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("BAPPLE_BUILD_DATE"),
    ")"
);

/// Bad Apple!! ASCII player
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "bapple",
    version,
    long_version = LONG_VERSION,
    about = "Bad Apple!! ASCII player - plays the cached video as looping text-art in your terminal",
    after_help = ATTRIBUTION
)]
pub struct Cli {
    /// Output width in columns [default: terminal width, else 80]
    #[arg(short, long, value_name = "COLS", value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Output height in rows [default: terminal height - 1, else 40]
    #[arg(long, value_name = "ROWS", value_parser = clap::value_parser!(u32).range(1..))]
    pub height: Option<u32>,

    /// Frames per second [default: 30]
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub fps: Option<u32>,

    /// Play without sound (ffplay is then not required)
    #[arg(long)]
    pub no_audio: bool,

    /// Re-extract frames and audio even if the cache is valid
    #[arg(long)]
    pub force_render: bool,

    /// Extra arguments passed to chafa [default: "--symbols ascii --fg-only"]
    #[arg(
        long = "chafa-args",
        visible_alias = "renderer-args",
        value_name = "ARGS",
        allow_hyphen_values = true
    )]
    pub chafa_args: Option<String>,

    /// Stop after N passes instead of looping until Ctrl+C
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub loops: Option<u64>,

    /// Cache directory holding badapple.mp4 [env: BAPPLE_CACHE_DIR]
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Configuration file [env: BAPPLE_CONFIG]
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log diagnostics to stderr (-v info, -vv debug; BAPPLE_LOG overrides)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
