//! Configuration file and effective run settings.
//!
//! Precedence for every value: command line, then environment, then the
//! config file, then terminal-derived or built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::cache::{CacheLayout, RenderParameters};
use crate::cli::Cli;

/// Environment variable naming an alternate config file.
pub const CONFIG_ENV: &str = "BAPPLE_CONFIG";
/// Environment variable naming the cache directory.
pub const CACHE_DIR_ENV: &str = "BAPPLE_CACHE_DIR";

pub const DEFAULT_WIDTH: u32 = 80;
pub const DEFAULT_HEIGHT: u32 = 40;
pub const DEFAULT_FPS: u32 = 30;
pub const DEFAULT_RENDERER_ARGS: &str = "--symbols ascii --fg-only";

/// Contents of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub playback: PlaybackSection,
    pub renderer: RendererSection,
    pub cache: CacheSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlaybackSection {
    /// Fixed width; unset means terminal width
    pub width: Option<u32>,
    /// Fixed height; unset means terminal height - 1
    pub height: Option<u32>,
    pub fps: u32,
    pub audio: bool,
}

impl Default for PlaybackSection {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            fps: DEFAULT_FPS,
            audio: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RendererSection {
    /// Whitespace-separated chafa arguments
    pub args: String,
}

impl Default for RendererSection {
    fn default() -> Self {
        Self {
            args: DEFAULT_RENDERER_ARGS.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CacheSection {
    /// Cache root; unset means `~/.bapple-cache`
    pub dir: Option<PathBuf>,
}

impl Config {
    /// `$BAPPLE_CONFIG`, else `<config dir>/bapple/config.toml`.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("bapple").join("config.toml"))
    }

    /// Load from the default location; a missing file means defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`; a missing file means defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Invalid config {}", path.display()))
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub params: RenderParameters,
    pub audio: bool,
    pub force_render: bool,
    pub renderer_args: Vec<String>,
    pub cache_root: PathBuf,
    pub max_passes: Option<u64>,
}

impl Settings {
    /// Merge command line, environment and config.
    ///
    /// `env_cache_dir` is the value of `BAPPLE_CACHE_DIR`; `terminal` the
    /// current terminal size in (columns, rows) if stdout is a terminal.
    pub fn resolve(
        cli: &Cli,
        config: &Config,
        env_cache_dir: Option<PathBuf>,
        terminal: Option<(u16, u16)>,
    ) -> Result<Self> {
        let (term_width, term_height) = terminal_dimensions(terminal);

        let width = cli
            .width
            .or(config.playback.width)
            .or(term_width)
            .unwrap_or(DEFAULT_WIDTH);
        let height = cli
            .height
            .or(config.playback.height)
            .or(term_height)
            .unwrap_or(DEFAULT_HEIGHT);
        let fps = cli.fps.unwrap_or(config.playback.fps);
        let params = RenderParameters::new(width, height, fps)?;

        let renderer_args = cli
            .chafa_args
            .as_deref()
            .unwrap_or(&config.renderer.args)
            .split_whitespace()
            .map(str::to_string)
            .collect();

        let cache_root = match cli
            .cache_dir
            .clone()
            .or(env_cache_dir)
            .or_else(|| config.cache.dir.clone())
        {
            Some(dir) => dir,
            None => CacheLayout::default_root().context("Could not determine home directory")?,
        };

        Ok(Self {
            params,
            audio: config.playback.audio && !cli.no_audio,
            force_render: cli.force_render,
            renderer_args,
            cache_root,
            max_passes: cli.loops,
        })
    }
}

/// Terminal columns and rows minus one (so output never scrolls); zero means unknown.
fn terminal_dimensions(terminal: Option<(u16, u16)>) -> (Option<u32>, Option<u32>) {
    match terminal {
        Some((cols, rows)) => {
            let width = Some(u32::from(cols)).filter(|w| *w > 0);
            let height = Some(u32::from(rows.saturating_sub(1))).filter(|h| *h > 0);
            (width, height)
        }
        None => (None, None),
    }
}

/// Current terminal size as (columns, rows), if stdout is a terminal.
pub fn current_terminal_size() -> Option<(u16, u16)> {
    terminal_size::terminal_size().map(|(w, h)| (w.0, h.0))
}
