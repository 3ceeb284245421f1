//! Default command: prepare the cache and play until stopped

use std::path::PathBuf;

use anyhow::{Context, Result};

use bapple::cli::Cli;
use bapple::config::{current_terminal_size, CACHE_DIR_ENV};
use bapple::deps;
use bapple::external::{Chafa, Ffmpeg, Ffplay};
use bapple::player::{PlaybackConfig, PlaybackResult};
use bapple::terminal::TerminalController;
use bapple::{
    BappleError, CacheLayout, CacheManager, CancellationToken, Config, FrameSequence, Player,
    Settings,
};

/// Run the whole pipeline: dependencies, cache, frames, audio, playback.
#[cfg(not(tarpaulin_include))]
pub fn handle(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let settings = Settings::resolve(
        cli,
        &config,
        std::env::var_os(CACHE_DIR_ENV).map(PathBuf::from),
        current_terminal_size(),
    )?;
    tracing::debug!(?settings, "resolved settings");

    deps::check(&deps::required(settings.audio))?;

    let layout = CacheLayout::new(&settings.cache_root);
    layout.require_video()?;

    let ffmpeg = Ffmpeg::new();
    let cache = CacheManager::new(&layout, &ffmpeg);
    cache.ensure_frames(settings.params, settings.force_render)?;
    let audio = settings.audio && cache.ensure_audio(settings.force_render);

    let frames_dir = layout.frames_dir();
    let frames = FrameSequence::scan(&frames_dir)
        .with_context(|| format!("Failed to read {}", frames_dir.display()))?;
    if frames.is_empty() {
        return Err(BappleError::EmptyFrameSet { dir: frames_dir }.into());
    }

    println!("Ready: {} frames", frames.len());
    println!("Press Ctrl+C to stop");

    let cancel = CancellationToken::new();
    cancel
        .install_interrupt_handler()
        .context("Failed to install interrupt handler")?;

    let renderer = Chafa::new(
        settings.params.width,
        settings.params.height,
        settings.renderer_args.clone(),
    );
    let ffplay = Ffplay::new();
    let mut player = Player::new(&renderer, cancel);
    if audio {
        player = player.with_audio_player(&ffplay);
    }

    let mut playback = PlaybackConfig::new(settings.params.fps);
    if let Some(passes) = settings.max_passes {
        playback = playback.with_max_passes(passes);
    }

    let audio_path = layout.audio();
    let mut term = TerminalController::stdout();
    let summary = player.play(
        &mut term,
        &frames,
        audio.then_some(audio_path.as_path()),
        playback,
    )?;

    match summary.result {
        PlaybackResult::Interrupted => tracing::info!(
            passes = summary.passes,
            frames = summary.frames_shown,
            "playback interrupted"
        ),
        PlaybackResult::LoopLimitReached => tracing::info!(
            passes = summary.passes,
            frames = summary.frames_shown,
            "loop limit reached"
        ),
    }
    Ok(())
}
