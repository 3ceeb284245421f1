//! The frame loop.

use std::io::Write;
use std::path::Path;

use super::clock::PlaybackClock;
use super::state::{PlaybackConfig, PlaybackResult, PlaybackSummary, PlayerState};
use crate::cancel::CancellationToken;
use crate::error::{BappleError, Result};
use crate::external::{AudioHandle, AudioPlayer, TextRenderer};
use crate::frames::FrameSequence;
use crate::terminal::TerminalController;

/// Plays a frame sequence as a looping terminal animation.
///
/// The audio player (if any) is started once before the first pass and is
/// not resynchronized afterwards; it does not loop with the video.
pub struct Player<'a> {
    renderer: &'a dyn TextRenderer,
    audio_player: Option<&'a dyn AudioPlayer>,
    cancel: CancellationToken,
    state: PlayerState,
}

impl<'a> Player<'a> {
    pub fn new(renderer: &'a dyn TextRenderer, cancel: CancellationToken) -> Self {
        Self {
            renderer,
            audio_player: None,
            cancel,
            state: PlayerState::Idle,
        }
    }

    pub fn with_audio_player(mut self, audio_player: &'a dyn AudioPlayer) -> Self {
        self.audio_player = Some(audio_player);
        self
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    /// Ask a running `play` to wind down, same as an interrupt signal.
    pub fn stop(&self) {
        self.cancel.stop();
    }

    /// Play `frames` until stopped or until `config.max_passes` passes are done.
    ///
    /// The cursor is hidden for the duration and restored on every exit path.
    /// A frame the renderer fails on is skipped; its time slot is still paced.
    pub fn play<W: Write>(
        &mut self,
        term: &mut TerminalController<W>,
        frames: &FrameSequence,
        audio: Option<&Path>,
        config: PlaybackConfig,
    ) -> Result<PlaybackSummary> {
        if frames.is_empty() {
            return Err(BappleError::EmptyFrameSet {
                dir: frames.dir().to_path_buf(),
            });
        }
        if config.fps == 0 {
            return Err(BappleError::Config("fps must be positive".to_string()));
        }

        let mut term = term.hide_cursor_scoped()?;

        let mut audio_handle = match (self.audio_player, audio) {
            (Some(player), Some(path)) => {
                self.transition(PlayerState::AudioStarting);
                self.start_audio(player, path)
            }
            _ => None,
        };

        let outcome = match term.clear_screen() {
            Ok(()) => {
                self.transition(PlayerState::Looping);
                self.run_passes(&mut *term, frames, config)
            }
            Err(e) => Err(e.into()),
        };

        self.transition(PlayerState::Stopping);
        if let Some(handle) = audio_handle.as_mut() {
            if let Err(e) = handle.stop() {
                tracing::warn!(error = %e, "failed to stop audio player");
            }
        }
        if let Err(e) = reset_screen(&mut *term) {
            tracing::warn!(error = %e, "failed to clear screen");
        }
        drop(term);
        self.transition(PlayerState::Idle);

        let summary = outcome?;
        tracing::info!(
            result = ?summary.result,
            passes = summary.passes,
            frames = summary.frames_shown,
            "playback stopped"
        );
        Ok(summary)
    }

    fn start_audio(
        &self,
        player: &dyn AudioPlayer,
        path: &Path,
    ) -> Option<Box<dyn AudioHandle>> {
        match player.start(path) {
            Ok(handle) => Some(handle),
            Err(e) => {
                tracing::warn!(tool = player.name(), error = %e, "playing without audio");
                None
            }
        }
    }

    fn run_passes<W: Write>(
        &self,
        term: &mut TerminalController<W>,
        frames: &FrameSequence,
        config: PlaybackConfig,
    ) -> Result<PlaybackSummary> {
        let mut clock = PlaybackClock::new(config.fps);
        let mut summary = PlaybackSummary {
            result: PlaybackResult::Interrupted,
            passes: 0,
            frames_shown: 0,
        };

        loop {
            if config.max_passes.is_some_and(|max| summary.passes >= max) {
                summary.result = PlaybackResult::LoopLimitReached;
                return Ok(summary);
            }

            clock.restart();
            for (index, frame) in frames.iter().enumerate() {
                if self.cancel.is_cancelled() {
                    return Ok(summary);
                }

                term.home_cursor()?;
                match self.renderer.render(frame) {
                    Ok(text) => term.write_frame(&text)?,
                    Err(error) => {
                        let err = BappleError::RenderFrameFailed {
                            index: index + 1,
                            error,
                        };
                        tracing::debug!(error = %err, "skipping frame");
                        term.write_frame(b"")?;
                    }
                }
                summary.frames_shown += 1;

                let deadline = clock.frame_shown();
                if self.cancel.wait_until(deadline) {
                    return Ok(summary);
                }
            }
            summary.passes += 1;
        }
    }

    fn transition(&mut self, next: PlayerState) {
        tracing::debug!(from = ?self.state, to = ?next, "player state");
        self.state = next;
    }
}

/// Leave a blank screen with the cursor at the top-left.
fn reset_screen<W: Write>(term: &mut TerminalController<W>) -> std::io::Result<()> {
    term.clear_screen()?;
    term.home_cursor()?;
    term.write_frame(b"")
}
