//! End-to-end runs against fake ffmpeg/chafa/ffplay

use std::fs;

use crate::helpers::Sandbox;

const FAST: &[&str] = &["--loops", "1", "--fps", "100", "-w", "10", "--height", "5"];

fn args(extra: &[&'static str]) -> Vec<&'static str> {
    FAST.iter().chain(extra).copied().collect()
}

#[test]
fn missing_video_exits_1_with_download_hint() {
    let sandbox = Sandbox::new().with_ffmpeg(3).with_chafa().with_ffplay();

    let run = sandbox.run(&args(&[]));

    assert_eq!(run.code, 1);
    assert!(run.stderr.contains("Error: Video not found"));
    assert!(run.stderr.contains("badapple.mp4"));
    assert!(run.stderr.contains("download.sh"));
    assert_eq!(sandbox.calls("ffmpeg"), 0);
}

#[test]
fn renders_every_frame_once_per_pass() {
    let sandbox = Sandbox::complete(3);

    let run = sandbox.run(&args(&["--no-audio"]));

    assert_eq!(run.code, 0, "stderr: {}", run.stderr);
    assert!(run.stdout.contains("Rendering frames..."));
    assert!(run.stdout.contains("Settings: 10x5 @ 100fps"));
    assert!(run.stdout.contains("Extracted 3 frames"));
    assert!(run.stdout.contains("Ready: 3 frames"));
    assert!(run.stdout.contains("Press Ctrl+C to stop"));
    assert_eq!(run.stdout.matches("FRAME").count(), 3);
    assert_eq!(sandbox.calls("chafa"), 3);
    assert_eq!(sandbox.calls("ffplay"), 0);
}

#[test]
fn restores_cursor_on_exit() {
    let sandbox = Sandbox::complete(2);

    let run = sandbox.run(&args(&["--no-audio"]));

    assert_eq!(run.code, 0, "stderr: {}", run.stderr);
    let hide = run.stdout.find("\x1b[?25l").expect("cursor hidden");
    let show = run.stdout.rfind("\x1b[?25h").expect("cursor shown");
    assert!(hide < show);
}

#[test]
fn loops_repeat_the_sequence() {
    let sandbox = Sandbox::complete(2);

    let run = sandbox.run(&["--loops", "3", "--fps", "200", "--no-audio"]);

    assert_eq!(run.code, 0, "stderr: {}", run.stderr);
    assert_eq!(sandbox.calls("chafa"), 6);
}

#[test]
fn second_run_reuses_cached_frames() {
    let sandbox = Sandbox::complete(3);

    let first = sandbox.run(&args(&["--no-audio"]));
    assert_eq!(first.code, 0, "stderr: {}", first.stderr);

    let second = sandbox.run(&args(&["--no-audio"]));
    assert_eq!(second.code, 0, "stderr: {}", second.stderr);
    assert!(second.stdout.contains("Using 3 cached frames"));
    assert!(!second.stdout.contains("Rendering frames..."));
    assert_eq!(sandbox.calls("ffmpeg"), 1);
}

#[test]
fn changed_parameters_invalidate_cache() {
    let sandbox = Sandbox::complete(3);

    sandbox.run(&args(&["--no-audio"]));
    let run = sandbox.run(&["--loops", "1", "--fps", "100", "-w", "11", "--height", "5", "--no-audio"]);

    assert_eq!(run.code, 0, "stderr: {}", run.stderr);
    assert!(run.stdout.contains("Rendering frames..."));
    assert_eq!(sandbox.calls("ffmpeg"), 2);
}

#[test]
fn force_render_re_extracts() {
    let sandbox = Sandbox::complete(2);

    sandbox.run(&args(&["--no-audio"]));
    let run = sandbox.run(&args(&["--no-audio", "--force-render"]));

    assert_eq!(run.code, 0, "stderr: {}", run.stderr);
    assert!(run.stdout.contains("Rendering frames..."));
    assert_eq!(sandbox.calls("ffmpeg"), 2);
}

#[test]
fn audio_is_extracted_and_played() {
    let sandbox = Sandbox::complete(2);

    // slow enough for the audio process to start before it is stopped
    let run = sandbox.run(&["--loops", "1", "--fps", "5", "-w", "10", "--height", "5"]);

    assert_eq!(run.code, 0, "stderr: {}", run.stderr);
    assert!(run.stdout.contains("Extracting audio..."));
    assert!(run.stdout.contains("Audio extracted"));
    assert!(sandbox.cache().join("audio.m4a").exists());
    // frames + audio
    assert_eq!(sandbox.calls("ffmpeg"), 2);

    let ffplay = fs::read_to_string(sandbox.log("ffplay")).unwrap();
    assert!(ffplay.contains("-nodisp -autoexit"));
    assert!(ffplay.contains("audio.m4a"));
}

#[test]
fn zero_extracted_frames_exits_1() {
    let sandbox = Sandbox::complete(0);

    let run = sandbox.run(&args(&["--no-audio"]));

    assert_eq!(run.code, 1);
    assert!(run.stderr.contains("Error: No frames found"));
    assert!(!sandbox.cache().join("frames").join(".cache-key").exists());
    assert_eq!(sandbox.calls("chafa"), 0);
}
