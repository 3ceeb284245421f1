//! Shared helpers: an isolated environment with fake external tools.
//!
//! Fake tools are `/bin/sh` scripts using only shell builtins, so `PATH`
//! can point at nothing but the fake bin directory.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Captured result of one run.
pub struct Run {
    pub stdout: String,
    pub stderr: String,
    pub code: i32,
}

/// Temporary home with `bin/`, `cache/` and a config path.
pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("temp dir");
        fs::create_dir_all(dir.path().join("bin")).unwrap();
        fs::create_dir_all(dir.path().join("cache")).unwrap();
        Self { dir }
    }

    pub fn bin(&self) -> PathBuf {
        self.dir.path().join("bin")
    }

    pub fn cache(&self) -> PathBuf {
        self.dir.path().join("cache")
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    pub fn log(&self, tool: &str) -> PathBuf {
        self.dir.path().join(format!("{}.log", tool))
    }

    /// Number of recorded invocations of a fake tool.
    pub fn calls(&self, tool: &str) -> usize {
        fs::read_to_string(self.log(tool))
            .map(|s| s.lines().count())
            .unwrap_or(0)
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.config_path(), content).unwrap();
    }

    /// Place a dummy source video in the cache.
    pub fn with_video(self) -> Self {
        fs::write(self.cache().join("badapple.mp4"), b"not really a video").unwrap();
        self
    }

    /// Fake ffmpeg writing `frames` PNGs for frame extraction and a small
    /// file for audio extraction.
    pub fn with_ffmpeg(self, frames: usize) -> Self {
        let script = format!(
            r#"#!/bin/sh
echo "$*" >> "{log}"
for arg in "$@"; do out="$arg"; done
case "$out" in
  *frame_%05d.png)
    dir="${{out%/*}}"
    i=1
    while [ "$i" -le {frames} ]; do
      printf 'png' > "$(printf '%s/frame_%05d.png' "$dir" "$i")"
      i=$((i + 1))
    done
    ;;
  *)
    printf 'audio' > "$out"
    ;;
esac
exit 0
"#,
            log = self.log("ffmpeg").display(),
            frames = frames
        );
        self.install("ffmpeg", &script);
        self
    }

    /// Fake chafa printing one line per frame.
    pub fn with_chafa(self) -> Self {
        let script = format!(
            "#!/bin/sh\necho \"$*\" >> \"{}\"\nprintf 'FRAME\\n'\n",
            self.log("chafa").display()
        );
        self.install("chafa", &script);
        self
    }

    /// Fake ffplay that records its arguments and exits.
    pub fn with_ffplay(self) -> Self {
        let script = format!(
            "#!/bin/sh\necho \"$*\" >> \"{}\"\nexit 0\n",
            self.log("ffplay").display()
        );
        self.install("ffplay", &script);
        self
    }

    /// All three tools plus a source video.
    pub fn complete(frames: usize) -> Self {
        Self::new()
            .with_video()
            .with_ffmpeg(frames)
            .with_chafa()
            .with_ffplay()
    }

    fn install(&self, name: &str, script: &str) {
        let path = self.bin().join(name);
        fs::write(&path, script).unwrap();
        make_executable(&path);
    }

    /// Run bapple with a clean environment pointed at this sandbox.
    pub fn run(&self, args: &[&str]) -> Run {
        let output = Command::cargo_bin("bapple")
            .expect("bapple binary")
            .args(args)
            .env_clear()
            .env("PATH", self.bin())
            .env("HOME", self.dir.path())
            .env("BAPPLE_CACHE_DIR", self.cache())
            .env("BAPPLE_CONFIG", self.config_path())
            .env("NO_COLOR", "1")
            .timeout(std::time::Duration::from_secs(30))
            .output()
            .expect("Failed to execute bapple");

        Run {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            code: output.status.code().unwrap_or(-1),
        }
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) {}
