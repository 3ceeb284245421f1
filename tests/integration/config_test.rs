//! Config file handling

use crate::helpers::Sandbox;

#[test]
fn config_values_apply() {
    let sandbox = Sandbox::complete(2);
    sandbox.write_config(
        r#"
[playback]
width = 12
height = 6
fps = 100
audio = false
"#,
    );

    let run = sandbox.run(&["--loops", "1"]);

    assert_eq!(run.code, 0, "stderr: {}", run.stderr);
    assert!(run.stdout.contains("Settings: 12x6 @ 100fps"));
    assert_eq!(sandbox.calls("ffplay"), 0);
}

#[test]
fn command_line_overrides_config() {
    let sandbox = Sandbox::complete(2);
    sandbox.write_config("[playback]\nwidth = 12\nheight = 6\nfps = 100\n");

    let run = sandbox.run(&["--loops", "1", "--no-audio", "-w", "20"]);

    assert_eq!(run.code, 0, "stderr: {}", run.stderr);
    assert!(run.stdout.contains("Settings: 20x6 @ 100fps"));
}

#[test]
fn renderer_args_from_config_reach_chafa() {
    let sandbox = Sandbox::complete(1);
    sandbox.write_config("[playback]\nfps = 100\naudio = false\n\n[renderer]\nargs = \"--symbols block\"\n");

    let run = sandbox.run(&["--loops", "1", "-w", "8", "--height", "4"]);

    assert_eq!(run.code, 0, "stderr: {}", run.stderr);
    let log = std::fs::read_to_string(sandbox.log("chafa")).unwrap();
    assert!(log.contains("--format symbols --size 8x4 --animate off --symbols block"));
}

#[test]
fn unknown_config_key_exits_1() {
    let sandbox = Sandbox::complete(1);
    sandbox.write_config("[playback]\nspeed = 2\n");

    let run = sandbox.run(&["--loops", "1"]);

    assert_eq!(run.code, 1);
    assert!(run.stderr.contains("Error: Invalid config"));
}

#[test]
fn explicit_config_flag_wins_over_environment() {
    let sandbox = Sandbox::complete(1);
    sandbox.write_config("[playback]\nspeed = 2\n");
    let other = sandbox.cache().join("other.toml");
    std::fs::write(&other, "[playback]\nfps = 100\naudio = false\n").unwrap();

    let run = sandbox.run(&["--loops", "1", "--config", other.to_str().unwrap()]);

    assert_eq!(run.code, 0, "stderr: {}", run.stderr);
}
