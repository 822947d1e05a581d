#![forbid(unsafe_code)]

//! `--config` and `--speed` resolution.

use std::io::Write;

use algoviz::cli::{Cli, PlaybackArgs, load_config, run};
use algoviz::error::EXIT_INPUT;
use clap::Parser;

fn write_config(name: &str, content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    (dir, path)
}

#[test]
fn speed_flag_overrides_the_file() {
    let (_dir, path) = write_config("pacing.toml", "speed = 4.0\nmin_run = 8\n");
    let playback = PlaybackArgs {
        speed: Some(2.0),
        config: Some(path),
        ..PlaybackArgs::default()
    };
    let config = load_config(&playback).unwrap();
    assert_eq!(config.speed, 2.0);
    assert_eq!(config.min_run, 8);
    assert_eq!(config.max_pause_ms, 2_000);
}

#[test]
fn json_config_is_picked_by_extension() {
    let (_dir, path) = write_config("pacing.json", r#"{"max_pause_ms": 10}"#);
    let playback = PlaybackArgs {
        config: Some(path),
        ..PlaybackArgs::default()
    };
    let config = load_config(&playback).unwrap();
    assert_eq!(config.max_pause_ms, 10);
    assert_eq!(config.speed, 1.0);
}

#[test]
fn config_file_drives_a_tim_sort() {
    let (_dir, path) = write_config("pacing.toml", "min_run = 2\n");
    let cli = Cli::try_parse_from([
        "algoviz",
        "--instant",
        "--quiet",
        "--config",
        path.to_str().unwrap(),
        "sort",
        "tim",
        "6, 5, 4, 3, 2, 1",
    ])
    .unwrap();
    let mut out = Vec::new();
    run(cli, &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert!(out.ends_with("result: 1, 2, 3, 4, 5, 6\n"), "{out}");
}

#[test]
fn invalid_config_is_an_input_error() {
    let (_dir, path) = write_config("pacing.toml", "min_run = 0\n");
    let cli = Cli::try_parse_from([
        "algoviz",
        "--config",
        path.to_str().unwrap(),
        "sort",
        "bubble",
        "2,1",
    ])
    .unwrap();
    let err = run(cli, &mut Vec::<u8>::new()).unwrap_err();
    assert_eq!(err.exit_code(), EXIT_INPUT);
    assert!(err.to_string().contains("min_run must be >= 1"), "{err}");
}
