// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Run the `colorcycle` binary end to end. Every invocation passes `--config` so the
//! user's own config file is never read.

use std::{io::Write, path::Path};

use assert_cmd::Command;
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

/// The file is deleted when the returned [`NamedTempFile`] is dropped.
fn empty_config_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"{}").unwrap();
    file.flush().unwrap();
    file
}

fn colorcycle(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("colorcycle").unwrap();
    cmd.arg("--config").arg(config);
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.ok().unwrap();
    String::from_utf8_lossy(output.stdout.as_slice()).to_string()
}

#[test]
fn at_prints_hex_by_default() {
    let config = empty_config_file();
    let output = stdout_of(colorcycle(config.path()).args(["at", "00:30:00"]));
    // Hue 180 with the default saturation and luminescence.
    assert_eq!(output, "5f9f9f\n");
}

#[test]
fn at_prints_rgb() {
    let config = empty_config_file();
    let output =
        stdout_of(colorcycle(config.path()).args(["at", "00:00", "--mode", "rgb"]));
    assert_eq!(output, "rgb(159, 95, 95)\n");
}

#[test]
fn hour_does_not_change_the_color() {
    let config = empty_config_file();
    let morning = stdout_of(colorcycle(config.path()).args(["at", "05:30"]));
    let evening = stdout_of(colorcycle(config.path()).args(["at", "17:30"]));
    assert_eq!(morning, evening);
}

#[test]
fn convert_wraps_rgb_channels() {
    let config = empty_config_file();
    let output = stdout_of(colorcycle(config.path()).args([
        "convert", "--rgb", "256", "-1", "300", "--mode", "hex",
    ]));
    assert_eq!(output, "00ff2c\n");
}

#[test]
fn now_prints_six_hex_digits() {
    let config = empty_config_file();
    let output = stdout_of(colorcycle(config.path()).arg("now"));
    let hex = output.trim_end();
    assert_eq!(hex.len(), 6);
    assert!(hex.chars().all(|it| it.is_ascii_hexdigit() && !it.is_ascii_uppercase()));
}

#[test]
fn bogus_mode_fails_and_names_accepted_modes() {
    let config = empty_config_file();
    let output = colorcycle(config.path())
        .args(["at", "12:00", "--mode", "bogus"])
        .env("NO_COLOR", "1")
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(output.stderr.as_slice());
    assert!(stderr.contains("bogus"), "{stderr}");
    assert!(stderr.contains("hsl"), "{stderr}");
}

#[test]
fn hue_out_of_range_fails() {
    let config = empty_config_file();
    colorcycle(config.path())
        .args(["convert", "--hsl", "360", "1", "0.5"])
        .assert()
        .failure();
}

#[test]
fn reverse_and_no_reverse_conflict() {
    let config = empty_config_file();
    colorcycle(config.path())
        .args(["at", "00:15", "--reverse", "--no-reverse"])
        .assert()
        .failure();
}

#[test]
fn no_args_prints_help() {
    Command::cargo_bin("colorcycle")
        .unwrap()
        .assert()
        .failure();
}
