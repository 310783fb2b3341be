//! End-to-end tests for the gen-sfx binary
//!
//! Runs the built executable and checks exit status and output files.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn gen_sfx(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gen-sfx"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run gen-sfx")
}

#[test]
fn test_swoosh_writes_wav() {
    let dir = tempdir().expect("Failed to create temp dir");

    let output = gen_sfx(&["swoosh", "--seed", "42"], dir.path());
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    // Default output lands in ./assets, which is created on demand
    let path = dir.path().join("assets").join("swoosh.wav");
    let data = std::fs::read(&path).expect("swoosh.wav should exist");
    assert_eq!(data.len(), 44 + 11025 * 2);
    assert_eq!(&data[0..4], b"RIFF");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("11025 samples"));
    assert!(stdout.contains("seed 42"));
}

#[test]
fn test_swoosh_flag_overrides() {
    let dir = tempdir().expect("Failed to create temp dir");

    let output = gen_sfx(
        &[
            "swoosh",
            "-o",
            "short.wav",
            "--sample-rate",
            "22050",
            "--duration",
            "0.1",
            "--seed",
            "1",
        ],
        dir.path(),
    );
    assert!(output.status.success());

    let data = std::fs::read(dir.path().join("short.wav")).unwrap();
    assert_eq!(data.len(), 44 + 2205 * 2);
    assert_eq!(u32::from_le_bytes(data[24..28].try_into().unwrap()), 22050);
}

#[test]
fn test_swoosh_rejects_non_positive_decay() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(
        dir.path().join("bad.toml"),
        "[[voices]]\nstart_freq = 2000.0\nfreq_decay = -15.0\n",
    )
    .unwrap();

    let output = gen_sfx(&["swoosh", "-c", "bad.toml", "-o", "out/bad.wav"], dir.path());
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("freq_decay"));
    assert!(!dir.path().join("out").exists());
}

#[test]
fn test_swoosh_all_weights_zero_fails() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(
        dir.path().join("silent.toml"),
        r#"
        [[voices]]
        weight = 0.0

        [noise]
        weight = 0.0
        "#,
    )
    .unwrap();

    let output = gen_sfx(
        &["swoosh", "-c", "silent.toml", "-o", "out/silent.wav"],
        dir.path(),
    );
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("degenerate"));
    // Failed renders leave neither a file nor its directory behind
    assert!(!dir.path().join("out").exists());
}

#[test]
fn test_swoosh_rejects_huge_fade() {
    let dir = tempdir().expect("Failed to create temp dir");

    let output = gen_sfx(
        &["swoosh", "--fade", "1e20", "-o", "out/long.wav"],
        dir.path(),
    );
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("fade"), "stderr: {}", stderr);
    assert!(!stderr.contains("panicked"), "stderr: {}", stderr);
    assert!(!dir.path().join("out").exists());
}

#[test]
fn test_check_rejects_huge_duration() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(
        dir.path().join("sfx.toml"),
        "[[sounds]]\nid = \"endless\"\nduration = 1e15\n",
    )
    .unwrap();

    let output = gen_sfx(&["check"], dir.path());
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("endless"), "stderr: {}", stderr);
    assert!(stderr.contains("duration"), "stderr: {}", stderr);
}

#[test]
fn test_build_and_check_manifest() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(
        dir.path().join("sfx.toml"),
        r#"
        output_dir = "sounds"

        [[sounds]]
        id = "swoosh"
        seed = 1

        [[sounds]]
        id = "swoosh_long"
        seed = 2
        duration = 0.5
        "#,
    )
    .unwrap();

    let check = gen_sfx(&["check"], dir.path());
    assert!(check.status.success());
    assert!(!dir.path().join("sounds").exists(), "check must not render");

    let build = gen_sfx(&["build"], dir.path());
    assert!(
        build.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&build.stderr)
    );
    assert!(dir.path().join("sounds/swoosh.wav").exists());

    let long = std::fs::read(dir.path().join("sounds/swoosh_long.wav")).unwrap();
    assert_eq!(long.len(), 44 + 22050 * 2);
}

#[test]
fn test_check_reports_invalid_manifest() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(
        dir.path().join("sfx.toml"),
        "[[sounds]]\nid = \"clicky\"\nfade = 1.0\n",
    )
    .unwrap();

    let output = gen_sfx(&["check"], dir.path());
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("clicky"));
}
