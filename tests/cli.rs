use std::process::Command;

use image::{Rgb, RgbImage};

fn iconset() -> Command {
    Command::new(env!("CARGO_BIN_EXE_iconset"))
}

#[test]
fn small_target_exits_with_tagged_diagnostic() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("source.png");
    RgbImage::from_pixel(32, 32, Rgb([1, 2, 3])).save(&input).unwrap();
    let out = dir.path().join("icons");

    let output = iconset()
        .arg("--input")
        .arg(&input)
        .arg("--output-dir")
        .arg(&out)
        .args(["--target", "256"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("[generate_icon_set] Target size must be at least 512"),
        "{stderr}"
    );
    assert!(!out.exists());
}

#[test]
fn missing_input_exits_with_tagged_diagnostic() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("icons");

    let output = iconset()
        .arg("--input")
        .arg(dir.path().join("absent.png"))
        .arg("--output-dir")
        .arg(&out)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("[generate_icon_set] Input image not found"),
        "{stderr}"
    );
    assert!(!out.exists());
}

#[test]
fn unknown_flags_are_rejected() {
    let output = iconset().arg("--sizes").arg("16").output().unwrap();
    assert!(!output.status.success());
}
