use std::process::Command;
use tempfile::TempDir;

/// End-to-end run of the binary with no size arguments: the full default
/// batch lands in the output directory and progress is reported per artifact.
#[test]
fn test_cli_default_batch() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let out_dir = temp_dir.path().join("icons");

    let output = Command::new(env!("CARGO_BIN_EXE_wallet-icon-gen"))
        .arg("-o")
        .arg(&out_dir)
        .output()
        .expect("Failed to run wallet-icon-gen");

    if !output.status.success() {
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("wallet-icon-gen failed");
    }

    for name in [
        "icon.png",
        "icon_512x512.png",
        "icon_256x256.png",
        "icon_128x128.png",
        "icon_64x64.png",
        "icon_32x32.png",
        "icon_16x16.png",
    ] {
        assert!(out_dir.join(name).exists(), "{} should exist", name);
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Creating 1024x1024 icon..."));
    assert_eq!(stdout.matches("✓ Created").count(), 7);
}

/// Custom sizes replace the default batch; the first becomes icon.png.
#[test]
fn test_cli_custom_sizes() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let out_dir = temp_dir.path().join("icons");

    let output = Command::new(env!("CARGO_BIN_EXE_wallet-icon-gen"))
        .arg("-o")
        .arg(&out_dir)
        .arg("--png")
        .arg("128,64")
        .output()
        .expect("Failed to run wallet-icon-gen");

    assert!(output.status.success());
    assert!(out_dir.join("icon.png").exists());
    assert!(out_dir.join("icon_64x64.png").exists());
    assert_eq!(std::fs::read_dir(&out_dir).unwrap().count(), 2);

    let decoded = image::open(out_dir.join("icon.png")).expect("valid PNG");
    assert_eq!(decoded.width(), 128);
}

/// An unparsable CSS color is reported as an error, not silently defaulted.
#[test]
fn test_cli_rejects_invalid_color() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let output = Command::new(env!("CARGO_BIN_EXE_wallet-icon-gen"))
        .arg("-o")
        .arg(temp_dir.path())
        .arg("--primary")
        .arg("not-a-color")
        .output()
        .expect("Failed to run wallet-icon-gen");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid CSS color"));
}
