use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::tempdir;

fn coverage_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_nvg_coverage"))
}

fn run(args: &[&str], cwd: &std::path::Path) -> Output {
    Command::new(coverage_bin())
        .args(args)
        .current_dir(cwd)
        .env("RUST_LOG", "warn")
        .output()
        .expect("run nvg_coverage")
}

#[test]
fn generate_writes_programs_and_runner() {
    let temp = tempdir().expect("tempdir");
    let out_dir = temp.path().join("out");
    let out_arg = out_dir.display().to_string();

    let output = run(&["generate", "--out-dir", &out_arg], temp.path());
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert!(out_dir.join("tests/test_beginframe_000.c").is_file());
    assert!(out_dir.join("tests/test_globalalpha_004.c").is_file());
    assert!(out_dir.join("tests/coverage_manifest.json").is_file());

    let runner = out_dir.join("run_coverage_tests.sh");
    let script = std::fs::read_to_string(&runner).expect("runner");
    assert!(script.starts_with("#!/bin/bash\n"));
    assert_eq!(script.matches("echo \"Running ").count(), 123);

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(&runner).expect("metadata").permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }
}

#[test]
fn bare_invocation_generates_into_current_directory() {
    let temp = tempdir().expect("tempdir");
    let output = run(&[], temp.path());
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(temp.path().join("run_coverage_tests.sh").is_file());
    assert!(temp.path().join("tests/test_kerningenabled_001.c").is_file());
}

#[test]
fn dry_run_leaves_directory_untouched() {
    let temp = tempdir().expect("tempdir");
    let output = run(&["generate", "--dry-run"], temp.path());
    assert!(output.status.success());
    assert!(!temp.path().join("tests").exists());
    assert!(!temp.path().join("run_coverage_tests.sh").exists());
}

#[test]
fn list_prints_every_function() {
    let temp = tempdir().expect("tempdir");
    let output = run(&["list"], temp.path());
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in ["nvgBeginFrame", "nvgCircle", "nvgKerningEnabled"] {
        assert!(stdout.contains(name), "missing {name} in {stdout}");
    }
}

#[test]
fn out_dir_that_is_a_file_fails_with_usage_error() {
    let temp = tempdir().expect("tempdir");
    let blocker = temp.path().join("blocker");
    std::fs::write(&blocker, "x").expect("write");
    let blocker_arg = blocker.display().to_string();

    let output = run(&["generate", "--out-dir", &blocker_arg], temp.path());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not a directory"), "stderr: {stderr}");
}
