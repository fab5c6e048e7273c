//! Integration tests for locstats CLI

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

fn run_locstats(args: &[&str]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_locstats"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn create_project(root: &Path) {
    write(&root.join("a.rb"), "x = 1\ny = 2\n# comment\n\n");
    write(&root.join("sub/b.rb"), "a = 1\nb = 2\nc = 3\n");
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_locstats(&["--help"]);

    assert!(success);
    assert!(stdout.contains("locstats"));
    assert!(stdout.contains("--ext"));
    assert!(stdout.contains("--exclude"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_locstats(&["--version"]);

    assert!(success);
    assert!(stdout.contains("locstats"));
}

#[test]
fn test_bucket_output() {
    let temp = tempdir().unwrap();
    create_project(temp.path());

    let (stdout, stderr, success) = run_locstats(&[temp.path().to_str().unwrap()]);

    assert!(success, "stderr: {}", stderr);
    assert_eq!(
        stdout,
        "a.rb: loc=2 comments=1 void=1\nsub: loc=3 comments=0 void=0\n"
    );
}

#[test]
fn test_exact_suffix_only() {
    let temp = tempdir().unwrap();
    write(&temp.path().join("lib/script.rb"), "puts 1\n");
    write(&temp.path().join("tools/script.rby"), "puts 2\n");

    let (stdout, _, success) = run_locstats(&[temp.path().to_str().unwrap()]);

    assert!(success);
    assert_eq!(stdout, "lib: loc=1 comments=0 void=0\n");
}

#[test]
fn test_custom_extension_and_exclude() {
    let temp = tempdir().unwrap();
    write(&temp.path().join("pkg/mod.py"), "# doc\nimport os\n");
    write(&temp.path().join("vendor/dep.py"), "x = 1\n");
    write(&temp.path().join("pkg/other.rb"), "y = 2\n");

    let (stdout, _, success) = run_locstats(&[
        temp.path().to_str().unwrap(),
        "--ext",
        ".py",
        "--exclude",
        "**/vendor/**",
    ]);

    assert!(success);
    assert_eq!(stdout, "pkg: loc=1 comments=1 void=0\n");
}

#[test]
fn test_empty_directory_prints_nothing() {
    let temp = tempdir().unwrap();

    let (stdout, _, success) = run_locstats(&[temp.path().to_str().unwrap()]);

    assert!(success);
    assert!(stdout.is_empty());
}

#[test]
fn test_missing_root_prints_nothing() {
    let (stdout, _, success) = run_locstats(&["/nonexistent/path"]);

    assert!(success);
    assert!(stdout.is_empty());
}

#[test]
fn test_missing_root_matching_extension_aborts() {
    let (stdout, stderr, success) = run_locstats(&["/nonexistent/path.rb"]);

    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("failed to open file"));
}

#[cfg(unix)]
#[test]
fn test_directory_named_like_file_is_zero_bucket_with_warning() {
    let temp = tempdir().unwrap();
    write(&temp.path().join("a.rb"), "x = 1\n");
    fs::create_dir(temp.path().join("vendor.rb")).unwrap();

    let (stdout, stderr, success) = run_locstats(&[temp.path().to_str().unwrap()]);

    assert!(success, "stderr: {}", stderr);
    assert_eq!(
        stdout,
        "a.rb: loc=1 comments=0 void=0\nvendor.rb: loc=0 comments=0 void=0\n"
    );
    assert!(stderr.contains("WARN"));
    assert!(stderr.contains("vendor.rb"));
}

#[cfg(unix)]
#[test]
fn test_unopenable_file_aborts_without_output() {
    let temp = tempdir().unwrap();
    create_project(temp.path());
    std::os::unix::fs::symlink(
        temp.path().join("missing.rb"),
        temp.path().join("zzz.rb"),
    )
    .unwrap();

    let (stdout, stderr, success) = run_locstats(&[temp.path().to_str().unwrap()]);

    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("failed to open file"));
    assert!(stderr.contains("zzz.rb"));
}
