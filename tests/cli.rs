//! Integration tests for top-level CLI behavior.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn fsnav(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fsnav"));
    cmd.current_dir(dir).env_remove("FSNAV_START_DIR").env_remove("FSNAV_RECORD");
    cmd
}

fn run_fsnav(dir: &Path, args: &[&str]) -> Output {
    fsnav(dir).args(args).output().expect("failed to run fsnav binary")
}

fn run_menu(dir: &Path, script: &str) -> Output {
    let mut child = fsnav(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn fsnav binary");
    child.stdin.take().unwrap().write_all(script.as_bytes()).unwrap();
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn ls_prints_the_table() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("hello.txt"), b"hi").unwrap();

    let output = run_fsnav(dir.path(), &["ls"]);
    let out = stdout(&output);
    assert!(output.status.success());
    assert!(out.contains("TYPE    PERMS       SIZE(B)     MODIFIED                NAME"));
    let row = out.lines().find(|l| l.ends_with("hello.txt")).unwrap();
    assert!(row.starts_with("[FILE]  "));
    assert_eq!(&row[20..32], "2           ");
}

#[test]
fn dir_flag_sets_the_start_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("inner")).unwrap();
    std::fs::write(dir.path().join("inner").join("only-here"), b"").unwrap();
    let inner = dir.path().join("inner");

    let output = run_fsnav(dir.path(), &["--dir", inner.to_str().unwrap(), "ls"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("only-here"));
}

#[test]
fn start_dir_env_var_is_honoured() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("env-start")).unwrap();
    std::fs::write(dir.path().join("env-start").join("marker"), b"").unwrap();

    let output = fsnav(dir.path())
        .env("FSNAV_START_DIR", dir.path().join("env-start"))
        .arg("ls")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(stdout(&output).contains("marker"));
}

#[test]
fn one_shot_commands_change_the_tree() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    assert!(run_fsnav(root, &["mkdir", "a/b"]).status.success());
    let output = run_fsnav(root, &["touch", "a/b/file.txt"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("File created: "));
    std::fs::write(root.join("a").join("b").join("file.txt"), b"content").unwrap();

    let output = run_fsnav(root, &["cp", "a", "copy"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(std::fs::read(root.join("copy").join("b").join("file.txt")).unwrap(), b"content");

    let output = run_fsnav(root, &["mv", "copy", "moved"]);
    assert!(output.status.success());
    assert!(root.join("moved").join("b").join("file.txt").is_file());
    assert!(!root.join("copy").exists());

    let output = run_fsnav(root, &["rm", "moved"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Deleted entries: 3\n");
    assert!(!root.join("moved").exists());
}

#[test]
fn find_reports_matches_and_count() {
    let dir = tempfile::tempdir().unwrap();
    for (sub, name) in [("x", "abc.txt"), ("y", "zzabc"), ("z", "noMatch")] {
        std::fs::create_dir(dir.path().join(sub)).unwrap();
        std::fs::write(dir.path().join(sub).join(name), b"").unwrap();
    }

    let output = run_fsnav(dir.path(), &["find", "abc"]);
    let out = stdout(&output);
    assert!(output.status.success());
    assert!(out.ends_with("2 match(es).\n"));
    assert!(out.contains("abc.txt"));
    assert!(out.contains("zzabc"));
    assert!(!out.contains("noMatch"));
}

#[test]
fn failed_one_shot_exits_one() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_fsnav(dir.path(), &["rm", "ghost"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error: path does not exist"));
}

#[test]
fn bad_start_dir_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let gone = dir.path().join("gone");

    let output = run_fsnav(dir.path(), &["--dir", gone.to_str().unwrap(), "ls"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("Error: "));
}

#[test]
fn unknown_subcommand_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_fsnav(dir.path(), &["explode"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn interactive_menu_runs_a_script() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_menu(dir.path(), "5\nproj\n2\nproj\n4\nnew.txt\n1\n3\n42\n0\n");
    let out = stdout(&output);
    assert!(output.status.success());
    assert!(out.contains("Directory created: "));
    assert!(out.contains("File created: "));
    assert!(out.lines().any(|l| l.starts_with("[FILE]") && l.ends_with("new.txt")));
    assert!(out.contains("Invalid choice."));
    assert!(out.ends_with("Goodbye!\n"));
    assert!(dir.path().join("proj").join("new.txt").is_file());
}

#[test]
fn menu_exits_cleanly_at_end_of_input() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_menu(dir.path(), "1\n");
    assert_eq!(output.status.code(), Some(0));
    assert!(!stdout(&output).contains("Goodbye!"));
}

#[test]
fn menu_errors_go_to_stderr() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("plain"), b"").unwrap();

    let output = run_menu(dir.path(), "2\nplain\n0\n");
    assert!(output.status.success());
    assert!(stderr(&output).contains("Error: not a directory"));
}

#[test]
fn record_env_var_writes_a_cassette() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("seen.txt"), b"").unwrap();
    let cassette = dir.path().join("tapes").join("session.yaml");

    let output = fsnav(dir.path()).env("FSNAV_RECORD", &cassette).arg("ls").output().unwrap();
    assert!(output.status.success());
    let yaml = std::fs::read_to_string(&cassette).unwrap();
    assert!(yaml.contains("read_dir"));
    assert!(yaml.contains("seen.txt"));
}
