use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sum-cli"))
        .args(args)
        .output()
        .unwrap()
}

fn write(dir: &Path, name: &str, text: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, text).unwrap();
    path.to_string_lossy().into_owned()
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn prints_sum_line() {
    let tmp = TempDir::new().unwrap();
    let p = write(tmp.path(), "base.txt", "@base 16\nff\n@base 10\n10\n");
    let out = run(&[&p]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), "SUM=265\n");
}

#[test]
fn base_flag_sets_starting_base() {
    let tmp = TempDir::new().unwrap();
    let p = write(tmp.path(), "ff.txt", "ff\n");
    let out = run(&["--base", "16", &p]);
    assert_eq!(stdout(&out), "SUM=255\n");
}

#[test]
fn base_flag_out_of_range_is_usage_error() {
    let tmp = TempDir::new().unwrap();
    let p = write(tmp.path(), "one.txt", "1\n");
    for base in ["1", "37"] {
        let out = run(&["--base", base, &p]);
        assert_eq!(out.status.code(), Some(2));
        assert!(out.stdout.is_empty());
        assert!(!out.stderr.is_empty());
    }
}

#[test]
fn missing_positional_is_usage_error() {
    let out = run(&[]);
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
}

#[test]
fn error_kinds_map_to_exit_codes() {
    let tmp = TempDir::new().unwrap();
    let strict = write(tmp.path(), "strict.txt", "1\n4#bad\n");
    let out = run(&["--strict", &strict]);
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).starts_with("Error: "));

    let missing = tmp.path().join("nope.txt").to_string_lossy().into_owned();
    assert_eq!(run(&[&missing]).status.code(), Some(1));

    let a = write(tmp.path(), "a.txt", "@include b.txt\n");
    write(tmp.path(), "b.txt", "@include a.txt\n");
    assert_eq!(run(&[&a]).status.code(), Some(1));

    let inc = write(tmp.path(), "inc.txt", "@include gone.txt\n");
    assert_eq!(run(&[&inc]).status.code(), Some(1));
}

#[test]
fn json_output() {
    let tmp = TempDir::new().unwrap();
    let p = write(tmp.path(), "r.txt", "@range 1..100000000\n");
    let out = run(&["--json", &p]);
    let v: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(v["sum"], "5000000050000000");
    assert_eq!(v["base"], 10);
    assert_eq!(v["strict"], false);
}
