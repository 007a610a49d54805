// Black-box tests of the `zxcvbn` binary via std::process::Command.
// Covers single-password breakdown output, ranked dictionary loading,
// bulk-mode JSON, and exit codes.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Locate the binary produced by Cargo.
fn zxcvbn_bin() -> PathBuf {
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_zxcvbn") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop(); // test binary filename
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("zxcvbn");
    p
}

fn parse_entropy(stdout: &str) -> f64 {
    stdout
        .lines()
        .find_map(|l| l.strip_prefix("entropy: "))
        .expect("entropy line present")
        .parse()
        .unwrap()
}

// ── Single-password mode ──────────────────────────────────────────────────────

#[test]
fn breakdown_lists_the_cover() {
    let out = Command::new(zxcvbn_bin())
        .args(["-q", "qwerty"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("password: qwerty"));
    assert!(stdout.contains("entropy: "));
    assert!(stdout.contains("\tspatial: qwerty -- "));
}

#[test]
fn multiple_passwords_processed_in_order() {
    let out = Command::new(zxcvbn_bin())
        .args(["-q", "abcdef", "zzzzz"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    let first = stdout.find("password: abcdef").unwrap();
    let second = stdout.find("password: zzzzz").unwrap();
    assert!(first < second);
    assert!(stdout.contains("\tsequence: abcdef -- "));
    assert!(stdout.contains("\trepeat: zzzzz -- "));
}

#[test]
fn adhoc_words_weaken_the_password() {
    let run = |args: &[&str]| {
        let out = Command::new(zxcvbn_bin()).args(args).output().unwrap();
        assert!(out.status.success());
        parse_entropy(&String::from_utf8(out.stdout).unwrap())
    };
    let plain = run(&["-q", "flibbertigibbet"]);
    let primed = run(&["-q", "-d", "flibbertigibbet", "flibbertigibbet"]);
    assert!(primed < plain);
}

#[test]
fn no_arguments_is_an_error() {
    let out = Command::new(zxcvbn_bin()).output().unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("no password"));
}

// ── Ranked dictionaries ───────────────────────────────────────────────────────

#[test]
fn ranked_dictionary_is_honored() {
    let dir = tempfile::TempDir::new().unwrap();
    let dict = dir.path().join("ranked.txt");
    std::fs::write(&dict, "dragonfly\nsomethingelse\n").unwrap();

    let out = Command::new(zxcvbn_bin())
        .args(["-q", "-D", dict.to_str().unwrap(), "dragonfly"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("\tdict: dragonfly -- "));
    // Rank 1 and all-lowercase: the hit itself costs zero bits.
    assert!(parse_entropy(&stdout) < 1e-6);
}

#[test]
fn missing_dictionary_file_fails_loudly() {
    let out = Command::new(zxcvbn_bin())
        .args(["-D", "/no/such/dictionary.txt", "whatever"])
        .output()
        .unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("dictionary"));
}

// ── Bulk mode ─────────────────────────────────────────────────────────────────

#[test]
fn bulk_mode_emits_json_per_line() {
    let mut child = Command::new(zxcvbn_bin())
        .args(["-q", "-b"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(b"qwerty\nhunter2 hunter2\n")
        .unwrap();
    let out = child.wait_with_output().unwrap();
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);

    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["password"], "qwerty");
    assert!(first["entropy"].as_f64().unwrap() > 0.0);

    // The trailing word primes the evaluation, driving entropy to zero.
    let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second["password"], "hunter2");
    assert_eq!(second["entropy"].as_f64().unwrap(), 0.0);
}

#[test]
fn bulk_mode_reports_bad_lines_and_continues() {
    let mut child = Command::new(zxcvbn_bin())
        .args(["-q", "-b"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(b"\nstillfine\n")
        .unwrap();
    let out = child.wait_with_output().unwrap();
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);

    let bad: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(bad["error"], true);
    let good: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(good["password"], "stillfine");
    assert!(good["entropy"].is_number());
}
