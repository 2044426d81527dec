use assert_cmd::Command;
use predicates::prelude::*;
use std::io::{BufRead, BufReader, Write};
use std::process::Stdio;
use tempfile::NamedTempFile;

fn word_freq() -> Command {
    Command::new(env!("CARGO_BIN_EXE_word-freq"))
}

fn text_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn counts_every_word_case_insensitively() {
    let file = text_file("Word word WORD\nother\n");

    word_freq()
        .arg(file.path())
        .assert()
        .success()
        .stdout("word: 3\nother: 1\n");
}

#[test]
fn case_sensitive_keeps_variants_apart() {
    let file = text_file("Word word WORD word");

    word_freq()
        .arg(file.path())
        .arg("--case-sensitive")
        .assert()
        .success()
        .stdout("word: 2\nWORD: 1\nWord: 1\n");
}

#[test]
fn ignore_common_drops_stop_words() {
    let file = text_file("The cat and the dog. The end!");

    word_freq()
        .arg(file.path())
        .arg("--ignore-common")
        .assert()
        .success()
        .stdout("cat: 1\ndog: 1\nend: 1\n");
}

#[test]
fn top_and_min_count() {
    let file = text_file("a a a a a b b b c c c d");

    word_freq()
        .arg(file.path())
        .args(["--top", "2"])
        .assert()
        .success()
        .stdout("a: 5\nb: 3\n");

    word_freq()
        .arg(file.path())
        .args(["--min-count", "2"])
        .assert()
        .success()
        .stdout("a: 5\nb: 3\nc: 3\n");

    word_freq()
        .arg(file.path())
        .args(["--min-count", "2", "--top", "1"])
        .assert()
        .success()
        .stdout("a: 5\n");
}

#[test]
fn empty_file_prints_nothing() {
    let file = text_file("");

    word_freq().arg(file.path()).assert().success().stdout("");
}

#[test]
fn stats_go_to_stderr() {
    let file = text_file("one two two");

    word_freq()
        .arg(file.path())
        .arg("--stats")
        .assert()
        .success()
        .stdout("two: 2\none: 1\n")
        .stderr(predicate::str::contains("Total word occurrences: 3"));
}

#[test]
fn missing_file_fails_with_path() {
    word_freq()
        .arg("/no/such/dir/input.txt")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("input.txt"));
}

#[test]
fn invalid_top_is_a_config_error() {
    let file = text_file("a b c");

    word_freq()
        .arg(file.path())
        .args(["--top", "0"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("--top"));

    word_freq()
        .arg(file.path())
        .args(["--min-count", "-1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("--min-count"));
}

#[test]
fn unknown_encoding_is_rejected() {
    let file = text_file("a b c");

    word_freq()
        .arg(file.path())
        .args(["--encoding", "klingon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("klingon"));
}

#[test]
fn invalid_utf8_fails_unless_encoding_given() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&[b'c', b'a', b'f', 0xE9, b' ', b'c', b'a', b'f', 0xE9]).unwrap();

    word_freq()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("decode"));

    word_freq()
        .arg(file.path())
        .args(["--encoding", "latin1"])
        .assert()
        .success()
        .stdout("café: 2\n");
}

#[test]
fn same_input_same_output() {
    let file = text_file("It's a well-known fact that it's well known.");

    let first = word_freq().arg(file.path()).output().unwrap();
    let second = word_freq().arg(file.path()).output().unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(
        String::from_utf8(first.stdout).unwrap(),
        "it's: 2\na: 1\nfact: 1\nknown: 1\nthat: 1\nwell: 1\nwell-known: 1\n"
    );
}

#[test]
fn closed_stdout_is_not_an_error() {
    let mut content = "a ".repeat(200_000);
    for i in 0..20_000 {
        content.push_str(&format!("w{} ", i));
    }
    let file = text_file(&content);

    let mut child = std::process::Command::new(env!("CARGO_BIN_EXE_word-freq"))
        .arg(file.path())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    let mut first = String::new();
    {
        let mut reader = BufReader::new(child.stdout.take().unwrap());
        reader.read_line(&mut first).unwrap();
    }
    assert_eq!(first, "a: 200000\n");

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success(), "{:?}", output.status);
    assert!(!String::from_utf8_lossy(&output.stderr).contains("failed to write report"));
}

#[test]
fn quiet_still_prints_requested_stats() {
    let file = text_file("one two two");

    word_freq()
        .arg(file.path())
        .args(["--quiet", "--stats"])
        .assert()
        .success()
        .stdout("two: 2\none: 1\n")
        .stderr(predicate::str::contains("Settings").and(predicate::str::contains("Summary")));
}

#[test]
fn split_flags_break_joined_words() {
    let file = text_file("don't well-known");

    word_freq()
        .arg(file.path())
        .args(["--split-apostrophes", "--split-hyphens"])
        .assert()
        .success()
        .stdout("don: 1\nknown: 1\nt: 1\nwell: 1\n");
}

#[test]
fn replacement_encoding_is_a_config_error() {
    let file = text_file("a b c");

    word_freq()
        .arg(file.path())
        .args(["--encoding", "iso-2022-kr"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid configuration"))
        .stderr(predicate::str::contains("unknown encoding 'iso-2022-kr'"));
}
