use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

const PATCH: &str = "\
--- a/alloc.c
+++ b/alloc.c
@@ -10,6 +10,9 @@
 int count;
+/*
+ * Allocate the bufer before use.
+ */
+static char *buffer;
";

fn dictionary() -> TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("base.dict"), "allocate the buffer\n").unwrap();
    fs::write(dir.path().join("extra.dict"), "Use it before you go.\n").unwrap();
    fs::write(dir.path().join("ignored.txt"), "bufer\n").unwrap();
    dir
}

fn patchspell(dict_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("patchspell").unwrap();
    cmd.arg("--dir")
        .arg(dict_dir)
        .arg("--no-color")
        .env_remove("PATCHSPELL_DICT_DIR")
        .env_remove("PATCHSPELL_LOG");
    cmd
}

#[test]
fn test_patch_from_stdin_reports_suggestion() {
    let dict = dictionary();

    patchspell(dict.path())
        .write_stdin(PATCH)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("6:18 bufer → buffer"))
        .stdout(predicate::str::contains("1 word might be wrong in 1 input"));
}

#[test]
fn test_no_fail_exits_zero() {
    let dict = dictionary();

    patchspell(dict.path())
        .arg("--no-fail")
        .write_stdin(PATCH)
        .assert()
        .success();
}

#[test]
fn test_clean_patch_succeeds() {
    let dict = dictionary();

    patchspell(dict.path())
        .write_stdin("+/* allocate the buffer */\n-/* wrnog but removed */\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No spelling errors found"));
}

#[test]
fn test_json_output() {
    let dict = dictionary();
    let work = tempdir().unwrap();
    let source = work.path().join("main.c");
    fs::write(&source, "int main(void) { /* allocte zero */ return 0; }\n").unwrap();

    let output = patchspell(dict.path())
        .args(["--format", "json"])
        .arg(&source)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["files_checked"], 1);
    assert_eq!(json["total_errors"], 2);
    assert_eq!(json["errors"][0]["word"], "allocte");
    assert_eq!(json["errors"][0]["suggestion"], "allocate");
    assert_eq!(json["errors"][1]["word"], "zero");
    assert!(json["errors"][1]["suggestion"].is_null());
}

#[test]
fn test_text_mode_checks_every_line() {
    let dict = dictionary();
    let work = tempdir().unwrap();
    let notes = work.path().join("notes.txt");
    fs::write(&notes, "allocate the buffer\nbefor you use\n").unwrap();

    patchspell(dict.path())
        .arg(&notes)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("2:1 befor → before"));
}

#[test]
fn test_missing_dictionary_dir_fails() {
    let work = tempdir().unwrap();

    patchspell(&work.path().join("missing"))
        .write_stdin(PATCH)
        .assert()
        .failure()
        .stderr(predicate::str::contains("dictionary directory not found"));
}

#[test]
fn test_missing_input_file() {
    let dict = dictionary();

    patchspell(dict.path())
        .arg("does-not-exist.patch")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_dict_info() {
    let dict = dictionary();

    patchspell(dict.path())
        .args(["dict", "info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entries:     6"))
        .stdout(predicate::str::contains("Known words: 6"));
}

#[test]
fn test_dict_words() {
    let dict = dictionary();

    patchspell(dict.path())
        .args(["dict", "words"])
        .assert()
        .success()
        .stdout("allocate\nbefore\nbuffer\nthe\nuse\nyou\n");
}

#[test]
fn test_dict_list() {
    let dict = dictionary();

    patchspell(dict.path())
        .args(["dict", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("base.dict"))
        .stdout(predicate::str::contains("extra.dict"))
        .stdout(predicate::str::contains("ignored.txt").not());
}

#[test]
fn test_verbose_json_stays_valid() {
    let dict = dictionary();

    let output = patchspell(dict.path())
        .args(["-v", "-o", "json"])
        .write_stdin(PATCH)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total_errors"], 1);
    assert_eq!(json["errors"][0]["word"], "bufer");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Entries:     6"));
}

#[test]
fn test_non_utf8_stdin() {
    let dict = dictionary();

    patchspell(dict.path())
        .write_stdin(&b"+/* allocte the bufer */\n+char *s = \"caf\xe9\";\n"[..])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("1:5 allocte → allocate"))
        .stdout(predicate::str::contains("1:17 bufer → buffer"));
}

#[test]
fn test_unreadable_input_keeps_other_reports() {
    let dict = dictionary();
    let work = tempdir().unwrap();
    let good = work.path().join("a.patch");
    let latin1 = work.path().join("b.patch");
    fs::write(&good, "+/* the bufer */\n").unwrap();
    fs::write(&latin1, b"+/* caf\xe9 befor */\n").unwrap();

    patchspell(dict.path())
        .arg(&good)
        .arg(&latin1)
        .arg(work.path())
        .assert()
        .code(2)
        .stdout(predicate::str::contains("bufer → buffer"))
        .stdout(predicate::str::contains("befor → before"))
        .stderr(predicate::str::contains("Failed to read file"));
}
