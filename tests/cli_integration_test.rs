mod common;

use assert_cmd::Command;
use indoc::indoc;
use serde_json::Value;
use tempfile::TempDir;

fn cipherid(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cipherid"));
    // Keep ancestor config search inside the fixture directory
    cmd.current_dir(dir.path()).env_remove("CIPHERID_DICTIONARY");
    cmd
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "stdout was not JSON ({e})\nstdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    })
}

#[test]
fn test_resolve_caesar_json() {
    let dir = TempDir::new().unwrap();
    let ciphertext = common::caesar_encrypt(common::PANGRAM, 3);

    let output = cipherid(&dir)
        .args(["resolve", &ciphertext, "--format", "json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let json = stdout_json(&output);
    assert_eq!(json["success"], true);
    assert_eq!(json["method"], "Caesar");
    assert_eq!(json["key"], 3);
    assert_eq!(json["params"], serde_json::json!({ "shift": 3 }));
    assert_eq!(json["decrypted"], common::PANGRAM);
    assert_eq!(json["details"]["totalWords"], 9);
}

#[test]
fn test_resolve_reads_stdin() {
    let dir = TempDir::new().unwrap();
    let output = cipherid(&dir)
        .args(["resolve", "-", "--format", "json"])
        .write_stdin(format!("{}\n", common::caesar_encrypt("attack at dawn", 7)))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let json = stdout_json(&output);
    assert_eq!(json["decrypted"], "attack at dawn");
    assert_eq!(json["key"], 7);
}

#[test]
fn test_resolve_with_dictionary_flag() {
    let dir = TempDir::new().unwrap();
    let (_dict_dir, dictionary) = common::write_dictionary(&["ZEBRA", "QUARTZ", "JIVE"]);
    let ciphertext = common::caesar_encrypt("zebra quartz jive", 12);

    let output = cipherid(&dir)
        .args(["resolve", &ciphertext, "--format", "json", "--dictionary"])
        .arg(&dictionary)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let json = stdout_json(&output);
    assert_eq!(json["success"], true);
    assert_eq!(json["decrypted"], "zebra quartz jive");
}

#[test]
fn test_empty_ciphertext_is_input_error() {
    let dir = TempDir::new().unwrap();
    let output = cipherid(&dir)
        .args(["resolve", "   ", "--format", "json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let json = stdout_json(&output);
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("non-empty"));
}

#[test]
fn test_no_letters_is_exhaustion() {
    let dir = TempDir::new().unwrap();
    let output = cipherid(&dir)
        .args(["resolve", "12", "--format", "json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let json = stdout_json(&output);
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("No strategy"));
}

#[test]
fn test_terminal_output() {
    let dir = TempDir::new().unwrap();
    let output = cipherid(&dir)
        .env("NO_COLOR", "1")
        .args(["resolve", &common::caesar_encrypt(common::PANGRAM, 10)])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("RESOLVED"));
    assert!(stdout.contains("Caesar"));
    assert!(stdout.contains(common::PANGRAM));
}

/// 19 of 20 words known: confidence 0.95, between the default gate and 1.0
const NEARLY_KNOWN: &str =
    "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG AND THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG CAT";

fn resolve_nearly_known(dir: &TempDir) -> Value {
    let (_dict_dir, dictionary) = common::write_dictionary(&[
        "THE", "QUICK", "BROWN", "FOX", "JUMPS", "OVER", "LAZY", "DOG", "AND",
    ]);
    let output = cipherid(dir)
        .args(["resolve", &common::caesar_encrypt(NEARLY_KNOWN, 3)])
        .args(["--format", "json", "--dictionary"])
        .arg(&dictionary)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    stdout_json(&output)
}

#[test]
fn test_config_file_thresholds_apply() {
    let defaults = TempDir::new().unwrap();
    let json = resolve_nearly_known(&defaults);
    assert_eq!(json["success"], true);
    assert_eq!(json["confidence"], 0.95);

    let strict = TempDir::new().unwrap();
    std::fs::write(
        strict.path().join(".cipherid.toml"),
        indoc! {r#"
            [thresholds]
            global_confidence = 1.0
        "#},
    )
    .unwrap();
    let json = resolve_nearly_known(&strict);
    assert_eq!(json["success"], false);
    assert_eq!(json["decrypted"], NEARLY_KNOWN);
}

#[test]
fn test_config_dictionary_path_is_relative_to_config_file() {
    let root = TempDir::new().unwrap();
    let nested = root.path().join("notes").join("drafts");
    std::fs::create_dir_all(&nested).unwrap();
    std::fs::write(
        root.path().join(".cipherid.toml"),
        indoc! {r#"
            [dictionary]
            path = "words.json"
        "#},
    )
    .unwrap();
    std::fs::write(
        root.path().join("words.json"),
        r#"{"words": ["ZEBRA", "QUARTZ", "JIVE"]}"#,
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_cipherid"))
        .current_dir(&nested)
        .env_remove("CIPHERID_DICTIONARY")
        .args(["resolve", &common::caesar_encrypt("zebra quartz jive", 5)])
        .args(["--format", "json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let json = stdout_json(&output);
    assert_eq!(json["success"], true);
    assert_eq!(json["decrypted"], "zebra quartz jive");
}

#[test]
fn test_init_creates_config() {
    let dir = TempDir::new().unwrap();
    let output = cipherid(&dir).arg("init").output().unwrap();
    assert!(output.status.success());
    assert!(dir.path().join(".cipherid.toml").exists());

    let again = cipherid(&dir).arg("init").output().unwrap();
    assert!(!again.status.success());

    let forced = cipherid(&dir).args(["init", "--force"]).output().unwrap();
    assert!(forced.status.success());
}
