use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

const DECK: &str = r#"[
  {"term": "Photosynthesis", "definition": "Turning light into chemical energy"},
  {"term": "Chlorophyll", "definition": "The green pigment in plants"}
]"#;

fn flashgen(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("flashgen").unwrap();
    cmd.current_dir(home)
        .env("FLASHGEN_HOME", home)
        .env_remove("FLASHGEN_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_load_prints_open_deck() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(temp.path().join("deck.json"), DECK).unwrap();

    flashgen(temp.path())
        .args(["load", "deck.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Photosynthesis"))
        .stdout(predicate::str::contains("The green pigment"))
        .stdout(predicate::str::contains("Loaded 2 flashcards"));
}

#[test]
fn test_load_rejects_wrong_shape() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(temp.path().join("deck.json"), r#"[{"term": "only a term"}]"#).unwrap();

    flashgen(temp.path())
        .args(["load", "deck.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid flashcard data"));
}

#[test]
fn test_load_rejects_malformed_json() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(temp.path().join("deck.json"), "[{\"term\": ").unwrap();

    flashgen(temp.path())
        .args(["load", "deck.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unable to parse JSON"));
}

#[test]
fn test_generate_requires_topic() {
    let temp = tempfile::tempdir().unwrap();

    flashgen(temp.path())
        .args(["generate", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a topic"));
}

#[test]
fn test_generate_without_api_key() {
    let temp = tempfile::tempdir().unwrap();

    flashgen(temp.path())
        .env_remove("OPENAI_API_KEY")
        .args(["generate", "volcanoes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no API key"));
}

#[test]
fn test_config_set_and_get() {
    let temp = tempfile::tempdir().unwrap();
    let config_dir = temp.path().join("conf");
    let config_dir = config_dir.to_str().unwrap();

    flashgen(temp.path())
        .args(["--config-dir", config_dir, "config", "model", "llama3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("model set to llama3"));

    flashgen(temp.path())
        .args(["--config-dir", config_dir, "config", "model"])
        .assert()
        .success()
        .stdout(predicate::str::contains("model = llama3"));

    flashgen(temp.path())
        .args(["--config-dir", config_dir, "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("export-file = flashcards.json"));
}

#[test]
fn test_config_rejects_unknown_key() {
    let temp = tempfile::tempdir().unwrap();

    flashgen(temp.path())
        .args(["config", "colour", "blue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config error"));
}

#[test]
fn test_session_load_then_save() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(temp.path().join("deck.json"), DECK).unwrap();

    flashgen(temp.path())
        .write_stdin("load deck.json\nflip 1\nsave copy.json\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Turning light into chemical energy"))
        .stdout(predicate::str::contains("Saved 2 flashcards"));

    let original: serde_json::Value = serde_json::from_str(DECK).unwrap();
    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(temp.path().join("copy.json")).unwrap()).unwrap();
    assert_eq!(original, saved);
}

#[test]
fn test_session_keeps_going_after_errors() {
    let temp = tempfile::tempdir().unwrap();

    flashgen(temp.path())
        .write_stdin("load missing.json\ngenerate\nshow\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("IO error"))
        .stdout(predicate::str::contains("Please enter a topic"))
        .stdout(predicate::str::contains("No flashcards yet."));
}

#[test]
fn test_open_without_file_param_starts_session() {
    let temp = tempfile::tempdir().unwrap();

    flashgen(temp.path())
        .args(["open", "https://flashgen.example/index.html?topic=x"])
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to open"))
        .stdout(predicate::str::contains("help"));
}

#[test]
fn test_open_rejects_invalid_page_url() {
    let temp = tempfile::tempdir().unwrap();

    flashgen(temp.path())
        .args(["open", "not a url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Network error").or(predicate::str::contains("URL")));
}
