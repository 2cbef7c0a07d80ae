#![cfg(feature = "cli")]

use assert_cmd::Command;
use predicates::prelude::*;

fn sort_name() -> Command {
    let mut cmd = Command::cargo_bin("sort_name").unwrap();
    cmd.env_remove("SORT_NAME_LANGUAGE").env_remove("RUST_LOG");
    cmd
}

#[test]
fn derive_one_name() {
    sort_name()
        .args(["derive", "John", "Smith", "Jr"])
        .assert()
        .success()
        .stdout("Smith Jr, John\n");
}

#[test]
fn derive_with_language() {
    sort_name()
        .args(["derive", "-l", "nl", "Vincent van Gogh"])
        .assert()
        .success()
        .stdout("van Gogh, Vincent\n");
}

#[test]
fn language_from_environment() {
    sort_name()
        .env("SORT_NAME_LANGUAGE", "es")
        .args(["derive", "Gabriel García Márquez"])
        .assert()
        .success()
        .stdout("García Márquez, Gabriel\n");
}

#[test]
fn unknown_language_warns_and_continues() {
    sort_name()
        .args(["derive", "-l", "tlh", "The Beatles"])
        .assert()
        .success()
        .stdout("Beatles, The\n")
        .stderr(predicate::str::contains("unrecognized language code"));
}

#[test]
fn derive_from_stdin() {
    sort_name()
        .args(["derive", "-l", "fr", "-"])
        .write_stdin("Charles de Gaulle\nVictor Hugo\n\nMolière\n")
        .assert()
        .success()
        .stdout("de Gaulle, Charles\nHugo, Victor\n\nMolière\n");
}

#[test]
fn derive_json() {
    sort_name()
        .args(["derive", "--json", "The Beatles"])
        .assert()
        .success()
        .stdout(
            "{\"name\":\"The Beatles\",\"sort_name\":\"Beatles, The\",\"language\":\"en\",\"branch\":\"article\"}\n",
        );
}

#[test]
fn list_languages() {
    sort_name()
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("nl\tDutch\tparticle"))
        .stdout(predicate::str::contains("en\tEnglish\tfallback"));
}

#[test]
fn list_languages_json() {
    sort_name()
        .args(["languages", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"code\": \"ja\""));
}

#[test]
fn usage_error() {
    sort_name().arg("derive").assert().code(64);
    sort_name().arg("frobnicate").assert().code(64);
}
