#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;

fn cli() -> Command {
    Command::cargo_bin("conge-cli").unwrap()
}

#[test]
fn recommend_prints_ranked_windows() {
    cli()
        .args([
            "recommend",
            "--start",
            "2026-02-02",
            "--end",
            "2026-02-27",
            "--days",
            "2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("#1 congé"));
}

#[test]
fn recommend_with_no_fit_exits_with_warning_code() {
    cli()
        .args([
            "recommend",
            "--start",
            "2026-02-10",
            "--end",
            "2026-02-11",
            "--days",
            "5",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Aucune fenêtre"));
}

#[test]
fn rest_period_spans_the_weekend() {
    cli()
        .args(["rest-period", "--start", "2026-02-06", "--days", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 jour(s) de repos"));
}

#[test]
fn rest_period_with_extra_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ferme.txt");
    std::fs::write(&path, "2026-03-02\n2026-03-03\npas-une-date\n").unwrap();

    cli()
        .args([
            "rest-period",
            "--start",
            "2026-03-04",
            "--days",
            "3",
            "--extra-file",
            path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("9 jour(s) de repos"));
}

#[test]
fn zero_days_is_a_hard_error() {
    cli()
        .args(["rest-period", "--start", "2026-02-06", "--days", "0"])
        .assert()
        .failure();
}

#[test]
fn unknown_country_is_a_hard_error() {
    cli()
        .args([
            "--country",
            "FR",
            "rest-period",
            "--start",
            "2026-02-04",
            "--days",
            "1",
        ])
        .assert()
        .failure();
}
