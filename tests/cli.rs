//! End-to-end CLI tests
//!
//! Every test runs against its own temp data directory and passes
//! `--offline` so no network is touched; totals display as not loaded.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn duit(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("duit").unwrap();
    cmd.env("DUIT_DATA_DIR", dir.path())
        .env_remove("DUIT_MONTH")
        .env_remove("DUIT_OFFLINE")
        .env_remove("DUIT_RATES_URL")
        .arg("--offline");
    cmd
}

#[test]
fn first_run_seeds_default_entries() {
    let dir = TempDir::new().unwrap();

    duit(&dir)
        .args(["ledger", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gaji"))
        .stdout(predicate::str::contains("yt premium"))
        .stdout(predicate::str::contains("t3-chat"));
}

#[test]
fn add_and_list_round_trip() {
    let dir = TempDir::new().unwrap();

    duit(&dir)
        .args([
            "--month", "2024-05", "ledger", "add", "--name", "kopi", "--amount", "25000",
            "--kind", "expense",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 'kopi' to 2024-05"));

    duit(&dir)
        .args(["--month", "2024-05", "ledger", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kopi"))
        .stdout(predicate::str::contains("expense"));
}

#[test]
fn update_replaces_fields_in_place() {
    let dir = TempDir::new().unwrap();

    duit(&dir)
        .args(["--month", "2024-05", "ledger", "add"])
        .assert()
        .success();

    duit(&dir)
        .args([
            "--month", "2024-05", "ledger", "update", "0", "--name", "sewa", "--currency", "usd",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated entry 0"));

    duit(&dir)
        .args(["--month", "2024-05", "ledger", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sewa"))
        .stdout(predicate::str::contains("USD"));
}

#[test]
fn delete_out_of_range_fails() {
    let dir = TempDir::new().unwrap();

    duit(&dir)
        .args(["--month", "2024-05", "ledger", "delete", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Entry not found: 9"));
}

#[test]
fn convert_to_monthly_moves_the_row() {
    let dir = TempDir::new().unwrap();

    duit(&dir)
        .args([
            "--month", "2024-05", "ledger", "add", "--name", "spotify", "--amount", "2.5",
            "--currency", "USD", "--kind", "expense",
        ])
        .assert()
        .success();

    duit(&dir)
        .args(["--month", "2024-05", "ledger", "to-monthly", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Converted 'spotify'"));

    duit(&dir)
        .args(["--month", "2024-05", "monthly", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("spotify"));

    duit(&dir)
        .args(["--month", "2024-05", "ledger", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("spotify").not());
}

#[test]
fn toggle_flips_and_restores() {
    let dir = TempDir::new().unwrap();

    duit(&dir)
        .args(["--month", "2024-05", "monthly", "add", "--name", "netflix"])
        .assert()
        .success();

    duit(&dir)
        .args(["--month", "2024-05", "monthly", "toggle", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("disabled"));

    duit(&dir)
        .args(["--month", "2024-05", "monthly", "toggle", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("enabled"));
}

#[test]
fn export_prints_the_three_structures() {
    let dir = TempDir::new().unwrap();

    duit(&dir)
        .args(["--month", "2024-05", "monthly", "add"])
        .assert()
        .success();

    duit(&dir)
        .args(["export"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"perMonth\""))
        .stdout(predicate::str::contains("\"monthly\""))
        .stdout(predicate::str::contains("\"monthlyToggles\""));
}

#[test]
fn summary_offline_shows_rates_not_loaded() {
    let dir = TempDir::new().unwrap();

    duit(&dir)
        .args(["--month", "2024-05", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget summary for 2024-05"))
        .stdout(predicate::str::contains("rates not loaded"));
}

#[test]
fn months_lists_activated_keys() {
    let dir = TempDir::new().unwrap();

    duit(&dir)
        .args(["--month", "2024-05", "ledger", "list"])
        .assert()
        .success();

    duit(&dir)
        .args(["--month", "2024-05", "months"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-05"));
}

#[test]
fn invalid_month_is_rejected() {
    let dir = TempDir::new().unwrap();

    duit(&dir)
        .args(["--month", "garbage", "summary"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid month format"));
}

#[test]
fn legacy_file_is_migrated_once() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("data");
    std::fs::create_dir_all(&data_dir).unwrap();

    let legacy = r#"[{"moneys":[{"name":"warisan","type":"income","amount":7,"currency":"IDR","selected":true}]}]"#;
    std::fs::write(data_dir.join("money.json"), legacy).unwrap();

    duit(&dir)
        .args(["ledger", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("warisan"))
        .stdout(predicate::str::contains("gaji").not());

    // legacy file is left as it was
    assert_eq!(
        std::fs::read_to_string(data_dir.join("money.json")).unwrap(),
        legacy
    );
}
