//! End-to-end flows through the tally binary.
//!
//! Each test runs against its own data directory via `TALLY_DATA_DIR`.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tally(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.env("TALLY_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn add_summary_export_reimport_round_trip() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    tally(&data)
        .args(["add", "Salary", "1000", "income"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added Salary $1,000.00"));
    tally(&data)
        .args(["add", "Groceries", "200", "expense"])
        .assert()
        .success();

    tally(&data)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance:  $800.00"));

    tally(&data)
        .args(["export", "csv", "--output"])
        .arg(out.path())
        .assert()
        .success();

    let csv = std::fs::read_to_string(out.path().join("transactions.csv")).unwrap();
    assert!(csv.contains("ID,Description,Amount,Type,Date"));
    assert!(csv.starts_with('\u{feff}'));

    // Importing our own export back into the same ledger adds nothing.
    tally(&data)
        .arg("import")
        .arg(out.path().join("transactions.csv"))
        .assert()
        .success()
        .stdout(predicate::str::contains("No new transactions found."));
}

#[test]
fn remove_by_id_from_json_export() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    tally(&data)
        .args(["add", "Coffee", "4.50", "expense"])
        .assert()
        .success();

    tally(&data)
        .args(["export", "json", "--output"])
        .arg(out.path())
        .assert()
        .success();

    let json = std::fs::read_to_string(out.path().join("transactions.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    let id = parsed[0]["id"].as_str().unwrap().to_string();

    tally(&data)
        .arg("remove")
        .arg(&id)
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed"));

    tally(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions yet"));
}

#[test]
fn rejects_invalid_add_without_state_change() {
    let data = TempDir::new().unwrap();

    tally(&data)
        .args(["add", "Nothing", "0", "expense"])
        .assert()
        .failure();

    tally(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions yet"));
}

#[test]
fn export_with_empty_ledger_produces_no_file() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    tally(&data)
        .args(["export", "pdf", "--output"])
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions to export."));

    assert!(!out.path().join("transactions.pdf").exists());
}

#[test]
fn pdf_export_writes_a_pdf_document() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    tally(&data)
        .args(["add", "Rent", "800", "expense"])
        .assert()
        .success();

    tally(&data)
        .args(["export", "pdf", "--output"])
        .arg(out.path())
        .assert()
        .success();

    let bytes = std::fs::read(out.path().join("transactions.pdf")).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
}
