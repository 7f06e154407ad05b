//! End-to-end CLI tests
//!
//! Drives the ceditrack binary against a temporary account directory
//! snapshot and checks the fee, split, and validation behaviour from the
//! outside.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use ceditrack::models::{Account, AccountType, Money};

/// Write a three-account snapshot and return (tempdir, snapshot path)
fn snapshot() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();

    let accounts = vec![
        Account::with_balance(
            "Main Bank",
            AccountType::BankAccount,
            "Ecobank Ghana",
            Money::from_cedis(5000),
        ),
        Account::with_balance(
            "Second Bank",
            AccountType::BankAccount,
            "Fidelity Bank",
            Money::from_cedis(50),
        ),
        Account::with_balance(
            "MoMo",
            AccountType::MobileWallet,
            "MTN Mobile Money",
            Money::from_cedis(300),
        ),
    ];

    let path = dir.path().join("accounts.json");
    std::fs::write(&path, serde_json::to_string_pretty(&accounts).unwrap()).unwrap();
    (dir, path)
}

fn ceditrack(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ceditrack").unwrap();
    // Keep config resolution away from the real home directory
    cmd.env("CEDITRACK_DATA_DIR", dir.path());
    cmd
}

#[test]
fn fee_quote_bank_to_bank() {
    let (dir, path) = snapshot();

    ceditrack(&dir)
        .args(["--directory"])
        .arg(&path)
        .args(["fee", "--from", "Main Bank", "--to", "Second Bank", "--amount", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fee:    GHS 2.00"))
        .stdout(predicate::str::contains("Total:  GHS 1002.00"));
}

#[test]
fn fee_quote_wallet_bank_is_capped() {
    let (dir, path) = snapshot();

    ceditrack(&dir)
        .args(["--directory"])
        .arg(&path)
        .args(["fee", "--from", "MoMo", "--to", "Main Bank", "--amount", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fee:    GHS 10.00"));
}

#[test]
fn transfer_prints_summary() {
    let (dir, path) = snapshot();

    ceditrack(&dir)
        .args(["--directory"])
        .arg(&path)
        .args([
            "transfer",
            "--from",
            "Main Bank",
            "--to",
            "MoMo",
            "--amount",
            "100",
            "--reference",
            "Savings",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("From:   Main Bank"))
        .stdout(predicate::str::contains("Fee:    GHS 1.50"))
        .stdout(predicate::str::contains("Total:  GHS 101.50"))
        .stdout(predicate::str::contains("Ref:    Savings"));
}

#[test]
fn transfer_rejects_insufficient_balance() {
    let (dir, path) = snapshot();

    // Second Bank holds 50.00; 49 + 2 fee = 51 > 50
    ceditrack(&dir)
        .args(["--directory"])
        .arg(&path)
        .args([
            "transfer",
            "--from",
            "Second Bank",
            "--to",
            "Main Bank",
            "--amount",
            "49",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Insufficient balance"))
        .stderr(predicate::str::contains("GHS 51.00"));
}

#[test]
fn transfer_rejects_unknown_account() {
    let (dir, path) = snapshot();

    ceditrack(&dir)
        .args(["--directory"])
        .arg(&path)
        .args(["transfer", "--from", "Nowhere", "--to", "MoMo", "--amount", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Account not found"));
}

#[test]
fn split_suggestion() {
    let (dir, _path) = snapshot();

    ceditrack(&dir)
        .args(["split", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GHS 750.00"))
        .stdout(predicate::str::contains("GHS 150.00"))
        .stdout(predicate::str::contains("GHS 100.00"));
}

#[test]
fn split_rejects_non_positive() {
    let (dir, _path) = snapshot();

    ceditrack(&dir)
        .args(["split", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be positive"));
}

#[test]
fn income_includes_split_and_record() {
    let (dir, _path) = snapshot();

    ceditrack(&dir)
        .args([
            "income",
            "--amount",
            "10",
            "--source",
            "Acme Ltd",
            "--category",
            "Salary",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("GHS 7.50"))
        .stdout(predicate::str::contains("Income record:"));
}

#[test]
fn expense_rejects_mismatched_subcategory() {
    let (dir, _path) = snapshot();

    ceditrack(&dir)
        .args([
            "expense",
            "--amount",
            "20",
            "--category",
            "Wants",
            "--subcategory",
            "Utilities",
            "--method",
            "Cash",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not available"));
}

#[test]
fn expense_accepts_valid_entry() {
    let (dir, _path) = snapshot();

    ceditrack(&dir)
        .args([
            "expense",
            "--amount",
            "20",
            "--category",
            "Needs",
            "--subcategory",
            "Utilities",
            "--method",
            "Cash",
            "--recurring",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense record:"))
        .stdout(predicate::str::contains("\"is_recurring\": true"));
}

#[test]
fn account_list_shows_directory() {
    let (dir, path) = snapshot();

    ceditrack(&dir)
        .args(["--directory"])
        .arg(&path)
        .args(["account", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Main Bank"))
        .stdout(predicate::str::contains("MoMo"))
        .stdout(predicate::str::contains("GHS 5000.00"));
}

#[test]
fn account_add_prints_payload() {
    let (dir, path) = snapshot();

    ceditrack(&dir)
        .args(["--directory"])
        .arg(&path)
        .args([
            "account",
            "add",
            "New Wallet",
            "--type",
            "wallet",
            "--provider",
            "Zeepay",
            "--balance",
            "25.00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("New account payload:"))
        .stdout(predicate::str::contains("\"provider\": \"Zeepay\""))
        .stdout(predicate::str::contains("\"balance\": 2500"));
}

#[test]
fn missing_directory_fails_cleanly() {
    let (dir, _path) = snapshot();

    ceditrack(&dir)
        .args(["--directory", "/nonexistent/accounts.json"])
        .args(["account", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load account directory"));
}
