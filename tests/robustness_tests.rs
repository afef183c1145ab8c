mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_malformed_payment_rows_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let accounts = dir.path().join("accounts.csv");
    let payments = dir.path().join("payments.csv");

    common::write_csv(
        &accounts,
        &["number", "balance", "status", "allowed_schemes"],
        &[&["1001", "500", "live", "BACS"]],
    )
    .unwrap();
    common::write_csv(
        &payments,
        &["debtor_account_number", "payment_scheme", "amount"],
        &[
            // Valid payment
            &["1001", "bacs", "100"],
            // Unknown scheme
            &["1001", "swift", "100"],
            // Negative amount
            &["1001", "bacs", "-5"],
            // Text in amount field
            &["1001", "bacs", "not_a_number"],
            // Valid payment again
            &["1001", "bacs", "50"],
        ],
    )
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("scheme-payments"));
    cmd.arg(&payments).arg("--accounts").arg(&accounts);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading payment request"))
        .stdout(predicate::str::contains("1001,350,live,BACS")); // 500 - 100 - 50
}

#[test]
fn test_malformed_account_rows_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let accounts = dir.path().join("accounts.csv");
    let payments = dir.path().join("payments.csv");

    common::write_csv(
        &accounts,
        &["number", "balance", "status", "allowed_schemes"],
        &[
            &["1001", "500", "frozen", "BACS"],
            &["1002", "500", "live", "SWIFT"],
            &["1003", "500", "live", "CHAPS"],
        ],
    )
    .unwrap();
    common::write_csv(
        &payments,
        &["debtor_account_number", "payment_scheme", "amount"],
        &[&["1003", "chaps", "125"]],
    )
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("scheme-payments"));
    cmd.arg(&payments).arg("--accounts").arg(&accounts);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading account"))
        .stdout(predicate::str::contains("1003,375,live,CHAPS"))
        .stdout(predicate::str::contains("1001").not())
        .stdout(predicate::str::contains("1002").not());
}
