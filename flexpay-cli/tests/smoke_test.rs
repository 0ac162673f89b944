//! Smoke tests for flexpay-cli
//!
//! These tests run the built binary without network access.

use std::io::Write;
use std::process::{Command, Output};

const SECRET: &str = "zpXwe2D77g4P7ysGJcr3rY87TBYs6J";

fn flexpay(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_flexpay"))
        .args(args)
        .env_remove("FLEXPAY_SHOP_ID")
        .env_remove("FLEXPAY_SIGNATURE_KEY")
        .env_remove("FLEXPAY_MERCHANT_ID")
        .output()
        .expect("Failed to execute command")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Test that the CLI can show help
#[test]
fn test_cli_help() {
    let output = flexpay(&["--help"]);
    let stdout = stdout(&output);

    assert!(output.status.success());
    for command in ["purchase", "subscription", "upgrade", "status", "validate"] {
        assert!(stdout.contains(command), "Help should mention '{command}'");
    }
}

#[test]
fn test_status_url() {
    let output = flexpay(&[
        "--shop-id",
        "60678",
        "--signature-key",
        SECRET,
        "status",
        "--sale-id",
        "433456",
    ]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "https://secure.verotel.com/salestatus?saleID=433456&shopID=60678&version=4\
         &signature=3a1302367c836c003d1674bf14aab48ef537fae7213f97e054b779940e925c2b"
    );
}

#[test]
fn test_status_requires_lookup() {
    let output = flexpay(&["--shop-id", "60678", "--signature-key", SECRET, "status"]);
    assert!(!output.status.success());
}

#[test]
fn test_credentials_from_env() {
    let output = Command::new(env!("CARGO_BIN_EXE_flexpay"))
        .args(["cancel", "--sale-id", "433456"])
        .env("FLEXPAY_SHOP_ID", "60678")
        .env("FLEXPAY_SIGNATURE_KEY", SECRET)
        .env("FLEXPAY_MERCHANT_ID", "9653000000000000")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert!(stdout(&output).starts_with(
        "https://secure.bitsafepay.com/cancel-subscription?saleID=433456&shopID=60678&version=4&signature="
    ));
}

#[test]
fn test_missing_credentials_fail() {
    let output = flexpay(&["cancel", "--sale-id", "1"]);
    assert!(!output.status.success());
}

#[test]
fn test_purchase_with_config_file() {
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("flexpay.json");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, r#"{{"shop_id": "60678", "signature_key": "{SECRET}"}}"#).unwrap();
    drop(file);

    let output = flexpay(&[
        "--config",
        path.to_str().unwrap(),
        "purchase",
        "--amount",
        "45.20",
        "--currency",
        "EUR",
        "--description",
        "My Dščřčřřěřě&?=blah123",
        "--payment-method",
        "CC",
        "--reference-id",
        "ref1",
        "--custom1",
        "custom1",
        "--custom2",
        "custom2",
        "--custom3",
        "custom3",
        "--success-url",
        "http://example.com/approve",
        "--decline-url",
        "http://example.com/decline",
        "--email",
        "foo@example.com",
    ]);

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout(&output)
        .ends_with("&signature=08a33095ae3f4cee4ba25bc50a4076d11c008b84e40423a1cd436c29d2a9225b"));
}

#[test]
fn test_sign_and_validate() {
    let creds = ["--shop-id", "60678", "--signature-key", SECRET];

    let mut args = creds.to_vec();
    args.extend(["sign", "saleID=433456", "version=4", "email=ignored@example.com"]);
    let output = flexpay(&args);
    assert!(output.status.success());
    let signature = stdout(&output);
    assert_eq!(
        signature,
        "3a1302367c836c003d1674bf14aab48ef537fae7213f97e054b779940e925c2b"
    );

    let valid = format!("saleID=433456&version=4&signature={signature}");
    let mut args = creds.to_vec();
    args.extend(["validate", valid.as_str()]);
    assert!(flexpay(&args).status.success());

    let tampered = format!("saleID=433457&version=4&signature={signature}");
    let mut args = creds.to_vec();
    args.extend(["validate", tampered.as_str()]);
    assert_eq!(flexpay(&args).status.code(), Some(1));
}

#[test]
fn test_brand_lookup() {
    let output = flexpay(&["brand", "9001000000000000", "--json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["brand"], "yoursafedirect");
    assert_eq!(value["flexpay_url"], "https://secure.yoursafedirect.com/startorder");

    let output = flexpay(&["brand", "1234000000000000"]);
    assert!(!output.status.success());
}
