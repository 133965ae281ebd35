use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use tempfile::TempDir;

/// Run the binary against `store`, feeding `script` line by line on stdin.
fn run(store: &Path, script: &str) -> (String, String, bool) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_shop-ledger"))
        .arg(store)
        .env("RUST_LOG", "warn")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run binary");

    child
        .stdin
        .take()
        .expect("stdin not piped")
        .write_all(script.as_bytes())
        .expect("failed to write script");

    let output = child.wait_with_output().expect("failed to wait for binary");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

fn temp_store(fixture: Option<&str>) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.csv");
    if let Some(fixture) = fixture {
        std::fs::copy(format!("tests/fixtures/{fixture}"), &path).unwrap();
    }
    (dir, path)
}

#[test]
fn fresh_store_starts_empty_with_default_cash() {
    let (_dir, store) = temp_store(None);
    let (stdout, stderr, success) = run(&store, "1\n2\n5\n");

    assert!(success);
    assert!(stderr.is_empty());
    assert!(stdout.contains("Stock is empty."));
    assert!(stdout.contains("Cash available: $1000.00"));
    assert!(stdout.contains("Data saved. Goodbye!"));

    // An empty catalog still persists the cash balance.
    let saved = std::fs::read_to_string(&store).unwrap();
    assert_eq!(
        saved,
        "product,quantity,purchase_price,sale_price,cash\n,,,,1000.00\n"
    );
}

#[test]
fn add_and_sell_update_cash_and_store() {
    let (_dir, store) = temp_store(None);
    let script = "3\nSoda\n10\n2.00\n3.50\n4\nSoda\n4\n2\n5\n";
    let (stdout, _stderr, success) = run(&store, script);

    assert!(success);
    assert!(stdout.contains("Product 'Soda' added to stock. Cost: $20.00"));
    assert!(stdout.contains("Cash available: $980.00"));
    assert!(stdout.contains("4 units of 'Soda' sold. Revenue: $14.00"));
    assert!(stdout.contains("Cash available: $994.00"));

    let saved = std::fs::read_to_string(&store).unwrap();
    assert!(saved.contains("Soda,6,2.00,3.50,994.00"));
}

#[test]
fn reloads_saved_state() {
    let (_dir, store) = temp_store(Some("store.csv"));
    let (stdout, _stderr, success) = run(&store, "1\n2\n5\n");

    assert!(success);
    assert!(stdout.contains("| Soda    |        6 |    $2.00 | $3.50 |"));
    assert!(stdout.contains("| Water   |        8 |    $1.00 | $2.00 |"));
    assert!(stdout.contains("Cash available: $994.00"));
}

#[test]
fn failed_sale_reports_and_continues() {
    let (_dir, store) = temp_store(Some("store.csv"));
    let script = "4\nSoda\n100\n2\n5\n";
    let (stdout, _stderr, success) = run(&store, script);

    assert!(success);
    assert!(stdout.contains("Error: product 'Soda' unavailable: 6 in stock, 100 requested"));
    // Cash untouched by the failed sale, loop kept going.
    assert!(stdout.contains("Cash available: $994.00"));
    assert!(stdout.contains("Data saved. Goodbye!"));
}

#[test]
fn corrupt_store_falls_back_to_defaults() {
    let (_dir, store) = temp_store(Some("corrupt.csv"));
    let (stdout, stderr, success) = run(&store, "2\n5\n");

    assert!(success);
    assert!(stdout.contains("Could not read saved data"));
    assert!(stdout.contains("Cash available: $1000.00"));
    assert!(stderr.contains("invalid quantity value 'lots'"));
}

#[test]
fn invalid_menu_selection_is_not_fatal() {
    let (_dir, store) = temp_store(None);
    let (stdout, _stderr, success) = run(&store, "9\nshow\n5\n");

    assert!(success);
    assert!(stdout.contains("Invalid option. Try again."));
    assert!(stdout.contains("Data saved. Goodbye!"));
}

#[test]
fn save_failure_is_reported_but_exit_is_orderly() {
    // A directory as the store path makes the shutdown write fail.
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, success) = run(dir.path(), "5\n");

    assert!(success);
    assert!(stdout.contains("Failed to save data:"));
    assert!(!stdout.contains("Data saved. Goodbye!"));
}

#[test]
fn eof_without_exit_still_saves() {
    let (_dir, store) = temp_store(None);
    let (stdout, _stderr, success) = run(&store, "3\nSoda\n10\n2.00\n3.50\n");

    assert!(success);
    assert!(stdout.contains("Data saved. Goodbye!"));

    let saved = std::fs::read_to_string(&store).unwrap();
    assert!(saved.contains("Soda,10,2.00,3.50,980.00"));
}
