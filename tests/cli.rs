use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn stockroom(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("stockroom").unwrap();
    cmd.env("STOCKROOM_DATA_DIR", data_dir.path());
    cmd
}

fn seed(data_dir: &TempDir, contents: &str) {
    fs::write(data_dir.path().join("inventory.txt"), contents).unwrap();
}

const SAMPLE: &str = "Country,Code,Product,Cost,Quantity\n\
                      USA,SKU1,Loafer,10,5\n\
                      UK,SKU2,Brogue,5,3\n\
                      Italy,SKU3,Boot,40,9";

#[test]
fn test_init_creates_header_only_inventory() {
    let data_dir = TempDir::new().unwrap();

    stockroom(&data_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    let contents = fs::read_to_string(data_dir.path().join("inventory.txt")).unwrap();
    assert_eq!(contents, "Country,Code,Product,Cost,Quantity");
    assert!(data_dir.path().join("config.json").exists());
}

#[test]
fn test_add_then_list() {
    let data_dir = TempDir::new().unwrap();

    stockroom(&data_dir)
        .args(["add", "USA", "sku7", "Boot", "10", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Code: SKU7"));

    stockroom(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Boot"))
        .stdout(predicate::str::contains("Country"));

    let contents = fs::read_to_string(data_dir.path().join("inventory.txt")).unwrap();
    assert!(contents.ends_with("USA,SKU7,Boot,10,4"));
}

#[test]
fn test_add_rejects_bad_code() {
    let data_dir = TempDir::new().unwrap();

    stockroom(&data_dir)
        .args(["add", "USA", "ABC1", "Boot", "10", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("SKU must start with 'SKU'"));
}

#[test]
fn test_search_and_extremes() {
    let data_dir = TempDir::new().unwrap();
    seed(&data_dir, SAMPLE);

    stockroom(&data_dir)
        .args(["search", "sku2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product: Brogue"));

    stockroom(&data_dir)
        .args(["search", "SKU99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("SKU99"));

    stockroom(&data_dir)
        .arg("lowest")
        .assert()
        .success()
        .stdout(predicate::str::contains("Code: SKU2"));

    stockroom(&data_dir)
        .arg("highest")
        .assert()
        .success()
        .stdout(predicate::str::contains("SALE"))
        .stdout(predicate::str::contains("Code: SKU3"));
}

#[test]
fn test_restock_updates_file_and_history() {
    let data_dir = TempDir::new().unwrap();
    seed(&data_dir, SAMPLE);

    stockroom(&data_dir)
        .args(["restock", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SKU2 (Brogue): 3 -> 10"));

    let contents = fs::read_to_string(data_dir.path().join("inventory.txt")).unwrap();
    assert!(contents.contains("UK,SKU2,Brogue,5,10"));

    stockroom(&data_dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("UPDATE SKU2 (Brogue)"))
        .stdout(predicate::str::contains("quantity: 3 -> 10"));
}

#[test]
fn test_history_for_one_code() {
    let data_dir = TempDir::new().unwrap();

    stockroom(&data_dir)
        .args(["add", "USA", "SKU1", "Boot", "10", "2"])
        .assert()
        .success();
    stockroom(&data_dir)
        .args(["add", "UK", "SKU2", "Brogue", "5", "8"])
        .assert()
        .success();

    stockroom(&data_dir)
        .args(["history", "--code", "sku2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE SKU2 (Brogue)"))
        .stdout(predicate::str::contains("SKU1").not());

    stockroom(&data_dir)
        .args(["history", "--code", "SKU9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No history recorded for SKU9."));
}

#[test]
fn test_add_rejects_line_break() {
    let data_dir = TempDir::new().unwrap();

    stockroom(&data_dir)
        .args(["add", "USA", "SKU1", "Air\nMax", "10", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Product cannot contain a line break"));

    assert!(!data_dir.path().join("inventory.txt").exists());
}

#[test]
fn test_non_utf8_inventory_is_left_alone() {
    let data_dir = TempDir::new().unwrap();
    let latin1 = b"Country,Code,Product,Cost,Quantity\nC\xf4te d'Ivoire,SKU7,Sandal,300,4";
    fs::write(data_dir.path().join("inventory.txt"), latin1).unwrap();

    stockroom(&data_dir)
        .args(["add", "USA", "SKU1", "Boot", "10", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not UTF-8"));

    let contents = fs::read(data_dir.path().join("inventory.txt")).unwrap();
    assert_eq!(contents, latin1.to_vec());
}

#[test]
fn test_value_totals() {
    let data_dir = TempDir::new().unwrap();
    seed(&data_dir, SAMPLE);

    stockroom(&data_dir)
        .arg("value")
        .assert()
        .success()
        .stdout(predicate::str::contains("TOTAL:"))
        .stdout(predicate::str::contains("425"));
}

#[test]
fn test_value_on_empty_inventory_fails() {
    let data_dir = TempDir::new().unwrap();

    stockroom(&data_dir)
        .arg("value")
        .assert()
        .failure()
        .stderr(predicate::str::contains("The inventory is empty"));
}

#[test]
fn test_malformed_inventory_is_reported() {
    let data_dir = TempDir::new().unwrap();
    seed(&data_dir, "Country,Code,Product,Cost,Quantity\nUSA,SKU1,Boot,ten,5");

    stockroom(&data_dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cost must be an integer"));
}

#[test]
fn test_file_override() {
    let data_dir = TempDir::new().unwrap();
    let other = data_dir.path().join("other.txt");
    fs::write(&other, SAMPLE).unwrap();

    stockroom(&data_dir)
        .arg("--file")
        .arg(&other)
        .arg("lowest")
        .assert()
        .success()
        .stdout(predicate::str::contains("Code: SKU2"));
}

#[test]
fn test_menu_on_missing_inventory() {
    let data_dir = TempDir::new().unwrap();

    stockroom(&data_dir)
        .write_stdin("n\n2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Inventory file not found."))
        .stdout(predicate::str::contains("Add a new record"));
}

#[test]
fn test_menu_lists_records() {
    let data_dir = TempDir::new().unwrap();
    seed(&data_dir, SAMPLE);

    stockroom(&data_dir)
        .arg("menu")
        .write_stdin("1\n\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Display stock values"))
        .stdout(predicate::str::contains("Loafer"));
}
