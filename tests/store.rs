use rust_decimal::Decimal;
use shoe_inventory::error::StoreError;
use shoe_inventory::record::{ShoeRecord, HEADER};
use shoe_inventory::store::{InventoryStore, LoadReport};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const SAMPLE: &str = "Country,Code,Product,Cost,Quantity
South Africa,SKU44386,Air Max,2300.0,5
China,SKU90000,Jordan,3200.5,2
Vietnam,SKU63451,Cortez,970.0,8
";

fn write_sample(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("inventory.txt");
    fs::write(&path, SAMPLE).unwrap();
    path
}

fn loaded(dir: &TempDir) -> InventoryStore {
    let mut store = InventoryStore::new(write_sample(dir));
    store.load().unwrap();
    store
}

#[test]
fn load_reads_every_data_line() {
    let dir = TempDir::new().unwrap();
    let mut store = InventoryStore::new(write_sample(&dir));

    let report = store.load().unwrap();
    assert_eq!(report, LoadReport { loaded: 3, skipped: 0 });
    assert_eq!(store.len(), 3);

    let first = &store.records()[0];
    assert_eq!(first.country, "South Africa");
    assert_eq!(first.code, "SKU44386");
    assert_eq!(first.product, "Air Max");
    assert_eq!(first.cost, Decimal::new(23000, 1));
    assert_eq!(first.quantity, 5);
    assert_eq!(store.records()[1].cost, Decimal::new(32005, 1));
}

#[test]
fn load_missing_file_leaves_store_empty() {
    let dir = TempDir::new().unwrap();
    let mut store = InventoryStore::new(dir.path().join("inventory.txt"));

    let err = store.load().unwrap_err();
    assert!(matches!(err, StoreError::Missing(_)));
    assert_eq!(
        err.to_string(),
        format!("The file '{}' was not found.", store.path().display())
    );
    assert!(store.is_empty());
}

#[test]
fn load_skips_malformed_and_blank_lines() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.txt");
    let contents = format!(
        "{HEADER}\n\
         Peru,SKU00001,Boot,10,1\n\
         \n\
         broken line\n\
         Chile,SKU00002,Sandal,abc,2\n\
         Chile,SKU00003,Clog,5,3\n"
    );
    fs::write(&path, contents).unwrap();

    let mut store = InventoryStore::new(path);
    let report = store.load().unwrap();
    assert_eq!(report, LoadReport { loaded: 2, skipped: 2 });
    assert_eq!(store.records()[1].code, "SKU00003");
}

#[test]
fn append_adds_one_record_and_one_line() {
    let dir = TempDir::new().unwrap();
    let mut store = loaded(&dir);
    let before = fs::read_to_string(store.path()).unwrap();

    let shoe = ShoeRecord::new("Italy", "SKU12345", "Loafer", Decimal::new(200, 1), 3);
    store.append(shoe.clone()).unwrap();

    assert_eq!(store.len(), 4);
    assert_eq!(store.records()[3], shoe);

    let after = fs::read_to_string(store.path()).unwrap();
    assert_eq!(after, format!("{before}Italy,SKU12345,Loafer,20.0,3\n"));
}

#[test]
fn append_after_unterminated_last_line_starts_a_new_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.txt");
    fs::write(&path, format!("{HEADER}\nPeru,SKU00001,Boot,10,1")).unwrap();

    let mut store = InventoryStore::new(&path);
    store.load().unwrap();
    store
        .append(ShoeRecord::new("Italy", "SKU12345", "Loafer", Decimal::new(200, 1), 3))
        .unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        format!("{HEADER}\nPeru,SKU00001,Boot,10,1\nItaly,SKU12345,Loafer,20.0,3\n")
    );

    let mut reloaded = InventoryStore::new(&path);
    assert_eq!(reloaded.load().unwrap(), LoadReport { loaded: 2, skipped: 0 });
    assert_eq!(reloaded.records(), store.records());
}

#[test]
fn append_to_missing_file_writes_header_first() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.txt");
    let mut store = InventoryStore::new(&path);
    assert!(store.load().is_err());

    store
        .append(ShoeRecord::new("Peru", "SKU00001", "Boot", Decimal::new(10, 0), 1))
        .unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        format!("{HEADER}\nPeru,SKU00001,Boot,10,1\n")
    );

    let mut reloaded = InventoryStore::new(&path);
    assert_eq!(reloaded.load().unwrap().loaded, 1);
}

#[test]
fn restock_lowest_rewrites_every_record() {
    let dir = TempDir::new().unwrap();
    let mut store = loaded(&dir);
    assert_eq!(store.lowest_stock().unwrap().code, "SKU90000");

    let shoe = store.restock_lowest(10).unwrap();
    assert_eq!(shoe.code, "SKU90000");
    assert_eq!(shoe.quantity, 12);

    let expected = "Country,Code,Product,Cost,Quantity
South Africa,SKU44386,Air Max,2300.0,5
China,SKU90000,Jordan,3200.5,12
Vietnam,SKU63451,Cortez,970.0,8
";
    assert_eq!(fs::read_to_string(store.path()).unwrap(), expected);

    let mut reloaded = InventoryStore::new(store.path());
    reloaded.load().unwrap();
    assert_eq!(reloaded.records(), store.records());
}

#[test]
fn restock_rolls_back_when_rewrite_fails() {
    let dir = TempDir::new().unwrap();
    let mut store = loaded(&dir);

    // Replace the backing file with a directory so the rewrite fails.
    fs::remove_file(store.path()).unwrap();
    fs::create_dir(store.path()).unwrap();

    assert!(matches!(store.restock_lowest(10), Err(StoreError::Io { .. })));
    assert_eq!(store.find_by_code("SKU90000").unwrap().quantity, 2);
}

#[test]
fn restock_on_empty_store_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut store = InventoryStore::new(dir.path().join("inventory.txt"));
    assert!(matches!(store.restock_lowest(1), Err(StoreError::Empty)));
    assert!(!store.path().exists());
}

#[test]
fn extremes_and_search_on_loaded_file() {
    let dir = TempDir::new().unwrap();
    let store = loaded(&dir);

    assert_eq!(store.lowest_stock().unwrap().quantity, 2);
    assert_eq!(store.highest_stock().unwrap().quantity, 8);
    assert_eq!(store.find_by_code("sku63451").unwrap().product, "Cortez");

    let before = fs::read_to_string(store.path()).unwrap();
    assert!(store.find_by_code("SKU00000").is_none());
    assert_eq!(store.len(), 3);
    assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
}

#[test]
fn value_report_is_per_record() {
    let dir = TempDir::new().unwrap();
    let store = loaded(&dir);

    let values: Vec<Option<Decimal>> = store.value_report().iter().map(|v| v.value).collect();
    assert_eq!(
        values,
        [
            Some(Decimal::new(115000, 1)),
            Some(Decimal::new(64010, 1)),
            Some(Decimal::new(77600, 1)),
        ]
    );
}
