use super::*;
use rust_decimal::Decimal;
use std::str::FromStr;

fn create_test_store() -> LabelStore {
    LabelStore::open_in_memory().unwrap()
}

fn draft(company: &str, product: &str, amount: &str, qty: Option<u32>) -> ProductDraft {
    ProductDraft {
        company_name: Some(company.to_string()),
        product_name: Some(product.to_string()),
        amount: Decimal::from_str(amount).ok(),
        print_quantity: qty,
    }
}

#[test]
fn test_fresh_store_uses_default_counter() {
    let store = create_test_store();
    assert_eq!(store.counter(), DEFAULT_COUNTER);
    assert_eq!(store.history_len(), 0);
}

#[test]
fn test_barcodes_are_sequential() {
    let store = create_test_store();

    let barcodes: Vec<u64> = (0..5)
        .map(|i| {
            store
                .record_product(draft("Acme", &format!("Widget {}", i), "1.00", None))
                .unwrap()
                .barcode
        })
        .collect();

    assert_eq!(
        barcodes,
        vec![
            DEFAULT_COUNTER,
            DEFAULT_COUNTER + 1,
            DEFAULT_COUNTER + 2,
            DEFAULT_COUNTER + 3,
            DEFAULT_COUNTER + 4,
        ]
    );
    assert_eq!(store.counter(), DEFAULT_COUNTER + 5);
}

#[test]
fn test_history_is_newest_first() {
    let store = create_test_store();

    store.record_product(draft("Acme", "First", "1.00", None)).unwrap();
    store.record_product(draft("Acme", "Second", "2.00", None)).unwrap();
    store.record_product(draft("Acme", "Third", "3.00", None)).unwrap();

    let history = store.history(None);
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].product_name, "Third");
    assert_eq!(history[2].product_name, "First");
}

#[test]
fn test_history_display_truncation() {
    let store = create_test_store();

    for i in 0..15 {
        store
            .record_product(draft("Acme", &format!("P{}", i), "1.00", None))
            .unwrap();
    }

    // Display cap truncates, storage retains everything
    assert_eq!(store.history(Some(10)).len(), 10);
    assert_eq!(store.history_len(), 15);
    assert_eq!(store.history(Some(10))[0].product_name, "P14");
}

#[test]
fn test_record_example_from_start_counter() {
    let store = create_test_store();

    let record = store
        .record_product(draft("Acme", "Widget", "9.99", Some(2)))
        .unwrap();

    assert_eq!(record.barcode, 1_000_000_000_000);
    assert_eq!(record.print_quantity, 2);
    assert_eq!(record.amount, Decimal::from_str("9.99").unwrap());
    assert_eq!(store.counter(), 1_000_000_000_001);
    assert_eq!(store.history(None), vec![record]);
}

#[test]
fn test_missing_fields_leave_state_unchanged() {
    let store = create_test_store();

    let missing = [
        ProductDraft {
            company_name: None,
            ..draft("Acme", "Widget", "1.00", None)
        },
        ProductDraft {
            product_name: Some("   ".to_string()),
            ..draft("Acme", "Widget", "1.00", None)
        },
        ProductDraft {
            amount: None,
            ..draft("Acme", "Widget", "1.00", None)
        },
    ];

    for d in missing {
        let err = store.record_product(d).unwrap_err();
        assert_eq!(err.code, shared::ErrorCode::RequiredField);
    }

    assert_eq!(store.counter(), DEFAULT_COUNTER);
    assert_eq!(store.history_len(), 0);
}

#[test]
fn test_negative_amount_rejected() {
    let store = create_test_store();

    let err = store
        .record_product(draft("Acme", "Widget", "-0.01", None))
        .unwrap_err();
    assert_eq!(err.code, shared::ErrorCode::ValidationFailed);
    assert_eq!(store.counter(), DEFAULT_COUNTER);
}

#[test]
fn test_amount_normalized_to_two_decimals() {
    let store = create_test_store();

    let record = store
        .record_product(draft("Acme", "Widget", "9.999", None))
        .unwrap();
    assert_eq!(record.amount, Decimal::from_str("10.00").unwrap());
}

#[test]
fn test_print_quantity_defaults_and_clamps() {
    let store = create_test_store();

    let record = store.record_product(draft("Acme", "A", "1.00", None)).unwrap();
    assert_eq!(record.print_quantity, 1);

    let record = store.record_product(draft("Acme", "B", "1.00", Some(0))).unwrap();
    assert_eq!(record.print_quantity, 1);

    let record = store
        .record_product(draft("Acme", "C", "1.00", Some(500)))
        .unwrap();
    assert_eq!(record.print_quantity, MAX_PRINT_QUANTITY);
}

#[test]
fn test_set_counter() {
    let store = create_test_store();

    assert_eq!(store.set_counter(Some(42)).unwrap(), 42);
    assert_eq!(store.counter(), 42);

    let record = store.record_product(draft("Acme", "Widget", "1.00", None)).unwrap();
    assert_eq!(record.barcode, 42);
    assert_eq!(store.counter(), 43);

    // Absent/invalid input silently resets to the default
    assert_eq!(store.set_counter(None).unwrap(), DEFAULT_COUNTER);
    assert_eq!(store.counter(), DEFAULT_COUNTER);
}

#[test]
fn test_exhausted_counter_is_rejected() {
    let store = create_test_store();

    // The last representable value still yields a record
    store.set_counter(Some(u64::MAX - 1)).unwrap();
    let record = store.record_product(draft("Acme", "Widget", "1.00", None)).unwrap();
    assert_eq!(record.barcode, u64::MAX - 1);
    assert_eq!(store.counter(), u64::MAX);

    // At u64::MAX the increment would wrap, so generation errors instead
    let err = store
        .record_product(draft("Acme", "Widget", "1.00", None))
        .unwrap_err();
    assert_eq!(err.code, shared::ErrorCode::ValueOutOfRange);

    assert_eq!(store.counter(), u64::MAX);
    assert_eq!(store.history_len(), 1);
}

#[test]
fn test_reset_counter() {
    let store = create_test_store();

    store.set_counter(Some(7)).unwrap();
    store.reset_counter().unwrap();
    assert_eq!(store.counter(), DEFAULT_COUNTER);
}

#[test]
fn test_clear_history() {
    let store = create_test_store();

    store.record_product(draft("Acme", "Widget", "1.00", None)).unwrap();
    store.clear_history().unwrap();

    assert_eq!(store.history_len(), 0);
    // Counter is untouched by a history clear
    assert_eq!(store.counter(), DEFAULT_COUNTER + 1);
}

#[test]
fn test_find_by_id() {
    let store = create_test_store();

    let record = store.record_product(draft("Acme", "Widget", "1.00", None)).unwrap();
    assert_eq!(store.find(record.id), Some(record));
    assert_eq!(store.find(-1), None);
}

#[test]
fn test_state_survives_reopen() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("labels.redb");

    let record = {
        let store = LabelStore::open(&path).unwrap();
        store.set_counter(Some(500)).unwrap();
        store.record_product(draft("Acme", "Widget", "9.99", Some(3))).unwrap()
    };

    let store = LabelStore::open(&path).unwrap();
    assert_eq!(store.counter(), 501);
    assert_eq!(store.history(None), vec![record]);
}

#[test]
fn test_corrupt_state_falls_back_to_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("labels.redb");

    // Scribble over both persisted values
    {
        let db = Database::create(&path).unwrap();
        let write_txn = db.begin_write().unwrap();
        {
            let mut table = write_txn.open_table(STATE_TABLE).unwrap();
            table.insert(LAST_BARCODE_KEY, "not a number").unwrap();
            table.insert(PRODUCT_HISTORY_KEY, "{ definitely not json").unwrap();
        }
        write_txn.commit().unwrap();
    }

    // Opening never surfaces an error for corrupt state
    let store = LabelStore::open(&path).unwrap();
    assert_eq!(store.counter(), DEFAULT_COUNTER);
    assert_eq!(store.history_len(), 0);

    // And the store is fully usable again
    let record = store.record_product(draft("Acme", "Widget", "1.00", None)).unwrap();
    assert_eq!(record.barcode, DEFAULT_COUNTER);
}

#[test]
fn test_cleared_history_stays_cleared_after_reopen() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("labels.redb");

    {
        let store = LabelStore::open(&path).unwrap();
        store.record_product(draft("Acme", "Widget", "1.00", None)).unwrap();
        store.clear_history().unwrap();
    }

    let store = LabelStore::open(&path).unwrap();
    assert_eq!(store.history_len(), 0);
}
