// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use trustfund::error::StoreError;
use trustfund::models::{self, PAYMENT_COLUMNS};
use trustfund::store::{MemStore, TabularStore};

fn header(cols: &[&str]) -> Vec<String> {
    cols.iter().map(|s| s.to_string()).collect()
}

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|s| s.to_string()).collect()
}

#[test]
fn load_of_a_missing_sheet_is_not_found() {
    let store = MemStore::new();
    match store.load("Payments") {
        Err(StoreError::NotFound(name)) => assert_eq!(name, "Payments"),
        other => panic!("expected NotFound, got {:?}", other.map(|r| r.len())),
    }
}

#[test]
fn append_preserves_order_and_is_visible_to_a_fresh_load() {
    let store = MemStore::new();
    store.insert_table("Payments", vec![header(&PAYMENT_COLUMNS)]);
    store
        .append(
            "Payments",
            &[
                row(&["t1", "March", "Edwin Mpoza", "100", "2024", "2024-03-01"]),
                row(&["t2", "March", "Phillip Musumba", "200", "2024", "2024-03-01"]),
            ],
        )
        .unwrap();
    let rows = store.load("Payments").unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1][2], "Edwin Mpoza");
    assert_eq!(rows[2][2], "Phillip Musumba");
}

#[test]
fn append_to_a_missing_sheet_propagates_not_found() {
    let store = MemStore::new();
    let err = store.append("Costs", &[row(&["x"])]).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}

#[test]
fn typed_load_degrades_a_missing_sheet_to_the_empty_table() {
    let store = MemStore::new();
    let payments = models::load_payments(&store).unwrap();
    assert!(payments.is_empty());
}

#[test]
fn typed_load_rejects_an_unexpected_header() {
    let store = MemStore::new();
    store.insert_table("Payments", vec![row(&["When", "Who", "How Much"])]);
    let err = models::load_payments(&store).unwrap_err();
    assert!(err.to_string().contains("unexpected header"));
}

#[test]
fn typed_load_reports_the_offending_row() {
    let store = MemStore::new();
    store.insert_table(
        "Payments",
        vec![
            header(&PAYMENT_COLUMNS),
            row(&["t1", "March", "Edwin Mpoza", "100", "2024", "2024-03-01"]),
            row(&["t2", "March", "Phillip Musumba", "lots", "2024", "2024-03-01"]),
        ],
    );
    let err = models::load_payments(&store).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("row 3"), "unexpected message: {}", msg);
    assert!(msg.contains("invalid amount 'lots'"), "unexpected message: {}", msg);
}

#[test]
fn typed_load_parses_well_formed_rows() {
    let store = MemStore::new();
    store.insert_table(
        "UAP Portfolio",
        vec![
            header(&models::UAP_COLUMNS),
            row(&[
                "t1",
                "March",
                "2024",
                "1050000",
                "1000000",
                "0.08",
                "2024-03-01",
            ]),
        ],
    );
    let rows = models::load_uap(&store).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].interest_rate, "0.08".parse().unwrap());
    assert_eq!(rows[0].closing, "1050000".parse().unwrap());
    assert_eq!(rows[0].data_date.to_string(), "2024-03-01");
}
