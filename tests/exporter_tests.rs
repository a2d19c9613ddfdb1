// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use trustfund::models::{PAYMENT_COLUMNS, PAYMENTS_SHEET};
use trustfund::store::MemStore;
use trustfund::{cli, commands::exporter};

fn setup() -> MemStore {
    let store = MemStore::new();
    let mut rows = vec![PAYMENT_COLUMNS.iter().map(|s| s.to_string()).collect::<Vec<_>>()];
    rows.push(
        ["t1", "March", "Edwin Mpoza", "100", "2024", "2024-03-01"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    );
    store.insert_table(PAYMENTS_SHEET, rows);
    store
}

fn run(store: &MemStore, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["trustfund", "export"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    let Some(("export", sub)) = matches.subcommand() else {
        panic!("no export subcommand");
    };
    exporter::handle(store, sub)
}

#[test]
fn csv_export_writes_header_and_rows_verbatim() {
    let store = setup();
    let file = tempfile::NamedTempFile::new().unwrap();
    let path = file.path().to_str().unwrap().to_string();
    run(&store, &["payments", "--format", "csv", "--out", &path]).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Timestamp,Month,Name,Amount Deposited,Year,Data Date"
    );
    assert_eq!(lines.next().unwrap(), "t1,March,Edwin Mpoza,100,2024,2024-03-01");
}

#[test]
fn json_export_keys_rows_by_the_header() {
    let store = setup();
    let file = tempfile::NamedTempFile::new().unwrap();
    let path = file.path().to_str().unwrap().to_string();
    run(&store, &["payments", "--format", "json", "--out", &path]).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let items: Vec<serde_json::Value> = serde_json::from_str(&contents).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["Name"], "Edwin Mpoza");
    assert_eq!(items[0]["Amount Deposited"], "100");
}
