// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use trustfund::auth::MemberDirectory;
use trustfund::models::{UAP_COLUMNS, UAP_SHEET};
use trustfund::store::MemStore;
use trustfund::{cli, commands::uap};

fn setup() -> MemStore {
    let store = MemStore::new();
    store.insert_table(
        UAP_SHEET,
        vec![UAP_COLUMNS.iter().map(|s| s.to_string()).collect()],
    );
    store
}

fn run(store: &MemStore, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["trustfund", "uap"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    let Some(("uap", sub)) = matches.subcommand() else {
        panic!("no uap subcommand");
    };
    uap::handle(store, &MemberDirectory::builtin(), sub)
}

#[test]
fn a_valid_submission_appends_one_normalized_row() {
    let store = setup();
    run(
        &store,
        &[
            "add",
            "--month",
            "March",
            "--year",
            "2024",
            "--user",
            "Alvin Mulumba",
            "--password",
            "456",
            "--opening",
            "1000000",
            "--closing",
            "1050000",
            "--interest",
            "8%",
        ],
    )
    .unwrap();

    let rows = store.rows(UAP_SHEET);
    assert_eq!(rows.len(), 2);
    let row = &rows[1];
    assert!(row[0].ends_with("EAT"));
    assert_eq!(row[1], "March");
    assert_eq!(row[2], "2024");
    assert_eq!(row[3], "1050000");
    assert_eq!(row[4], "1000000");
    assert_eq!(row[5], "0.08");
    assert_eq!(row[6], "2024-03-01");
}

#[test]
fn the_bare_percentage_form_normalizes_the_same_way() {
    let store = setup();
    run(
        &store,
        &[
            "add", "--month", "March", "--year", "2024", "--user", "Data Entrant",
            "--password", "789", "--opening", "1000000", "--closing", "1050000",
            "--interest", "8.5",
        ],
    )
    .unwrap();
    assert_eq!(store.rows(UAP_SHEET)[1][5], "0.085");
}

#[test]
fn every_violation_blocks_the_write() {
    let store = setup();
    let err = run(
        &store,
        &[
            "add", "--month", "March", "--year", "2024", "--user", "Alvin Mulumba",
            "--password", "456", "--opening", "", "--closing", "0", "--interest", "",
        ],
    )
    .unwrap_err();
    assert!(err.to_string().contains("3 error(s)"));
    assert_eq!(store.rows(UAP_SHEET).len(), 1);
}

#[test]
fn duplicate_months_stay_append_only() {
    let store = setup();
    for closing in ["1050000", "1060000"] {
        run(
            &store,
            &[
                "add", "--month", "March", "--year", "2024", "--user", "Alvin Mulumba",
                "--password", "456", "--opening", "1000000", "--closing", closing,
                "--interest", "8%",
            ],
        )
        .unwrap();
    }
    let rows = store.rows(UAP_SHEET);
    assert_eq!(rows.len(), 3);

    // Last-wins-by-date: the re-entered row is the one the dashboard reads.
    let records = trustfund::models::load_uap(&store).unwrap();
    assert_eq!(
        trustfund::aggregate::latest_closing_balance(&records),
        Some("1060000".parse().unwrap())
    );
}
