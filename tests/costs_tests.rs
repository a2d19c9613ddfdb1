// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use trustfund::auth::MemberDirectory;
use trustfund::models::{COST_COLUMNS, COSTS_SHEET};
use trustfund::store::MemStore;
use trustfund::{cli, commands::costs};

fn setup() -> MemStore {
    let store = MemStore::new();
    store.insert_table(
        COSTS_SHEET,
        vec![COST_COLUMNS.iter().map(|s| s.to_string()).collect()],
    );
    store
}

fn run(store: &MemStore, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["trustfund", "cost"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    let Some(("cost", sub)) = matches.subcommand() else {
        panic!("no cost subcommand");
    };
    costs::handle(store, &MemberDirectory::builtin(), sub)
}

fn add_args<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    let mut args = vec![
        "add",
        "--month",
        "October",
        "--year",
        "2023",
        "--user",
        "Alvin Mulumba",
        "--password",
        "456",
    ];
    for &l in lines {
        args.push("--line");
        args.push(l);
    }
    args
}

#[test]
fn a_full_cost_line_is_appended_with_its_narrative() {
    let store = setup();
    run(&store, &add_args(&["Rent|500000|October rent"])).unwrap();
    let rows = store.rows(COSTS_SHEET);
    assert_eq!(rows.len(), 2);
    let rent = &rows[1];
    assert!(rent[0].ends_with("EAT"));
    assert_eq!(rent[1], "October");
    assert_eq!(rent[2], "Rent");
    assert_eq!(rent[3], "500000");
    assert_eq!(rent[4], "October rent");
    assert_eq!(rent[5], "2023");
    assert_eq!(rent[6], "2023-10-01");
}

#[test]
fn an_item_without_an_amount_is_rejected_whole() {
    let store = setup();
    let err = run(&store, &add_args(&["Rent||"])).unwrap_err();
    assert!(err.to_string().contains("1 error(s)"));
    assert_eq!(store.rows(COSTS_SHEET).len(), 1);
}

#[test]
fn blank_lines_are_skipped_while_filled_lines_save() {
    let store = setup();
    run(&store, &add_args(&["||", "Airtime|20000|"])).unwrap();
    let rows = store.rows(COSTS_SHEET);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][2], "Airtime");
    assert_eq!(rows[1][4], "");
}

#[test]
fn no_lines_at_all_saves_nothing() {
    let store = setup();
    run(&store, &add_args(&[])).unwrap();
    assert_eq!(store.rows(COSTS_SHEET).len(), 1);
}

#[test]
fn one_bad_line_blocks_the_whole_batch() {
    let store = setup();
    let err = run(&store, &add_args(&["Airtime|20000|", "|500|"])).unwrap_err();
    assert!(err.to_string().contains("failed validation"));
    assert_eq!(store.rows(COSTS_SHEET).len(), 1);
}
