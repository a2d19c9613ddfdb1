// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate;
use crate::models::{self, UapRecord};
use crate::store::TabularStore;
use crate::utils::{current_year_eat, fmt_rate, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(store: &dyn TabularStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("interest-by-month", sub)) => interest_by_month(store, sub),
        Some(("balance-by-month", sub)) => balance_by_month(store, sub),
        _ => Ok(()),
    }
}

fn year_rows(store: &dyn TabularStore, sub: &clap::ArgMatches) -> Result<Vec<UapRecord>> {
    let year = sub
        .get_one::<i32>("year")
        .copied()
        .unwrap_or_else(current_year_eat);
    let mut rows = aggregate::filter_by_year(&models::load_uap(store)?, year);
    rows.sort_by_key(|r| r.data_date);
    Ok(rows)
}

fn interest_by_month(store: &dyn TabularStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data: Vec<Vec<String>> = year_rows(store, sub)?
        .iter()
        .map(|r| vec![r.month.clone(), fmt_rate(r.interest_rate)])
        .collect();
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!("{}", pretty_table(&["Month", "Interest Rate (%)"], data));
    }
    Ok(())
}

fn balance_by_month(store: &dyn TabularStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data: Vec<Vec<String>> = year_rows(store, sub)?
        .iter()
        .map(|r| vec![r.month.clone(), r.closing.round_dp(2).to_string()])
        .collect();
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!("{}", pretty_table(&["Month", "Closing Balance"], data));
    }
    Ok(())
}
