// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate;
use crate::auth::MemberDirectory;
use crate::models;
use crate::store::TabularStore;
use crate::utils::{fmt_rate, maybe_print_json, pretty_table, timestamp_eat};
use crate::validate::{self, UapForm};
use anyhow::{Result, bail};

pub fn handle(
    store: &dyn TabularStore,
    directory: &MemberDirectory,
    m: &clap::ArgMatches,
) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, directory, sub),
        Some(("list", sub)) => list(store, sub),
        _ => Ok(()),
    }
}

fn add(store: &dyn TabularStore, directory: &MemberDirectory, sub: &clap::ArgMatches) -> Result<()> {
    if !super::entry_access(directory, sub) {
        return Ok(());
    }
    let form = UapForm {
        month: sub.get_one::<String>("month").unwrap().clone(),
        year: *sub.get_one::<i32>("year").unwrap(),
        opening: sub.get_one::<String>("opening").unwrap().clone(),
        closing: sub.get_one::<String>("closing").unwrap().clone(),
        interest: sub.get_one::<String>("interest").unwrap().clone(),
    };

    let record = match validate::validate_uap_form(&form, &timestamp_eat()) {
        Ok(record) => record,
        Err(errors) => {
            for e in &errors {
                eprintln!("🚨 {}", e);
            }
            bail!("UAP form failed validation ({} error(s))", errors.len());
        }
    };

    store.append(models::UAP_SHEET, &[record.to_row()])?;
    println!("✅ UAP data saved for {} {}", record.month, record.year);
    Ok(())
}

fn list(store: &dyn TabularStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let mut rows = models::load_uap(store)?;
    if let Some(y) = sub.get_one::<i32>("year") {
        rows = aggregate::filter_by_year(&rows, *y);
    }
    rows.sort_by_key(|r| r.data_date);
    if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
        let data = rows
            .iter()
            .map(|r| {
                vec![
                    r.data_date.to_string(),
                    r.month.clone(),
                    r.year.to_string(),
                    r.opening.to_string(),
                    r.closing.to_string(),
                    fmt_rate(r.interest_rate),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &[
                    "Data Date",
                    "Month",
                    "Year",
                    "Opening Balance",
                    "Closing Balance",
                    "Interest Rate",
                ],
                data,
            )
        );
    }
    Ok(())
}
