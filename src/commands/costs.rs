// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate;
use crate::auth::MemberDirectory;
use crate::models::{self, Cost};
use crate::store::TabularStore;
use crate::utils::{fmt_amount, maybe_print_json, pretty_table, timestamp_eat};
use crate::validate::{self, CostForm, CostLine};
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

// A --line is ITEM|AMOUNT|NARRATIVE; trailing parts may be left off.
fn split_line(raw: &str) -> CostLine {
    let mut parts = raw.splitn(3, '|');
    CostLine {
        item: parts.next().unwrap_or("").to_string(),
        amount: parts.next().unwrap_or("").to_string(),
        narrative: parts.next().unwrap_or("").to_string(),
    }
}

fn add(store: &dyn TabularStore, directory: &MemberDirectory, sub: &clap::ArgMatches) -> Result<()> {
    if !super::entry_access(directory, sub) {
        return Ok(());
    }
    let month = sub.get_one::<String>("month").unwrap().clone();
    let year = *sub.get_one::<i32>("year").unwrap();
    let lines: Vec<CostLine> = sub
        .get_many::<String>("line")
        .map(|vals| vals.map(|raw| split_line(raw)).collect())
        .unwrap_or_default();

    let form = CostForm { month, year, lines };
    let batch = match validate::validate_cost_form(&form, &timestamp_eat()) {
        Ok(batch) => batch,
        Err(errors) => {
            for e in &errors {
                eprintln!("🚨 {}", e);
            }
            bail!("cost form failed validation ({} error(s))", errors.len());
        }
    };
    if batch.is_empty() {
        println!("⚠️ No cost lines entered; nothing saved");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = batch.iter().map(Cost::to_row).collect();
    store.append(models::COSTS_SHEET, &rows)?;
    println!("✅ Cost data saved ({} line(s))", batch.len());
    Ok(())
}

fn list(store: &dyn TabularStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let mut rows = models::load_costs(store)?;
    if let Some(y) = sub.get_one::<i32>("year") {
        rows = aggregate::filter_by_year(&rows, *y);
    }
    if let Some(month) = sub.get_one::<String>("month") {
        rows = aggregate::filter_by_month(&rows, month);
    }
    if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
        let data = rows
            .iter()
            .map(|c| {
                vec![
                    c.data_date.to_string(),
                    c.month.clone(),
                    c.year.to_string(),
                    c.item.clone(),
                    fmt_amount(c.amount),
                    c.narrative.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Data Date", "Month", "Year", "Cost Item", "Amount", "Narrative"],
                data,
            )
        );
    }
    Ok(())
}
