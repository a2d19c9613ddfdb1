// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate;
use crate::auth::MemberDirectory;
use crate::models::{self, Payment};
use crate::store::TabularStore;
use crate::utils::{fmt_amount, maybe_print_json, pretty_table, timestamp_eat};
use crate::validate::{self, PaymentForm, PaymentLine};
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
    let month = sub.get_one::<String>("month").unwrap().clone();
    let year = *sub.get_one::<i32>("year").unwrap();

    let mut lines = Vec::new();
    if let Some(vals) = sub.get_many::<String>("line") {
        for raw in vals {
            let Some((member, amount)) = raw.split_once('=') else {
                bail!("invalid --line '{}', expected MEMBER=AMOUNT", raw);
            };
            lines.push(PaymentLine {
                member: member.trim().to_string(),
                amount: amount.to_string(),
            });
        }
    }

    let form = PaymentForm { month, year, lines };
    let batch = match validate::validate_payment_form(&form, directory, &timestamp_eat()) {
        Ok(batch) => batch,
        Err(errors) => {
            for e in &errors {
                eprintln!("🚨 {}", e);
            }
            bail!("payment form failed validation ({} error(s))", errors.len());
        }
    };
    if batch.is_empty() {
        println!("⚠️ Please enter an amount greater than zero for at least one member");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = batch.iter().map(Payment::to_row).collect();
    store.append(models::PAYMENTS_SHEET, &rows)?;
    println!("✅ Payments saved for {} member(s)", batch.len());
    Ok(())
}

fn list(store: &dyn TabularStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let mut rows = models::load_payments(store)?;
    if let Some(y) = sub.get_one::<i32>("year") {
        rows = aggregate::filter_by_year(&rows, *y);
    }
    if let Some(month) = sub.get_one::<String>("month") {
        rows = aggregate::filter_by_month(&rows, month);
    }
    if let Some(name) = sub.get_one::<String>("member") {
        rows.retain(|p| p.member == *name);
    }
    if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
        let data = rows
            .iter()
            .map(|p| {
                vec![
                    p.data_date.to_string(),
                    p.month.clone(),
                    p.year.to_string(),
                    p.member.clone(),
                    fmt_amount(p.amount),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Data Date", "Month", "Year", "Name", "Amount Deposited"], data)
        );
    }
    Ok(())
}
