// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate;
use crate::auth::{self, MemberDirectory};
use crate::models;
use crate::store::TabularStore;
use crate::utils::{fmt_amount, fmt_rate, maybe_print_json, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Serialize)]
struct GeneralMetrics {
    total_payments: i64,
    latest_closing_balance: Option<Decimal>,
    average_interest_rate: Option<Decimal>,
}

pub fn general(store: &dyn TabularStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let mut payments = models::load_payments(store)?;
    let mut uap = models::load_uap(store)?;
    if let Some(y) = sub.get_one::<i32>("year") {
        payments = aggregate::filter_by_year(&payments, *y);
        uap = aggregate::filter_by_year(&uap, *y);
    }

    let metrics = GeneralMetrics {
        total_payments: aggregate::total_payments(&payments),
        latest_closing_balance: aggregate::latest_closing_balance(&uap),
        average_interest_rate: aggregate::average_interest_rate(&uap),
    };

    if !maybe_print_json(json_flag, jsonl_flag, &metrics)? {
        let rows = vec![
            vec![
                "Amount paid by members".to_string(),
                fmt_amount(metrics.total_payments),
            ],
            vec![
                "Amount on UAP".to_string(),
                metrics
                    .latest_closing_balance
                    .map(|b| b.round_dp(2).to_string())
                    .unwrap_or_else(|| "n/a".to_string()),
            ],
            vec![
                "Average interest earned".to_string(),
                metrics
                    .average_interest_rate
                    .map(fmt_rate)
                    .unwrap_or_else(|| "n/a".to_string()),
            ],
        ];
        println!("{}", pretty_table(&["Metric", "Value"], rows));
    }
    Ok(())
}

#[derive(Serialize)]
struct MemberMetrics {
    name: String,
    total_paid: i64,
    average_interest_rate: Option<Decimal>,
    projected_total: Option<Decimal>,
}

pub fn member(
    store: &dyn TabularStore,
    directory: &MemberDirectory,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap();
    let password = sub.get_one::<String>("password").unwrap();
    if !auth::sign_in(directory, name, password) {
        println!("❌ Please enter a valid password for {}", name);
        return Ok(());
    }
    if !directory.can_view_dashboard(name) {
        println!("❌ {} does not have dashboard access", name);
        return Ok(());
    }

    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let payments = models::load_payments(store)?;
    let uap = models::load_uap(store)?;

    let total_paid = aggregate::total_for_member(&payments, name);
    let average = aggregate::average_interest_rate(&uap);
    let metrics = MemberMetrics {
        name: name.clone(),
        total_paid,
        average_interest_rate: average,
        projected_total: average.map(|r| aggregate::projected_total(total_paid, r)),
    };

    if !maybe_print_json(json_flag, jsonl_flag, &metrics)? {
        let rows = vec![
            vec!["Total amount paid".to_string(), fmt_amount(metrics.total_paid)],
            vec![
                "Average interest earned".to_string(),
                metrics
                    .average_interest_rate
                    .map(fmt_rate)
                    .unwrap_or_else(|| "n/a".to_string()),
            ],
            vec![
                "Total amount in fraternity".to_string(),
                metrics
                    .projected_total
                    .map(|d| d.round_dp(2).to_string())
                    .unwrap_or_else(|| "n/a".to_string()),
            ],
        ];
        println!("{}", pretty_table(&["Metric", "Value"], rows));

        let history = payments
            .iter()
            .filter(|p| p.member == *name)
            .map(|p| {
                vec![
                    p.member.clone(),
                    p.month.clone(),
                    p.year.to_string(),
                    fmt_amount(p.amount),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Name", "Month", "Year", "Amount Deposited"], history)
        );
    }
    Ok(())
}
