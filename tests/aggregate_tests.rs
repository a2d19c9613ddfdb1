// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use trustfund::aggregate::{
    average_interest_rate, filter_by_month, filter_by_year, latest_closing_balance,
    projected_total, total_for_member, total_payments,
};
use trustfund::models::{Payment, UapRecord};

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn payment(member: &str, amount: i64, month: &str, year: i32) -> Payment {
    let m = trustfund::utils::month_number(month).unwrap();
    Payment {
        timestamp: "01-Jan-2024 09:00:00 EAT".to_string(),
        month: month.to_string(),
        member: member.to_string(),
        amount,
        year,
        data_date: NaiveDate::from_ymd_opt(year, m, 1).unwrap(),
    }
}

fn uap(year: i32, month: &str, closing: &str, rate: &str) -> UapRecord {
    let m = trustfund::utils::month_number(month).unwrap();
    UapRecord {
        timestamp: "01-Jan-2024 09:00:00 EAT".to_string(),
        month: month.to_string(),
        year,
        closing: dec(closing),
        opening: dec(closing) - dec("1000"),
        interest_rate: dec(rate),
        data_date: NaiveDate::from_ymd_opt(year, m, 1).unwrap(),
    }
}

#[test]
fn totals_over_empty_and_small_tables() {
    assert_eq!(total_payments(&[]), 0);
    let rows = vec![
        payment("Edwin Mpoza", 100, "January", 2024),
        payment("Phillip Musumba", 250, "January", 2024),
    ];
    assert_eq!(total_payments(&rows), 350);
}

#[test]
fn member_totals_are_case_sensitive_exact_matches() {
    let rows = vec![
        payment("Edwin Mpoza", 100, "January", 2024),
        payment("Edwin Mpoza", 200, "February", 2024),
        payment("Phillip Musumba", 999, "January", 2024),
    ];
    assert_eq!(total_for_member(&rows, "Edwin Mpoza"), 300);
    assert_eq!(total_for_member(&rows, "edwin mpoza"), 0);
    assert_eq!(total_for_member(&rows, "Nobody"), 0);
}

#[test]
fn average_rate_is_none_for_the_empty_table() {
    assert_eq!(average_interest_rate(&[]), None);
    let rows = vec![
        uap(2024, "January", "1000", "0.08"),
        uap(2024, "February", "1100", "0.10"),
    ];
    assert_eq!(average_interest_rate(&rows), Some(dec("0.09")));
}

#[test]
fn latest_balance_follows_data_date_not_insertion_order() {
    assert_eq!(latest_closing_balance(&[]), None);

    let in_order = vec![
        uap(2024, "January", "1000", "0.08"),
        uap(2024, "March", "1200", "0.08"),
    ];
    assert_eq!(latest_closing_balance(&in_order), Some(dec("1200")));

    let reversed = vec![
        uap(2024, "March", "1200", "0.08"),
        uap(2024, "January", "1000", "0.08"),
    ];
    assert_eq!(latest_closing_balance(&reversed), Some(dec("1200")));
}

#[test]
fn latest_balance_tie_goes_to_the_last_inserted_row() {
    let rows = vec![
        uap(2024, "March", "1200", "0.08"),
        uap(2024, "March", "1250", "0.08"),
    ];
    assert_eq!(latest_closing_balance(&rows), Some(dec("1250")));
}

#[test]
fn period_filters_return_empty_tables_not_errors() {
    let rows = vec![
        uap(2023, "December", "900", "0.07"),
        uap(2024, "January", "1000", "0.08"),
    ];
    assert_eq!(filter_by_year(&rows, 2024).len(), 1);
    assert_eq!(filter_by_year(&rows, 2019).len(), 0);
    assert_eq!(filter_by_month(&rows, "January").len(), 1);
    assert_eq!(filter_by_month(&rows, "June").len(), 0);
}

#[test]
fn projection_is_linear_not_compounding() {
    assert_eq!(projected_total(350, dec("0.08")), dec("378"));
    assert_eq!(projected_total(0, dec("0.08")), dec("0"));
}
