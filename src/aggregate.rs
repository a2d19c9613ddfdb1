// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Dated, Payment, UapRecord};
use rust_decimal::Decimal;

pub fn total_payments(rows: &[Payment]) -> i64 {
    rows.iter().map(|p| p.amount).sum()
}

// Case-sensitive exact match, same as the stored Name column.
pub fn total_for_member(rows: &[Payment], name: &str) -> i64 {
    rows.iter()
        .filter(|p| p.member == name)
        .map(|p| p.amount)
        .sum()
}

/// Arithmetic mean of the interest-rate column; `None` for the empty table.
pub fn average_interest_rate(rows: &[UapRecord]) -> Option<Decimal> {
    if rows.is_empty() {
        return None;
    }
    let sum: Decimal = rows.iter().map(|r| r.interest_rate).sum();
    Some(sum / Decimal::from(rows.len() as u64))
}

/// Closing balance of the row with the maximum data-date, not the last
/// table position. Ties resolve to the last inserted row; `None` for the
/// empty table.
pub fn latest_closing_balance(rows: &[UapRecord]) -> Option<Decimal> {
    let mut best: Option<&UapRecord> = None;
    for r in rows {
        match best {
            Some(b) if r.data_date < b.data_date => {}
            _ => best = Some(r),
        }
    }
    best.map(|r| r.closing)
}

pub fn filter_by_year<R: Dated + Clone>(rows: &[R], year: i32) -> Vec<R> {
    rows.iter().filter(|r| r.year() == year).cloned().collect()
}

pub fn filter_by_month<R: Dated + Clone>(rows: &[R], month: &str) -> Vec<R> {
    rows.iter().filter(|r| r.month() == month).cloned().collect()
}

/// Simple linear projection of the paid-in total at the average rate, not
/// compounding.
pub fn projected_total(total_paid: i64, average_rate: Decimal) -> Decimal {
    Decimal::from(total_paid) * (Decimal::ONE + average_rate)
}
