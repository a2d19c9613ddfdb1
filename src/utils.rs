// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::FormatError;
use anyhow::Result;
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Utc};
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;

pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// All recorded timestamps use East Africa Time, fixed UTC+3, no DST.
static EAT: Lazy<FixedOffset> =
    Lazy::new(|| FixedOffset::east_opt(3 * 3600).expect("UTC+3 is a valid offset"));

pub fn month_number(name: &str) -> Result<u32, FormatError> {
    MONTHS
        .iter()
        .position(|m| *m == name)
        .map(|i| (i + 1) as u32)
        .ok_or_else(|| FormatError::new("month", name))
}

/// First-of-month date canonically naming the accounting period a record
/// belongs to, independent of when it was submitted.
pub fn data_date(month: &str, year: i32) -> Result<NaiveDate, FormatError> {
    let m = month_number(month)?;
    NaiveDate::from_ymd_opt(year, m, 1).ok_or_else(|| FormatError::new("year", year.to_string()))
}

pub fn now_eat() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&EAT)
}

pub fn timestamp_eat() -> String {
    now_eat().format("%d-%b-%Y %H:%M:%S EAT").to_string()
}

pub fn current_year_eat() -> i32 {
    now_eat().year()
}

pub fn fmt_amount(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if n < 0 { format!("-{}", out) } else { out }
}

/// "0.085" -> "8.50%"
pub fn fmt_rate(rate: Decimal) -> String {
    format!("{:.2}%", rate * Decimal::ONE_HUNDRED)
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
