// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{FormatError, StoreError};
use crate::store::TabularStore;
use anyhow::{Result, anyhow, bail};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

pub const PAYMENTS_SHEET: &str = "Payments";
pub const COSTS_SHEET: &str = "Costs";
pub const UAP_SHEET: &str = "UAP Portfolio";

pub const PAYMENT_COLUMNS: [&str; 6] = [
    "Timestamp",
    "Month",
    "Name",
    "Amount Deposited",
    "Year",
    "Data Date",
];

pub const COST_COLUMNS: [&str; 7] = [
    "Timestamp",
    "Month",
    "Cost Item",
    "Amount",
    "Narrative",
    "Year",
    "Data Date",
];

pub const UAP_COLUMNS: [&str; 7] = [
    "Timestamp",
    "Month",
    "Year",
    "Closing Balance",
    "Opening Balance",
    "Interest rate",
    "Data Date",
];

/// Records that belong to an accounting period.
pub trait Dated {
    fn year(&self) -> i32;
    fn month(&self) -> &str;
    fn data_date(&self) -> NaiveDate;
}

#[derive(Debug, Clone, Serialize)]
pub struct Payment {
    pub timestamp: String,
    pub month: String,
    pub member: String,
    pub amount: i64,
    pub year: i32,
    pub data_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
pub struct Cost {
    pub timestamp: String,
    pub month: String,
    pub item: String,
    pub amount: i64,
    pub narrative: String,
    pub year: i32,
    pub data_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
pub struct UapRecord {
    pub timestamp: String,
    pub month: String,
    pub year: i32,
    pub closing: Decimal,
    pub opening: Decimal,
    pub interest_rate: Decimal,
    pub data_date: NaiveDate,
}

impl Dated for Payment {
    fn year(&self) -> i32 {
        self.year
    }
    fn month(&self) -> &str {
        &self.month
    }
    fn data_date(&self) -> NaiveDate {
        self.data_date
    }
}

impl Dated for Cost {
    fn year(&self) -> i32 {
        self.year
    }
    fn month(&self) -> &str {
        &self.month
    }
    fn data_date(&self) -> NaiveDate {
        self.data_date
    }
}

impl Dated for UapRecord {
    fn year(&self) -> i32 {
        self.year
    }
    fn month(&self) -> &str {
        &self.month
    }
    fn data_date(&self) -> NaiveDate {
        self.data_date
    }
}

fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map(String::as_str).unwrap_or("").trim()
}

fn parse_i64(s: &str, kind: &'static str) -> Result<i64, FormatError> {
    s.parse::<i64>().map_err(|_| FormatError::new(kind, s))
}

fn parse_i32(s: &str, kind: &'static str) -> Result<i32, FormatError> {
    s.parse::<i32>().map_err(|_| FormatError::new(kind, s))
}

fn parse_decimal(s: &str, kind: &'static str) -> Result<Decimal, FormatError> {
    s.parse::<Decimal>().map_err(|_| FormatError::new(kind, s))
}

fn parse_date(s: &str) -> Result<NaiveDate, FormatError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| FormatError::new("date", s))
}

impl Payment {
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.timestamp.clone(),
            self.month.clone(),
            self.member.clone(),
            self.amount.to_string(),
            self.year.to_string(),
            self.data_date.to_string(),
        ]
    }

    fn from_row(row: &[String]) -> Result<Self, FormatError> {
        Ok(Payment {
            timestamp: cell(row, 0).to_string(),
            month: cell(row, 1).to_string(),
            member: cell(row, 2).to_string(),
            amount: parse_i64(cell(row, 3), "amount")?,
            year: parse_i32(cell(row, 4), "year")?,
            data_date: parse_date(cell(row, 5))?,
        })
    }
}

impl Cost {
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.timestamp.clone(),
            self.month.clone(),
            self.item.clone(),
            self.amount.to_string(),
            self.narrative.clone(),
            self.year.to_string(),
            self.data_date.to_string(),
        ]
    }

    fn from_row(row: &[String]) -> Result<Self, FormatError> {
        Ok(Cost {
            timestamp: cell(row, 0).to_string(),
            month: cell(row, 1).to_string(),
            item: cell(row, 2).to_string(),
            amount: parse_i64(cell(row, 3), "amount")?,
            narrative: cell(row, 4).to_string(),
            year: parse_i32(cell(row, 5), "year")?,
            data_date: parse_date(cell(row, 6))?,
        })
    }
}

impl UapRecord {
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.timestamp.clone(),
            self.month.clone(),
            self.year.to_string(),
            self.closing.to_string(),
            self.opening.to_string(),
            self.interest_rate.to_string(),
            self.data_date.to_string(),
        ]
    }

    fn from_row(row: &[String]) -> Result<Self, FormatError> {
        Ok(UapRecord {
            timestamp: cell(row, 0).to_string(),
            month: cell(row, 1).to_string(),
            year: parse_i32(cell(row, 2), "year")?,
            closing: parse_decimal(cell(row, 3), "closing balance")?,
            opening: parse_decimal(cell(row, 4), "opening balance")?,
            interest_rate: parse_decimal(cell(row, 5), "interest rate")?,
            data_date: parse_date(cell(row, 6))?,
        })
    }
}

/// Fetch a sheet and parse every data row against its column schema. A
/// missing sheet reads as the empty table; a cell that fails its parser
/// aborts the load with the offending row number.
fn load_table<T>(
    store: &dyn TabularStore,
    sheet: &str,
    columns: &[&str],
    parse: impl Fn(&[String]) -> Result<T, FormatError>,
) -> Result<Vec<T>> {
    let rows = match store.load(sheet) {
        Ok(rows) => rows,
        Err(StoreError::NotFound(_)) => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    let mut iter = rows.into_iter();
    let Some(header) = iter.next() else {
        return Ok(Vec::new());
    };
    let got: Vec<&str> = header.iter().map(|s| s.trim()).collect();
    if got != columns {
        bail!("{}: unexpected header {:?}, expected {:?}", sheet, got, columns);
    }
    let mut out = Vec::new();
    for (i, row) in iter.enumerate() {
        let rec = parse(&row).map_err(|e| anyhow!("{}: row {}: {}", sheet, i + 2, e))?;
        out.push(rec);
    }
    Ok(out)
}

pub fn load_payments(store: &dyn TabularStore) -> Result<Vec<Payment>> {
    load_table(store, PAYMENTS_SHEET, &PAYMENT_COLUMNS, Payment::from_row)
}

pub fn load_costs(store: &dyn TabularStore) -> Result<Vec<Cost>> {
    load_table(store, COSTS_SHEET, &COST_COLUMNS, Cost::from_row)
}

pub fn load_uap(store: &dyn TabularStore) -> Result<Vec<UapRecord>> {
    load_table(store, UAP_SHEET, &UAP_COLUMNS, UapRecord::from_row)
}
