// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::auth::MemberDirectory;
use crate::error::FormatError;
use crate::models::{Cost, Payment, UapRecord};
use crate::utils;
use rust_decimal::Decimal;
use std::fmt;

/// One rule violation, tied to the form field that caused it. Validators
/// collect every violation in one pass rather than stopping at the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        FieldError {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

pub fn parse_money(text: &str) -> Result<i64, FormatError> {
    let t = text.trim();
    t.parse::<i64>().map_err(|_| FormatError::new("amount", t))
}

pub fn parse_balance(text: &str) -> Result<Decimal, FormatError> {
    let t = text.trim();
    t.parse::<Decimal>()
        .map_err(|_| FormatError::new("balance", t))
}

/// Accepts "8.5%" or bare "8.5"; either way the value is a percentage and
/// is stored as a fraction.
pub fn parse_interest_rate(text: &str) -> Result<Decimal, FormatError> {
    let t = text.trim();
    let bare = t.strip_suffix('%').unwrap_or(t).trim();
    let pct = bare
        .parse::<Decimal>()
        .map_err(|_| FormatError::new("interest rate", t))?;
    Ok(pct / Decimal::ONE_HUNDRED)
}

pub fn parse_required_text(field: &str, text: &str) -> Result<String, FieldError> {
    let t = text.trim();
    if t.is_empty() {
        Err(FieldError::new(field, "cannot be blank"))
    } else {
        Ok(t.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct PaymentLine {
    pub member: String,
    pub amount: String,
}

/// Payment form exactly as collected: one raw amount line per member.
#[derive(Debug, Clone)]
pub struct PaymentForm {
    pub month: String,
    pub year: i32,
    pub lines: Vec<PaymentLine>,
}

#[derive(Debug, Clone)]
pub struct CostLine {
    pub item: String,
    pub amount: String,
    pub narrative: String,
}

#[derive(Debug, Clone)]
pub struct CostForm {
    pub month: String,
    pub year: i32,
    pub lines: Vec<CostLine>,
}

#[derive(Debug, Clone)]
pub struct UapForm {
    pub month: String,
    pub year: i32,
    pub opening: String,
    pub closing: String,
    pub interest: String,
}

fn check_period(month: &str, year: i32, errors: &mut Vec<FieldError>) -> Option<chrono::NaiveDate> {
    match utils::data_date(month, year) {
        Ok(d) => Some(d),
        Err(e) => {
            errors.push(FieldError::new("month", e.to_string()));
            None
        }
    }
}

/// A line with a blank amount means the member did not pay that month and
/// is skipped. The whole form must validate before anything is appended;
/// an all-blank form validates to the empty batch.
pub fn validate_payment_form(
    form: &PaymentForm,
    directory: &MemberDirectory,
    timestamp: &str,
) -> Result<Vec<Payment>, Vec<FieldError>> {
    let mut errors = Vec::new();
    let mut batch = Vec::new();
    let data_date = check_period(&form.month, form.year, &mut errors);
    let payers = directory.payer_names();
    let mut seen: Vec<&str> = Vec::new();

    for line in &form.lines {
        let member = line.member.trim();
        if !payers.iter().any(|n| n == member) {
            errors.push(FieldError::new(member, "unknown member"));
            continue;
        }
        if seen.contains(&member) {
            errors.push(FieldError::new(member, "duplicate line for member"));
            continue;
        }
        seen.push(member);
        if line.amount.trim().is_empty() {
            continue;
        }
        match parse_money(&line.amount) {
            Ok(v) if v > 0 => {
                if let Some(d) = data_date {
                    batch.push(Payment {
                        timestamp: timestamp.to_string(),
                        month: form.month.clone(),
                        member: member.to_string(),
                        amount: v,
                        year: form.year,
                        data_date: d,
                    });
                }
            }
            Ok(_) => errors.push(FieldError::new(member, "must be greater than zero")),
            Err(e) => errors.push(FieldError::new(member, e.to_string())),
        }
    }

    if errors.is_empty() { Ok(batch) } else { Err(errors) }
}

/// An all-blank line is an optional row and is skipped. Once any field is
/// filled, item and amount are both mandatory; narrative stays optional.
pub fn validate_cost_form(
    form: &CostForm,
    timestamp: &str,
) -> Result<Vec<Cost>, Vec<FieldError>> {
    let mut errors = Vec::new();
    let mut batch = Vec::new();
    let data_date = check_period(&form.month, form.year, &mut errors);

    for line in &form.lines {
        let amount = line.amount.trim();
        let narrative = line.narrative.trim();
        if line.item.trim().is_empty() && amount.is_empty() && narrative.is_empty() {
            continue;
        }
        let item = match parse_required_text("cost item", &line.item) {
            Ok(s) => Some(s),
            Err(e) => {
                errors.push(e);
                None
            }
        };
        let mut value = None;
        if amount.is_empty() {
            errors.push(FieldError::new("cost amount", "cannot be blank"));
        } else {
            match parse_money(amount) {
                Ok(v) if v > 0 => value = Some(v),
                Ok(_) => errors.push(FieldError::new("cost amount", "must be greater than zero")),
                Err(e) => errors.push(FieldError::new("cost amount", e.to_string())),
            }
        }
        if let (Some(item), Some(v), Some(d)) = (item, value, data_date) {
            batch.push(Cost {
                timestamp: timestamp.to_string(),
                month: form.month.clone(),
                item,
                amount: v,
                narrative: narrative.to_string(),
                year: form.year,
                data_date: d,
            });
        }
    }

    if errors.is_empty() { Ok(batch) } else { Err(errors) }
}

fn check_balance(field: &str, text: &str, errors: &mut Vec<FieldError>) -> Option<Decimal> {
    let t = text.trim();
    if t.is_empty() {
        errors.push(FieldError::new(field, "cannot be blank"));
        return None;
    }
    match parse_balance(t) {
        Ok(v) if v > Decimal::ZERO => Some(v),
        Ok(_) => {
            errors.push(FieldError::new(field, "must be greater than zero"));
            None
        }
        Err(e) => {
            errors.push(FieldError::new(field, e.to_string()));
            None
        }
    }
}

/// Opening balance, closing balance, and interest rate are all mandatory;
/// every violation is reported in the same pass.
pub fn validate_uap_form(form: &UapForm, timestamp: &str) -> Result<UapRecord, Vec<FieldError>> {
    let mut errors = Vec::new();
    let data_date = check_period(&form.month, form.year, &mut errors);
    let opening = check_balance("opening balance", &form.opening, &mut errors);
    let closing = check_balance("closing balance", &form.closing, &mut errors);

    let interest = {
        let t = form.interest.trim();
        if t.is_empty() {
            errors.push(FieldError::new("interest rate", "cannot be blank"));
            None
        } else {
            match parse_interest_rate(t) {
                Ok(v) if v > Decimal::ZERO => Some(v),
                Ok(_) => {
                    errors.push(FieldError::new("interest rate", "must be greater than zero"));
                    None
                }
                Err(e) => {
                    errors.push(FieldError::new("interest rate", e.to_string()));
                    None
                }
            }
        }
    };

    match (data_date, opening, closing, interest) {
        (Some(d), Some(o), Some(c), Some(r)) if errors.is_empty() => Ok(UapRecord {
            timestamp: timestamp.to_string(),
            month: form.month.clone(),
            year: form.year,
            closing: c,
            opening: o,
            interest_rate: r,
            data_date: d,
        }),
        _ => Err(errors),
    }
}
