// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Config;
use crate::error::StoreError;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

const UA: &str = concat!(
    "trustfund/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/alphavelocity/trustfund)"
);

/// Row-level view of the remote tabular store. `load` returns every row of
/// a named sheet, header included. `append` adds rows after the current
/// last row, preserving the given order; appends are durable, and a fresh
/// `load` is needed to observe them.
pub trait TabularStore {
    fn load(&self, sheet: &str) -> Result<Vec<Vec<String>>, StoreError>;
    fn append(&self, sheet: &str, rows: &[Vec<String>]) -> Result<(), StoreError>;
}

/// HTTP handle onto the spreadsheet provider's values API. Opened once at
/// startup and passed by reference for the process lifetime.
pub struct SheetsStore {
    http: reqwest::blocking::Client,
    api_base: String,
    sheet_key: String,
    token: String,
    titles: Vec<String>,
}

#[derive(Deserialize)]
struct SheetList {
    #[serde(default)]
    sheets: Vec<SheetEntry>,
}

#[derive(Deserialize)]
struct SheetEntry {
    properties: SheetProperties,
}

#[derive(Deserialize)]
struct SheetProperties {
    title: String,
}

#[derive(Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<serde_json::Value>>,
}

fn cell_to_string(v: &serde_json::Value) -> String {
    match v {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl SheetsStore {
    pub fn open(cfg: &Config) -> Result<Self, StoreError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(15))
            .user_agent(UA)
            .build()?;
        let url = format!(
            "{}/v4/spreadsheets/{}?fields=sheets.properties.title",
            cfg.api_base, cfg.sheet_key
        );
        let resp = http.get(url).bearer_auth(&cfg.access_token).send()?;
        if !resp.status().is_success() {
            return Err(StoreError::Connection(format!(
                "store rejected the open request (status {})",
                resp.status()
            )));
        }
        let list: SheetList = resp
            .json()
            .map_err(|e| StoreError::BadResponse(e.to_string()))?;
        Ok(SheetsStore {
            http,
            api_base: cfg.api_base.clone(),
            sheet_key: cfg.sheet_key.clone(),
            token: cfg.access_token.clone(),
            titles: list.sheets.into_iter().map(|s| s.properties.title).collect(),
        })
    }

    fn check_title(&self, sheet: &str) -> Result<(), StoreError> {
        if self.titles.iter().any(|t| t == sheet) {
            Ok(())
        } else {
            Err(StoreError::NotFound(sheet.to_string()))
        }
    }

    fn values_url(&self, range: &str) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/{}",
            self.api_base,
            self.sheet_key,
            range.replace(' ', "%20")
        )
    }
}

impl TabularStore for SheetsStore {
    fn load(&self, sheet: &str) -> Result<Vec<Vec<String>>, StoreError> {
        self.check_title(sheet)?;
        let resp = self
            .http
            .get(self.values_url(sheet))
            .bearer_auth(&self.token)
            .send()?;
        if resp.status().as_u16() == 404 {
            return Err(StoreError::NotFound(sheet.to_string()));
        }
        if !resp.status().is_success() {
            return Err(StoreError::Connection(format!(
                "load of '{}' failed (status {})",
                sheet,
                resp.status()
            )));
        }
        let vr: ValueRange = resp
            .json()
            .map_err(|e| StoreError::BadResponse(e.to_string()))?;
        Ok(vr
            .values
            .iter()
            .map(|row| row.iter().map(cell_to_string).collect())
            .collect())
    }

    fn append(&self, sheet: &str, rows: &[Vec<String>]) -> Result<(), StoreError> {
        if rows.is_empty() {
            return Ok(());
        }
        // Next insertion position is current row count + 1.
        let next_row = self.load(sheet)?.len() + 1;
        let url = format!(
            "{}:append?valueInputOption=USER_ENTERED&insertDataOption=INSERT_ROWS",
            self.values_url(&format!("{}!A{}", sheet, next_row))
        );
        let body = serde_json::json!({ "values": rows });
        let resp = self
            .http
            .post(url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()?;
        if !resp.status().is_success() {
            return Err(StoreError::Connection(format!(
                "append to '{}' failed (status {})",
                sheet,
                resp.status()
            )));
        }
        Ok(())
    }
}

/// In-memory store backing the integration tests: plain row matrices,
/// header row first, behind one mutex.
#[derive(Default)]
pub struct MemStore {
    tables: Mutex<HashMap<String, Vec<Vec<String>>>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a sheet wholesale, header row included.
    pub fn insert_table(&self, sheet: &str, rows: Vec<Vec<String>>) {
        self.lock().insert(sheet.to_string(), rows);
    }

    /// Snapshot of a sheet's rows, for assertions.
    pub fn rows(&self, sheet: &str) -> Vec<Vec<String>> {
        self.lock().get(sheet).cloned().unwrap_or_default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Vec<Vec<String>>>> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TabularStore for MemStore {
    fn load(&self, sheet: &str) -> Result<Vec<Vec<String>>, StoreError> {
        self.lock()
            .get(sheet)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(sheet.to_string()))
    }

    fn append(&self, sheet: &str, rows: &[Vec<String>]) -> Result<(), StoreError> {
        let mut tables = self.lock();
        let table = tables
            .get_mut(sheet)
            .ok_or_else(|| StoreError::NotFound(sheet.to_string()))?;
        table.extend(rows.iter().cloned());
        Ok(())
    }
}
