// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::StoreError;
use crate::models;
use crate::store::TabularStore;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(store: &dyn TabularStore) -> Result<()> {
    let mut rows = Vec::new();

    // 1) Expected sheets present
    for sheet in [models::PAYMENTS_SHEET, models::COSTS_SHEET, models::UAP_SHEET] {
        match store.load(sheet) {
            Err(StoreError::NotFound(_)) => {
                rows.push(vec!["missing_sheet".to_string(), sheet.to_string()])
            }
            Err(e) => rows.push(vec!["load_failed".to_string(), format!("{}: {}", sheet, e)]),
            Ok(_) => {}
        }
    }

    // 2) Every row parses against its table schema
    if let Err(e) = models::load_payments(store) {
        rows.push(vec!["bad_rows".to_string(), e.to_string()]);
    }
    if let Err(e) = models::load_costs(store) {
        rows.push(vec!["bad_rows".to_string(), e.to_string()]);
    }
    if let Err(e) = models::load_uap(store) {
        rows.push(vec!["bad_rows".to_string(), e.to_string()]);
    }

    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
