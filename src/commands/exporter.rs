// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models;
use crate::store::TabularStore;
use anyhow::{Result, bail};

pub fn handle(store: &dyn TabularStore, m: &clap::ArgMatches) -> Result<()> {
    let sheet = match m.get_one::<String>("sheet").unwrap().as_str() {
        "payments" => models::PAYMENTS_SHEET,
        "costs" => models::COSTS_SHEET,
        "uap" => models::UAP_SHEET,
        other => bail!("unknown sheet '{}'", other),
    };
    let fmt = m.get_one::<String>("format").unwrap().to_lowercase();
    let out = m.get_one::<String>("out").unwrap();

    let rows = store.load(sheet)?;
    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            for row in &rows {
                wtr.write_record(row)?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<serde_json::Value> = match rows.split_first() {
                Some((header, data)) => data
                    .iter()
                    .map(|row| {
                        let mut obj = serde_json::Map::new();
                        for (i, col) in header.iter().enumerate() {
                            obj.insert(
                                col.clone(),
                                serde_json::Value::String(row.get(i).cloned().unwrap_or_default()),
                            );
                        }
                        serde_json::Value::Object(obj)
                    })
                    .collect(),
                None => Vec::new(),
            };
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported {} to {}", sheet, out);
    Ok(())
}
