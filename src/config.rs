// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::auth::{MemberDirectory, MemberEntry};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Trustfund", "trustfund"));

pub const DEFAULT_API_BASE: &str = "https://sheets.googleapis.com";

/// Store credentials plus the workbook key, sourced from a per-user JSON
/// file. `members`, when present, replaces the built-in directory so the
/// roster can change without a code change.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub sheet_key: String,
    pub access_token: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default)]
    pub members: Option<Vec<MemberEntry>>,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

impl Config {
    pub fn member_directory(&self) -> MemberDirectory {
        match &self.members {
            Some(entries) => MemberDirectory::from_entries(entries.clone()),
            None => MemberDirectory::builtin(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    if let Ok(p) = std::env::var("TRUSTFUND_CONFIG") {
        return Ok(PathBuf::from(p));
    }
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    let dir = proj.config_dir();
    fs::create_dir_all(dir).context("Failed to create config dir")?;
    Ok(dir.join("trustfund.json"))
}

pub fn load() -> Result<Config> {
    let path = config_path()?;
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("Read config at {} (run 'trustfund init')", path.display()))?;
    let cfg: Config =
        serde_json::from_str(&raw).with_context(|| format!("Parse config at {}", path.display()))?;
    Ok(cfg)
}

/// Write an empty config for the user to fill in. Never overwrites.
pub fn write_skeleton() -> Result<PathBuf> {
    let path = config_path()?;
    if !path.exists() {
        let skeleton = serde_json::json!({
            "sheet_key": "",
            "access_token": "",
            "api_base": DEFAULT_API_BASE,
        });
        fs::write(&path, serde_json::to_string_pretty(&skeleton)?)
            .with_context(|| format!("Write config skeleton at {}", path.display()))?;
    }
    Ok(path)
}
