// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::Deserialize;

/// Identity-verification seam. Unknown names verify false; never a panic.
pub trait Verifier {
    fn verify(&self, name: &str, secret: i64) -> bool;
}

#[derive(Debug, Clone, Deserialize)]
pub struct MemberEntry {
    pub name: String,
    pub password: i64,
    /// May use the data-entry forms.
    #[serde(default)]
    pub data_entry: bool,
    /// May view the dashboard and per-member analysis.
    #[serde(default = "default_true")]
    pub dashboard: bool,
}

fn default_true() -> bool {
    true
}

pub struct MemberDirectory {
    entries: Vec<MemberEntry>,
}

impl MemberDirectory {
    /// The fund roster. "Data Entrant" is a synthetic entry-only account
    /// with no dashboard access.
    pub fn builtin() -> Self {
        let mk = |name: &str, password: i64, data_entry: bool, dashboard: bool| MemberEntry {
            name: name.to_string(),
            password,
            data_entry,
            dashboard,
        };
        MemberDirectory::from_entries(vec![
            mk("Alvin Mulumba", 456, true, true),
            mk("Edwin Mpoza", 123, false, true),
            mk("Dennis Ssekimpi", 123, false, true),
            mk("Arnold Kigonya", 123, false, true),
            mk("Adrean Mugalaasi", 123, false, true),
            mk("Phillip Musumba", 123, false, true),
            mk("Data Entrant", 789, true, false),
        ])
    }

    pub fn from_entries(entries: Vec<MemberEntry>) -> Self {
        MemberDirectory { entries }
    }

    fn entry(&self, name: &str) -> Option<&MemberEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn can_enter_data(&self, name: &str) -> bool {
        self.entry(name).map(|e| e.data_entry).unwrap_or(false)
    }

    pub fn can_view_dashboard(&self, name: &str) -> bool {
        self.entry(name).map(|e| e.dashboard).unwrap_or(false)
    }

    /// Dashboard-capable members, sorted by name: the roster the payment
    /// form renders one amount line for.
    pub fn payer_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .entries
            .iter()
            .filter(|e| e.dashboard)
            .map(|e| e.name.clone())
            .collect();
        names.sort();
        names
    }
}

impl Verifier for MemberDirectory {
    fn verify(&self, name: &str, secret: i64) -> bool {
        self.entry(name).map(|e| e.password == secret).unwrap_or(false)
    }
}

/// Password text comes straight off the form; anything non-numeric can
/// never match a directory entry.
pub fn sign_in(directory: &dyn Verifier, name: &str, password: &str) -> bool {
    match password.trim().parse::<i64>() {
        Ok(secret) => directory.verify(name, secret),
        Err(_) => false,
    }
}
