// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod payments;
pub mod costs;
pub mod uap;
pub mod dashboard;
pub mod reports;
pub mod exporter;
pub mod doctor;

use crate::auth::{self, MemberDirectory};

// Data-entry gate shared by the three forms. Authentication failure is an
// inline message, not an error: the command prints and writes nothing.
pub(crate) fn entry_access(directory: &MemberDirectory, sub: &clap::ArgMatches) -> bool {
    let user = sub.get_one::<String>("user").unwrap();
    let password = sub.get_one::<String>("password").unwrap();
    if !auth::sign_in(directory, user, password) {
        println!("❌ Please enter a valid password for {}", user);
        return false;
    }
    if !directory.can_enter_data(user) {
        println!("❌ {} does not have data-entry access", user);
        return false;
    }
    true
}
