// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use trustfund::store::SheetsStore;
use trustfund::{cli, commands, config};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    if let Some(("init", _)) = matches.subcommand() {
        let path = config::write_skeleton()?;
        println!("Config at {}", path.display());
        return Ok(());
    }

    let cfg = config::load()?;
    let directory = cfg.member_directory();
    // One store handle for the whole process; every command borrows it.
    let store = SheetsStore::open(&cfg)?;

    match matches.subcommand() {
        Some(("dashboard", sub)) => commands::dashboard::general(&store, sub)?,
        Some(("member", sub)) => commands::dashboard::member(&store, &directory, sub)?,
        Some(("payment", sub)) => commands::payments::handle(&store, &directory, sub)?,
        Some(("cost", sub)) => commands::costs::handle(&store, &directory, sub)?,
        Some(("uap", sub)) => commands::uap::handle(&store, &directory, sub)?,
        Some(("report", sub)) => commands::reports::handle(&store, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&store)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
