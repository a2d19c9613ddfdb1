// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn period_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("month")
            .long("month")
            .required(true)
            .help("Month name, e.g. March"),
    )
    .arg(
        Arg::new("year")
            .long("year")
            .required(true)
            .value_parser(value_parser!(i32))
            .help("Calendar year, e.g. 2024"),
    )
}

fn entry_auth_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("user")
            .long("user")
            .required(true)
            .help("Account with data-entry access"),
    )
    .arg(
        Arg::new("password")
            .long("password")
            .required(true)
            .help("Numeric password"),
    )
}

fn year_filter(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("year")
            .long("year")
            .value_parser(value_parser!(i32))
            .help("Restrict to one calendar year"),
    )
}

pub fn build_cli() -> Command {
    Command::new("trustfund")
        .about("Fraternity trust fund tracker: payments, costs, and the UAP portfolio over a spreadsheet-backed store")
        .subcommand(
            Command::new("init")
                .about("Print the config path, writing a skeleton config if missing"),
        )
        .subcommand(json_flags(year_filter(
            Command::new("dashboard").about("Fund-wide metrics"),
        )))
        .subcommand(json_flags(
            Command::new("member")
                .about("Per-member analysis (sign-in required)")
                .arg(Arg::new("name").long("name").required(true).help("Member name"))
                .arg(
                    Arg::new("password")
                        .long("password")
                        .required(true)
                        .help("Numeric password"),
                ),
        ))
        .subcommand(
            Command::new("payment")
                .about("Member payment records")
                .subcommand(
                    entry_auth_args(period_args(Command::new("add"))).arg(
                        Arg::new("line")
                            .long("line")
                            .action(ArgAction::Append)
                            .value_name("MEMBER=AMOUNT")
                            .help("One member's amount in ugx; leave the amount blank for members who did not pay"),
                    ),
                )
                .subcommand(json_flags(year_filter(
                    Command::new("list")
                        .arg(Arg::new("month").long("month").help("Month name filter"))
                        .arg(Arg::new("member").long("member").help("Member name filter")),
                ))),
        )
        .subcommand(
            Command::new("cost")
                .about("Monthly fund cost records")
                .subcommand(
                    entry_auth_args(period_args(Command::new("add"))).arg(
                        Arg::new("line")
                            .long("line")
                            .action(ArgAction::Append)
                            .value_name("ITEM|AMOUNT|NARRATIVE")
                            .help("One cost line; narrative is optional"),
                    ),
                )
                .subcommand(json_flags(year_filter(
                    Command::new("list")
                        .arg(Arg::new("month").long("month").help("Month name filter")),
                ))),
        )
        .subcommand(
            Command::new("uap")
                .about("UAP portfolio monthly details")
                .subcommand(
                    entry_auth_args(period_args(Command::new("add")))
                        .arg(
                            Arg::new("opening")
                                .long("opening")
                                .required(true)
                                .help("Opening balance, ugx"),
                        )
                        .arg(
                            Arg::new("closing")
                                .long("closing")
                                .required(true)
                                .help("Closing balance, ugx"),
                        )
                        .arg(
                            Arg::new("interest")
                                .long("interest")
                                .required(true)
                                .help("Interest rate, e.g. 8.5% or 8.5"),
                        ),
                )
                .subcommand(json_flags(year_filter(Command::new("list")))),
        )
        .subcommand(
            Command::new("report")
                .about("Monthly time series")
                .subcommand(json_flags(year_filter(
                    Command::new("interest-by-month").about("Interest rate by month"),
                )))
                .subcommand(json_flags(year_filter(
                    Command::new("balance-by-month").about("Closing balance by month"),
                ))),
        )
        .subcommand(
            Command::new("export")
                .about("Dump a sheet to a file")
                .arg(
                    Arg::new("sheet")
                        .required(true)
                        .value_parser(["payments", "costs", "uap"]),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("csv")
                        .help("csv|json"),
                )
                .arg(Arg::new("out").long("out").required(true).help("Output path")),
        )
        .subcommand(Command::new("doctor").about("Check store health and table schemas"))
}
