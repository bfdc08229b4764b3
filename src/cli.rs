// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, value_parser, Arg, ArgAction, Command};

fn json_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn form_args(cmd: Command, required: bool) -> Command {
    cmd.arg(
        Arg::new("amount")
            .long("amount")
            .short('a')
            .required(required)
            .allow_hyphen_values(true)
            .help("Amount spent, e.g. 12.50"),
    )
    .arg(
        Arg::new("category")
            .long("category")
            .short('c')
            .required(required)
            .help("Category label, e.g. Food"),
    )
    .arg(
        Arg::new("date")
            .long("date")
            .short('d')
            .help("Date as YYYY-MM-DD (defaults to today when adding)"),
    )
    .arg(
        Arg::new("description")
            .long("description")
            .short('m')
            .help("Free-text note"),
    )
}

pub fn build_cli() -> Command {
    Command::new("spendwise")
        .version(crate_version!())
        .about("Track expenses and see where the money goes")
        .subcommand(
            Command::new("auth")
                .about("Sign in and out")
                .subcommand(
                    Command::new("login")
                        .arg(Arg::new("email").long("email").required(true))
                        .arg(Arg::new("password").long("password").required(true)),
                )
                .subcommand(Command::new("logout"))
                .subcommand(Command::new("status")),
        )
        .subcommand(
            Command::new("expense")
                .visible_alias("exp")
                .about("Record and browse expenses")
                .subcommand(form_args(Command::new("add"), true))
                .subcommand(json_args(
                    Command::new("list")
                        .arg(Arg::new("category").long("category").short('c'))
                        .arg(Arg::new("month").long("month").help("YYYY-MM"))
                        .arg(
                            Arg::new("search")
                                .long("search")
                                .short('s')
                                .help("Case-insensitive regex over descriptions"),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(form_args(
                    Command::new("edit").arg(
                        Arg::new("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                    false,
                ))
                .subcommand(
                    Command::new("rm").arg(
                        Arg::new("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Category labels")
                .subcommand(Command::new("list")),
        )
        .subcommand(
            Command::new("report")
                .about("Totals and charts")
                .subcommand(json_args(Command::new("summary").arg(
                    Arg::new("category")
                        .long("category")
                        .short('c')
                        .help("Also show the total for one category"),
                )))
                .subcommand(json_args(Command::new("category")))
                .subcommand(json_args(Command::new("monthly")))
                .subcommand(json_args(Command::new("daily"))),
        )
        .subcommand(
            Command::new("export")
                .about("Export expenses to a file")
                .subcommand(
                    Command::new("expenses")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .help("csv|json"),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Show or change settings")
                .subcommand(Command::new("show"))
                .subcommand(
                    Command::new("set")
                        .arg(Arg::new("key").required(true))
                        .arg(Arg::new("value").required(true)),
                ),
        )
        .subcommand(Command::new("demo").about("Run the reports over sample data in memory"))
}
