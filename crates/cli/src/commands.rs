//! Clap command tree definition.

use clap::{Arg, ArgAction, Command};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("recordkit")
        .about("Construct validated records from command-line values")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .help("Config file path (default: ./recordkit.toml if present)")
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Debug logging on stderr (RUST_LOG overrides)")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(Command::new("list").about("List record types and their signatures"))
        .subcommand(
            Command::new("signature")
                .about("Print the signature of a record type")
                .arg(Arg::new("type").required(true).help("Record type name")),
        )
        .subcommand(
            Command::new("construct")
                .about("Construct a record from values")
                .long_about(
                    "Construct a record from values. Each value is auto-detected: \
                     true/false → Bool, integers → Int, decimals → Double, anything else → String. \
                     Wrap a value in JSON quotes (e.g. '\"2022\"') to force String.",
                )
                .arg(Arg::new("type").required(true).help("Record type name"))
                .arg(
                    Arg::new("values")
                        .num_args(0..)
                        .allow_negative_numbers(true)
                        .help("Argument values in signature order"),
                ),
        )
        .subcommand(Command::new("demo").about("Run the built-in construction walkthrough"))
        .subcommand(
            Command::new("init")
                .about("Write a default recordkit.toml")
                .arg(
                    Arg::new("path")
                        .help("Target path (default: ./recordkit.toml)"),
                ),
        )
}
