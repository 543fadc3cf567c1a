//! recordkit CLI: construct validated records from command-line values.
//!
//! ```text
//! recordkit list
//! recordkit signature Book
//! recordkit construct Book "the great gatsby" "F. Scott Fitzgerald" 1896 180 12.99
//! recordkit demo
//! ```

mod commands;
mod config;
mod format;
mod value;

use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context;
use clap::ArgMatches;
use recordkit_core::{arguments, DescribeOptions, RecordRegistry, Value};
use recordkit_records::register_builtin;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use config::{CliConfig, CONFIG_FILE_NAME};
use format::{format_error, format_record, format_signature, format_signatures, OutputMode};
use value::parse_values;

/// Everything a subcommand needs after startup.
struct Session {
    registry: RecordRegistry,
    mode: OutputMode,
    describe: DescribeOptions,
}

fn main() {
    let matches = build_cli().get_matches();
    init_tracing(matches.get_flag("verbose"));

    let exit_code = match run(&matches) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("(error) {:#}", e);
            1
        }
    };
    process::exit(exit_code);
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(matches: &ArgMatches) -> anyhow::Result<i32> {
    let config_path = matches.get_one::<String>("config").map(PathBuf::from);

    // `init` runs before any config is loaded.
    if let Some(("init", sub)) = matches.subcommand() {
        let target = sub
            .get_one::<String>("path")
            .map(PathBuf::from)
            .or(config_path)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
        return run_init(&target);
    }

    let session = open_session(matches, config_path.as_deref())?;

    let code = match matches.subcommand() {
        Some(("list", _)) => {
            let entries = session
                .registry
                .names()
                .filter_map(|name| session.registry.signature(name).map(|sig| (name, sig)));
            println!("{}", format_signatures(entries, session.mode));
            0
        }
        Some(("signature", sub)) => {
            let name = required(sub, "type")?;
            match session.registry.signature(name) {
                Some(sig) => {
                    println!("{}", format_signature(name, sig, session.mode));
                    0
                }
                None => {
                    let err = recordkit_core::Error::UnknownRecordType(name.to_string());
                    eprintln!("{}", format_error(&err, session.mode));
                    1
                }
            }
        }
        Some(("construct", sub)) => {
            let name = required(sub, "type")?;
            let raw: Vec<&String> = sub
                .get_many::<String>("values")
                .map(|v| v.collect())
                .unwrap_or_default();
            construct_and_print(&session, name, parse_values(&raw))
        }
        Some(("demo", _)) => run_demo(&session),
        _ => {
            build_cli().print_help().context("failed to print help")?;
            1
        }
    };
    Ok(code)
}

fn required<'a>(sub: &'a ArgMatches, id: &str) -> anyhow::Result<&'a str> {
    sub.get_one::<String>(id)
        .map(String::as_str)
        .with_context(|| format!("missing argument <{}>", id))
}

fn open_session(matches: &ArgMatches, config_path: Option<&Path>) -> anyhow::Result<Session> {
    let config = CliConfig::load(config_path)?;

    let mode = if matches.get_flag("json") || config.json_output()? {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let mut registry = RecordRegistry::new();
    register_builtin(&mut registry).context("failed to register built-in records")?;
    config.register_records(&mut registry)?;
    debug!(target: "recordkit::cli", record_types = registry.len(), "Registry ready");

    Ok(Session {
        registry,
        mode,
        describe: DescribeOptions::from(&config.describe),
    })
}

fn run_init(path: &Path) -> anyhow::Result<i32> {
    if CliConfig::write_default(path)? {
        info!(target: "recordkit::cli", path = %path.display(), "Wrote default config");
        println!("Wrote {}", path.display());
    } else {
        println!("{} already exists", path.display());
    }
    Ok(0)
}

fn construct_and_print(session: &Session, name: &str, arguments: Vec<Value>) -> i32 {
    match session.registry.construct(name, arguments) {
        Ok(record) => {
            print!(
                "{}",
                with_newline(format_record(record.as_ref(), session.mode, &session.describe))
            );
            0
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, session.mode));
            1
        }
    }
}

/// The walkthrough: two valid constructions followed by one that is
/// rejected. The rejection is part of the demo, so it still exits 0.
fn run_demo(session: &Session) -> i32 {
    let steps = [
        (
            "Book",
            arguments!["the great gatsby", "F. Scott Fitzgerald", 1896, 180, 12.99],
        ),
        ("Car", arguments!["Tesla", "Model 3", 2023, 49900.00]),
        ("Car", arguments!["Toyota", "Corolla", "2022"]),
    ];

    for (name, args) in steps {
        construct_and_print(session, name, args);
    }
    0
}

fn with_newline(mut s: String) -> String {
    if !s.ends_with('\n') {
        s.push('\n');
    }
    s
}
