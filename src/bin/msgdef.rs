//! Command-line interface for msgdef
//! This binary parses message receiver definition files and prints the
//! resulting model for inspection or downstream tooling.
//!
//! Usage:
//!   msgdef parse `<path>` [--format `<format>`]  - Parse one definition and print its model
//!   msgdef check `<path>`...                     - Validate definitions, exit non-zero on failure

use clap::{Arg, Command};
use std::fs;

fn main() {
    let matches = Command::new("msgdef")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting message receiver definitions")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Parse a receiver definition and print its model")
                .arg(
                    Arg::new("path")
                        .help("Path to the definition file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('json' or 'yaml')")
                        .default_value("json"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Validate receiver definitions")
                .arg(
                    Arg::new("paths")
                        .help("Paths to definition files")
                        .required(true)
                        .num_args(1..),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("parse", parse_matches)) => {
            let path = parse_matches.get_one::<String>("path").unwrap();
            let format = parse_matches.get_one::<String>("format").unwrap();
            handle_parse_command(path, format);
        }
        Some(("check", check_matches)) => {
            let paths: Vec<&String> = check_matches.get_many::<String>("paths").unwrap().collect();
            handle_check_command(&paths);
        }
        _ => unreachable!(),
    }
}

/// Handle the parse command
fn handle_parse_command(path: &str, format: &str) {
    let receiver = parse_file(path);

    let rendered = match format {
        "yaml" => serde_yaml::to_string(&receiver).map_err(|e| e.to_string()),
        "json" => serde_json::to_string_pretty(&receiver).map_err(|e| e.to_string()),
        other => Err(format!("unknown output format '{}'", other)),
    };
    match rendered {
        Ok(output) => println!("{}", output),
        Err(message) => {
            eprintln!("Error: {}", message);
            std::process::exit(1);
        }
    }
}

/// Handle the check command
fn handle_check_command(paths: &[&String]) {
    let mut failed = false;
    for path in paths {
        let source = read_source(path);
        match msgdef::parse(&source) {
            Ok(receiver) => println!("{}: ok ({} messages)", path, receiver.messages.len()),
            Err(error) => {
                eprintln!("{}: {}", path, error);
                failed = true;
            }
        }
    }
    if failed {
        std::process::exit(1);
    }
}

fn parse_file(path: &str) -> msgdef::MessageReceiver {
    let source = read_source(path);
    match msgdef::parse(&source) {
        Ok(receiver) => receiver,
        Err(error) => {
            eprintln!("Error: {}: {}", path, error);
            std::process::exit(1);
        }
    }
}

fn read_source(path: &str) -> String {
    match fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: failed to read {}: {}", path, error);
            std::process::exit(1);
        }
    }
}
