//! Command-line interface for gmi2html
//! This binary converts gemtext files into self-contained HTML documents.
//!
//! Usage:
//!   gmi2html convert `<file>` [-o `<output>`] [--format `<format>`]  - Convert one file
//!   gmi2html inetd `<root_dir>`                                      - Serve one request from stdin
//!
//! The inetd mode is meant to be wired behind a network-activation supervisor: it reads a
//! single request line from standard input and writes a pseudo-HTTP response to standard
//! output, or nothing at all if the request does not name a servable file.

use clap::{Arg, Command};
use gmi_parser::gmi::DocumentLoader;
use std::fs;
use std::io;
use std::path::Path;

mod serve;

fn main() {
    let matches = Command::new("gmi2html")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert gemtext documents into self-contained HTML")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("convert")
                .about("Convert a gemtext file to HTML")
                .arg(
                    Arg::new("gmi_file")
                        .help("Path to the gemtext file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Write output to this path instead of stdout"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (html, or tokens for a token stream dump)")
                        .default_value("html"),
                ),
        )
        .subcommand(
            Command::new("inetd")
                .about("Read one request line from stdin and answer it on stdout")
                .arg(
                    Arg::new("root_dir")
                        .help("Directory request paths are resolved against")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("convert", sub)) => {
            let gmi_file = sub
                .get_one::<String>("gmi_file")
                .expect("gmi_file is required");
            let output = sub.get_one::<String>("output");
            let format = sub.get_one::<String>("format").expect("format has a default");
            handle_convert_command(gmi_file, output.map(String::as_str), format);
        }
        Some(("inetd", sub)) => {
            let root_dir = sub
                .get_one::<String>("root_dir")
                .expect("root_dir is required");
            handle_inetd_command(root_dir);
        }
        _ => unreachable!("a subcommand is required"),
    }
}

/// Handle the convert command
fn handle_convert_command(gmi_file: &str, output: Option<&str>, format: &str) {
    let loader = DocumentLoader::from_path(gmi_file).unwrap_or_else(|err| {
        eprintln!("Error reading {}: {}", gmi_file, err);
        std::process::exit(1);
    });

    let rendered = match format {
        "html" => {
            let document = loader.parse().unwrap_or_else(|err| {
                eprintln!("Error converting {}: {}", gmi_file, err);
                std::process::exit(1);
            });
            gmi_html::serialize_to_html(&document)
        }
        "tokens" => {
            let tokens = loader.tokenize().unwrap_or_else(|err| {
                eprintln!("Error tokenizing {}: {}", gmi_file, err);
                std::process::exit(1);
            });
            serde_json::to_string_pretty(&tokens).unwrap_or_else(|err| {
                eprintln!("Error formatting tokens: {}", err);
                std::process::exit(1);
            })
        }
        other => {
            eprintln!("Format '{}' not supported", other);
            eprintln!("Available formats: html, tokens");
            std::process::exit(1);
        }
    };

    let result = match output {
        Some(path) => fs::write(path, rendered),
        None => {
            use std::io::Write;
            io::stdout().write_all(rendered.as_bytes())
        }
    };
    if let Err(err) = result {
        eprintln!("Error writing output: {}", err);
        std::process::exit(1);
    }
}

/// Handle the inetd command
fn handle_inetd_command(root_dir: &str) {
    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(err) = serve::handle_request(Path::new(root_dir), stdin.lock(), stdout.lock()) {
        eprintln!("Error serving request: {}", err);
        std::process::exit(1);
    }
}
