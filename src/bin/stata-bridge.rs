//! Command-line inspector for the bridge pipeline.
//!
//! Reads a do-file (or stdin with `-`) and prints what the pipeline sees:
//! the contextual token stream, the segmented statement list, or the
//! completeness reply. Useful for poking at edge cases without a notebook
//! attached.
//!
//! Usage:
//!   stata-bridge <path> [--mode tokens|statements|complete] [--format json|text]

use clap::{Arg, Command};
use stata_bridge::stata::processor::CellProcessor;

fn main() {
    let matches = Command::new("stata-bridge")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect how Stata source is tokenized, segmented, and judged for completeness")
        .arg(
            Arg::new("path")
                .help("Path to a do-file, or '-' to read stdin")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("mode")
                .long("mode")
                .short('m')
                .help("What to print: 'tokens', 'statements', or 'complete'")
                .default_value("tokens"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: 'json' or 'text'")
                .default_value("json"),
        )
        .get_matches();

    let path = matches.get_one::<String>("path").unwrap();
    let mode = matches.get_one::<String>("mode").unwrap();
    let format = matches.get_one::<String>("format").unwrap();

    let source = read_source(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        std::process::exit(1);
    });

    let processor = CellProcessor::new(&source);
    let rendered = match (mode.as_str(), format.as_str()) {
        ("tokens", "json") => serde_json::to_string_pretty(processor.tokens())
            .expect("token sequences always serialize"),
        ("tokens", "text") => processor
            .tokens()
            .tokens()
            .iter()
            .map(|t| format!("{:?}\t{:?}", t.kind, t.text))
            .collect::<Vec<_>>()
            .join("\n"),
        ("statements", "json") => {
            let statements: Vec<serde_json::Value> = processor
                .statements()
                .iter()
                .map(|s| {
                    let pairs: Vec<serde_json::Value> = s
                        .pairs()
                        .iter()
                        .map(|(marker, text)| {
                            serde_json::json!({ "marker": marker, "text": text })
                        })
                        .collect();
                    serde_json::json!({ "text": s.text(), "pairs": pairs })
                })
                .collect();
            serde_json::to_string_pretty(&statements).expect("statements always serialize")
        }
        ("statements", "text") => processor
            .statements()
            .iter()
            .enumerate()
            .map(|(i, s)| format!("[{}] {}", i + 1, s.text()))
            .collect::<Vec<_>>()
            .join("\n"),
        ("complete", "json") => serde_json::to_string(&processor.is_complete_reply())
            .expect("replies always serialize"),
        ("complete", "text") => {
            if processor.verdict().is_complete() {
                "complete".to_string()
            } else {
                "incomplete".to_string()
            }
        }
        (mode, format) => {
            eprintln!("Unsupported mode/format combination: {} / {}", mode, format);
            eprintln!("Modes: tokens, statements, complete. Formats: json, text.");
            std::process::exit(1);
        }
    };

    println!("{}", rendered);
}

fn read_source(path: &str) -> std::io::Result<String> {
    use std::io::Read;

    if path == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(path)
    }
}
