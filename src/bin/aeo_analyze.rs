//! CLI that reads HTML from a file or stdin and prints the AEO analysis as
//! JSON to stdout.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use aeo_analyzer::{analyze_bytes_with_options, AnalysisResult, McqStrictness, Options, ScoreBand};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Score a page's suitability for Answer Engine Optimization
#[derive(Parser, Debug)]
#[command(name = "aeo-analyze", version, about)]
struct Args {
    /// HTML file to analyze (reads stdin when omitted)
    file: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Use the loose exam/MCQ detection variant
    #[arg(long)]
    loose_mcq: bool,

    /// Record each <li> as its own block
    #[arg(long)]
    list_items: bool,

    /// CSS selector of the content root
    #[arg(long, default_value = "body")]
    root: String,
}

#[derive(Serialize)]
struct Output<'a> {
    #[serde(flatten)]
    result: &'a AnalysisResult,
    band: ScoreBand,
}

fn read_input(file: Option<&PathBuf>) -> io::Result<Vec<u8>> {
    match file {
        Some(path) => fs::read(path),
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let html = match read_input(args.file.as_ref()) {
        Ok(html) => html,
        Err(err) => {
            tracing::error!(error = %err, "failed to read input");
            return ExitCode::FAILURE;
        }
    };

    let options = Options {
        root_selector: args.root,
        mcq_strictness: if args.loose_mcq {
            McqStrictness::Loose
        } else {
            McqStrictness::Strict
        },
        include_list_items: args.list_items,
        ..Options::default()
    };

    let result = analyze_bytes_with_options(&html, &options);
    let output = Output {
        result: &result,
        band: result.band(),
    };

    let json = if args.pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    };

    match json {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to serialize result");
            ExitCode::FAILURE
        }
    }
}
