//! Report pagination CLI
//!
//! Reads a pagination request (JSON) and prints the page map.
//! Set `RUST_LOG=report_pagination=debug` to trace page decisions.

use std::process::ExitCode;

use report_pagination::{paginate, parse_request, Result};
use tracing_subscriber::EnvFilter;

fn run(path: &str) -> Result<String> {
    let json = std::fs::read_to_string(path)?;
    let request = parse_request(&json)?;
    let map = paginate(&request);
    Ok(serde_json::to_string_pretty(&map)?)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: report-pagination <request.json>");
        return ExitCode::from(2);
    };

    match run(&path) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
