//! Command-line entry point: scan one lab-report file and print the
//! extracted values as JSON.

use std::env;
use std::fs;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use cardiorisk::config;
use cardiorisk::extraction::{detect_format, SourceDocument};
use cardiorisk::DocumentExtractor;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("Usage: cardiorisk <lab-report-file>");
        return ExitCode::from(2);
    };

    let bytes = match fs::read(&path) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("Cannot read {path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let detection = detect_format(&bytes);
    tracing::info!(
        app = config::APP_NAME,
        version = config::APP_VERSION,
        path,
        media_type = %detection.media_type,
        size_bytes = bytes.len(),
        "scanning lab report"
    );

    let document = SourceDocument::new(bytes, &detection.media_type);
    let extractor = DocumentExtractor::with_default_ocr();
    let result = extractor.parse_lab_report(&document, &|pct| {
        tracing::debug!(percent = pct, "extraction progress");
    });

    match serde_json::to_string_pretty(&result) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Failed to encode result: {err}");
            ExitCode::FAILURE
        }
    }
}
