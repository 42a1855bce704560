mod adapter;
mod config;
mod error;
mod sink;

use std::process::ExitCode;

use adapter::LopdfDocument;
use chrono::Local;
use config::Config;
use da_table_engine::Pipeline;
use sink::SqliteSink;

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let (Some(pdf_path), Some(config_path)) = (args.next(), args.next()) else {
        eprintln!("usage: register-scraper <pdf-path> <config-path>");
        return ExitCode::FAILURE;
    };

    if let Err(error) = run(&pdf_path, &config_path) {
        tracing::error!(%error, "extraction failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(pdf_path: &str, config_path: &str) -> error::Result<()> {
    let config = Config::load(config_path)?;
    let document = LopdfDocument::load(pdf_path)?;
    let mut sink = SqliteSink::open(&config.sink_path)?;
    let scrape_date = Local::now().date_naive().format("%Y-%m-%d").to_string();

    let stats = Pipeline::new().process_document(&document, &config.source_url, &config.comment_url, &scrape_date, &mut sink)?;

    tracing::info!(inserted = stats.inserted, skipped = stats.skipped, "extraction complete");
    Ok(())
}
