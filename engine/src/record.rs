//! Component H: the record extractor. Validates, formats and emits the final
//! per-row record (§4.H). Every failure here is a skipped row plus a logged
//! diagnostic, never a propagated error (§7).

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::rows::MappedRow;

/// One extracted development-application record.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub application_number: String,
    pub address: String,
    pub description: String,
    pub received_date: String,
    pub information_url: String,
    pub comment_url: String,
    pub scrape_date: String,
}

fn application_number_format() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]+/[0-9]+/[0-9]+$").unwrap())
}

fn received_date_format() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{1,2})/(\d{2})/(\d{4})$").unwrap())
}

/// Builds a `Record` from a mapped row, or `None` if the row fails
/// validation (no application-number cell, a malformed application number,
/// or a missing address).
pub fn build_record(
    row: &MappedRow,
    information_url: &str,
    comment_url: &str,
    scrape_date: &str,
) -> Option<Record> {
    let application_number = row.application_number?.concatenated_text().trim().to_string();
    if !application_number_format().is_match(&application_number) {
        tracing::warn!(%application_number, "malformed application number; skipping row");
        return None;
    }

    let address = row.address.map(|cell| cell.joined_text()).unwrap_or_default();
    if address.is_empty() {
        tracing::warn!(%application_number, "missing address; skipping row");
        return None;
    }
    // Redundant with the check above; preserved because the source system
    // performs this same check twice (§9).
    if address.is_empty() {
        return None;
    }

    let description = row
        .description
        .map(|cell| cell.joined_text())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| "No Description Provided".to_string());

    let received_date = row
        .received_date
        .map(|cell| cell.concatenated_text())
        .and_then(|text| parse_received_date(&text))
        .unwrap_or_default();

    Some(Record {
        application_number,
        address,
        description,
        received_date,
        information_url: information_url.to_string(),
        comment_url: comment_url.to_string(),
        scrape_date: scrape_date.to_string(),
    })
}

/// Parses `D/MM/YYYY` strictly — day is one or two digits, month and year
/// must be exactly two and four digits respectively — and reformats as
/// `YYYY-MM-DD`. Returns `None` on any deviation, including a valid-looking
/// but out-of-range date.
fn parse_received_date(text: &str) -> Option<String> {
    let captures = received_date_format().captures(text.trim())?;
    let day: u32 = captures[1].parse().ok()?;
    let month: u32 = captures[2].parse().ok()?;
    let year: i32 = captures[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day).map(|date| date.format("%Y-%m-%d").to_string())
}
