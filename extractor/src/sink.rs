//! Component K: the `rusqlite`-backed record sink (§6b). A single table
//! keyed on `application_number`; `INSERT OR IGNORE` realizes "insert if
//! absent" without a read-then-write race.

use da_table_engine::{Record, RecordSink};
use rusqlite::{params, Connection};

use crate::error::{ExtractorError, Result};

pub struct SqliteSink {
    connection: Connection,
}

impl SqliteSink {
    pub fn open(path: &str) -> Result<Self> {
        let connection = Connection::open(path).map_err(ExtractorError::Sink)?;
        connection
            .execute(
                "CREATE TABLE IF NOT EXISTS development_applications (
                    application_number TEXT PRIMARY KEY,
                    address TEXT NOT NULL,
                    description TEXT NOT NULL,
                    received_date TEXT NOT NULL,
                    information_url TEXT NOT NULL,
                    comment_url TEXT NOT NULL,
                    scrape_date TEXT NOT NULL
                )",
                [],
            )
            .map_err(ExtractorError::Sink)?;
        Ok(Self { connection })
    }
}

impl RecordSink for SqliteSink {
    fn insert(&mut self, record: Record) -> bool {
        let changed = self.connection.execute(
            "INSERT OR IGNORE INTO development_applications
                (application_number, address, description, received_date, information_url, comment_url, scrape_date)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                record.application_number,
                record.address,
                record.description,
                record.received_date,
                record.information_url,
                record.comment_url,
                record.scrape_date,
            ],
        );

        match changed {
            Ok(rows) => rows > 0,
            Err(error) => {
                tracing::warn!(%error, application_number = %record.application_number, "sink insert failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record(application_number: &str) -> Record {
        Record {
            application_number: application_number.to_string(),
            address: "10 Smith St".to_string(),
            description: "No Description Provided".to_string(),
            received_date: String::new(),
            information_url: "http://example/info".to_string(),
            comment_url: "http://example/comment".to_string(),
            scrape_date: "2026-07-28".to_string(),
        }
    }

    #[test]
    fn duplicate_insert_is_reported_as_skipped() {
        let mut sink = SqliteSink::open(":memory:").unwrap();
        assert!(sink.insert(sample_record("690/006/15")));
        assert!(!sink.insert(sample_record("690/006/15")));

        let count: i64 = sink
            .connection
            .query_row("SELECT COUNT(*) FROM development_applications", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn distinct_application_numbers_both_insert() {
        let mut sink = SqliteSink::open(":memory:").unwrap();
        assert!(sink.insert(sample_record("690/006/15")));
        assert!(sink.insert(sample_record("690/007/16")));
    }
}
