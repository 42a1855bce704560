//! The record sink boundary (§6b): a small persistent key/value row store
//! whose only contract is "insert if absent". The engine depends only on
//! this trait; a concrete `rusqlite`-backed implementation lives in the
//! `extractor` crate (component K).

use crate::record::Record;

pub trait RecordSink {
    /// Inserts `record`, returning whether it was newly inserted. Idempotent
    /// on `application_number` — a duplicate is accepted silently and
    /// reported as "skipped" rather than an error.
    fn insert(&mut self, record: Record) -> bool;
}
