//! The extractor's own I/O error kind, distinct from `EngineError`: config
//! loading, sink access, and PDF loading each wrap an underlying library
//! error, in the same style the pack's `tabula_pdf_parser` uses for its
//! `PDFJsonError`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractorError {
    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to load PDF {path}: {source}")]
    PdfLoad {
        path: String,
        #[source]
        source: lopdf::Error,
    },

    #[error("sink error: {0}")]
    Sink(#[source] rusqlite::Error),

    #[error(transparent)]
    Engine(#[from] da_table_engine::EngineError),
}

pub type Result<T> = std::result::Result<T, ExtractorError>;
