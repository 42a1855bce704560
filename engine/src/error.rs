use thiserror::Error;

/// The only `Err`-worthy outcome of running the engine (§7): everything else
/// — malformed vectors, missing grids, missing headers, malformed rows — is a
/// logged diagnostic plus an `Ok` result carrying fewer records than hoped.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("PDF decode failure on page {page}: {source}")]
    PdfDecode {
        page: usize,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
