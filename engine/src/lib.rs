//! `da_table_engine` reconstructs the logical structure of a tabular PDF page
//! — rows, columns, and the cell that owns each piece of text — from nothing
//! but vector ruling geometry and independently positioned glyph runs.
//!
//! The crate never touches PDF bytes directly: it consumes the plain types
//! in [`pdf`] (an operator list and a text-item list per page), which a
//! concrete decoder adapter is expected to produce, and emits [`record::Record`]
//! values through the [`sink::RecordSink`] trait. See `extractor` for the
//! `lopdf`-backed adapter, `rusqlite`-backed sink, and CLI that make this
//! runnable end to end.

pub mod bind;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod heading;
pub mod model;
pub mod normalize;
pub mod pdf;
pub mod pipeline;
pub mod record;
pub mod rows;
pub mod sink;
pub mod text;
pub mod vector;

pub use error::{EngineError, Result};
pub use model::{Cell, Element};
pub use pipeline::{Pipeline, PipelineStats};
pub use record::Record;
pub use sink::RecordSink;
