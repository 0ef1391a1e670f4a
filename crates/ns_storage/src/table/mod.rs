use chrono::NaiveDateTime;
use ns_core::model::TIMESTAMP_FORMAT;
use ns_core::{Error, Result};

pub mod memory;
pub mod postgres;

pub use memory::MemoryTable;
pub use postgres::PgArticleTable;

/// Batch files carry the normalized string form; the table column is a
/// real timestamp.
pub(crate) fn parse_published_at(value: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .map_err(|e| Error::Database(format!("invalid published_at '{}': {}", value, e)))
}
