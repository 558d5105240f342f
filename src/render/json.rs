//! JSON rendering for chunked documents.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::ChunkedDocument;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a chunked document to JSON.
///
/// The output is an array of `{"page", "chunks": [{"type", "text"}]}`
/// records.
pub fn to_json(doc: &ChunkedDocument, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Write a chunked document to a JSON file.
pub fn write_json<P: AsRef<Path>>(path: P, doc: &ChunkedDocument, format: JsonFormat) -> Result<()> {
    let json = to_json(doc, format)?;
    fs::write(path.as_ref(), json)?;
    log::info!(
        "Wrote {} pages to {}",
        doc.page_count(),
        path.as_ref().display()
    );
    Ok(())
}

/// Parse a chunked document back from JSON.
pub fn from_json(json: &str) -> Result<ChunkedDocument> {
    serde_json::from_str(json).map_err(|e| Error::Render(format!("JSON parse error: {}", e)))
}
