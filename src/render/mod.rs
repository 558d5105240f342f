//! Rendering module for converting chunked documents to output formats.

mod json;
mod markdown;
mod stats;

pub use json::{from_json, to_json, write_json, JsonFormat};
pub use markdown::to_markdown;
pub use stats::ChunkStats;
