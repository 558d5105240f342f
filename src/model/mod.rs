//! Data model for chunked document content.
//!
//! [`PageText`] is what a page source hands in; [`PageResult`] and
//! [`ChunkedDocument`] are what the chunker hands out.

mod chunk;
mod document;
mod page;

pub use chunk::{Chunk, ChunkKind};
pub use document::{ChunkedDocument, DocumentInfo};
pub use page::{PageResult, PageText};
