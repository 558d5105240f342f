//! Page-level types.

use super::{Chunk, ChunkKind};
use serde::{Deserialize, Serialize};

/// Raw text of one source page, as delivered by a page source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageText {
    /// Page number (1-indexed)
    pub number: u32,

    /// Visible text content of the page
    pub text: String,
}

impl PageText {
    /// Create a page text record.
    pub fn new(number: u32, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }

    /// Check if the page carries no visible text.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Chunks produced for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    /// Page number (1-indexed), serialized as `page`
    #[serde(rename = "page")]
    pub page_number: u32,

    /// Chunks in reading order
    pub chunks: Vec<Chunk>,
}

impl PageResult {
    /// Create a page result.
    pub fn new(page_number: u32, chunks: Vec<Chunk>) -> Self {
        Self {
            page_number,
            chunks,
        }
    }

    /// Check if the page produced no chunks.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Get the number of chunks on the page.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Iterate over the chunks of one kind.
    pub fn chunks_of(&self, kind: ChunkKind) -> impl Iterator<Item = &Chunk> {
        self.chunks.iter().filter(move |c| c.kind == kind)
    }

    /// Headings on this page, in order.
    pub fn headings(&self) -> Vec<&str> {
        self.chunks_of(ChunkKind::Heading)
            .map(|c| c.text.as_str())
            .collect()
    }
}
