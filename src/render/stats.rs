//! Chunk statistics.

use crate::model::{Chunk, ChunkKind, ChunkedDocument};
use serde::{Deserialize, Serialize};

/// Counts collected over a chunked document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkStats {
    /// Total number of pages
    pub page_count: u32,

    /// Pages that produced no chunks
    pub empty_page_count: u32,

    /// Number of heading chunks
    pub heading_count: u32,

    /// Number of paragraph chunks
    pub paragraph_count: u32,

    /// Number of list chunks
    pub list_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl ChunkStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics for a whole document.
    pub fn from_document(doc: &ChunkedDocument) -> Self {
        let mut stats = Self::new();
        for page in &doc.pages {
            stats.page_count += 1;
            if page.is_empty() {
                stats.empty_page_count += 1;
            }
            for chunk in &page.chunks {
                stats.add_chunk(chunk);
            }
        }
        stats
    }

    /// Count one chunk.
    pub fn add_chunk(&mut self, chunk: &Chunk) {
        match chunk.kind {
            ChunkKind::Heading => self.heading_count += 1,
            ChunkKind::Paragraph => self.paragraph_count += 1,
            ChunkKind::List => self.list_count += 1,
        }
        self.count_text(&chunk.text);
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Total chunks of all kinds.
    pub fn chunk_count(&self) -> u32 {
        self.heading_count + self.paragraph_count + self.list_count
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &ChunkStats) {
        self.page_count += other.page_count;
        self.empty_page_count += other.empty_page_count;
        self.heading_count += other.heading_count;
        self.paragraph_count += other.paragraph_count;
        self.list_count += other.list_count;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
    }
}
