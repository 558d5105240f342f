//! Document-level types.

use super::{Chunk, PageResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A chunked document: one result per source page, in page order.
///
/// Serializes as a bare JSON array of page records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChunkedDocument {
    /// Page results in source order
    pub pages: Vec<PageResult>,
}

impl ChunkedDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self { pages: Vec::new() }
    }

    /// Create a document from page results.
    pub fn from_pages(pages: Vec<PageResult>) -> Self {
        Self { pages }
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page result by its page number.
    pub fn get_page(&self, page_number: u32) -> Option<&PageResult> {
        self.pages.iter().find(|p| p.page_number == page_number)
    }

    /// Add a page result.
    pub fn add_page(&mut self, page: PageResult) {
        self.pages.push(page);
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Total number of chunks across all pages.
    pub fn chunk_count(&self) -> usize {
        self.pages.iter().map(PageResult::chunk_count).sum()
    }

    /// Iterate over every chunk with its page number.
    pub fn iter_chunks(&self) -> impl Iterator<Item = (u32, &Chunk)> {
        self.pages
            .iter()
            .flat_map(|p| p.chunks.iter().map(move |c| (p.page_number, c)))
    }
}

/// Descriptive information about a source PDF.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentInfo {
    /// Document title
    pub title: Option<String>,

    /// Document author
    pub author: Option<String>,

    /// Document subject
    pub subject: Option<String>,

    /// Keywords
    pub keywords: Option<String>,

    /// Creator application
    pub creator: Option<String>,

    /// PDF producer
    pub producer: Option<String>,

    /// Creation date
    pub created: Option<DateTime<Utc>>,

    /// Last modification date
    pub modified: Option<DateTime<Utc>>,

    /// PDF version (e.g., "1.7")
    pub pdf_version: String,

    /// Total number of pages
    pub page_count: u32,

    /// Whether the document is encrypted
    pub encrypted: bool,
}

impl DocumentInfo {
    /// Create info with a PDF version.
    pub fn with_version(version: impl Into<String>) -> Self {
        Self {
            pdf_version: version.into(),
            ..Default::default()
        }
    }
}
