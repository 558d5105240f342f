//! # pdfchunk
//!
//! Splits PDF page text into headings, paragraphs, and list items using
//! simple layout heuristics, for feeding document indexing and retrieval
//! pipelines with labeled chunks instead of raw page text.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdfchunk::{chunk_file, render};
//!
//! fn main() -> pdfchunk::Result<()> {
//!     let doc = chunk_file("document.pdf")?;
//!     let json = render::to_json(&doc, render::JsonFormat::Pretty)?;
//!     println!("{}", json);
//!     Ok(())
//! }
//! ```
//!
//! ## How chunks are formed
//!
//! Every non-blank line is one of:
//!
//! - **heading**: under 80 characters, title-cased, no trailing period
//! - **list**: starts with a bullet prefix (`•` or `- ` by default)
//! - **paragraph**: anything else
//!
//! Consecutive list or paragraph lines merge into one chunk joined by a
//! space; each heading line is its own chunk. The chunker works on text
//! only, so any [`PageSource`] can feed it.

pub mod chunker;
pub mod detect;
pub mod error;
pub mod model;
pub mod render;
pub mod source;

pub use chunker::{chunk_page, chunk_page_with, chunk_pages, is_heading, ChunkOptions};
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_pdf, PdfFormat};
pub use error::{Error, Result};
pub use model::{Chunk, ChunkKind, ChunkedDocument, DocumentInfo, PageResult, PageText};
pub use render::{ChunkStats, JsonFormat};
pub use source::{
    open_source, ErrorMode, ExtractOptions, PageSelection, PageSource, PdfSource, TextSource,
};

use std::io::Read;
use std::path::Path;

/// Extract and chunk a PDF (or `.txt`) file with default options.
///
/// # Example
///
/// ```no_run
/// use pdfchunk::chunk_file;
///
/// let doc = chunk_file("document.pdf").unwrap();
/// println!("Pages: {}", doc.page_count());
/// ```
pub fn chunk_file<P: AsRef<Path>>(path: P) -> Result<ChunkedDocument> {
    Pipeline::new().chunk_file(path)
}

/// Extract and chunk a file with custom options.
pub fn chunk_file_with_options<P: AsRef<Path>>(
    path: P,
    extract: ExtractOptions,
    chunk: ChunkOptions,
) -> Result<ChunkedDocument> {
    Pipeline::with_options(extract, chunk).chunk_file(path)
}

/// Extract and chunk a PDF held in memory.
///
/// ```no_run
/// use pdfchunk::chunk_bytes;
///
/// let data = std::fs::read("document.pdf").unwrap();
/// let doc = chunk_bytes(&data).unwrap();
/// ```
pub fn chunk_bytes(data: &[u8]) -> Result<ChunkedDocument> {
    Pipeline::new().chunk_bytes(data)
}

/// Extract and chunk a PDF from a reader.
pub fn chunk_reader<R: Read>(reader: R) -> Result<ChunkedDocument> {
    Pipeline::new().chunk_reader(reader)
}

/// Chunk pages supplied by any page source.
pub fn chunk_source<S: PageSource + ?Sized>(source: &S) -> Result<ChunkedDocument> {
    Pipeline::new().chunk_source(source)
}

/// Extract the raw text of every page of a PDF, without chunking.
pub fn extract_pages<P: AsRef<Path>>(path: P) -> Result<Vec<PageText>> {
    PdfSource::open(path)?.pages()
}

/// Read a PDF with tokio and chunk it on the blocking pool.
#[cfg(feature = "async")]
pub async fn chunk_file_async<P: AsRef<Path>>(path: P) -> Result<ChunkedDocument> {
    let path = path.as_ref().to_path_buf();
    let data = tokio::fs::read(&path)
        .await
        .map_err(|e| Error::from_io_at(e, &path))?;

    tokio::task::spawn_blocking(move || chunk_bytes(&data))
        .await
        .map_err(|e| Error::Other(format!("chunking task failed: {}", e)))?
}

/// Builder for extracting and chunking documents.
///
/// # Example
///
/// ```no_run
/// use pdfchunk::{PageSelection, Pipeline};
///
/// let doc = Pipeline::new()
///     .lenient()
///     .with_pages(PageSelection::Range(1..=5))
///     .add_bullet_prefix("* ")
///     .chunk_file("document.pdf")?;
/// # Ok::<(), pdfchunk::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    extract_options: ExtractOptions,
    chunk_options: ChunkOptions,
}

impl Pipeline {
    /// Create a new pipeline with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pipeline from explicit options.
    pub fn with_options(extract_options: ExtractOptions, chunk_options: ChunkOptions) -> Self {
        Self {
            extract_options,
            chunk_options,
        }
    }

    /// Keep going when a page's text cannot be extracted.
    pub fn lenient(mut self) -> Self {
        self.extract_options = self.extract_options.lenient();
        self
    }

    /// Disable parallel chunking.
    pub fn sequential(mut self) -> Self {
        self.chunk_options = self.chunk_options.sequential();
        self
    }

    /// Restrict extraction to a page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.extract_options = self.extract_options.with_pages(pages);
        self
    }

    /// Apply NFC normalization to extracted text.
    pub fn with_unicode_normalization(mut self, normalize: bool) -> Self {
        self.extract_options = self.extract_options.with_unicode_normalization(normalize);
        self
    }

    /// Replace the bullet prefix set.
    pub fn with_bullet_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.chunk_options = self.chunk_options.with_bullet_prefixes(prefixes);
        self
    }

    /// Add a bullet prefix.
    pub fn add_bullet_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.chunk_options = self.chunk_options.add_bullet_prefix(prefix);
        self
    }

    /// Set the heading length bound.
    pub fn with_max_heading_chars(mut self, chars: usize) -> Self {
        self.chunk_options = self.chunk_options.with_max_heading_chars(chars);
        self
    }

    /// Extraction options in effect.
    pub fn extract_options(&self) -> &ExtractOptions {
        &self.extract_options
    }

    /// Chunking options in effect.
    pub fn chunk_options(&self) -> &ChunkOptions {
        &self.chunk_options
    }

    /// Extract and chunk a file, choosing the source by extension.
    pub fn chunk_file<P: AsRef<Path>>(&self, path: P) -> Result<ChunkedDocument> {
        let source = open_source(path, &self.extract_options)?;
        self.chunk_source(&source)
    }

    /// Extract and chunk a PDF held in memory.
    pub fn chunk_bytes(&self, data: &[u8]) -> Result<ChunkedDocument> {
        let source = PdfSource::from_bytes_with_options(data, self.extract_options.clone())?;
        self.chunk_source(&source)
    }

    /// Extract and chunk a PDF from a reader.
    pub fn chunk_reader<R: Read>(&self, reader: R) -> Result<ChunkedDocument> {
        let source = PdfSource::from_reader_with_options(reader, self.extract_options.clone())?;
        self.chunk_source(&source)
    }

    /// Chunk the pages of any source.
    pub fn chunk_source<S: PageSource + ?Sized>(&self, source: &S) -> Result<ChunkedDocument> {
        let pages = source.pages()?;
        let doc = chunk_pages(&pages, &self.chunk_options);
        log::info!(
            "{}: {} chunks across {} pages",
            source.name(),
            doc.chunk_count(),
            doc.page_count()
        );
        Ok(doc)
    }
}
