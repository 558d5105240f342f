//! Layout-heuristic chunking.
//!
//! Each page is classified line by line ([`is_heading`], bullet prefixes,
//! everything else is body text) and runs of same-kind lines are merged
//! into [`Chunk`](crate::model::Chunk)s. Pages are independent, so a
//! document's pages are chunked in parallel with rayon unless
//! [`ChunkOptions::parallel`] is off.

mod classify;
mod options;
mod page;

pub use classify::{is_heading, is_heading_within, is_title_case};
pub use options::{ChunkOptions, DEFAULT_BULLET_PREFIXES, DEFAULT_MAX_HEADING_CHARS};
pub use page::{chunk_page, chunk_page_with};

use rayon::prelude::*;

use crate::model::{ChunkedDocument, PageResult, PageText};

/// Chunk one page, keeping its page number.
pub fn chunk_page_text(page: &PageText, options: &ChunkOptions) -> PageResult {
    let chunks = chunk_page_with(&page.text, options);
    log::debug!("Page {}: {} chunks", page.number, chunks.len());
    PageResult::new(page.number, chunks)
}

/// Chunk every page of a document.
///
/// Output order follows input order in both parallel and sequential mode.
pub fn chunk_pages(pages: &[PageText], options: &ChunkOptions) -> ChunkedDocument {
    let results: Vec<PageResult> = if options.parallel && pages.len() > 1 {
        pages
            .par_iter()
            .map(|page| chunk_page_text(page, options))
            .collect()
    } else {
        pages
            .iter()
            .map(|page| chunk_page_text(page, options))
            .collect()
    };

    ChunkedDocument::from_pages(results)
}
