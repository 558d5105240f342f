//! Single-page chunking.

use crate::model::{Chunk, ChunkKind};

use super::classify::is_heading_within;
use super::options::ChunkOptions;

/// Split one page of text into chunks using default options.
///
/// Consecutive lines of the same kind merge into one chunk, joined by a
/// single space. Every heading line starts a new chunk. Blank lines are
/// skipped without closing the open chunk. Never fails; empty or blank
/// input yields no chunks.
///
/// # Example
///
/// ```
/// use pdfchunk::{chunk_page, Chunk};
///
/// let chunks = chunk_page("Overview\nFirst line\nsecond line\n- one\n- two");
/// assert_eq!(
///     chunks,
///     vec![
///         Chunk::heading("Overview"),
///         Chunk::paragraph("First line second line"),
///         Chunk::list("- one - two"),
///     ]
/// );
/// ```
pub fn chunk_page(text: &str) -> Vec<Chunk> {
    chunk_page_with(text, &ChunkOptions::default())
}

/// Split one page of text into chunks.
pub fn chunk_page_with(text: &str, options: &ChunkOptions) -> Vec<Chunk> {
    let mut acc = Accumulator::default();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if is_heading_within(line, options.max_heading_chars) {
            acc.start(ChunkKind::Heading, line);
        } else if options.is_list_item(line) {
            acc.push(ChunkKind::List, line);
        } else {
            acc.push(ChunkKind::Paragraph, line);
        }
    }

    acc.finish()
}

/// The open chunk plus everything already finalized.
#[derive(Default)]
struct Accumulator {
    kind: Option<ChunkKind>,
    text: String,
    chunks: Vec<Chunk>,
}

impl Accumulator {
    /// Merge into the open chunk if it has the same kind, else start a new one.
    fn push(&mut self, kind: ChunkKind, line: &str) {
        if self.kind == Some(kind) {
            self.text.push(' ');
            self.text.push_str(line);
        } else {
            self.start(kind, line);
        }
    }

    /// Close the open chunk and open a new one.
    fn start(&mut self, kind: ChunkKind, line: &str) {
        self.flush();
        self.kind = Some(kind);
        self.text.push_str(line);
    }

    fn flush(&mut self) {
        let text = std::mem::take(&mut self.text);
        if let Some(kind) = self.kind.take() {
            if !text.is_empty() {
                self.chunks.push(Chunk::new(kind, text));
            }
        }
    }

    fn finish(mut self) -> Vec<Chunk> {
        self.flush();
        self.chunks
    }
}
