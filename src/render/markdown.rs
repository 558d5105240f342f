//! Markdown rendering for chunked documents.

use crate::model::{ChunkKind, ChunkedDocument, PageResult};

/// Render a chunked document as Markdown.
///
/// Each page opens with a `<!-- page N -->` marker; headings become `##`
/// lines and the other chunks are emitted as their text.
pub fn to_markdown(doc: &ChunkedDocument) -> String {
    doc.pages
        .iter()
        .map(render_page)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_page(page: &PageResult) -> String {
    let mut blocks = Vec::with_capacity(page.chunks.len() + 1);
    blocks.push(format!("<!-- page {} -->", page.page_number));

    for chunk in &page.chunks {
        match chunk.kind {
            ChunkKind::Heading => blocks.push(format!("## {}", chunk.text)),
            ChunkKind::Paragraph | ChunkKind::List => blocks.push(chunk.text.clone()),
        }
    }

    blocks.join("\n\n")
}
