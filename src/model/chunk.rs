//! Chunk types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Structural kind of a chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkKind {
    /// A short, title-cased line
    Heading,
    /// Ordinary body text
    Paragraph,
    /// Bullet or hyphen-prefixed lines
    List,
}

impl ChunkKind {
    /// The wire name of this kind (`"heading"`, `"paragraph"`, `"list"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ChunkKind::Heading => "heading",
            ChunkKind::Paragraph => "paragraph",
            ChunkKind::List => "list",
        }
    }
}

impl fmt::Display for ChunkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A run of same-kind lines merged into one block of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Chunk kind, serialized as `type`
    #[serde(rename = "type")]
    pub kind: ChunkKind,

    /// Space-joined text of the merged lines
    pub text: String,
}

impl Chunk {
    /// Create a chunk of the given kind.
    pub fn new(kind: ChunkKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Create a heading chunk.
    pub fn heading(text: impl Into<String>) -> Self {
        Self::new(ChunkKind::Heading, text)
    }

    /// Create a paragraph chunk.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::new(ChunkKind::Paragraph, text)
    }

    /// Create a list chunk.
    pub fn list(text: impl Into<String>) -> Self {
        Self::new(ChunkKind::List, text)
    }

    pub fn is_heading(&self) -> bool {
        self.kind == ChunkKind::Heading
    }

    pub fn is_paragraph(&self) -> bool {
        self.kind == ChunkKind::Paragraph
    }

    pub fn is_list(&self) -> bool {
        self.kind == ChunkKind::List
    }
}
