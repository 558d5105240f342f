//! Chunking options and configuration.

/// Heading lines must be shorter than this many characters.
pub const DEFAULT_MAX_HEADING_CHARS: usize = 80;

/// Bullet prefixes recognized by default.
///
/// The second entry is U+2022 whose UTF-8 bytes were decoded as
/// Windows-1252, a common artifact of text extraction.
pub const DEFAULT_BULLET_PREFIXES: &[&str] = &["\u{2022}", "\u{e2}\u{20ac}\u{a2}", "- "];

/// Options for splitting page text into chunks.
#[derive(Debug, Clone)]
pub struct ChunkOptions {
    /// Exclusive upper bound on heading length, in characters
    pub max_heading_chars: usize,

    /// Line prefixes that mark a list item
    pub bullet_prefixes: Vec<String>,

    /// Whether to chunk pages in parallel
    pub parallel: bool,
}

impl ChunkOptions {
    /// Create new chunk options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the heading length bound.
    pub fn with_max_heading_chars(mut self, chars: usize) -> Self {
        self.max_heading_chars = chars;
        self
    }

    /// Replace the bullet prefix set.
    pub fn with_bullet_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bullet_prefixes = prefixes
            .into_iter()
            .map(Into::into)
            .filter(|p: &String| !p.is_empty())
            .collect();
        self
    }

    /// Add a bullet prefix to the current set.
    pub fn add_bullet_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        if !prefix.is_empty() && !self.bullet_prefixes.contains(&prefix) {
            self.bullet_prefixes.push(prefix);
        }
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Check whether a trimmed line starts with a bullet prefix.
    pub fn is_list_item(&self, line: &str) -> bool {
        self.bullet_prefixes
            .iter()
            .any(|prefix| line.starts_with(prefix.as_str()))
    }
}

impl Default for ChunkOptions {
    fn default() -> Self {
        Self {
            max_heading_chars: DEFAULT_MAX_HEADING_CHARS,
            bullet_prefixes: DEFAULT_BULLET_PREFIXES
                .iter()
                .map(|p| p.to_string())
                .collect(),
            parallel: true,
        }
    }
}
