//! In-memory and plain-text page sources.

use std::path::Path;

use crate::error::{Error, Result};
use crate::model::PageText;

use super::options::ExtractOptions;
use super::{check_selection, finish_text, PageSource};

/// Form feed, the conventional page separator in extracted text dumps.
const FORM_FEED: char = '\x0C';

/// Page source over text that is already in memory.
#[derive(Debug, Clone)]
pub struct TextSource {
    name: String,
    pages: Vec<String>,
    options: ExtractOptions,
}

impl TextSource {
    /// One page per string, numbered from 1.
    pub fn from_pages<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: "<memory>".to_string(),
            pages: pages.into_iter().map(Into::into).collect(),
            options: ExtractOptions::default(),
        }
    }

    /// Split a text dump into pages on form feed characters.
    ///
    /// Text without any form feed is a single page.
    pub fn from_form_feed(text: &str) -> Self {
        Self::from_pages(text.split(FORM_FEED))
    }

    /// Read a UTF-8 text file, splitting pages on form feeds.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ExtractOptions::default())
    }

    /// Read a UTF-8 text file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ExtractOptions) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::from_io_at(e, path))?;

        let mut source = Self::from_form_feed(&text).with_options(options);
        source.name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(source)
    }

    /// Set a display name for logs.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set extraction options (page selection, normalization).
    pub fn with_options(mut self, options: ExtractOptions) -> Self {
        self.options = options;
        self
    }

    /// Get the number of pages.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }
}

impl PageSource for TextSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn pages(&self) -> Result<Vec<PageText>> {
        check_selection(&self.name, &self.options, self.page_count())?;

        Ok(self
            .pages
            .iter()
            .zip(1u32..)
            .filter(|(_, number)| self.options.pages.includes(*number))
            .map(|(text, number)| PageText::new(number, finish_text(text, &self.options)))
            .collect())
    }
}
