//! Page sources.
//!
//! A [`PageSource`] yields numbered page texts; the chunker never sees
//! filenames or PDF internals. [`PdfSource`] wraps lopdf text extraction,
//! [`TextSource`] serves text already in memory or in a `.txt` dump.

mod options;
mod pdf;
mod text;

pub use options::{ErrorMode, ExtractOptions, PageSelection, MAX_LISTED_PAGES};
pub use pdf::PdfSource;
pub use text::TextSource;

use std::path::Path;

use unicode_normalization::UnicodeNormalization;

use crate::error::{Error, Result};
use crate::model::PageText;

/// Anything that can produce the text of a document's pages.
pub trait PageSource {
    /// Display name used in logs.
    fn name(&self) -> &str;

    /// Page texts in page order. Numbers are 1-based and refer to the
    /// source document, so they may skip when a page selection applies.
    fn pages(&self) -> Result<Vec<PageText>>;
}

impl<S: PageSource + ?Sized> PageSource for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn pages(&self) -> Result<Vec<PageText>> {
        (**self).pages()
    }
}

/// Open a page source for a file, chosen by extension.
///
/// `pdf` opens a [`PdfSource`]; `txt` and `text` open a [`TextSource`].
pub fn open_source<P: AsRef<Path>>(path: P, options: &ExtractOptions) -> Result<Box<dyn PageSource>> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "pdf" => Ok(Box::new(PdfSource::open_with_options(path, options.clone())?)),
        "txt" | "text" => Ok(Box::new(TextSource::open_with_options(path, options.clone())?)),
        "" => Err(Error::UnsupportedFormat(format!(
            "{} has no file extension",
            path.display()
        ))),
        other => Err(Error::UnsupportedFormat(other.to_string())),
    }
}

/// Reject explicitly requested pages that the document does not have.
///
/// Lenient mode only logs the first missing page and lets the selection
/// filter drop it.
fn check_selection(name: &str, options: &ExtractOptions, total: u32) -> Result<()> {
    let out_of_range = match &options.pages {
        PageSelection::All => None,
        PageSelection::Range(range) => Some(*range.end()).filter(|&end| end > total),
        PageSelection::Pages(pages) => pages.iter().copied().find(|&p| p > total),
    };

    match (out_of_range, options.error_mode) {
        (Some(page), ErrorMode::Strict) => Err(Error::PageOutOfRange(page, total)),
        (Some(page), ErrorMode::Lenient) => {
            log::warn!(
                "{}: page {} requested but document has {} pages",
                name,
                page,
                total
            );
            Ok(())
        }
        (None, _) => Ok(()),
    }
}

/// Trim page text and apply optional normalization.
fn finish_text(text: &str, options: &ExtractOptions) -> String {
    let text = text.trim();
    if options.normalize_unicode {
        text.nfc().collect()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_source_unsupported_extension() {
        let result = open_source("slides.pptx", &ExtractOptions::default());
        assert!(matches!(result, Err(Error::UnsupportedFormat(ext)) if ext == "pptx"));

        let result = open_source("README", &ExtractOptions::default());
        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
    }

    #[test]
    fn test_open_source_missing_pdf() {
        let result = open_source("missing/Report.PDF", &ExtractOptions::default());
        assert!(matches!(result, Err(Error::DocumentNotFound(_))));
    }

    #[test]
    fn test_check_selection_modes() {
        let strict = ExtractOptions::new().with_pages(PageSelection::Pages(vec![1, 5]));
        assert!(matches!(
            check_selection("doc", &strict, 3),
            Err(Error::PageOutOfRange(5, 3))
        ));
        assert!(check_selection("doc", &strict.clone().lenient(), 3).is_ok());

        let in_range = ExtractOptions::new().with_pages(PageSelection::Range(1..=3));
        assert!(check_selection("doc", &in_range, 3).is_ok());
        assert!(check_selection("doc", &ExtractOptions::default(), 0).is_ok());
    }

    #[test]
    fn test_finish_text_normalizes() {
        let decomposed = "Cafe\u{301}\n";
        let plain = finish_text(decomposed, &ExtractOptions::default());
        assert_eq!(plain, "Cafe\u{301}");

        let options = ExtractOptions::new().with_unicode_normalization(true);
        assert_eq!(finish_text(decomposed, &options), "Caf\u{e9}");
    }
}
