//! Text acquisition from recipe files.
//!
//! Each input format implements [`TextSource`]; [`source_for_path`] picks the
//! implementation from the file extension.

mod pdf;
mod plain_text;

pub use pdf::{join_pages, PdfSource};
pub use plain_text::PlainTextSource;

use crate::ImportError;
use log::debug;
use std::path::Path;

/// A strategy for turning a file into raw recipe text
pub trait TextSource {
    /// Short name of the source kind, used in logs
    fn kind(&self) -> &str;

    /// Read the whole document as a single string
    fn read_text(&self) -> Result<String, ImportError>;
}

/// Select the text source for a path: `.pdf` files are decoded as PDF,
/// everything else is read as plain text.
pub fn source_for_path(path: &Path) -> Box<dyn TextSource> {
    let is_pdf = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

    if is_pdf {
        Box::new(PdfSource::new(path))
    } else {
        Box::new(PlainTextSource::new(path))
    }
}

/// Extract recipe text from a plain-text or PDF file
pub fn extract(path: &Path) -> Result<String, ImportError> {
    let source = source_for_path(path);
    debug!("Reading {} as {}", path.display(), source.kind());

    let text = source.read_text()?;
    debug!("Extracted {} characters from {}", text.len(), path.display());

    Ok(text)
}
