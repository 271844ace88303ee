use super::TextSource;
use crate::ImportError;
use log::{debug, warn};
use lopdf::Document;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Extracts the text layer of a PDF, page by page
#[derive(Debug, Clone)]
pub struct PdfSource {
    path: PathBuf,
}

impl PdfSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        PdfSource {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn load(&self) -> Result<Document, ImportError> {
        let file = File::open(&self.path).map_err(|source| ImportError::FileAccessError {
            path: self.path.clone(),
            source,
        })?;

        Document::load_from(BufReader::new(file)).map_err(|e| {
            ImportError::DocumentParseError(format!("{}: {}", self.path.display(), e))
        })
    }
}

impl TextSource for PdfSource {
    fn kind(&self) -> &str {
        "pdf"
    }

    fn read_text(&self) -> Result<String, ImportError> {
        let document = self.load()?;

        // BTreeMap keyed by page number, so iteration follows document order
        let pages = document.get_pages();
        debug!("{} has {} pages", self.path.display(), pages.len());

        let texts = pages.keys().map(|&page_number| {
            match document.extract_text(&[page_number]) {
                Ok(text) => Some(text),
                Err(e) => {
                    warn!("No text extracted from page {}: {}", page_number, e);
                    None
                }
            }
        });

        Ok(join_pages(texts))
    }
}

/// Join per-page texts in order, skipping pages without text.
///
/// Each surviving page is trimmed and pages are separated by a single newline.
pub fn join_pages<I>(pages: I) -> String
where
    I: IntoIterator<Item = Option<String>>,
{
    pages
        .into_iter()
        .flatten()
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
