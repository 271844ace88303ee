use super::TextSource;
use crate::ImportError;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads a UTF-8 text file as-is
#[derive(Debug, Clone)]
pub struct PlainTextSource {
    path: PathBuf,
}

impl PlainTextSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        PlainTextSource {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl TextSource for PlainTextSource {
    fn kind(&self) -> &str {
        "plain text"
    }

    fn read_text(&self) -> Result<String, ImportError> {
        fs::read_to_string(&self.path).map_err(|source| ImportError::FileAccessError {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_reads_file_verbatim() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "2 cups flour\n1 tsp salt\n\nMix and bake.\n").unwrap();

        let text = PlainTextSource::new(file.path()).read_text().unwrap();
        assert_eq!(text, "2 cups flour\n1 tsp salt\n\nMix and bake.\n");
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = PlainTextSource::new("/nonexistent/recipe.txt")
            .read_text()
            .unwrap_err();
        match err {
            ImportError::FileAccessError { path, .. } => {
                assert_eq!(path, PathBuf::from("/nonexistent/recipe.txt"));
            }
            other => panic!("Expected FileAccessError, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_utf8_is_file_access_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00, 0xc3]).unwrap();

        let result = PlainTextSource::new(file.path()).read_text();
        assert!(matches!(result, Err(ImportError::FileAccessError { .. })));
    }
}
