// file: src/extractor/text.rs
// description: plain text files read verbatim as UTF-8

use crate::error::{AnalyzerError, Result};
use std::fs;
use std::path::Path;

pub fn extract_plain_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| AnalyzerError::FileOperation {
        path: path.to_path_buf(),
        source,
    })
}
