// file: src/utils/validation.rs
// description: input validation for paths, endpoints and model identifiers
// reference: input validation patterns

use crate::error::{AnalyzerError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

lazy_static! {
    // `name` or `owner/name`, as accepted by model hubs
    static ref MODEL_ID: Regex = Regex::new(
        r"^[A-Za-z0-9][A-Za-z0-9._-]*(/[A-Za-z0-9][A-Za-z0-9._-]*)?$"
    ).expect("MODEL_ID regex is valid");
}

pub struct Validator;

impl Validator {
    pub fn validate_file_path(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(AnalyzerError::Validation(format!(
                "File '{}' does not exist",
                path.display()
            )));
        }

        if !path.is_file() {
            return Err(AnalyzerError::Validation(format!(
                "Path is not a file: {}",
                path.display()
            )));
        }

        Ok(())
    }

    pub fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(AnalyzerError::Validation(format!(
                "Invalid URL format: {}",
                url
            )));
        }
        Ok(())
    }

    pub fn validate_model_id(model: &str) -> Result<()> {
        if model.len() > 96 || !MODEL_ID.is_match(model) || model.contains("..") {
            return Err(AnalyzerError::Validation(format!(
                "Invalid model identifier: '{}'",
                model
            )));
        }
        Ok(())
    }

    pub fn validate_summary_bounds(max_length: usize, min_length: usize) -> Result<()> {
        if max_length == 0 {
            return Err(AnalyzerError::Validation(
                "Summary max_length must be greater than 0".to_string(),
            ));
        }

        if min_length > max_length {
            return Err(AnalyzerError::Validation(format!(
                "Summary min_length ({}) exceeds max_length ({})",
                min_length, max_length
            )));
        }

        Ok(())
    }

    /// Text with nothing but whitespace carries nothing to analyze.
    pub fn is_blank(text: &str) -> bool {
        text.trim().is_empty()
    }

    /// First `max_chars` characters of `text`, never splitting a character.
    pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
        match text.char_indices().nth(max_chars) {
            Some((idx, _)) => &text[..idx],
            None => text,
        }
    }

    pub fn sanitize_input_path(raw: &str) -> String {
        let trimmed = raw.trim();
        trimmed
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .or_else(|| {
                trimmed
                    .strip_prefix('\'')
                    .and_then(|s| s.strip_suffix('\''))
            })
            .unwrap_or(trimmed)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_file_path() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("test.txt");
        fs::write(&file_path, "test").unwrap();

        assert!(Validator::validate_file_path(&file_path).is_ok());
        assert!(Validator::validate_file_path(Path::new("/nonexistent/file.pdf")).is_err());
        assert!(Validator::validate_file_path(temp.path()).is_err());
    }

    #[test]
    fn test_validate_url() {
        assert!(Validator::validate_url("https://example.com").is_ok());
        assert!(Validator::validate_url("http://localhost:8080/models").is_ok());
        assert!(Validator::validate_url("example.com").is_err());
        assert!(Validator::validate_url("ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_model_id() {
        assert!(Validator::validate_model_id("yanekyuk/bert-uncased-keyword-extractor").is_ok());
        assert!(Validator::validate_model_id("sshleifer/distilbart-cnn-12-6").is_ok());
        assert!(Validator::validate_model_id("gpt2").is_ok());

        assert!(Validator::validate_model_id("").is_err());
        assert!(Validator::validate_model_id("has space/model").is_err());
        assert!(Validator::validate_model_id("a/b/c").is_err());
        assert!(Validator::validate_model_id("../escape").is_err());
        assert!(Validator::validate_model_id("owner/..").is_err());
    }

    #[test]
    fn test_validate_summary_bounds() {
        assert!(Validator::validate_summary_bounds(150, 50).is_ok());
        assert!(Validator::validate_summary_bounds(50, 50).is_ok());
        assert!(Validator::validate_summary_bounds(40, 80).is_err());
        assert!(Validator::validate_summary_bounds(0, 0).is_err());
    }

    #[test]
    fn test_is_blank() {
        assert!(Validator::is_blank(""));
        assert!(Validator::is_blank(" \n\t "));
        assert!(!Validator::is_blank(" a "));
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(Validator::truncate_chars("short", 10), "short");
        assert_eq!(Validator::truncate_chars("abcdef", 3), "abc");
        assert_eq!(Validator::truncate_chars("naïve café", 4), "naïv");
        assert_eq!(Validator::truncate_chars("東京タワー", 2), "東京");
        assert_eq!(Validator::truncate_chars("abc", 0), "");
    }

    #[test]
    fn test_sanitize_input_path() {
        assert_eq!(Validator::sanitize_input_path("  report.pdf \n"), "report.pdf");
        assert_eq!(
            Validator::sanitize_input_path("\"/tmp/my report.docx\""),
            "/tmp/my report.docx"
        );
        assert_eq!(Validator::sanitize_input_path("'notes.txt'"), "notes.txt");
    }
}
