// file: src/exporter/json.rs
// description: json export of analysis reports

use crate::error::{AnalyzerError, Result};
use crate::models::AnalysisReport;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter {
    pretty: bool,
}

impl JsonExporter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn to_json(&self, report: &AnalysisReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    /// Writes the report to `path`, creating parent directories as needed.
    pub fn write(&self, report: &AnalysisReport, path: &Path) -> Result<()> {
        let json = self.to_json(report)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| AnalyzerError::FileOperation {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(path, json).map_err(|source| AnalyzerError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Report written to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Document, EntityMap};
    use tempfile::tempdir;

    fn report() -> AnalysisReport {
        let document = Document::from_path("notes.txt").unwrap();
        let mut entities = EntityMap::new();
        entities.insert("Paris".to_string(), "LOC".to_string());
        AnalysisReport::new(
            &document,
            "Paris is lovely in spring.",
            "Paris is lovely.".to_string(),
            entities,
            vec!["spring".to_string()],
        )
    }

    #[test]
    fn test_write_report() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reports").join("notes.json");

        JsonExporter::new(true).write(&report(), &path).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["summary"], "Paris is lovely.");
        assert_eq!(written["entities"]["Paris"], "LOC");
        assert_eq!(written["keywords"][0], "spring");
    }

    #[test]
    fn test_compact_output_is_single_line() {
        let json = JsonExporter::new(false).to_json(&report()).unwrap();
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_write_into_missing_file_parent() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let err = JsonExporter::default()
            .write(&report(), &blocker.join("out.json"))
            .unwrap_err();
        assert!(matches!(err, AnalyzerError::FileOperation { .. }));
    }
}
