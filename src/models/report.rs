// file: src/models/report.rs
// description: analysis report assembled from extracted text and model outputs
// reference: internal data structures

use crate::models::{Document, DocumentFormat, EntityMap};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub id: Uuid,
    pub source_path: String,
    pub format: DocumentFormat,
    pub content_hash: String,
    pub char_count: usize,
    pub summary: String,
    pub entities: EntityMap,
    pub keywords: Vec<String>,
    pub analyzed_at: String,
}

impl AnalysisReport {
    pub fn new(
        document: &Document,
        text: &str,
        summary: String,
        entities: EntityMap,
        keywords: Vec<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            source_path: document.path.display().to_string(),
            format: document.format,
            content_hash: Self::compute_hash(text),
            char_count: text.chars().count(),
            summary,
            entities,
            keywords,
            analyzed_at: Utc::now().to_rfc3339(),
        }
    }

    fn compute_hash(content: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Keywords limited to the first `limit` entries in model order.
    pub fn top_keywords(&self, limit: usize) -> &[String] {
        &self.keywords[..self.keywords.len().min(limit)]
    }
}
