// file: src/extractor/pdf.rs
// description: page-by-page PDF text extraction with lopdf
// reference: https://docs.rs/lopdf

use crate::error::{AnalyzerError, Result};
use lopdf::Document as PdfDocument;
use std::path::Path;
use tracing::debug;

pub fn extract_pdf_text(path: &Path) -> Result<String> {
    let document = PdfDocument::load(path).map_err(|source| AnalyzerError::Pdf {
        path: path.to_path_buf(),
        source,
    })?;

    let pages = document.get_pages();
    debug!("Loaded PDF {} with {} pages", path.display(), pages.len());

    let mut page_texts = Vec::with_capacity(pages.len());
    for page_number in pages.keys() {
        let text = document
            .extract_text(&[*page_number])
            .map_err(|source| AnalyzerError::Pdf {
                path: path.to_path_buf(),
                source,
            })?;
        page_texts.push(text);
    }

    Ok(join_pages(page_texts))
}

/// Pages without text are skipped; the rest are joined with a newline.
pub(crate) fn join_pages(pages: impl IntoIterator<Item = String>) -> String {
    pages
        .into_iter()
        .map(|text| text.trim_end_matches(['\r', '\n']).to_string())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use lopdf::content::{Content, Operation};
    use lopdf::{Object, Stream, dictionary};
    use std::fs;
    use tempfile::TempDir;

    fn text_operations(text: &str) -> Vec<Operation> {
        vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 24.into()]),
            Operation::new("Td", vec![72.into(), 720.into()]),
            Operation::new("Tj", vec![Object::string_literal(text)]),
            Operation::new("ET", vec![]),
        ]
    }

    pub(crate) fn write_pdf(path: &Path, pages: &[Option<&str>]) {
        let mut doc = PdfDocument::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids = Vec::new();
        for page in pages {
            let operations = match page {
                Some(text) => text_operations(text),
                None => Vec::new(),
            };
            let content = Content { operations };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            kids.push(page_id.into());
        }

        let page_count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => page_count,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.save(path).unwrap();
    }

    #[test]
    fn test_join_pages_skips_empty() {
        let pages = vec![
            "Intro\n".to_string(),
            String::new(),
            "\n".to_string(),
            "Body text".to_string(),
        ];
        assert_eq!(join_pages(pages), "Intro\nBody text");
    }

    #[test]
    fn test_join_pages_keeps_inner_lines() {
        let pages = vec!["line one\nline two\n".to_string(), "last".to_string()];
        assert_eq!(join_pages(pages), "line one\nline two\nlast");
    }

    #[test]
    fn test_join_pages_all_empty() {
        assert_eq!(join_pages(vec![String::new(), String::new()]), "");
    }

    #[test]
    fn test_extract_pdf_skips_blank_pages() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("sample.pdf");
        write_pdf(&path, &[Some("Hello World!"), None, Some("Second page")]);

        let text = extract_pdf_text(&path).unwrap();
        let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
        assert_eq!(lines, vec!["Hello World!", "Second page"]);
    }

    #[test]
    fn test_corrupt_pdf_is_extraction_failure() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.pdf");
        fs::write(&path, b"this is not a pdf").unwrap();

        let err = extract_pdf_text(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ExtractionFailure);
    }
}
