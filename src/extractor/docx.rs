// file: src/extractor/docx.rs
// description: DOCX paragraph extraction from word/document.xml
// reference: https://docs.rs/quick-xml, https://docs.rs/zip

use crate::error::{AnalyzerError, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;
use zip::ZipArchive;

const DOCUMENT_PART: &str = "word/document.xml";

/// Elements whose paragraphs are not part of the body flow.
const DETACHED_CONTENT: &[&[u8]] = &[b"txbxContent", b"Fallback"];

pub fn extract_docx_text(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|source| AnalyzerError::FileOperation {
        path: path.to_path_buf(),
        source,
    })?;

    let mut archive = ZipArchive::new(file).map_err(|source| AnalyzerError::DocxArchive {
        path: path.to_path_buf(),
        source,
    })?;

    let part = archive
        .by_name(DOCUMENT_PART)
        .map_err(|source| AnalyzerError::DocxArchive {
            path: path.to_path_buf(),
            source,
        })?;

    let paragraphs =
        read_paragraphs(BufReader::new(part)).map_err(|source| AnalyzerError::DocxXml {
            path: path.to_path_buf(),
            source,
        })?;

    debug!("Read {} paragraphs from {}", paragraphs.len(), path.display());
    Ok(paragraphs.join("\n"))
}

/// Collect the text of every body-level `w:p`, empty paragraphs included.
pub(crate) fn read_paragraphs<R: BufRead>(
    reader: R,
) -> std::result::Result<Vec<String>, quick_xml::Error> {
    let mut xml = Reader::from_reader(reader);
    xml.config_mut().trim_text(false);

    let mut buf = Vec::with_capacity(4096);
    let mut paragraphs = Vec::new();

    // local names of currently open elements
    let mut open: Vec<Vec<u8>> = Vec::new();
    let mut current: Option<String> = None;
    let mut paragraph_depth = 0;
    let mut detached = 0usize;
    let mut in_text = false;

    loop {
        match xml.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                let name = e.local_name().as_ref().to_vec();

                if DETACHED_CONTENT.contains(&name.as_slice()) {
                    detached += 1;
                }

                match name.as_slice() {
                    b"p" if current.is_none() && parent_is_body(&open) => {
                        current = Some(String::new());
                        paragraph_depth = open.len();
                    }
                    b"t" if current.is_some() && detached == 0 => in_text = true,
                    _ => {}
                }

                open.push(name);
            }

            Event::Empty(ref e) => {
                let name = e.local_name();
                match name.as_ref() {
                    b"p" if current.is_none() && parent_is_body(&open) => {
                        paragraphs.push(String::new());
                    }
                    run_child if detached == 0 && parent_is_run(&open) => {
                        if let (Some(text), Some(ch)) = (current.as_mut(), run_char(run_child, e))
                        {
                            text.push(ch);
                        }
                    }
                    _ => {}
                }
            }

            Event::Text(ref e) => {
                if in_text {
                    if let Some(text) = current.as_mut() {
                        text.push_str(&e.unescape()?);
                    }
                }
            }

            Event::CData(ref e) => {
                if in_text {
                    if let Some(text) = current.as_mut() {
                        text.push_str(&String::from_utf8_lossy(e.as_ref()));
                    }
                }
            }

            Event::End(ref e) => {
                open.pop();
                let name = e.local_name();

                if DETACHED_CONTENT.contains(&name.as_ref()) {
                    detached = detached.saturating_sub(1);
                }

                match name.as_ref() {
                    b"t" => in_text = false,
                    b"p" if current.is_some() && open.len() == paragraph_depth => {
                        paragraphs.extend(current.take());
                    }
                    _ => {}
                }
            }

            Event::Eof => break,
            _ => {}
        }

        buf.clear();
    }

    Ok(paragraphs)
}

/// Character produced by an empty run-level element, if any. Page and
/// column breaks produce nothing.
fn run_char(name: &[u8], element: &BytesStart) -> Option<char> {
    match name {
        b"tab" | b"ptab" => Some('\t'),
        b"noBreakHyphen" => Some('-'),
        b"cr" => Some('\n'),
        b"br" => match break_type(element).as_deref() {
            None | Some(b"textWrapping") => Some('\n'),
            Some(_) => None,
        },
        _ => None,
    }
}

fn break_type(element: &BytesStart) -> Option<Vec<u8>> {
    element
        .attributes()
        .flatten()
        .find(|attr| attr.key.local_name().as_ref() == b"type")
        .map(|attr| attr.value.into_owned())
}

fn parent_is_body(open: &[Vec<u8>]) -> bool {
    open.last().is_some_and(|name| name.as_slice() == b"body")
}

// tab stops in paragraph properties are also named `tab`
fn parent_is_run(open: &[Vec<u8>]) -> bool {
    open.last().is_some_and(|name| name.as_slice() == b"r")
}
