//! Raw-text extraction from Word (.docx) lab reports.
//!
//! A .docx file is a zip container; the body lives in `word/document.xml`
//! as `<w:t>` text runs grouped into `<w:p>` paragraphs. We pull the runs
//! and discard all formatting — one output line per paragraph.

use std::io::{Cursor, Read};
use std::sync::LazyLock;

use regex::Regex;

use super::ExtractionError;

static TEXT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<w:t(?:\s[^>]*)?>([^<]*)</w:t>").unwrap());

pub struct WordTextExtractor;

impl WordTextExtractor {
    pub fn extract_text(&self, docx_bytes: &[u8]) -> Result<String, ExtractionError> {
        let mut archive = zip::ZipArchive::new(Cursor::new(docx_bytes))
            .map_err(|e| ExtractionError::WordParsing(e.to_string()))?;

        let mut entry = archive
            .by_name("word/document.xml")
            .map_err(|_| ExtractionError::WordParsing("missing word/document.xml".into()))?;

        let mut xml = String::new();
        entry
            .read_to_string(&mut xml)
            .map_err(|e| ExtractionError::EncodingError(e.to_string()))?;

        Ok(document_xml_to_text(&xml))
    }
}

/// Concatenate the `<w:t>` runs of each paragraph into one line.
fn document_xml_to_text(xml: &str) -> String {
    let mut out = String::new();

    for paragraph in xml.split("</w:p>") {
        let mut line = String::new();
        for cap in TEXT_RUN.captures_iter(paragraph) {
            line.push_str(&decode_entities(&cap[1]));
        }
        let line = line.trim();
        if !line.is_empty() {
            out.push_str(line);
            out.push('\n');
        }
    }

    out
}

/// The five XML predefined entities; document.xml uses no others for text runs.
fn decode_entities(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn make_test_docx(paragraphs: &[&str]) -> Vec<u8> {
        let body: String = paragraphs
            .iter()
            .map(|p| format!("<w:p><w:r><w:t>{p}</w:t></w:r></w:p>"))
            .collect();
        let xml = format!(
            "<?xml version=\"1.0\"?><w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\"><w:body>{body}</w:body></w:document>"
        );

        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = zip::write::SimpleFileOptions::default();
        writer.start_file("word/document.xml", options).unwrap();
        writer.write_all(xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn extracts_paragraphs_as_lines() {
        let docx = make_test_docx(&["Cholesterol 177", "HDL Cholesterol 55"]);
        let text = WordTextExtractor.extract_text(&docx).unwrap();
        assert_eq!(text, "Cholesterol 177\nHDL Cholesterol 55\n");
    }

    #[test]
    fn split_runs_joined_within_paragraph() {
        let xml = "<w:p><w:r><w:t>Chole</w:t></w:r><w:r><w:t xml:space=\"preserve\">sterol 200</w:t></w:r></w:p>";
        assert_eq!(document_xml_to_text(xml), "Cholesterol 200\n");
    }

    #[test]
    fn entities_decoded() {
        let xml = "<w:p><w:r><w:t>BP &lt; 140 &amp; HDL 55</w:t></w:r></w:p>";
        assert_eq!(document_xml_to_text(xml), "BP < 140 & HDL 55\n");
    }

    #[test]
    fn not_a_zip_is_an_error() {
        let result = WordTextExtractor.extract_text(b"plain bytes");
        assert!(matches!(result, Err(ExtractionError::WordParsing(_))));
    }

    #[test]
    fn zip_without_document_xml_is_an_error() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = zip::write::SimpleFileOptions::default();
        writer.start_file("other.txt", options).unwrap();
        writer.write_all(b"nothing").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let result = WordTextExtractor.extract_text(&bytes);
        assert!(matches!(result, Err(ExtractionError::WordParsing(_))));
    }
}
