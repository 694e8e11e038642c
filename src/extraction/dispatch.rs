//! Format dispatch: one uploaded document in, best-effort lab values out.
//!
//! Every backend failure is caught here and converted into a user-facing
//! message on the result — a bad upload must never abort the surrounding
//! questionnaire flow.

use super::format::{MediaKind, SourceDocument};
use super::ocr::{HttpVisionOcr, OcrEngine, ProgressSink};
use super::pdf::PdfTextExtractor;
use super::sanitize::sanitize_extracted_text;
use super::word::WordTextExtractor;
use super::ExtractionError;
use crate::labvalues::{scan_lab_values, LabExtraction};

/// Maps a document's declared media type to a text-extraction backend and
/// runs the lab-value scan over whatever text comes back.
pub struct DocumentExtractor {
    ocr: Box<dyn OcrEngine>,
    pdf: PdfTextExtractor,
    word: WordTextExtractor,
}

impl DocumentExtractor {
    pub fn new(ocr: Box<dyn OcrEngine>) -> Self {
        Self {
            ocr,
            pdf: PdfTextExtractor,
            word: WordTextExtractor,
        }
    }

    /// Extractor wired to the default local vision endpoint for images.
    pub fn with_default_ocr() -> Self {
        Self::new(Box::new(HttpVisionOcr::default_local()))
    }

    /// Best-effort text for one document. Only the OCR path emits progress.
    pub fn extract_text(
        &self,
        doc: &SourceDocument,
        progress: ProgressSink<'_>,
    ) -> Result<String, ExtractionError> {
        let raw = match MediaKind::from_declared(&doc.media_type) {
            MediaKind::Image => self.ocr.recognize(&doc.bytes, progress)?,
            MediaKind::Pdf => self.pdf.extract_text(&doc.bytes)?,
            MediaKind::Word => self.word.extract_text(&doc.bytes)?,
            // Undeclared types are read as text; lossy decode keeps this
            // path infallible on arbitrary bytes.
            MediaKind::PlainText => String::from_utf8_lossy(&doc.bytes).into_owned(),
            MediaKind::Unsupported => return Err(ExtractionError::UnsupportedFormat),
        };

        Ok(sanitize_extracted_text(&raw))
    }

    /// Full pipeline for one upload: extract text, scan for lab values.
    ///
    /// Infallible by design — extraction errors become the format-specific
    /// user-facing message on an empty result.
    pub fn parse_lab_report(
        &self,
        doc: &SourceDocument,
        progress: ProgressSink<'_>,
    ) -> LabExtraction {
        let kind = MediaKind::from_declared(&doc.media_type);
        tracing::info!(
            document_id = %doc.id,
            media_type = %doc.media_type,
            kind = kind.as_str(),
            size_bytes = doc.bytes.len(),
            "parsing lab report"
        );

        match self.extract_text(doc, progress) {
            Ok(text) => {
                let result = scan_lab_values(&text);
                tracing::info!(
                    document_id = %doc.id,
                    fields_found = result.fields_found,
                    "lab report scan complete"
                );
                result
            }
            Err(err) => {
                tracing::warn!(
                    document_id = %doc.id,
                    kind = kind.as_str(),
                    error = %err,
                    "lab report extraction failed"
                );
                LabExtraction::backend_failure(kind, &doc.media_type)
            }
        }
    }
}
