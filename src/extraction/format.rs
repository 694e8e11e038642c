use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One uploaded lab report: raw bytes plus the media type the browser declared.
/// Created on upload, consumed by a single extraction call, then discarded.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub id: Uuid,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl SourceDocument {
    pub fn new(bytes: Vec<u8>, media_type: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            media_type: media_type.to_string(),
            bytes,
        }
    }
}

/// Broad media categories we can extract text from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Pdf,
    Word,
    PlainText,
    Unsupported,
}

impl MediaKind {
    /// Classify a browser-declared media type string.
    /// An empty/undeclared type is read as plain text (best effort).
    pub fn from_declared(media_type: &str) -> Self {
        let declared = media_type.trim().to_ascii_lowercase();
        if declared.starts_with("image/") {
            Self::Image
        } else if declared == "application/pdf" {
            Self::Pdf
        } else if declared
            == "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            || declared.contains("word")
        {
            Self::Word
        } else if declared.starts_with("text/") || declared.is_empty() {
            Self::PlainText
        } else {
            Self::Unsupported
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Pdf => "pdf",
            Self::Word => "word",
            Self::PlainText => "plain_text",
            Self::Unsupported => "unsupported",
        }
    }
}

/// Result of magic-byte format detection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatDetection {
    pub media_type: String,
    pub kind: MediaKind,
}

/// Detect a media type from magic bytes (NOT file extensions).
/// Magic bytes don't lie — extensions can be wrong. Used by the CLI path,
/// where no browser-declared type exists.
pub fn detect_format(bytes: &[u8]) -> FormatDetection {
    let (media_type, kind) = match bytes {
        // PDF: starts with %PDF
        [0x25, 0x50, 0x44, 0x46, ..] => ("application/pdf", MediaKind::Pdf),
        // JPEG: starts with FF D8 FF
        [0xFF, 0xD8, 0xFF, ..] => ("image/jpeg", MediaKind::Image),
        // PNG: starts with 89 50 4E 47
        [0x89, 0x50, 0x4E, 0x47, ..] => ("image/png", MediaKind::Image),
        // TIFF: little-endian (49 49 2A 00) or big-endian (4D 4D 00 2A)
        [0x49, 0x49, 0x2A, 0x00, ..] | [0x4D, 0x4D, 0x00, 0x2A, ..] => {
            ("image/tiff", MediaKind::Image)
        }
        // OOXML zip container — treated as a Word document
        [0x50, 0x4B, 0x03, 0x04, ..] => (
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            MediaKind::Word,
        ),
        _ => {
            if is_likely_text(bytes) {
                ("text/plain", MediaKind::PlainText)
            } else {
                ("application/octet-stream", MediaKind::Unsupported)
            }
        }
    };

    FormatDetection {
        media_type: media_type.to_string(),
        kind,
    }
}

/// Check if bytes are likely plain text (valid UTF-8, mostly printable)
fn is_likely_text(bytes: &[u8]) -> bool {
    let sample = &bytes[..bytes.len().min(4096)];
    if sample.is_empty() {
        return false;
    }

    let text = match std::str::from_utf8(sample) {
        Ok(t) => t,
        Err(_) => return false,
    };

    // At least 80% printable characters (or whitespace)
    let printable = text
        .chars()
        .filter(|c| !c.is_control() || c.is_whitespace())
        .count();
    let ratio = printable as f64 / text.chars().count().max(1) as f64;
    ratio > 0.80
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_image_types() {
        assert_eq!(MediaKind::from_declared("image/jpeg"), MediaKind::Image);
        assert_eq!(MediaKind::from_declared("image/png"), MediaKind::Image);
    }

    #[test]
    fn declared_pdf_type() {
        assert_eq!(MediaKind::from_declared("application/pdf"), MediaKind::Pdf);
    }

    #[test]
    fn declared_word_type() {
        assert_eq!(
            MediaKind::from_declared(
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            ),
            MediaKind::Word
        );
        assert_eq!(MediaKind::from_declared("application/msword"), MediaKind::Word);
    }

    #[test]
    fn undeclared_type_reads_as_text() {
        assert_eq!(MediaKind::from_declared(""), MediaKind::PlainText);
        assert_eq!(MediaKind::from_declared("text/plain"), MediaKind::PlainText);
    }

    #[test]
    fn unknown_type_unsupported() {
        assert_eq!(
            MediaKind::from_declared("application/unknown-type"),
            MediaKind::Unsupported
        );
    }

    #[test]
    fn detect_jpeg_from_magic_bytes() {
        let detection = detect_format(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00]);
        assert_eq!(detection.kind, MediaKind::Image);
        assert_eq!(detection.media_type, "image/jpeg");
    }

    #[test]
    fn detect_pdf_from_magic_bytes() {
        let detection = detect_format(b"%PDF-1.4 some content");
        assert_eq!(detection.kind, MediaKind::Pdf);
        assert_eq!(detection.media_type, "application/pdf");
    }

    #[test]
    fn detect_zip_container_as_word() {
        let detection = detect_format(&[0x50, 0x4B, 0x03, 0x04, 0x14, 0x00]);
        assert_eq!(detection.kind, MediaKind::Word);
    }

    #[test]
    fn detect_text_content() {
        let detection = detect_format(b"Cholesterol 177\nHDL Cholesterol 55\n");
        assert_eq!(detection.kind, MediaKind::PlainText);
        assert_eq!(detection.media_type, "text/plain");
    }

    #[test]
    fn detect_binary_as_unsupported() {
        let detection = detect_format(&[0x4D, 0x5A, 0x90, 0x00, 0x03, 0x00]);
        assert_eq!(detection.kind, MediaKind::Unsupported);
    }

    #[test]
    fn empty_bytes_unsupported() {
        assert_eq!(detect_format(&[]).kind, MediaKind::Unsupported);
    }
}
