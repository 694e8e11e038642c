pub mod dispatch;
pub mod format;
pub mod ocr;
pub mod pdf;
pub mod sanitize;
pub mod word;

pub use dispatch::*;
pub use format::*;
pub use ocr::*;
pub use pdf::*;
pub use sanitize::*;
pub use word::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("OCR processing failed: {0}")]
    OcrProcessing(String),

    #[error("PDF parsing failed: {0}")]
    PdfParsing(String),

    #[error("Word document parsing failed: {0}")]
    WordParsing(String),

    #[error("Text encoding error: {0}")]
    EncodingError(String),

    #[error("Unsupported format for extraction")]
    UnsupportedFormat,
}
