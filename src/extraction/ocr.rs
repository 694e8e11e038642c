//! Image OCR via a local vision-model HTTP endpoint.
//!
//! The engine sits behind the `OcrEngine` trait so the dispatcher can be
//! tested with a mock. Progress is reported through a callback as a 0–100
//! percentage the caller may surface in its upload UI.

use base64::Engine as _;
use serde::{Deserialize, Serialize};

use super::ExtractionError;
use crate::config;

/// Progress callback: receives a coarse 0–100 percentage.
pub type ProgressSink<'a> = &'a dyn Fn(u8);

/// No-op progress sink for callers that don't surface OCR progress.
pub fn no_progress(_pct: u8) {}

/// OCR engine abstraction (allows mocking for tests)
pub trait OcrEngine {
    fn recognize(
        &self,
        image_bytes: &[u8],
        progress: ProgressSink<'_>,
    ) -> Result<String, ExtractionError>;
}

const OCR_SYSTEM_PROMPT: &str = "\
You are a medical document text extractor. Extract ALL visible text from the \
provided lab report image, line by line, preserving the order values appear. \
Output plain text only. Do not summarize, interpret, or omit numbers.";

const OCR_USER_PROMPT: &str = "\
Extract all visible text from this lab report image. Keep each labeled value \
on its own line exactly as printed.";

/// Production OCR engine backed by a local vision model.
pub struct HttpVisionOcr {
    base_url: String,
    model: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl HttpVisionOcr {
    pub fn new(base_url: &str, model: &str, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            client,
            timeout_secs,
        }
    }

    /// Default local vision endpoint with a long timeout (CPU OCR is slow).
    pub fn default_local() -> Self {
        Self::new(
            config::DEFAULT_OCR_BASE_URL,
            config::DEFAULT_OCR_MODEL,
            config::OCR_TIMEOUT_SECS,
        )
    }
}

/// Request body for the vision /api/generate endpoint
#[derive(Serialize)]
struct VisionGenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    system: &'a str,
    images: Vec<String>,
    stream: bool,
}

/// Response body from the vision /api/generate endpoint
#[derive(Deserialize)]
struct VisionGenerateResponse {
    response: String,
}

impl OcrEngine for HttpVisionOcr {
    fn recognize(
        &self,
        image_bytes: &[u8],
        progress: ProgressSink<'_>,
    ) -> Result<String, ExtractionError> {
        let start = std::time::Instant::now();
        progress(0);

        let base64_image = base64::engine::general_purpose::STANDARD.encode(image_bytes);
        progress(10);

        let url = format!("{}/api/generate", self.base_url);
        let body = VisionGenerateRequest {
            model: &self.model,
            prompt: OCR_USER_PROMPT,
            system: OCR_SYSTEM_PROMPT,
            images: vec![base64_image],
            stream: false,
        };

        // One round trip: the model returns the full recognized text at once,
        // so the only honest intermediate signal is "request in flight".
        progress(25);
        let response = self.client.post(&url).json(&body).send().map_err(|e| {
            if e.is_connect() {
                ExtractionError::OcrProcessing(format!(
                    "cannot reach vision endpoint at {}",
                    self.base_url
                ))
            } else if e.is_timeout() {
                ExtractionError::OcrProcessing(format!(
                    "OCR timed out after {}s",
                    self.timeout_secs
                ))
            } else {
                ExtractionError::OcrProcessing(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ExtractionError::OcrProcessing(format!(
                "vision endpoint returned {status}: {body}"
            )));
        }
        progress(90);

        let parsed: VisionGenerateResponse = response
            .json()
            .map_err(|e| ExtractionError::OcrProcessing(e.to_string()))?;

        progress(100);
        tracing::info!(
            model = %self.model,
            elapsed_ms = %start.elapsed().as_millis(),
            text_len = parsed.response.len(),
            "vision OCR complete"
        );

        Ok(parsed.response)
    }
}
