/// Application-level constants
pub const APP_NAME: &str = "CardioRisk";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// External risk-scoring webhook (assessment inputs in, suggestions out).
pub const RISK_SCORE_WEBHOOK_URL: &str =
    "https://skantam.app.n8n.cloud/webhook/CardioAI_GetRISKScore";

/// External cardiologist-directory webhook (5-digit zipcode in, providers out).
pub const CARDIOLOGIST_SEARCH_WEBHOOK_URL: &str =
    "https://skantam.app.n8n.cloud/webhook/Cardiologist_Search";

/// Local vision-model endpoint used for image OCR.
pub const DEFAULT_OCR_BASE_URL: &str = "http://localhost:11434";
pub const DEFAULT_OCR_MODEL: &str = "deepseek-ocr";

/// OCR of a full-page photo on CPU can take minutes.
pub const OCR_TIMEOUT_SECS: u64 = 300;
pub const WEBHOOK_TIMEOUT_SECS: u64 = 60;

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> &'static str {
    "info,cardiorisk=debug"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_identity() {
        assert_eq!(APP_NAME, "CardioRisk");
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn webhook_urls_are_https() {
        assert!(RISK_SCORE_WEBHOOK_URL.starts_with("https://"));
        assert!(CARDIOLOGIST_SEARCH_WEBHOOK_URL.starts_with("https://"));
    }
}
