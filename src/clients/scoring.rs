//! Client for the hosted 10-year risk scoring webhook.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::ClientError;
use crate::assessment::AssessmentInputs;
use crate::config::{RISK_SCORE_WEBHOOK_URL, WEBHOOK_TIMEOUT_SECS};

/// The score and guidance block inside a scoring response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    #[serde(rename = "estimated_10yr_risk")]
    pub estimated_risk: RiskEstimate,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub guideline_references: Vec<String>,
    #[serde(default)]
    pub disclaimer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskEstimate {
    /// Percentage risk over ten years, e.g. "7.5%".
    pub score: String,
    /// Bucket such as "Low", "Borderline", "Intermediate" or "High".
    pub category: String,
}

#[derive(Debug, Deserialize)]
struct ScoringResponse {
    suggestions: Option<RiskReport>,
}

pub struct RiskScoreClient {
    url: String,
    client: reqwest::blocking::Client,
}

impl Default for RiskScoreClient {
    fn default() -> Self {
        Self::new(RISK_SCORE_WEBHOOK_URL)
    }
}

impl RiskScoreClient {
    pub fn new(url: impl Into<String>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(WEBHOOK_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");
        Self {
            url: url.into(),
            client,
        }
    }

    /// Submit completed inputs and return the scored report.
    pub fn score(&self, inputs: &AssessmentInputs) -> Result<RiskReport, ClientError> {
        tracing::info!(url = %self.url, "requesting risk score");

        let response = self.client.post(&self.url).json(inputs).send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "scoring endpoint rejected request");
            return Err(ClientError::Endpoint {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ScoringResponse = response
            .json()
            .map_err(|e| ClientError::ResponseParsing(e.to_string()))?;

        parsed.suggestions.ok_or(ClientError::MissingSuggestions)
    }
}
