//! Client for the cardiologist-directory webhook.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::ClientError;
use crate::config::{CARDIOLOGIST_SEARCH_WEBHOOK_URL, WEBHOOK_TIMEOUT_SECS};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    pub name: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub specialty: String,
    #[serde(default)]
    pub address: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    providers: Vec<Provider>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Serialize)]
struct SearchRequest<'a> {
    zipcode: &'a str,
}

/// Exactly five ASCII digits.
pub fn is_valid_zipcode(zipcode: &str) -> bool {
    zipcode.len() == 5 && zipcode.bytes().all(|b| b.is_ascii_digit())
}

pub struct DirectoryClient {
    url: String,
    client: reqwest::blocking::Client,
}

impl Default for DirectoryClient {
    fn default() -> Self {
        Self::new(CARDIOLOGIST_SEARCH_WEBHOOK_URL)
    }
}

impl DirectoryClient {
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

    /// Cardiologists near a zipcode. The zipcode is validated before any
    /// network traffic happens.
    pub fn search(&self, zipcode: &str) -> Result<Vec<Provider>, ClientError> {
        if !is_valid_zipcode(zipcode) {
            return Err(ClientError::InvalidZipcode);
        }

        tracing::info!(url = %self.url, zipcode, "searching provider directory");

        let response = self
            .client
            .post(&self.url)
            .json(&SearchRequest { zipcode })
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ClientError::Endpoint {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: SearchResponse = response
            .json()
            .map_err(|e| ClientError::ResponseParsing(e.to_string()))?;

        if let Some(error) = parsed.error {
            return Err(ClientError::ResponseParsing(error));
        }

        Ok(parsed.providers)
    }
}
