//! HTTP clients for the hosted scoring and provider-directory webhooks.

pub mod directory;
pub mod scoring;

use thiserror::Error;

pub use directory::{is_valid_zipcode, DirectoryClient, Provider};
pub use scoring::{RiskEstimate, RiskReport, RiskScoreClient};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Cannot reach the assessment service. Check your internet connection.")]
    Connection,
    #[error("The assessment service took too long to respond. Please try again.")]
    Timeout,
    #[error("HTTP request failed: {0}")]
    Http(String),
    #[error("Service returned status {status}: {body}")]
    Endpoint { status: u16, body: String },
    #[error("Could not parse service response: {0}")]
    ResponseParsing(String),
    #[error("Zipcode must be exactly 5 digits")]
    InvalidZipcode,
    #[error("Service response contained no suggestions")]
    MissingSuggestions,
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            ClientError::Connection
        } else if err.is_timeout() {
            ClientError::Timeout
        } else {
            ClientError::Http(err.to_string())
        }
    }
}
