//! Cardiovascular risk assessment core: a guided questionnaire, a lab-report
//! text-extraction pipeline with a tiered lab-value scanner, and clients for
//! the hosted scoring and provider-directory webhooks.

pub mod assessment;
pub mod clients;
pub mod config;
pub mod extraction;
pub mod labvalues;

pub use assessment::{AssessmentInputs, QuestionnaireFlow};
pub use extraction::{DocumentExtractor, SourceDocument};
pub use labvalues::{scan_lab_values, LabExtraction};
