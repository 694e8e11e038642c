use serde::{Deserialize, Serialize};

use crate::labvalues::LabExtraction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "Male")]
    Male,
    #[serde(rename = "Female")]
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Race {
    #[serde(rename = "White")]
    White,
    #[serde(rename = "African American")]
    AfricanAmerican,
    #[serde(rename = "Other")]
    Other,
}

/// Everything the risk-scoring endpoint needs about one patient. Fields
/// fill in as the questionnaire advances; all must be set before submit.
///
/// Wire names are fixed by the scoring endpoint's contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentInputs {
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub race: Option<Race>,
    pub smoker: Option<bool>,
    pub diabetes: Option<bool>,
    #[serde(rename = "familyHistory")]
    pub family_history: Option<bool>,
    #[serde(rename = "highBP")]
    pub high_bp: Option<bool>,
    #[serde(rename = "bpMedication")]
    pub bp_medication: Option<bool>,
    #[serde(rename = "cholesterolMedication")]
    pub cholesterol_medication: Option<bool>,
    #[serde(rename = "systolicBP")]
    pub systolic_bp: Option<u32>,
    #[serde(rename = "totalCholesterol")]
    pub total_cholesterol: Option<u32>,
    #[serde(rename = "hdlCholesterol")]
    pub hdl_cholesterol: Option<u32>,
}

impl AssessmentInputs {
    /// Prefill lab fields from a document scan. Scanned values overwrite
    /// anything already entered for the same field; fields the scan did
    /// not resolve are left untouched.
    pub fn merge_extraction(&mut self, extraction: &LabExtraction) {
        if extraction.systolic_bp.is_some() {
            self.systolic_bp = extraction.systolic_bp;
        }
        if extraction.total_cholesterol.is_some() {
            self.total_cholesterol = extraction.total_cholesterol;
        }
        if extraction.hdl_cholesterol.is_some() {
            self.hdl_cholesterol = extraction.hdl_cholesterol;
        }
    }
}
