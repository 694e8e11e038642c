//! The result handed back to the questionnaire after scanning an upload.

use serde::{Deserialize, Serialize};

use super::fields::Candidate;
use crate::extraction::format::MediaKind;

/// Outcome of one lab-report scan. Always well-formed: a failed backend or
/// an unreadable document produces an empty result with a user-facing
/// message, never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabExtraction {
    #[serde(rename = "systolicBP")]
    pub systolic_bp: Option<u32>,
    #[serde(rename = "totalCholesterol")]
    pub total_cholesterol: Option<u32>,
    #[serde(rename = "hdlCholesterol")]
    pub hdl_cholesterol: Option<u32>,
    /// How many of the three fields were resolved.
    #[serde(skip)]
    pub fields_found: usize,
    /// What to show the user: which values were found, or why none were.
    pub message: String,
}

impl LabExtraction {
    pub(crate) fn from_candidates(
        systolic_bp: Option<Candidate>,
        total_cholesterol: Option<Candidate>,
        hdl_cholesterol: Option<Candidate>,
    ) -> Self {
        let systolic_bp = systolic_bp.map(|c| c.value);
        let total_cholesterol = total_cholesterol.map(|c| c.value);
        let hdl_cholesterol = hdl_cholesterol.map(|c| c.value);

        let mut found = Vec::new();
        if let Some(v) = total_cholesterol {
            found.push(format!("Total Cholesterol: {v}"));
        }
        if let Some(v) = hdl_cholesterol {
            found.push(format!("HDL: {v}"));
        }
        if let Some(v) = systolic_bp {
            found.push(format!("Systolic BP: {v}"));
        }

        let message = if found.is_empty() {
            "Could not automatically extract lab values from your file. \
             Please enter them manually. Make sure the file contains clear \
             cholesterol and blood pressure values."
                .to_string()
        } else {
            format!("Found {} lab value(s): {}", found.len(), found.join(", "))
        };

        Self {
            systolic_bp,
            total_cholesterol,
            hdl_cholesterol,
            fields_found: found.len(),
            message,
        }
    }

    /// Empty result carrying the message for a failed extraction backend.
    pub fn backend_failure(kind: MediaKind, media_type: &str) -> Self {
        let message = match kind {
            MediaKind::Image => {
                "Error reading image file. Please try a clearer image or enter \
                 your lab values manually."
                    .to_string()
            }
            MediaKind::Pdf => {
                "Error reading PDF file. Please try a text-based PDF or enter \
                 your lab values manually."
                    .to_string()
            }
            MediaKind::Word => {
                "Error reading Word document. Please try a different format or \
                 enter your lab values manually."
                    .to_string()
            }
            MediaKind::PlainText => {
                "Error reading file. Please enter your lab values manually.".to_string()
            }
            MediaKind::Unsupported => {
                format!("Unsupported file type: {media_type}. Please enter your lab values manually.")
            }
        };

        Self {
            systolic_bp: None,
            total_cholesterol: None,
            hdl_cholesterol: None,
            fields_found: 0,
            message,
        }
    }

    /// True when no field was resolved.
    pub fn is_empty(&self) -> bool {
        self.fields_found == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labvalues::fields::Tier;

    fn candidate(value: u32) -> Option<Candidate> {
        Some(Candidate {
            value,
            tier: Tier::Pattern,
        })
    }

    #[test]
    fn success_message_lists_fields_in_fixed_order() {
        let result = LabExtraction::from_candidates(candidate(130), candidate(205), candidate(55));
        assert_eq!(result.fields_found, 3);
        assert_eq!(
            result.message,
            "Found 3 lab value(s): Total Cholesterol: 205, HDL: 55, Systolic BP: 130"
        );
    }

    #[test]
    fn partial_result_counts_only_resolved_fields() {
        let result = LabExtraction::from_candidates(None, candidate(190), None);
        assert_eq!(result.fields_found, 1);
        assert!(!result.is_empty());
        assert_eq!(result.message, "Found 1 lab value(s): Total Cholesterol: 190");
    }

    #[test]
    fn empty_result_asks_for_manual_entry() {
        let result = LabExtraction::from_candidates(None, None, None);
        assert!(result.is_empty());
        assert!(result.message.contains("enter them manually"));
    }

    #[test]
    fn backend_failure_messages_name_the_format() {
        assert!(LabExtraction::backend_failure(MediaKind::Image, "image/png")
            .message
            .contains("image"));
        assert!(
            LabExtraction::backend_failure(MediaKind::Pdf, "application/pdf")
                .message
                .contains("PDF")
        );
        assert!(LabExtraction::backend_failure(MediaKind::Word, "application/msword")
            .message
            .contains("Word"));

        let unsupported = LabExtraction::backend_failure(MediaKind::Unsupported, "video/mp4");
        assert!(unsupported.message.contains("Unsupported file type: video/mp4"));
        assert!(unsupported.is_empty());
    }

    #[test]
    fn wire_field_names_use_camel_case() {
        let result = LabExtraction::from_candidates(candidate(130), candidate(205), candidate(55));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["systolicBP"], 130);
        assert_eq!(json["totalCholesterol"], 205);
        assert_eq!(json["hdlCholesterol"], 55);
        assert!(json.get("fields_found").is_none());
    }
}
