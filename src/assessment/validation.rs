//! Range checks for user-entered values.
//!
//! These bounds gate what a patient may TYPE, and are deliberately not the
//! same as the scanner's plausibility gates: the questionnaire targets the
//! 45-85 screening cohort, and manual HDL entry caps at 100 even though
//! the scanner tolerates readings up to 150.

use std::ops::RangeInclusive;

use super::inputs::AssessmentInputs;

pub const AGE_RANGE: RangeInclusive<u32> = 45..=85;
pub const SYSTOLIC_BP_RANGE: RangeInclusive<u32> = 70..=250;
pub const TOTAL_CHOLESTEROL_RANGE: RangeInclusive<u32> = 100..=500;
pub const HDL_CHOLESTEROL_RANGE: RangeInclusive<u32> = 20..=100;

pub fn validate_age(age: u32) -> Result<(), String> {
    check(age, &AGE_RANGE, "Age must be between 45 and 85")
}

pub fn validate_systolic_bp(value: u32) -> Result<(), String> {
    check(
        value,
        &SYSTOLIC_BP_RANGE,
        "Systolic blood pressure must be between 70 and 250",
    )
}

pub fn validate_total_cholesterol(value: u32) -> Result<(), String> {
    check(
        value,
        &TOTAL_CHOLESTEROL_RANGE,
        "Total cholesterol must be between 100 and 500",
    )
}

pub fn validate_hdl_cholesterol(value: u32) -> Result<(), String> {
    check(
        value,
        &HDL_CHOLESTEROL_RANGE,
        "HDL cholesterol must be between 20 and 100",
    )
}

fn check(value: u32, range: &RangeInclusive<u32>, message: &str) -> Result<(), String> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(message.to_string())
    }
}

/// All problems preventing submission: missing answers and out-of-range
/// values. Empty means the inputs are ready to score.
pub fn validate_inputs(inputs: &AssessmentInputs) -> Vec<String> {
    let mut errors = Vec::new();

    match inputs.age {
        None => errors.push("Age is required".to_string()),
        Some(age) => {
            if let Err(e) = validate_age(age) {
                errors.push(e);
            }
        }
    }

    if inputs.gender.is_none() {
        errors.push("Gender is required".to_string());
    }
    if inputs.race.is_none() {
        errors.push("Race is required".to_string());
    }
    if inputs.smoker.is_none() {
        errors.push("Smoking status is required".to_string());
    }
    if inputs.diabetes.is_none() {
        errors.push("Diabetes status is required".to_string());
    }
    if inputs.family_history.is_none() {
        errors.push("Family history is required".to_string());
    }
    if inputs.high_bp.is_none() {
        errors.push("Blood pressure status is required".to_string());
    }
    if inputs.bp_medication.is_none() {
        errors.push("Blood pressure medication status is required".to_string());
    }
    if inputs.cholesterol_medication.is_none() {
        errors.push("Cholesterol medication status is required".to_string());
    }

    match inputs.systolic_bp {
        None => errors.push("Systolic blood pressure is required".to_string()),
        Some(v) => {
            if let Err(e) = validate_systolic_bp(v) {
                errors.push(e);
            }
        }
    }
    match inputs.total_cholesterol {
        None => errors.push("Total cholesterol is required".to_string()),
        Some(v) => {
            if let Err(e) = validate_total_cholesterol(v) {
                errors.push(e);
            }
        }
    }
    match inputs.hdl_cholesterol {
        None => errors.push("HDL cholesterol is required".to_string()),
        Some(v) => {
            if let Err(e) = validate_hdl_cholesterol(v) {
                errors.push(e);
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::inputs::{Gender, Race};

    fn complete_inputs() -> AssessmentInputs {
        AssessmentInputs {
            age: Some(55),
            gender: Some(Gender::Male),
            race: Some(Race::White),
            smoker: Some(false),
            diabetes: Some(false),
            family_history: Some(true),
            high_bp: Some(false),
            bp_medication: Some(false),
            cholesterol_medication: Some(false),
            systolic_bp: Some(128),
            total_cholesterol: Some(210),
            hdl_cholesterol: Some(48),
        }
    }

    #[test]
    fn complete_inputs_pass() {
        assert!(validate_inputs(&complete_inputs()).is_empty());
    }

    #[test]
    fn age_bounds() {
        assert!(validate_age(45).is_ok());
        assert!(validate_age(85).is_ok());
        assert!(validate_age(44).is_err());
        assert!(validate_age(86).is_err());
    }

    #[test]
    fn hdl_manual_entry_tighter_than_scanner() {
        // 120 is a plausible scanned reading but not accepted as typed input.
        assert!(validate_hdl_cholesterol(100).is_ok());
        assert!(validate_hdl_cholesterol(120).is_err());
    }

    #[test]
    fn out_of_range_value_reported_with_bounds() {
        let mut inputs = complete_inputs();
        inputs.systolic_bp = Some(260);
        let errors = validate_inputs(&inputs);
        assert_eq!(
            errors,
            vec!["Systolic blood pressure must be between 70 and 250"]
        );
    }

    #[test]
    fn missing_fields_each_reported() {
        let errors = validate_inputs(&AssessmentInputs::default());
        assert_eq!(errors.len(), 12);
        assert!(errors.iter().any(|e| e == "Age is required"));
        assert!(errors.iter().any(|e| e == "HDL cholesterol is required"));
    }
}
