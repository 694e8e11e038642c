//! Step machine for the assessment questionnaire.
//!
//! One step is active at a time; an answer either advances the flow or is
//! rejected with an error and the step stays put. Document-scan prefill is
//! a side channel: it updates lab fields but never moves the step.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::inputs::{AssessmentInputs, Gender, Race};
use super::validation::{
    validate_age, validate_hdl_cholesterol, validate_inputs, validate_systolic_bp,
    validate_total_cholesterol,
};
use crate::labvalues::LabExtraction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    Intro,
    Consent,
    Age,
    Gender,
    Race,
    Smoker,
    Diabetes,
    FamilyHistory,
    BloodPressure,
    BpMedication,
    CholesterolMedication,
    LabData,
    Review,
    Complete,
    Declined,
}

impl Step {
    /// Terminal steps accept no further answers.
    pub fn is_terminal(self) -> bool {
        matches!(self, Step::Complete | Step::Declined)
    }
}

/// One user response. Must match the active step's expected kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Dismiss the intro screen.
    Acknowledge,
    Consent(bool),
    Age(u32),
    Gender(Gender),
    Race(Race),
    /// Smoker, diabetes, family history, high BP and medication steps.
    YesNo(bool),
    /// Manual lab entry; any field may be left blank for now and caught
    /// at review.
    LabValues {
        systolic_bp: Option<u32>,
        total_cholesterol: Option<u32>,
        hdl_cholesterol: Option<u32>,
    },
    /// Confirm the review screen and finish.
    Submit,
}

#[derive(Error, Debug)]
pub enum FlowError {
    #[error("answer does not fit the current step ({step:?})")]
    WrongAnswerKind { step: Step },
    #[error("questionnaire is finished and accepts no more answers")]
    Finished,
    #[error("invalid input: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

/// The questionnaire: current step plus the inputs gathered so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionnaireFlow {
    step: Step,
    inputs: AssessmentInputs,
}

impl Default for QuestionnaireFlow {
    fn default() -> Self {
        Self::begin()
    }
}

impl QuestionnaireFlow {
    pub fn begin() -> Self {
        Self {
            step: Step::Intro,
            inputs: AssessmentInputs::default(),
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn inputs(&self) -> &AssessmentInputs {
        &self.inputs
    }

    /// Inputs ready for scoring; only available once the flow completed.
    pub fn into_inputs(self) -> Option<AssessmentInputs> {
        (self.step == Step::Complete).then_some(self.inputs)
    }

    /// Prefill lab fields from a scanned document. Works at any step and
    /// never advances the flow.
    pub fn apply_extraction(&mut self, extraction: &LabExtraction) {
        tracing::debug!(
            fields_found = extraction.fields_found,
            step = ?self.step,
            "applying scanned lab values"
        );
        self.inputs.merge_extraction(extraction);
    }

    /// Apply one answer and advance. On error the step is unchanged.
    pub fn answer(&mut self, answer: Answer) -> Result<Step, FlowError> {
        if self.step.is_terminal() {
            return Err(FlowError::Finished);
        }

        let next = match (self.step, answer) {
            (Step::Intro, Answer::Acknowledge) => Step::Consent,

            (Step::Consent, Answer::Consent(true)) => Step::Age,
            (Step::Consent, Answer::Consent(false)) => Step::Declined,

            (Step::Age, Answer::Age(age)) => {
                validate_age(age).map_err(|e| FlowError::Invalid(vec![e]))?;
                self.inputs.age = Some(age);
                Step::Gender
            }

            (Step::Gender, Answer::Gender(gender)) => {
                self.inputs.gender = Some(gender);
                Step::Race
            }

            (Step::Race, Answer::Race(race)) => {
                self.inputs.race = Some(race);
                Step::Smoker
            }

            (Step::Smoker, Answer::YesNo(v)) => {
                self.inputs.smoker = Some(v);
                Step::Diabetes
            }

            (Step::Diabetes, Answer::YesNo(v)) => {
                self.inputs.diabetes = Some(v);
                Step::FamilyHistory
            }

            (Step::FamilyHistory, Answer::YesNo(v)) => {
                self.inputs.family_history = Some(v);
                Step::BloodPressure
            }

            (Step::BloodPressure, Answer::YesNo(high)) => {
                self.inputs.high_bp = Some(high);
                if high {
                    Step::BpMedication
                } else {
                    // No high BP means the medication question is moot.
                    self.inputs.bp_medication = Some(false);
                    Step::CholesterolMedication
                }
            }

            (Step::BpMedication, Answer::YesNo(v)) => {
                self.inputs.bp_medication = Some(v);
                Step::CholesterolMedication
            }

            (Step::CholesterolMedication, Answer::YesNo(v)) => {
                self.inputs.cholesterol_medication = Some(v);
                Step::LabData
            }

            (
                Step::LabData,
                Answer::LabValues {
                    systolic_bp,
                    total_cholesterol,
                    hdl_cholesterol,
                },
            ) => {
                let mut errors = Vec::new();
                if let Some(v) = systolic_bp {
                    if let Err(e) = validate_systolic_bp(v) {
                        errors.push(e);
                    }
                }
                if let Some(v) = total_cholesterol {
                    if let Err(e) = validate_total_cholesterol(v) {
                        errors.push(e);
                    }
                }
                if let Some(v) = hdl_cholesterol {
                    if let Err(e) = validate_hdl_cholesterol(v) {
                        errors.push(e);
                    }
                }
                if !errors.is_empty() {
                    return Err(FlowError::Invalid(errors));
                }

                if systolic_bp.is_some() {
                    self.inputs.systolic_bp = systolic_bp;
                }
                if total_cholesterol.is_some() {
                    self.inputs.total_cholesterol = total_cholesterol;
                }
                if hdl_cholesterol.is_some() {
                    self.inputs.hdl_cholesterol = hdl_cholesterol;
                }
                Step::Review
            }

            (Step::Review, Answer::Submit) => {
                let errors = validate_inputs(&self.inputs);
                if !errors.is_empty() {
                    return Err(FlowError::Invalid(errors));
                }
                Step::Complete
            }

            (step, _) => return Err(FlowError::WrongAnswerKind { step }),
        };

        self.step = next;
        Ok(next)
    }
}
