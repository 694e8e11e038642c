//! The guided questionnaire that collects risk-assessment inputs.

pub mod flow;
pub mod inputs;
pub mod validation;

pub use flow::{Answer, FlowError, QuestionnaireFlow, Step};
pub use inputs::{AssessmentInputs, Gender, Race};
pub use validation::validate_inputs;
