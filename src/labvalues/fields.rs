use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// The three clinical values the scanner can infer from a lab report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LabField {
    SystolicBp,
    TotalCholesterol,
    HdlCholesterol,
}

impl LabField {
    /// Scan order: cholesterol first, then HDL, then blood pressure.
    pub const ALL: [LabField; 3] = [
        LabField::TotalCholesterol,
        LabField::HdlCholesterol,
        LabField::SystolicBp,
    ];

    /// Clinically plausible bounds. Authoritative: a candidate outside this
    /// range is rejected no matter which tier produced it.
    pub fn plausible_range(self) -> RangeInclusive<u32> {
        match self {
            Self::SystolicBp => 80..=250,
            Self::TotalCholesterol => 100..=500,
            Self::HdlCholesterol => 20..=150,
        }
    }

    pub fn in_range(self, value: u32) -> bool {
        self.plausible_range().contains(&value)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::SystolicBp => "Systolic BP",
            Self::TotalCholesterol => "Total Cholesterol",
            Self::HdlCholesterol => "HDL",
        }
    }
}

/// One rule tier in the ordered cascade. Lower tiers run first and their
/// accepted candidates are never overwritten by later tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    ExactLine,
    LabeledProximity,
    Pattern,
    ContextWindow,
}

/// A candidate value accepted for a field, tagged with its source tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub value: u32,
    pub tier: Tier,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_gates() {
        assert!(LabField::SystolicBp.in_range(80));
        assert!(LabField::SystolicBp.in_range(250));
        assert!(!LabField::SystolicBp.in_range(79));
        assert!(!LabField::SystolicBp.in_range(251));

        assert!(LabField::TotalCholesterol.in_range(100));
        assert!(!LabField::TotalCholesterol.in_range(501));

        assert!(LabField::HdlCholesterol.in_range(150));
        assert!(!LabField::HdlCholesterol.in_range(255));
    }

    #[test]
    fn tier_precedence_ordering() {
        assert!(Tier::ExactLine < Tier::LabeledProximity);
        assert!(Tier::LabeledProximity < Tier::Pattern);
        assert!(Tier::Pattern < Tier::ContextWindow);
    }
}
