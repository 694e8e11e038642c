use std::sync::LazyLock;

use regex::Regex;

static RANGE_SPAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+\s*-\s*\d+").unwrap());

/// Pre-split view of extracted text, built once per scan.
pub struct ScanText {
    /// Trimmed, non-empty lines in document order.
    pub lines: Vec<String>,
    /// Full text with all whitespace runs collapsed to single spaces.
    pub normalized: String,
}

impl ScanText {
    pub fn new(text: &str) -> Self {
        let lines = text
            .split(['\r', '\n'])
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect();

        let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");

        Self { lines, normalized }
    }
}

/// A reference-range annotation like "Normal range 100 - 199" is a lab's
/// printed guidance, not the patient's value. Line tiers skip these.
pub fn is_range_annotation(line: &str) -> bool {
    let lower = line.to_lowercase();
    lower.contains("normal range")
        || lower.contains("reference range")
        || lower.contains("normal value")
        || RANGE_SPAN.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims_lines() {
        let scan = ScanText::new("  Cholesterol 177 \r\n\n HDL 55\n");
        assert_eq!(scan.lines, vec!["Cholesterol 177", "HDL 55"]);
    }

    #[test]
    fn normalizes_whitespace() {
        let scan = ScanText::new("Cholesterol\t 177\n\nHDL  55");
        assert_eq!(scan.normalized, "Cholesterol 177 HDL 55");
    }

    #[test]
    fn detects_range_annotations() {
        assert!(is_range_annotation("Normal Range: see below"));
        assert!(is_range_annotation("reference range for adults"));
        assert!(is_range_annotation("100 - 199 mg/dL"));
        assert!(is_range_annotation("100-199"));
        assert!(!is_range_annotation("Cholesterol 177"));
        assert!(!is_range_annotation("BP 120/80"));
    }
}
