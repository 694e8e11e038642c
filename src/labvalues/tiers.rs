//! The ordered heuristic cascade that infers lab values from extracted text.
//!
//! Tiers run strictest-first; within a field the first in-range candidate
//! wins and later tiers are skipped. The context-window tier is a last
//! resort that only runs when fewer than two fields were resolved by the
//! line- and pattern-based tiers.

use std::sync::LazyLock;

use regex::Regex;

use super::fields::{Candidate, LabField, Tier};
use super::report::LabExtraction;
use super::scan::{is_range_annotation, ScanText};

// ──────────────────────────────────────────────
// Tier 1: exact line patterns
// ──────────────────────────────────────────────

static EXACT_CHOLESTEROL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^cholesterol\s+(\d{2,3})$").unwrap());

static EXACT_HDL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^hdl\s+cholesterol\s+(\d{1,3})$").unwrap());

/// Inline systolic/diastolic reading, e.g. "120/80" or "BP: 130 / 85".
static BP_SLASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{2,3})\s*/\s*(\d{2,3})\b").unwrap());

fn exact_line(scan: &ScanText, field: LabField) -> Option<u32> {
    scan.lines
        .iter()
        .filter(|line| !is_range_annotation(line))
        .find_map(|line| {
            let caps = match field {
                LabField::TotalCholesterol => EXACT_CHOLESTEROL.captures(line),
                LabField::HdlCholesterol => EXACT_HDL.captures(line),
                LabField::SystolicBp => BP_SLASH.captures(line),
            }?;
            parse_in_range(&caps[1], field)
        })
}

// ──────────────────────────────────────────────
// Tier 2: labeled proximity
// ──────────────────────────────────────────────

static FIRST_INT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(\d{1,4})\b").unwrap());

static BARE_INT_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d{2,3})$").unwrap());

/// Lines we may look ahead past a keyword line for a standalone value.
const LOOKAHEAD_LINES: usize = 3;

fn line_has_keyword(line_lower: &str, field: LabField) -> bool {
    match field {
        LabField::TotalCholesterol => {
            line_lower.contains("cholesterol")
                && !line_lower.contains("hdl")
                && !line_lower.contains("ldl")
        }
        LabField::HdlCholesterol => line_lower.contains("hdl"),
        LabField::SystolicBp => {
            line_lower.contains("systolic") || line_lower.contains("blood pressure")
        }
    }
}

fn labeled_proximity(scan: &ScanText, field: LabField) -> Option<u32> {
    for (i, line) in scan.lines.iter().enumerate() {
        let lower = line.to_lowercase();
        if is_range_annotation(line) || !line_has_keyword(&lower, field) {
            continue;
        }

        // Value on the keyword line itself: take the first integer.
        if let Some(caps) = FIRST_INT.captures(line) {
            if let Some(value) = parse_in_range(&caps[1], field) {
                return Some(value);
            }
            continue;
        }

        // No number on the label line — look ahead for a standalone value
        // whose preceding context still mentions the keyword.
        let upper = (i + 1 + LOOKAHEAD_LINES).min(scan.lines.len());
        for j in (i + 1)..upper {
            let Some(caps) = BARE_INT_LINE.captures(&scan.lines[j]) else {
                continue;
            };
            let context = scan.lines[j.saturating_sub(LOOKAHEAD_LINES)..j]
                .join(" ")
                .to_lowercase();
            if !line_has_keyword(&context, field) {
                continue;
            }
            if let Some(value) = parse_in_range(&caps[1], field) {
                return Some(value);
            }
        }
    }
    None
}

// ──────────────────────────────────────────────
// Tier 3: broad regex patterns
// ──────────────────────────────────────────────

static CHOLESTEROL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)cholesterol[^\d]*?(\d{2,3})",
        r"(?i)total\s+cholesterol[^\d]*?(\d{2,3})",
        r"(?i)\btc[:\s]*(\d{2,3})",
        r"(?i)\bchol[:\s]*(\d{2,3})",
    ])
});

static HDL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)hdl\s+cholesterol[^\d]*?(\d{1,3})",
        r"(?i)hdl[:\s]*(\d{1,3})",
        r"(?i)high\s+density[^\d]*?(\d{1,3})",
    ])
});

static SYSTOLIC_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)systolic[^\d]*?(\d{2,3})",
        r"(?i)\bbp[^\d]*?(\d{2,3})\s*/",
        r"(?i)blood\s+pressure[^\d]*?(\d{2,3})",
        r"(?i)\bsbp[:\s]*(\d{2,3})",
    ])
});

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|p| Regex::new(p).unwrap()).collect()
}

fn pattern_match(scan: &ScanText, field: LabField) -> Option<u32> {
    let patterns: &[Regex] = match field {
        LabField::TotalCholesterol => &CHOLESTEROL_PATTERNS,
        LabField::HdlCholesterol => &HDL_PATTERNS,
        LabField::SystolicBp => &SYSTOLIC_PATTERNS,
    };

    patterns.iter().find_map(|re| {
        re.captures_iter(&scan.normalized)
            .find_map(|caps| parse_in_range(&caps[1], field))
    })
}

// ──────────────────────────────────────────────
// Tier 4: context-window fallback
// ──────────────────────────────────────────────

static STANDALONE_NUM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(\d{2,3})\b").unwrap());

static CTX_CHOLESTEROL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)cholesterol|chol|tc").unwrap());
static CTX_HDL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)hdl|high.density").unwrap());
static CTX_BP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)blood.pressure|bp|systolic|mmhg").unwrap());

/// Characters inspected either side of a number for a field keyword.
const CONTEXT_RADIUS: usize = 50;

fn context_keyword(field: LabField) -> &'static Regex {
    match field {
        LabField::TotalCholesterol => &CTX_CHOLESTEROL,
        LabField::HdlCholesterol => &CTX_HDL,
        LabField::SystolicBp => &CTX_BP,
    }
}

/// Narrower candidate windows than the authoritative gates: a bare number
/// with nothing but a nearby keyword needs to look typical for the field.
fn context_window_gate(field: LabField, value: u32) -> bool {
    let window = match field {
        LabField::TotalCholesterol => 150..=300,
        LabField::HdlCholesterol => 30..=100,
        LabField::SystolicBp => 90..=180,
    };
    window.contains(&value)
}

fn context_window_pass(scan: &ScanText, resolved: &mut FieldCandidates) {
    for caps in STANDALONE_NUM.captures_iter(&scan.normalized) {
        let num_str = &caps[1];
        let Ok(value) = num_str.parse::<u32>() else {
            continue;
        };

        for field in LabField::ALL {
            if resolved.get(field).is_some() {
                continue;
            }
            if !context_window_gate(field, value) || !field.in_range(value) {
                continue;
            }
            // Window around the number's FIRST occurrence in the text.
            let Some(idx) = scan.normalized.find(num_str) else {
                continue;
            };
            let window = char_window(&scan.normalized, idx, num_str.len(), CONTEXT_RADIUS);
            if context_keyword(field).is_match(window) {
                resolved.set(
                    field,
                    Candidate {
                        value,
                        tier: Tier::ContextWindow,
                    },
                );
                break;
            }
        }
    }
}

/// Slice `radius` bytes either side of `[idx, idx+len)`, snapped outward to
/// char boundaries.
fn char_window(text: &str, idx: usize, len: usize, radius: usize) -> &str {
    let mut start = idx.saturating_sub(radius);
    while !text.is_char_boundary(start) {
        start -= 1;
    }
    let mut end = (idx + len + radius).min(text.len());
    while !text.is_char_boundary(end) {
        end += 1;
    }
    &text[start..end]
}

// ──────────────────────────────────────────────
// Cascade driver
// ──────────────────────────────────────────────

type TierFn = fn(&ScanText, LabField) -> Option<u32>;

/// Line- and pattern-based tiers, strictest first. Tier 4 is handled
/// separately because its trigger condition spans fields.
const LINE_TIERS: &[(Tier, TierFn)] = &[
    (Tier::ExactLine, exact_line),
    (Tier::LabeledProximity, labeled_proximity),
    (Tier::Pattern, pattern_match),
];

/// Short-circuiting fold over the tier list: the first tier to yield an
/// in-range value settles the field.
pub fn resolve_field(scan: &ScanText, field: LabField) -> Option<Candidate> {
    LINE_TIERS
        .iter()
        .find_map(|&(tier, matcher)| matcher(scan, field).map(|value| Candidate { value, tier }))
}

/// Candidates per field, at most one each.
#[derive(Debug, Default)]
pub(crate) struct FieldCandidates {
    slots: [Option<Candidate>; 3],
}

impl FieldCandidates {
    fn index(field: LabField) -> usize {
        match field {
            LabField::TotalCholesterol => 0,
            LabField::HdlCholesterol => 1,
            LabField::SystolicBp => 2,
        }
    }

    pub fn get(&self, field: LabField) -> Option<Candidate> {
        self.slots[Self::index(field)]
    }

    /// First accepted candidate wins; a settled field is never overwritten.
    pub fn set(&mut self, field: LabField, candidate: Candidate) {
        let slot = &mut self.slots[Self::index(field)];
        if slot.is_none() {
            *slot = Some(candidate);
        }
    }

    pub fn count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

/// Run the full cascade over extracted text.
pub fn scan_lab_values(text: &str) -> LabExtraction {
    let scan = ScanText::new(text);
    let mut resolved = FieldCandidates::default();

    for field in LabField::ALL {
        if let Some(candidate) = resolve_field(&scan, field) {
            tracing::debug!(
                field = field.label(),
                value = candidate.value,
                tier = ?candidate.tier,
                "lab value resolved"
            );
            resolved.set(field, candidate);
        }
    }

    // Last resort: bare numbers near keywords, only when the stricter
    // tiers left the result mostly empty.
    if resolved.count() < 2 {
        context_window_pass(&scan, &mut resolved);
    }

    LabExtraction::from_candidates(
        resolved.get(LabField::SystolicBp),
        resolved.get(LabField::TotalCholesterol),
        resolved.get(LabField::HdlCholesterol),
    )
}

fn parse_in_range(digits: &str, field: LabField) -> Option<u32> {
    digits.parse::<u32>().ok().filter(|v| field.in_range(*v))
}
