//! Education extraction: same windowed scan as positions, tuned to
//! institution-suffixed lines with a preceding degree line.

use crate::extract::blocks::{contains_year, scan_blocks, BlockRules};
use crate::models::profile::EducationEntry;

const EDUCATION_ANCHORS: &[&str] = &[
    "education",
    "degree",
    "university",
    "college",
    "bachelor",
    "master",
    "phd",
];

const INSTITUTION_MARKERS: &[&str] = &["University", "College", "Institute", "School"];

const RULES: BlockRules = BlockRules {
    anchors: EDUCATION_ANCHORS,
    window: 5,
    is_candidate: is_institution_line,
    back_window: 2,
    back_reject: is_degree_reject,
    value_window: 3,
    is_value: contains_year,
};

pub fn extract_education(lines: &[String]) -> Vec<EducationEntry> {
    scan_blocks(lines, &RULES)
        .into_iter()
        .map(|block| EducationEntry {
            degree: block.label,
            institution: block.candidate,
            year: block.value,
        })
        .collect()
}

fn is_institution_line(line: &str) -> bool {
    INSTITUTION_MARKERS.iter().any(|m| line.contains(m))
}

/// The degree search walks past other institution-ish lines.
fn is_degree_reject(line: &str) -> bool {
    line.contains("University") || line.contains("College")
}
