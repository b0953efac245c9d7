//! Work-position extraction: anchor on experience-section keywords, treat
//! all-caps or suffixed lines as companies, and pair each with the nearest
//! preceding title line.

use crate::extract::blocks::{contains_year, scan_blocks, BlockRules};
use crate::models::profile::WorkPosition;

const WORK_ANCHORS: &[&str] = &["experience", "work", "employment", "job", "position", "role"];

const COMPANY_SUFFIXES: &[&str] = &["Inc", "Corp", "LLC", "Ltd"];

const RULES: BlockRules = BlockRules {
    anchors: WORK_ANCHORS,
    window: 10,
    is_candidate: is_company_line,
    back_window: 3,
    back_reject: is_company_line,
    value_window: 3,
    is_value: is_duration_line,
};

pub fn extract_positions(lines: &[String]) -> Vec<WorkPosition> {
    scan_blocks(lines, &RULES)
        .into_iter()
        .map(|block| WorkPosition {
            title: block.label,
            company: block.candidate,
            duration: block.value,
            description: None,
        })
        .collect()
}

/// Company shapes: entirely uppercase letters/spaces/ampersands, or a legal
/// suffix anywhere in the line.
fn is_company_line(line: &str) -> bool {
    is_all_caps(line) || COMPANY_SUFFIXES.iter().any(|s| line.contains(s))
}

/// Mirrors `^[A-Z][A-Z\s&]+$`: an uppercase letter followed by at least one
/// more uppercase letter, whitespace, or `&`.
fn is_all_caps(line: &str) -> bool {
    let mut chars = line.chars();
    let leading_upper = chars.next().is_some_and(|c| c.is_ascii_uppercase());
    let mut rest = 0usize;
    let tail_ok = chars.all(|c| {
        rest += 1;
        c.is_ascii_uppercase() || c.is_whitespace() || c == '&'
    });
    leading_upper && tail_ok && rest > 0
}

fn is_duration_line(line: &str) -> bool {
    contains_year(line) || line.contains("Present") || line.contains("Current")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_lines(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_all_caps_company_with_title_and_duration() {
        let lines = to_lines(&[
            "Work Experience",
            "Senior Engineer",
            "ACME CORP",
            "2019-Present",
        ]);
        let positions = extract_positions(&lines);
        assert_eq!(
            positions[0],
            WorkPosition {
                title: "Senior Engineer".to_string(),
                company: "ACME CORP".to_string(),
                duration: Some("2019-Present".to_string()),
                description: None,
            }
        );
    }

    #[test]
    fn test_company_recognized_by_suffix() {
        let lines = to_lines(&["Employment History", "Backend Developer", "Initech LLC"]);
        let positions = extract_positions(&lines);
        assert_eq!(positions[0].company, "Initech LLC");
        assert_eq!(positions[0].title, "Backend Developer");
        assert_eq!(positions[0].duration, None);
    }

    #[test]
    fn test_company_without_title_is_dropped() {
        // Every line within back-range of ACME CORP is company-shaped, so no
        // title can be paired with it and the candidate is skipped.
        let lines = to_lines(&["Experience", "GLOBEX", "INITECH", "HOOLI", "ACME CORP"]);
        let positions = extract_positions(&lines);
        assert!(!positions.is_empty());
        assert!(positions.iter().all(|p| p.company != "ACME CORP"));
    }

    #[test]
    fn test_anchor_line_itself_can_serve_as_title() {
        let lines = to_lines(&["Experience", "GLOBEX"]);
        let positions = extract_positions(&lines);
        assert_eq!(positions[0].title, "Experience");
        assert_eq!(positions[0].company, "GLOBEX");
    }

    #[test]
    fn test_duration_found_within_three_lines() {
        let lines = to_lines(&[
            "Experience",
            "Engineer",
            "ACME CORP",
            "Built things",
            "Shipped more things",
            "2017 - 2019",
        ]);
        let positions = extract_positions(&lines);
        assert_eq!(positions[0].duration, Some("2017 - 2019".to_string()));
    }

    #[test]
    fn test_duration_recognizes_current() {
        let lines = to_lines(&["Experience", "Engineer", "ACME CORP", "Current"]);
        let positions = extract_positions(&lines);
        assert_eq!(positions[0].duration, Some("Current".to_string()));
    }

    #[test]
    fn test_company_outside_window_ignored() {
        let mut raw = vec!["Experience"];
        let filler: Vec<String> = (0..12).map(|i| format!("line {i}")).collect();
        raw.extend(filler.iter().map(|s| s.as_str()));
        raw.push("ACME CORP");
        let lines = to_lines(&raw);
        assert!(extract_positions(&lines).is_empty());
    }

    #[test]
    fn test_is_all_caps_shapes() {
        assert!(is_all_caps("ACME CORP"));
        assert!(is_all_caps("AT&T LABS"));
        assert!(!is_all_caps("Acme Corp"));
        assert!(!is_all_caps("A")); // needs at least two characters
        assert!(!is_all_caps("ACME 42"));
    }
}
