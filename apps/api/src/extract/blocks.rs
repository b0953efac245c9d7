//! Generic windowed block scan shared by the position and education passes.
//!
//! Both passes have the same shape: find an anchor line by keyword, look
//! ahead a bounded window for a candidate line (company, institution), look
//! back a few lines for its label (title, degree), then look ahead again for
//! a trailing value (duration, year). Only the predicates and window sizes
//! differ, so they are parameters.

use once_cell::sync::Lazy;
use regex::Regex;

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]{4}").unwrap());

/// True if the line contains a 4-digit run (a year token, loosely).
pub fn contains_year(line: &str) -> bool {
    YEAR_RE.is_match(line)
}

/// Per-entity parameters for [`scan_blocks`].
pub struct BlockRules {
    /// Lowercase keywords that mark an anchor line (matched as substrings of
    /// the lowercased line).
    pub anchors: &'static [&'static str],
    /// How far past the anchor to look for candidate lines.
    pub window: usize,
    /// Recognizes a candidate line (company, institution).
    pub is_candidate: fn(&str) -> bool,
    /// How far back from a candidate to look for its label.
    pub back_window: usize,
    /// Lines matching this are skipped during the backward label search.
    pub back_reject: fn(&str) -> bool,
    /// How far past a candidate to look for the trailing value.
    pub value_window: usize,
    /// Recognizes the trailing value line (duration, year).
    pub is_value: fn(&str) -> bool,
}

/// One emitted block: a label/candidate pair plus an optional trailing value.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockMatch {
    pub label: String,
    pub candidate: String,
    pub value: Option<String>,
}

/// Scans `lines` for anchor keywords and emits every labeled candidate found
/// in their windows, in encounter order.
///
/// Candidates without a label in back-window range are skipped. Overlapping
/// windows from nearby anchor lines can re-derive the same block; no
/// de-duplication is performed.
pub fn scan_blocks(lines: &[String], rules: &BlockRules) -> Vec<BlockMatch> {
    let mut blocks = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let lowered = line.to_lowercase();
        if !rules.anchors.iter().any(|kw| lowered.contains(kw)) {
            continue;
        }

        let window_end = (i + rules.window).min(lines.len());
        for j in (i + 1)..window_end {
            if !(rules.is_candidate)(&lines[j]) {
                continue;
            }

            let back_start = j.saturating_sub(rules.back_window);
            let label = lines[back_start..j]
                .iter()
                .rev()
                .find(|l| !(rules.back_reject)(l.as_str()));

            let Some(label) = label else {
                // No usable label near this candidate; skip it.
                continue;
            };

            let value_end = (j + 1 + rules.value_window).min(lines.len());
            let value = lines[(j + 1)..value_end]
                .iter()
                .find(|l| (rules.is_value)(l.as_str()))
                .map(|l| l.trim().to_string());

            blocks.push(BlockMatch {
                label: label.trim().to_string(),
                candidate: lines[j].trim().to_string(),
                value,
            });
        }
    }

    blocks
}
