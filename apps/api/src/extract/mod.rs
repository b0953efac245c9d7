//! CV extraction engine.
//!
//! `extract` is a total function over any string: every pass degrades to an
//! unset field or empty sequence instead of failing, because résumé
//! formatting is unreliable and partial results beat hard errors.

pub mod blocks;
pub mod contact;
pub mod education;
pub mod handlers;
pub mod positions;
pub mod skills;

use crate::models::profile::Profile;

/// Turns raw résumé text into a structured [`Profile`].
///
/// Structural passes (name, positions, education) work over trimmed
/// non-empty lines; email, phone, and skills scan the raw string whole.
pub fn extract(raw_text: &str) -> Profile {
    let lines = normalize_lines(raw_text);

    Profile {
        name: contact::extract_name(&lines),
        email: contact::extract_email(raw_text),
        phone: contact::extract_phone(raw_text),
        positions: positions::extract_positions(&lines),
        skills: skills::extract_skills(raw_text),
        education: education::extract_education(&lines),
        raw_text: raw_text.to_string(),
    }
}

fn normalize_lines(raw_text: &str) -> Vec<String> {
    raw_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
