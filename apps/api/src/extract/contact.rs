//! Name, email, and phone extraction.
//!
//! Email and phone scan the whole raw document; the name heuristic only
//! looks at the top few normalized lines, where CVs conventionally put it.

use once_cell::sync::Lazy;
use regex::Regex;

/// "Capitalized word, space, capitalized word" at the start of a line.
static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z][a-z]+ [A-Z][a-z]+").unwrap());

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());

/// Loose NANP shape: optional +1/1 prefix, optional parenthesized area code,
/// exchange and subscriber groups with `-`, `.`, space, or no separator.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\+?1[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.]?\d{4}").unwrap());

const NAME_SCAN_LINES: usize = 5;

/// Best-effort name guess from the first few lines. Lines containing `@`
/// are skipped so an email on line one is never mistaken for a name.
pub fn extract_name(lines: &[String]) -> Option<String> {
    lines
        .iter()
        .take(NAME_SCAN_LINES)
        .find(|line| NAME_RE.is_match(line.as_str()) && !line.contains('@'))
        .cloned()
}

pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_RE.find(text).map(|m| m.as_str().to_string())
}
