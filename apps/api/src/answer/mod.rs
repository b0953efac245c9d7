//! Question answering over an extracted [`Profile`].
//!
//! Intent classification is an ordered rule table: the lowercased question
//! is tested for trigger substrings rule by rule, first match wins. The
//! ordering is load-bearing — "what was my last position" must hit the
//! last-position rule even though it also contains "position", and a
//! question mentioning both experience and skills answers with experience.

pub mod handlers;

use thiserror::Error;

use crate::models::profile::{Profile, WorkPosition};

/// `ask` was called before any CV had been parsed. Recoverable: parse a CV
/// and retry.
#[derive(Debug, Error)]
#[error("No CV data available. Please parse a CV first.")]
pub struct NoProfileError;

/// Owns the single most recently extracted profile. Callers manage the
/// instance's lifetime; there is no global slot.
#[derive(Debug, Default)]
pub struct Answerer {
    profile: Option<Profile>,
}

impl Answerer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any previously held profile.
    pub fn set_profile(&mut self, profile: Profile) {
        self.profile = Some(profile);
    }

    pub fn ask(&self, question: &str) -> Result<String, NoProfileError> {
        let profile = self.profile.as_ref().ok_or(NoProfileError)?;
        Ok(answer(profile, question))
    }
}

struct IntentRule {
    triggers: &'static [&'static str],
    respond: fn(&Profile) -> String,
}

/// Evaluated top to bottom; position rules deliberately outrank skills,
/// education, and contact.
const INTENT_RULES: &[IntentRule] = &[
    IntentRule {
        triggers: &["last position", "last role", "current position"],
        respond: last_position,
    },
    IntentRule {
        triggers: &["experience", "positions"],
        respond: all_positions,
    },
    IntentRule {
        triggers: &["skill", "technology"],
        respond: skills,
    },
    IntentRule {
        triggers: &["education", "degree"],
        respond: education,
    },
    IntentRule {
        triggers: &["contact", "email", "phone"],
        respond: contact,
    },
];

const FALLBACK: &str = "I can answer questions about your work experience, skills, \
     education, and contact information. Please ask a specific question about your CV.";

/// Pure dispatch: classifies `question` and renders the answer from
/// `profile`. Stateless so each rule is testable in isolation.
pub fn answer(profile: &Profile, question: &str) -> String {
    let question = question.to_lowercase();
    INTENT_RULES
        .iter()
        .find(|rule| rule.triggers.iter().any(|t| question.contains(t)))
        .map(|rule| (rule.respond)(profile))
        .unwrap_or_else(|| FALLBACK.to_string())
}

fn last_position(profile: &Profile) -> String {
    match profile.positions.first() {
        Some(position) => format!(
            "Your last position was {} at {}{}.",
            position.title,
            position.company,
            duration_suffix(position)
        ),
        None => "I couldn't find any work positions in your CV.".to_string(),
    }
}

fn all_positions(profile: &Profile) -> String {
    if profile.positions.is_empty() {
        return "I couldn't find any work experience in your CV.".to_string();
    }
    let listing = profile
        .positions
        .iter()
        .map(|p| format!("{} at {}{}", p.title, p.company, duration_suffix(p)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("Your work experience includes: {listing}")
}

fn skills(profile: &Profile) -> String {
    if profile.skills.is_empty() {
        return "I couldn't find any specific skills listed in your CV.".to_string();
    }
    format!("Your skills include: {}", profile.skills.join(", "))
}

fn education(profile: &Profile) -> String {
    if profile.education.is_empty() {
        return "I couldn't find any education information in your CV.".to_string();
    }
    let listing = profile
        .education
        .iter()
        .map(|e| {
            let year = e
                .year
                .as_deref()
                .map(|y| format!(" ({y})"))
                .unwrap_or_default();
            format!("{} from {}{}", e.degree, e.institution, year)
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("Your education includes: {listing}")
}

fn contact(profile: &Profile) -> String {
    let mut fields = Vec::new();
    if let Some(email) = &profile.email {
        fields.push(format!("Email: {email}"));
    }
    if let Some(phone) = &profile.phone {
        fields.push(format!("Phone: {phone}"));
    }
    if fields.is_empty() {
        return "I couldn't find any contact information in your CV.".to_string();
    }
    format!("Your contact information: {}", fields.join(", "))
}

fn duration_suffix(position: &WorkPosition) -> String {
    position
        .duration
        .as_deref()
        .map(|d| format!(" ({d})"))
        .unwrap_or_default()
}
