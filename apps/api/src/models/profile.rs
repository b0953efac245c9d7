use serde::{Deserialize, Serialize};

/// Structured result of one CV extraction run.
///
/// Field names are a wire contract with existing callers (the original
/// frontend consumes `data` from `/api/parse-cv` directly), so they stay
/// exactly as-is, including the camelCase `rawText`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub positions: Vec<WorkPosition>,
    pub skills: Vec<String>,
    pub education: Vec<EducationEntry>,
    /// Full original document, retained for traceability.
    #[serde(rename = "rawText")]
    pub raw_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkPosition {
    pub title: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Never populated by extraction; kept for wire compatibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}
