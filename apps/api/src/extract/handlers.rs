use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::decode::decode_document;
use crate::errors::AppError;
use crate::extract::extract;
use crate::models::profile::Profile;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ParseTextRequest {
    pub raw_text: String,
}

#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub success: bool,
    pub message: String,
    pub data: Profile,
}

/// POST /api/parse-cv — multipart upload, field `cv`, PDF or TXT.
pub async fn handle_parse_cv(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParseResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart request: {e}")))?
    {
        if field.name() != Some("cv") {
            continue;
        }

        let filename = field
            .file_name()
            .ok_or_else(|| AppError::Validation("Uploaded file has no filename".to_string()))?
            .to_string();
        let data: Bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

        let raw_text = decode_document(&filename, &data)?;
        return Ok(parse_and_store(&state, &raw_text).await);
    }

    Err(AppError::Validation("No file uploaded".to_string()))
}

/// POST /api/parse-text — JSON body for callers that already hold raw text
/// (e.g. a tool-call layer that did its own decoding).
pub async fn handle_parse_text(
    State(state): State<AppState>,
    Json(req): Json<ParseTextRequest>,
) -> Result<Json<ParseResponse>, AppError> {
    Ok(parse_and_store(&state, &req.raw_text).await)
}

async fn parse_and_store(state: &AppState, raw_text: &str) -> Json<ParseResponse> {
    let profile = extract(raw_text);
    let message = format!(
        "CV parsed successfully. Found {} positions and {} skills.",
        profile.positions.len(),
        profile.skills.len()
    );
    info!(
        positions = profile.positions.len(),
        skills = profile.skills.len(),
        education = profile.education.len(),
        "parsed CV"
    );

    state.answerer.write().await.set_profile(profile.clone());

    Json(ParseResponse {
        success: true,
        message,
        data: profile,
    })
}
