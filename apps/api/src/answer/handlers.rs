use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub success: bool,
    pub answer: String,
}

/// POST /api/ask-cv-question — answers a free-text question about the most
/// recently parsed CV. 409 if nothing has been parsed yet.
pub async fn handle_ask(
    State(state): State<AppState>,
    Json(req): Json<AskRequest>,
) -> Result<Json<AskResponse>, AppError> {
    if req.question.trim().is_empty() {
        return Err(AppError::Validation("Question is required".to_string()));
    }

    let answerer = state.answerer.read().await;
    let answer = answerer.ask(&req.question)?;
    Ok(Json(AskResponse {
        success: true,
        answer,
    }))
}
