//! Axum route handlers for the Dialogue API.
//!
//! Upstream failures never surface as HTTP errors: every handler answers 200
//! with a reply envelope. Only a malformed request body is rejected.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::dialogue::models::{ApplicationContext, ConversationEntry, TurnOutcome};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinueDialogueRequest {
    pub user_choice: String,
    #[serde(default)]
    pub conversation_history: Vec<ConversationEntry>,
    #[serde(default)]
    pub context: ApplicationContext,
    #[serde(default)]
    pub is_final: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartDialogueResponse {
    pub success: bool,
    pub message: String,
    pub choices: Vec<String>,
    pub context: ApplicationContext,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinueDialogueResponse {
    pub success: bool,
    pub message: String,
    pub choices: Vec<String>,
    pub is_final: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StartDialogueResponse {
    fn new(outcome: TurnOutcome, context: ApplicationContext) -> Self {
        Self {
            success: outcome.is_success(),
            message: outcome.reply.message,
            choices: outcome.reply.choices,
            context,
            error: outcome.error,
        }
    }
}

impl From<TurnOutcome> for ContinueDialogueResponse {
    fn from(outcome: TurnOutcome) -> Self {
        Self {
            success: outcome.is_success(),
            message: outcome.reply.message,
            choices: outcome.reply.choices,
            is_final: outcome.reply.is_final,
            error: outcome.error,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/generate-dialogue
///
/// Opening message plus 2–3 reply choices for a just-submitted application.
/// Also mounted at the legacy POST /api/generate-message.
pub async fn handle_generate_dialogue(
    State(state): State<AppState>,
    payload: Result<Json<ApplicationContext>, JsonRejection>,
) -> Result<Json<StartDialogueResponse>, AppError> {
    let Json(context) = payload?;

    let outcome = state.dialogue.start_dialogue(&context).await;

    Ok(Json(StartDialogueResponse::new(outcome, context)))
}

/// POST /api/continue-dialogue
///
/// Next line of the conversation given the user's pick and the full history.
/// With `isFinal`, returns a closing line and no choices.
pub async fn handle_continue_dialogue(
    State(state): State<AppState>,
    payload: Result<Json<ContinueDialogueRequest>, JsonRejection>,
) -> Result<Json<ContinueDialogueResponse>, AppError> {
    let Json(request) = payload?;

    if request.user_choice.trim().is_empty() {
        return Err(AppError::Validation(
            "userChoice cannot be empty".to_string(),
        ));
    }

    let outcome = state
        .dialogue
        .continue_dialogue(
            &request.user_choice,
            &request.conversation_history,
            &request.context,
            request.is_final,
        )
        .await;

    Ok(Json(outcome.into()))
}
