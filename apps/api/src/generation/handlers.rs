//! Axum route handlers for the Contacts API.

use axum::{extract::State, http::header, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::export::{to_csv, EXPORT_FILENAME};
use crate::generation::generator::generate_contacts;
use crate::models::contact::ContactRecord;
use crate::optimizer::{optimize, ExtractedIntent};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct OptimizeRequest {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct OptimizeResponse {
    pub extracted: ExtractedIntent,
    pub instruction: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContactsRequest {
    pub prompt: String,
    pub api_key: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateContactsResponse {
    pub instruction: String,
    pub contacts: Vec<ContactRecord>,
}

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub contacts: Vec<ContactRecord>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/contacts/optimize
///
/// Previews the structured instruction for a raw request without calling the
/// model. The extracted intent is returned so the caller can see what the
/// rewriter recognized.
pub async fn handle_optimize(
    Json(request): Json<OptimizeRequest>,
) -> Result<Json<OptimizeResponse>, AppError> {
    if request.prompt.trim().is_empty() {
        return Err(AppError::Validation("prompt cannot be empty".to_string()));
    }

    let optimized = optimize(&request.prompt);

    Ok(Json(OptimizeResponse {
        extracted: optimized.extracted,
        instruction: optimized.instruction,
    }))
}

/// POST /api/v1/contacts/generate
///
/// Full pipeline: optimize the request, call the model once, filter the reply
/// through the deny-list policy. An empty `contacts` array is a valid
/// outcome, not an error.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateContactsRequest>,
) -> Result<Json<GenerateContactsResponse>, AppError> {
    if request.prompt.trim().is_empty() {
        return Err(AppError::Validation("prompt cannot be empty".to_string()));
    }

    // The operation is not attempted without a credential; the caller is
    // expected to prompt for one and resubmit.
    let api_key = request.api_key.as_deref().map(str::trim).unwrap_or_default();
    if api_key.is_empty() {
        return Err(AppError::MissingApiKey);
    }

    let optimized = optimize(&request.prompt);

    let contacts = generate_contacts(
        state.backend.as_ref(),
        api_key,
        &optimized.instruction,
        &state.policy,
    )
    .await?;

    Ok(Json(GenerateContactsResponse {
        instruction: optimized.instruction,
        contacts,
    }))
}

/// POST /api/v1/contacts/export
///
/// Renders the supplied records as the fixed six-column CSV attachment.
pub async fn handle_export(
    Json(request): Json<ExportRequest>,
) -> Result<impl IntoResponse, AppError> {
    if request.contacts.is_empty() {
        return Err(AppError::Validation("no contacts to export".to_string()));
    }

    let csv = to_csv(&request.contacts);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILENAME}\""),
            ),
        ],
        csv,
    ))
}
