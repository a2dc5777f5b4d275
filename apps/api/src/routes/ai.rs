use axum::{extract::State, Json};
use serde::Deserialize;

use crate::ai::prompts::{summary_suggestions_prompt, SummarySuggestion};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    pub job_title: String,
}

/// POST /api/v1/ai/summary-suggestions
///
/// Generates one summary suggestion per experience level for the given job
/// title.
pub async fn handle_summary_suggestions(
    State(state): State<AppState>,
    Json(req): Json<SummaryRequest>,
) -> Result<Json<Vec<SummarySuggestion>>, AppError> {
    let job_title = req.job_title.trim();
    if job_title.is_empty() {
        return Err(AppError::Validation("Job title is required".to_string()));
    }

    let prompt = summary_suggestions_prompt(job_title);
    let suggestions: Vec<SummarySuggestion> = state
        .llm
        .call_json(&prompt)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;
    Ok(Json(suggestions))
}
