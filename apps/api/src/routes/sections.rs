//! HTTP surface for the Section Settings Store.
//!
//! Each handler hydrates a store from the current document, applies exactly
//! one store operation, and answers with the updated settings. A rejected
//! save is surfaced as `saved: false` plus a warning — the mutation result
//! still reflects the applied edit (optimistic updates, never rolled back).

use std::str::FromStr;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::sections::{
    ColumnChoice, CustomSectionPatch, SectionKey, SectionSettings, SectionSettingsStore,
    SyncOutcome,
};
use crate::state::AppState;
use crate::storage;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsResponse {
    pub section_settings: SectionSettings,
    pub saved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl SettingsResponse {
    fn new(settings: SectionSettings, outcome: SyncOutcome) -> Self {
        let saved = outcome.saved();
        Self {
            section_settings: settings,
            saved,
            warning: (!saved)
                .then(|| "Your changes are visible but could not be saved".to_string()),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCustomResponse {
    pub id: String,
    #[serde(flatten)]
    pub settings: SettingsResponse,
}

#[derive(Deserialize)]
pub struct RenameRequest {
    pub title: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCustomRequest {
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub sidebar: bool,
    #[serde(default)]
    pub column: ColumnChoice,
}

async fn hydrate_store(state: &AppState, id: Uuid) -> Result<SectionSettingsStore, AppError> {
    let row = storage::fetch_resume(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;
    Ok(SectionSettingsStore::hydrate(
        id,
        Some(row.document().section_settings),
        state.persistence.clone(),
    ))
}

fn parse_section_key(key: &str) -> Result<SectionKey, AppError> {
    SectionKey::from_str(key)
        .map_err(|_| AppError::Validation(format!("Unknown section key '{key}'")))
}

/// PUT /api/v1/resumes/:id/sections/:key/title
pub async fn handle_rename_section(
    State(state): State<AppState>,
    Path((id, key)): Path<(Uuid, String)>,
    Json(req): Json<RenameRequest>,
) -> Result<Json<SettingsResponse>, AppError> {
    let key = parse_section_key(&key)?;
    let mut store = hydrate_store(&state, id).await?;
    let outcome = store.update_title(key, &req.title).await;
    Ok(Json(SettingsResponse::new(store.into_settings(), outcome)))
}

/// POST /api/v1/resumes/:id/sections/:key/visibility
pub async fn handle_toggle_visibility(
    State(state): State<AppState>,
    Path((id, key)): Path<(Uuid, String)>,
) -> Result<Json<SettingsResponse>, AppError> {
    let key = parse_section_key(&key)?;
    let mut store = hydrate_store(&state, id).await?;
    let outcome = store.toggle_visibility(key).await;
    Ok(Json(SettingsResponse::new(store.into_settings(), outcome)))
}

/// POST /api/v1/resumes/:id/sections/custom
pub async fn handle_add_custom(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<AddCustomRequest>,
) -> Result<(StatusCode, Json<AddCustomResponse>), AppError> {
    let title = req.title.trim();
    if title.is_empty() {
        return Err(AppError::Validation(
            "Custom section title is required".to_string(),
        ));
    }

    let mut store = hydrate_store(&state, id).await?;
    let (section_id, outcome) = store
        .add_custom_section(title, &req.content, req.sidebar, req.column)
        .await;
    Ok((
        StatusCode::CREATED,
        Json(AddCustomResponse {
            id: section_id,
            settings: SettingsResponse::new(store.into_settings(), outcome),
        }),
    ))
}

/// PATCH /api/v1/resumes/:id/sections/custom/:section_id
///
/// Unknown section ids are a core-level no-op; the handler reports them as
/// 404 so callers can distinguish a stale id from a successful merge.
pub async fn handle_update_custom(
    State(state): State<AppState>,
    Path((id, section_id)): Path<(Uuid, String)>,
    Json(patch): Json<CustomSectionPatch>,
) -> Result<Json<SettingsResponse>, AppError> {
    let mut store = hydrate_store(&state, id).await?;
    if store.custom(&section_id).is_none() {
        return Err(AppError::NotFound(format!(
            "Custom section {section_id} not found"
        )));
    }
    let outcome = store.update_custom_section(&section_id, patch).await;
    Ok(Json(SettingsResponse::new(store.into_settings(), outcome)))
}

/// DELETE /api/v1/resumes/:id/sections/custom/:section_id
pub async fn handle_remove_custom(
    State(state): State<AppState>,
    Path((id, section_id)): Path<(Uuid, String)>,
) -> Result<Json<SettingsResponse>, AppError> {
    let mut store = hydrate_store(&state, id).await?;
    let outcome = store.remove_custom_section(&section_id).await;
    Ok(Json(SettingsResponse::new(store.into_settings(), outcome)))
}
