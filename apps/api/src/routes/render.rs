use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::render::{compose, render_html, template_spec, TemplateId};
use crate::state::AppState;
use crate::storage;

#[derive(Deserialize)]
pub struct RenderQuery {
    /// Overrides the document's `selectedTemplate` for this render.
    pub template: Option<String>,
}

/// GET /api/v1/resumes/:id/render
///
/// Projects the persisted document through the requested template. Unknown
/// template keys fall back to the default layout rather than failing.
pub async fn handle_render(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<RenderQuery>,
) -> Result<Html<String>, AppError> {
    let row = storage::fetch_resume(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;

    let doc = row.document();
    let template = TemplateId::from_name(
        params
            .template
            .as_deref()
            .unwrap_or(&doc.selected_template),
    );

    let layout = compose(&doc, &doc.section_settings, template_spec(template));
    Ok(Html(render_html(&layout)))
}
