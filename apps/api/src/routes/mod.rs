pub mod ai;
pub mod health;
pub mod render;
pub mod resumes;
pub mod sections;
pub mod share;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume documents
        .route(
            "/api/v1/resumes",
            post(resumes::handle_create).get(resumes::handle_list),
        )
        .route(
            "/api/v1/resumes/:id",
            get(resumes::handle_get)
                .patch(resumes::handle_update)
                .delete(resumes::handle_delete),
        )
        // Rendering and sharing
        .route("/api/v1/resumes/:id/render", get(render::handle_render))
        .route("/api/v1/resumes/:id/share", get(share::handle_share))
        // Section customization
        .route(
            "/api/v1/resumes/:id/sections/:key/title",
            put(sections::handle_rename_section),
        )
        .route(
            "/api/v1/resumes/:id/sections/:key/visibility",
            post(sections::handle_toggle_visibility),
        )
        .route(
            "/api/v1/resumes/:id/sections/custom",
            post(sections::handle_add_custom),
        )
        .route(
            "/api/v1/resumes/:id/sections/custom/:section_id",
            axum::routing::patch(sections::handle_update_custom)
                .delete(sections::handle_remove_custom),
        )
        // AI assistance
        .route(
            "/api/v1/ai/summary-suggestions",
            post(ai::handle_summary_suggestions),
        )
        .with_state(state)
}
