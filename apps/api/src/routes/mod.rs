pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::export::handlers as export;
use crate::render::handlers as render;
use crate::state::AppState;
use crate::templates::handlers as templates;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Template gallery
        .route("/api/v1/templates", get(templates::handle_list_templates))
        .route("/api/v1/templates/:id", get(templates::handle_get_template))
        .route(
            "/api/v1/templates/:id/preview",
            get(templates::handle_template_preview),
        )
        // Live preview
        .route("/api/v1/render", post(render::handle_render))
        // Exports
        .route("/api/v1/export/text", post(export::handle_export_text))
        .route("/api/v1/export/print", post(export::handle_export_print))
        .with_state(state)
}
