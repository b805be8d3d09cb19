//! Axum route handlers for the Render API.

use axum::{extract::State, response::Html, Json};
use serde::Deserialize;
use tracing::debug;

use crate::models::cv::CvData;
use crate::render::{render_cv, RenderOptions};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    #[serde(default)]
    pub cv: Option<CvData>,
    #[serde(flatten)]
    pub options: RenderOptions,
}

/// POST /api/v1/render
///
/// Renders the CV with its selected template. Used by the live preview
/// (`show_watermark` on before payment, off after) and by thumbnails (`preview`).
pub async fn handle_render(
    State(state): State<AppState>,
    Json(request): Json<RenderRequest>,
) -> Html<String> {
    debug!(
        template = ?request.cv.as_ref().and_then(|cv| cv.template.as_deref()),
        watermark = request.options.show_watermark,
        preview = request.options.preview,
        "Render request"
    );

    let markup = render_cv(&state.registry, request.cv.as_ref(), &request.options);
    Html(markup.into_string())
}
