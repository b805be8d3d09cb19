//! Axum route handlers for the Export API.

use axum::{extract::State, response::Html, Json};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::export::print::render_print_document;
use crate::export::text::render_text;
use crate::models::cv::CvData;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    #[serde(default)]
    pub cv: Option<CvData>,
}

impl ExportRequest {
    fn into_cv(self) -> Result<CvData, AppError> {
        self.cv.ok_or_else(|| {
            warn!("Export request without CV data");
            AppError::Validation("cv is required".to_string())
        })
    }
}

/// POST /api/v1/export/text
pub async fn handle_export_text(Json(request): Json<ExportRequest>) -> Result<String, AppError> {
    let cv = request.into_cv()?;
    Ok(render_text(&cv))
}

/// POST /api/v1/export/print
///
/// Full HTML document for print or PDF conversion. Never watermarked:
/// callers only reach this after payment.
pub async fn handle_export_print(
    State(state): State<AppState>,
    Json(request): Json<ExportRequest>,
) -> Result<Html<String>, AppError> {
    let cv = request.into_cv()?;
    debug!(template = ?cv.template, "Print export");

    let document = render_print_document(
        &state.registry,
        &cv,
        state.config.print_stylesheet_url.as_deref(),
    );
    Ok(Html(document.into_string()))
}
