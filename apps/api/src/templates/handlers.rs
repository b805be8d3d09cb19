//! Axum route handlers for the template gallery.

use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::sample::sample_cv;
use crate::render::{render_template, RenderOptions};
use crate::state::AppState;
use crate::templates::TemplateConfig;

#[derive(Debug, Default, Deserialize)]
pub struct ListTemplatesQuery {
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TemplateSummary {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub tags: Vec<String>,
    pub popular: bool,
    pub thumbnail_color: Option<String>,
    /// Layout kind, e.g. `"two-column"` or a legacy key.
    pub layout: String,
}

impl From<&TemplateConfig> for TemplateSummary {
    fn from(template: &TemplateConfig) -> Self {
        Self {
            id: template.id.clone(),
            name: template.name.clone(),
            category: template.category.clone(),
            description: template.description.clone(),
            tags: template.tags.clone(),
            popular: template.popular,
            thumbnail_color: template.thumbnail_color.clone(),
            layout: template.layout_kind().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListTemplatesResponse {
    pub templates: Vec<TemplateSummary>,
    pub categories: Vec<String>,
    pub default_template: String,
}

/// GET /api/v1/templates
///
/// Registry order is preserved. `?category=` narrows the list.
pub async fn handle_list_templates(
    State(state): State<AppState>,
    Query(query): Query<ListTemplatesQuery>,
) -> Json<ListTemplatesResponse> {
    let category = query.category.as_deref().filter(|c| !c.is_empty());
    let templates = state
        .registry
        .iter()
        .filter(|t| category.map_or(true, |c| t.category == c))
        .map(TemplateSummary::from)
        .collect();

    Json(ListTemplatesResponse {
        templates,
        categories: state.registry.categories().into_iter().map(String::from).collect(),
        default_template: state.registry.default_id().to_string(),
    })
}

/// GET /api/v1/templates/:id
pub async fn handle_get_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TemplateSummary>, AppError> {
    let template = state
        .registry
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("Template '{id}' not found")))?;
    Ok(Json(TemplateSummary::from(template)))
}

/// GET /api/v1/templates/:id/preview
///
/// Gallery thumbnail: the sample CV in compact preview sizing, never watermarked.
pub async fn handle_template_preview(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let template = state
        .registry
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("Template '{id}' not found")))?;

    let options = RenderOptions {
        preview: true,
        ..RenderOptions::default()
    };
    let markup = render_template(&sample_cv(), template, &options);
    Ok(Html(markup.into_string()))
}
