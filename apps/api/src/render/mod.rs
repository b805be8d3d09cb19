// Template rendering engine: CV data + template config → HTML markup.
// Pure and synchronous. Same input, same bytes out.

pub mod composer;
pub mod context;
pub mod format;
pub mod handlers;
pub mod legacy;
pub mod sections;

use maud::{html, Markup};
use serde::Deserialize;
use tracing::debug;

use crate::models::cv::{filled, CvData};
use crate::render::composer::compose_layout;
use crate::render::context::RenderContext;
use crate::render::legacy::LegacyLayout;
use crate::templates::config::TemplateConfig;
use crate::templates::registry::TemplateRegistry;

pub const NO_TEMPLATES_MESSAGE: &str = "No templates found in configuration";
pub const MISSING_DATA_MESSAGE: &str = "Template configuration or data missing";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Layer the "unlock" overlay over the document and disable selection.
    pub show_watermark: bool,
    /// Thumbnail typography.
    pub preview: bool,
    /// Extra padding class applied to the document in preview mode.
    pub preview_padding: Option<String>,
}

/// Renders `data` with the template it names, falling back to the registry default.
///
/// Never fails: a missing registry or missing data produce a visible message block.
pub fn render_cv(
    registry: &TemplateRegistry,
    data: Option<&CvData>,
    options: &RenderOptions,
) -> Markup {
    if registry.is_empty() {
        return error_block(NO_TEMPLATES_MESSAGE);
    }

    let Some(data) = data else {
        return error_block(MISSING_DATA_MESSAGE);
    };

    let Some(template) = registry.resolve(filled(&data.template)) else {
        return error_block(MISSING_DATA_MESSAGE);
    };

    render_template(data, template, options)
}

/// Renders with an already-resolved template.
pub fn render_template(data: &CvData, template: &TemplateConfig, options: &RenderOptions) -> Markup {
    let ctx = RenderContext::new(
        &template.styles,
        options.preview,
        options.preview_padding.as_deref(),
    );

    match &template.dynamic_layout {
        Some(layout) => compose_layout(data, layout, options.show_watermark, &ctx),
        None => {
            let legacy = LegacyLayout::from_key(template.layout.as_deref());
            debug!(template = %template.id, layout = legacy.key(), "Rendering legacy layout");
            legacy.render(data, options.show_watermark, &ctx)
        }
    }
}

fn error_block(message: &str) -> Markup {
    html! {
        div data-cv="error" role="alert" class="p-8 text-center text-sm text-red-600" {
            p { (message) }
        }
    }
}
