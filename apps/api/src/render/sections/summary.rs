use maud::{html, Markup};

use crate::models::cv::{filled, CvData};
use crate::render::context::{RenderContext, TextRole};
use crate::render::sections::{heading, title_or};
use crate::templates::sections::SummaryConfig;

pub fn render(data: &CvData, config: &SummaryConfig, ctx: &RenderContext) -> Markup {
    let Some(summary) = filled(&data.summary) else {
        return html! {};
    };

    html! {
        section data-section="summary" {
            (heading(title_or(&config.title, "Summary"), config.border, ctx))
            p class=(format!("{} leading-relaxed whitespace-pre-line", ctx.text(TextRole::Body)))
                style=(RenderContext::color_style(ctx.text_color())) {
                (summary)
            }
        }
    }
}
