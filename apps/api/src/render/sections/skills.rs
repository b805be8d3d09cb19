use maud::{html, Markup};

use crate::models::cv::{filled, CvData};
use crate::render::context::{RenderContext, TextRole};
use crate::render::format::split_list;
use crate::render::sections::{heading, title_or};
use crate::templates::sections::{ListLayout, SkillsConfig};

pub fn render(data: &CvData, config: &SkillsConfig, ctx: &RenderContext) -> Markup {
    let mut skills = filled(&data.skills).map(split_list).unwrap_or_default();
    if let Some(max) = config.max_items {
        skills.truncate(max);
    }
    if skills.is_empty() {
        return html! {};
    }

    html! {
        section data-section="skills" {
            (heading(title_or(&config.title, "Skills"), config.border, ctx))
            (list(&skills, config.layout, ctx))
        }
    }
}

/// Shared list rendering for skills and languages.
pub(crate) fn list(items: &[&str], layout: ListLayout, ctx: &RenderContext) -> Markup {
    let body = ctx.text(TextRole::Body);
    let text_style = RenderContext::color_style(ctx.text_color());

    match layout {
        ListLayout::Tags => {
            let tag_style = format!(
                "color: {}; border: 1px solid {};",
                ctx.text_color(),
                ctx.accent_color()
            );
            html! {
                ul class="flex flex-wrap gap-1.5" {
                    @for item in items {
                        li class=(format!("{body} px-2 py-0.5 rounded")) style=(tag_style) { (item) }
                    }
                }
            }
        }
        ListLayout::Bullets => html! {
            ul class=(format!("{body} list-disc pl-5 space-y-0.5")) style=(text_style) {
                @for item in items {
                    li { (item) }
                }
            }
        },
        ListLayout::Inline => {
            let line = items.join(" · ");
            html! {
                p class=(body) style=(text_style) { (line) }
            }
        }
    }
}
