use maud::{html, Markup};

use crate::models::cv::{filled, CvData, EducationEntry};
use crate::render::context::{RenderContext, TextRole};
use crate::render::format::format_entry_dates;
use crate::render::sections::experience::timeline_marker;
use crate::render::sections::{heading, title_or};
use crate::templates::sections::{EducationConfig, EntryLayout};

pub fn render(data: &CvData, config: &EducationConfig, ctx: &RenderContext) -> Markup {
    let entries = data.visible_education(config.max_items);
    if entries.is_empty() {
        return html! {};
    }

    html! {
        section data-section="education" {
            (heading(title_or(&config.title, "Education"), config.border, ctx))
            div class="space-y-3" {
                @for entry in entries {
                    @match config.layout {
                        EntryLayout::Standard => {
                            article data-entry="education" {
                                (entry_body(entry, config, ctx))
                            }
                        }
                        EntryLayout::Timeline => {
                            article data-entry="education" class="relative pl-5 border-l-2"
                                style=(format!("border-color: {};", ctx.accent_color())) {
                                (timeline_marker(ctx))
                                (entry_body(entry, config, ctx))
                            }
                        }
                    }
                }
            }
        }
    }
}

fn entry_body(entry: &EducationEntry, config: &EducationConfig, ctx: &RenderContext) -> Markup {
    let dates = format_entry_dates(&entry.start_date, &entry.end_date);
    let university = filled(&entry.university);
    let location = filled(&entry.location).filter(|_| config.show_location);
    let subtitle = [university, location]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ");

    html! {
        div class="flex justify-between items-baseline gap-4" {
            div {
                @if let Some(degree) = filled(&entry.degree) {
                    h3 class=(ctx.text(TextRole::EntryTitle)) style=(RenderContext::color_style(ctx.text_color())) {
                        (degree)
                    }
                }
                @if !subtitle.is_empty() {
                    p class=(ctx.text(TextRole::Body)) style=(RenderContext::color_style(ctx.accent_color())) {
                        (subtitle)
                    }
                }
            }
            @if !dates.is_empty() {
                span class=(format!("{} whitespace-nowrap", ctx.text(TextRole::Meta)))
                    style=(RenderContext::color_style(ctx.muted_color())) {
                    (dates)
                }
            }
        }
    }
}
