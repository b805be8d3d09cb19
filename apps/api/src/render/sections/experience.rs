use maud::{html, Markup};

use crate::models::cv::{filled, CvData, ExperienceEntry};
use crate::render::context::{RenderContext, TextRole};
use crate::render::format::format_entry_dates;
use crate::render::sections::{heading, title_or};
use crate::templates::sections::{EntryLayout, ExperienceConfig};

pub fn render(data: &CvData, config: &ExperienceConfig, ctx: &RenderContext) -> Markup {
    let entries = data.visible_experiences(config.max_items);
    if entries.is_empty() {
        return html! {};
    }

    html! {
        section data-section="experience" {
            (heading(title_or(&config.title, "Experience"), config.border, ctx))
            div class="space-y-4" {
                @for entry in entries {
                    @match config.layout {
                        EntryLayout::Standard => {
                            article data-entry="experience" {
                                (entry_body(entry, config, ctx))
                            }
                        }
                        EntryLayout::Timeline => {
                            article data-entry="experience" class="relative pl-5 border-l-2"
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

/// Dot sitting on the timeline's left rule.
pub(crate) fn timeline_marker(ctx: &RenderContext) -> Markup {
    html! {
        span class="absolute -left-[7px] top-1 w-3 h-3 rounded-full" aria-hidden="true"
            style=(format!("background-color: {};", ctx.accent_color())) {}
    }
}

fn entry_body(entry: &ExperienceEntry, config: &ExperienceConfig, ctx: &RenderContext) -> Markup {
    let dates = format_entry_dates(&entry.start_date, &entry.end_date);
    // With no job title the company is what makes the entry visible, so it stays.
    let company = filled(&entry.company)
        .filter(|_| config.show_company || filled(&entry.job_title).is_none());
    let location = filled(&entry.location).filter(|_| config.show_location);
    let subtitle = match (company, location) {
        (Some(company), Some(location)) => format!("{company}, {location}"),
        (Some(company), None) => company.to_string(),
        (None, Some(location)) => location.to_string(),
        (None, None) => String::new(),
    };
    let achievements = entry.achievement_lines();

    html! {
        div class="flex justify-between items-baseline gap-4" {
            div {
                @if let Some(title) = filled(&entry.job_title) {
                    h3 class=(ctx.text(TextRole::EntryTitle)) style=(RenderContext::color_style(ctx.text_color())) {
                        (title)
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
        @if !achievements.is_empty() {
            ul class=(format!("{} list-disc pl-5 mt-1 space-y-0.5", ctx.text(TextRole::Body)))
                style=(RenderContext::color_style(ctx.text_color())) {
                @for line in &achievements {
                    li { (line) }
                }
            }
        }
    }
}
