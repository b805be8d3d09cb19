//! Section renderers. Each is a pure function of `(data, config, ctx)` and
//! renders nothing at all when the data it needs is empty.

pub mod contact;
pub mod education;
pub mod experience;
pub mod header;
pub mod languages;
pub mod photo;
pub mod skills;
pub mod summary;

use maud::{html, Markup};

use crate::models::cv::CvData;
use crate::render::context::{RenderContext, TextRole};
use crate::templates::sections::{Section, SectionSlot};

/// Renders one slot, wrapping it in the slot's `className` when it produced output.
pub fn render_slot(data: &CvData, slot: &SectionSlot, ctx: &RenderContext) -> Markup {
    let body = render_section(data, &slot.section, ctx);
    match &slot.class_name {
        Some(class_name) if !body.0.is_empty() => html! {
            div class=(class_name) { (body) }
        },
        _ => body,
    }
}

pub fn render_section(data: &CvData, section: &Section, ctx: &RenderContext) -> Markup {
    match section {
        Section::Header(config) => header::render(data, config, ctx),
        Section::Photo(config) => photo::render(data, config, ctx),
        Section::Contact(config) => contact::render(data, config, ctx),
        Section::Summary(config) => summary::render(data, config, ctx),
        Section::Experience(config) => experience::render(data, config, ctx),
        Section::Education(config) => education::render(data, config, ctx),
        Section::Skills(config) => skills::render(data, config, ctx),
        Section::Languages(config) => languages::render(data, config, ctx),
    }
}

/// Section heading, optionally ruled underneath in the accent colour.
pub(crate) fn heading(title: &str, border: bool, ctx: &RenderContext) -> Markup {
    let class = if border {
        format!("{} mb-2 pb-1 border-b", ctx.text(TextRole::SectionTitle))
    } else {
        format!("{} mb-2", ctx.text(TextRole::SectionTitle))
    };
    let style = format!("{} border-color: {};", ctx.heading_style(), ctx.accent_color());

    html! {
        h2 class=(class) style=(style) { (title) }
    }
}

/// The configured title override, or the section's default title.
pub(crate) fn title_or<'a>(title: &'a Option<String>, default: &'a str) -> &'a str {
    title.as_deref().filter(|t| !t.is_empty()).unwrap_or(default)
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::templates::sections::{
        ContactConfig, EducationConfig, ExperienceConfig, HeaderConfig, LanguagesConfig,
        PhotoConfig, SkillsConfig, SummaryConfig,
    };

    fn all_sections() -> Vec<Section> {
        vec![
            Section::Header(HeaderConfig::default()),
            Section::Contact(ContactConfig::default()),
            Section::Summary(SummaryConfig::default()),
            Section::Experience(ExperienceConfig::default()),
            Section::Education(EducationConfig::default()),
            Section::Skills(SkillsConfig::default()),
            Section::Languages(LanguagesConfig::default()),
        ]
    }

    #[test]
    fn test_every_data_section_is_empty_for_empty_cv() {
        let styles = styles();
        let ctx = RenderContext::new(&styles, false, None);
        let empty = CvData::default();
        for section in all_sections() {
            let markup = render_section(&empty, &section, &ctx);
            assert!(
                markup.0.is_empty(),
                "{:?} rendered for an empty CV: {}",
                section.kind(),
                markup.0
            );
        }
    }

    #[test]
    fn test_every_data_section_renders_for_full_cv() {
        let styles = styles();
        let ctx = RenderContext::new(&styles, false, None);
        let cv = full_cv();
        for section in all_sections() {
            let markup = render_section(&cv, &section, &ctx);
            let marker = format!("data-section=\"{}\"", section.kind().as_str());
            assert!(markup.0.contains(&marker), "missing {marker}");
        }
    }

    #[test]
    fn test_photo_renders_placeholder_for_empty_cv() {
        let styles = styles();
        let ctx = RenderContext::new(&styles, false, None);
        let markup = render_section(&CvData::default(), &Section::Photo(PhotoConfig::default()), &ctx);
        assert!(markup.0.contains("<svg"));
    }

    #[test]
    fn test_slot_class_only_wraps_non_empty_output() {
        let styles = styles();
        let ctx = RenderContext::new(&styles, false, None);
        let slot = SectionSlot::new(Section::Summary(SummaryConfig::default())).with_class("mt-8");

        let empty = render_slot(&CvData::default(), &slot, &ctx);
        assert!(empty.0.is_empty());

        let full = render_slot(&full_cv(), &slot, &ctx);
        assert!(full.0.starts_with("<div class=\"mt-8\">"));
    }

    #[test]
    fn test_title_or() {
        assert_eq!(title_or(&None, "Skills"), "Skills");
        assert_eq!(title_or(&Some(String::new()), "Skills"), "Skills");
        assert_eq!(title_or(&Some("Tools".to_string()), "Skills"), "Tools");
    }
}
