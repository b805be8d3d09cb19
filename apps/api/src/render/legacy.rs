//! Hardcoded layouts for templates that predate `dynamicLayout`.
//!
//! Four of them are fixed layout values handed to the composer.
//! `dark-sidebar-timeline` assembles its markup directly.

use maud::{html, Markup};

use crate::models::cv::CvData;
use crate::render::composer::{compose_layout, frame};
use crate::render::context::{RenderContext, Surface};
use crate::render::sections::{contact, education, experience, header, languages, photo, skills, summary};
use crate::templates::config::{Column, DynamicLayout, SingleLayout, TwoColumnLayout};
use crate::templates::sections::{
    ContactConfig, EducationConfig, EntryLayout, ExperienceConfig, HeaderConfig, HeaderLayout,
    LanguagesConfig, ListLayout, PhotoConfig, PhotoSize, Section, SectionSlot, SkillsConfig,
    SummaryConfig,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegacyLayout {
    PhotoSingleColumn,
    CenteredTraditional,
    MinimalCentered,
    SidebarModern,
    DarkSidebarTimeline,
}

impl LegacyLayout {
    /// Unknown or missing keys resolve to `photo-single-column`.
    pub fn from_key(key: Option<&str>) -> Self {
        match key {
            Some("centered-traditional") => LegacyLayout::CenteredTraditional,
            Some("minimal-centered") => LegacyLayout::MinimalCentered,
            Some("sidebar-modern") => LegacyLayout::SidebarModern,
            Some("dark-sidebar-timeline") => LegacyLayout::DarkSidebarTimeline,
            _ => LegacyLayout::PhotoSingleColumn,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            LegacyLayout::PhotoSingleColumn => "photo-single-column",
            LegacyLayout::CenteredTraditional => "centered-traditional",
            LegacyLayout::MinimalCentered => "minimal-centered",
            LegacyLayout::SidebarModern => "sidebar-modern",
            LegacyLayout::DarkSidebarTimeline => "dark-sidebar-timeline",
        }
    }

    pub fn render(&self, data: &CvData, show_watermark: bool, ctx: &RenderContext) -> Markup {
        match self {
            LegacyLayout::PhotoSingleColumn => {
                compose_layout(data, &photo_single_column(), show_watermark, ctx)
            }
            LegacyLayout::CenteredTraditional => {
                compose_layout(data, &centered_traditional(), show_watermark, ctx)
            }
            LegacyLayout::MinimalCentered => {
                compose_layout(data, &minimal_centered(), show_watermark, ctx)
            }
            LegacyLayout::SidebarModern => {
                compose_layout(data, &sidebar_modern(), show_watermark, ctx)
            }
            LegacyLayout::DarkSidebarTimeline => dark_sidebar_timeline(data, show_watermark, ctx),
        }
    }
}

fn slot(section: Section) -> SectionSlot {
    SectionSlot::new(section)
}

fn photo_single_column() -> DynamicLayout {
    DynamicLayout::Single(SingleLayout {
        container_class: Some("p-10 space-y-6".to_string()),
        sections: vec![
            slot(Section::Photo(PhotoConfig {
                size: PhotoSize::Large,
                ..Default::default()
            }))
            .with_class("mb-2"),
            slot(Section::Header(HeaderConfig {
                layout: HeaderLayout::Centered,
                ..Default::default()
            })),
            slot(Section::Summary(SummaryConfig::default())),
            slot(Section::Experience(ExperienceConfig::default())),
            slot(Section::Education(EducationConfig::default())),
            slot(Section::Skills(SkillsConfig::default())),
            slot(Section::Languages(LanguagesConfig::default())),
        ],
    })
}

fn centered_traditional() -> DynamicLayout {
    DynamicLayout::Single(SingleLayout {
        container_class: Some("px-12 py-10 space-y-5".to_string()),
        sections: vec![
            slot(Section::Header(HeaderConfig {
                layout: HeaderLayout::Centered,
                ..Default::default()
            })),
            slot(Section::Summary(SummaryConfig {
                title: Some("Professional Summary".to_string()),
                ..Default::default()
            })),
            slot(Section::Experience(ExperienceConfig {
                title: Some("Work Experience".to_string()),
                ..Default::default()
            })),
            slot(Section::Education(EducationConfig::default())),
            slot(Section::Skills(SkillsConfig {
                layout: ListLayout::Bullets,
                ..Default::default()
            })),
            slot(Section::Languages(LanguagesConfig::default())),
        ],
    })
}

fn minimal_centered() -> DynamicLayout {
    DynamicLayout::Single(SingleLayout {
        container_class: Some("max-w-2xl mx-auto px-10 py-12 space-y-8 text-center".to_string()),
        sections: vec![
            slot(Section::Header(HeaderConfig {
                layout: HeaderLayout::Vertical,
                ..Default::default()
            })),
            slot(Section::Summary(SummaryConfig {
                title: None,
                border: false,
            })),
            slot(Section::Experience(ExperienceConfig {
                border: false,
                ..Default::default()
            })),
            slot(Section::Education(EducationConfig {
                border: false,
                ..Default::default()
            })),
            slot(Section::Skills(SkillsConfig {
                layout: ListLayout::Inline,
                border: false,
                ..Default::default()
            })),
            slot(Section::Languages(LanguagesConfig {
                layout: ListLayout::Inline,
                border: false,
                ..Default::default()
            })),
        ],
    })
}

fn sidebar_modern() -> DynamicLayout {
    DynamicLayout::TwoColumn(TwoColumnLayout {
        sidebar_class: Some("w-1/3 p-6 space-y-6".to_string()),
        content_class: Some("w-2/3 p-8 space-y-6".to_string()),
        sidebar: Column::new(vec![
            slot(Section::Photo(PhotoConfig::default())),
            slot(Section::Contact(ContactConfig {
                show_labels: true,
                ..Default::default()
            })),
            slot(Section::Skills(SkillsConfig::default())),
            slot(Section::Languages(LanguagesConfig::default())),
        ]),
        content: Column::new(vec![
            slot(Section::Header(HeaderConfig {
                show_contact: false,
                ..Default::default()
            })),
            slot(Section::Summary(SummaryConfig::default())),
            slot(Section::Experience(ExperienceConfig {
                layout: EntryLayout::Timeline,
                ..Default::default()
            })),
            slot(Section::Education(EducationConfig::default())),
        ]),
        ..Default::default()
    })
}

/// Dark split header across the top, dark sidebar, timeline entries.
fn dark_sidebar_timeline(data: &CvData, show_watermark: bool, ctx: &RenderContext) -> Markup {
    let sidebar_ctx = ctx.on_surface(Surface::Sidebar);
    let sidebar_style = format!(
        "background-color: {}; color: {};",
        ctx.styles.sidebar_background, ctx.styles.sidebar_text_color
    );
    let timeline_experience = ExperienceConfig {
        layout: EntryLayout::Timeline,
        ..Default::default()
    };
    let timeline_education = EducationConfig {
        layout: EntryLayout::Timeline,
        ..Default::default()
    };
    let small_photo = PhotoConfig {
        size: PhotoSize::Small,
        ..Default::default()
    };
    let header_config = HeaderConfig {
        layout: HeaderLayout::DarkSplit,
        ..Default::default()
    };

    let body = html! {
        div data-layout="two-column-with-header" {
            div data-column="header" {
                (header::render(data, &header_config, ctx))
            }
            div class="flex items-stretch" {
                div data-column="sidebar" class="w-1/3 p-6 space-y-6" style=(sidebar_style) {
                    (photo::render(data, &small_photo, &sidebar_ctx))
                    (contact::render(data, &ContactConfig::default(), &sidebar_ctx))
                    (skills::render(data, &SkillsConfig::default(), &sidebar_ctx))
                    (languages::render(data, &LanguagesConfig::default(), &sidebar_ctx))
                }
                div data-column="content" class="w-2/3 p-8 space-y-6" {
                    (summary::render(data, &SummaryConfig::default(), ctx))
                    (experience::render(data, &timeline_experience, ctx))
                    (education::render(data, &timeline_education, ctx))
                }
            }
        }
    };

    frame(body, show_watermark, ctx)
}
