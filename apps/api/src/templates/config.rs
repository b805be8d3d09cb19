use serde::{Deserialize, Serialize};

use crate::templates::sections::SectionSlot;

/// One entry of the template registry. Never mutated after load.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateConfig {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub popular: bool,
    pub thumbnail_color: Option<String>,
    #[serde(default)]
    pub styles: TemplateStyles,
    /// Config-driven composition. Takes precedence over `layout`.
    pub dynamic_layout: Option<DynamicLayout>,
    /// Legacy layout key, used only when `dynamic_layout` is absent.
    pub layout: Option<String>,
}

impl TemplateConfig {
    /// Human-readable layout kind, for listings.
    pub fn layout_kind(&self) -> &str {
        match (&self.dynamic_layout, &self.layout) {
            (Some(dynamic), _) => dynamic.kind(),
            (None, Some(key)) => key.as_str(),
            (None, None) => "legacy",
        }
    }
}

/// Colours and fonts threaded into every section renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TemplateStyles {
    pub primary_color: String,
    pub accent_color: String,
    pub text_color: String,
    pub muted_color: String,
    pub background_color: String,
    pub header_background: String,
    pub header_text_color: String,
    pub sidebar_background: String,
    pub sidebar_text_color: String,
    pub font_family: String,
    pub heading_font: Option<String>,
}

impl Default for TemplateStyles {
    fn default() -> Self {
        Self {
            primary_color: "#111827".to_string(),
            accent_color: "#2563eb".to_string(),
            text_color: "#1f2937".to_string(),
            muted_color: "#6b7280".to_string(),
            background_color: "#ffffff".to_string(),
            header_background: "#1f2937".to_string(),
            header_text_color: "#ffffff".to_string(),
            sidebar_background: "#f3f4f6".to_string(),
            sidebar_text_color: "#1f2937".to_string(),
            font_family: "Inter, Helvetica, Arial, sans-serif".to_string(),
            heading_font: None,
        }
    }
}

impl TemplateStyles {
    pub fn heading_font(&self) -> &str {
        self.heading_font.as_deref().unwrap_or(&self.font_family)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Layouts
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "layout", rename_all = "kebab-case")]
pub enum DynamicLayout {
    Single(SingleLayout),
    TwoColumn(TwoColumnLayout),
    TwoColumnWithHeader(TwoColumnWithHeaderLayout),
    ThreeColumn(ThreeColumnLayout),
}

impl DynamicLayout {
    pub fn kind(&self) -> &'static str {
        match self {
            DynamicLayout::Single(_) => "single",
            DynamicLayout::TwoColumn(_) => "two-column",
            DynamicLayout::TwoColumnWithHeader(_) => "two-column-with-header",
            DynamicLayout::ThreeColumn(_) => "three-column",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Column {
    pub sections: Vec<SectionSlot>,
}

impl Column {
    pub fn new(sections: Vec<SectionSlot>) -> Self {
        Self { sections }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SidebarPosition {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SingleLayout {
    pub sections: Vec<SectionSlot>,
    pub container_class: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TwoColumnLayout {
    pub sidebar: Column,
    pub content: Column,
    pub sidebar_class: Option<String>,
    pub content_class: Option<String>,
    pub sidebar_position: SidebarPosition,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TwoColumnWithHeaderLayout {
    pub header: Column,
    pub sidebar: Column,
    pub content: Column,
    pub header_class: Option<String>,
    pub sidebar_class: Option<String>,
    pub content_class: Option<String>,
    pub sidebar_position: SidebarPosition,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThreeColumnLayout {
    pub left: Column,
    pub center: Column,
    pub right: Column,
    pub left_class: Option<String>,
    pub center_class: Option<String>,
    pub right_class: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::sections::{Section, SectionKind};

    #[test]
    fn test_two_column_layout_parses() {
        let layout: DynamicLayout = serde_json::from_str(
            r#"{
                "layout": "two-column",
                "sidebarClass": "w-1/3",
                "sidebar": {"sections": [{"type": "photo"}, {"type": "skills"}]},
                "content": {"sections": [{"type": "experience"}]}
            }"#,
        )
        .unwrap();
        match layout {
            DynamicLayout::TwoColumn(two) => {
                let kinds: Vec<_> = two.sidebar.sections.iter().map(|s| s.section.kind()).collect();
                assert_eq!(kinds, vec![SectionKind::Photo, SectionKind::Skills]);
                assert_eq!(two.sidebar_class.as_deref(), Some("w-1/3"));
                assert_eq!(two.sidebar_position, SidebarPosition::Left);
            }
            other => panic!("expected two-column, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_layout_kind_rejected() {
        let result = serde_json::from_str::<DynamicLayout>(r#"{"layout": "masonry"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_template_layout_kind() {
        let template: TemplateConfig = serde_json::from_str(
            r#"{"id": "a", "name": "A", "dynamicLayout": {"layout": "single", "sections": [{"type": "summary"}]}}"#,
        )
        .unwrap();
        assert_eq!(template.layout_kind(), "single");
        match &template.dynamic_layout {
            Some(DynamicLayout::Single(single)) => {
                assert!(matches!(single.sections[0].section, Section::Summary(_)))
            }
            other => panic!("expected single layout, got {other:?}"),
        }

        let legacy: TemplateConfig =
            serde_json::from_str(r#"{"id": "b", "name": "B", "layout": "sidebar-modern"}"#).unwrap();
        assert_eq!(legacy.layout_kind(), "sidebar-modern");
        assert_eq!(legacy.styles, TemplateStyles::default());
    }
}
