//! Section slots as they appear in a template's `dynamicLayout`.
//!
//! A slot is `{ "type": ..., "config": {...}, "className": ... }` in JSON. The
//! `type` selects one of a closed set of sections and `config` is parsed into
//! that section's typed options, so a misspelled section type or option key
//! is rejected when the registry loads instead of rendering nothing.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    Header,
    Photo,
    Contact,
    Summary,
    Experience,
    Education,
    Skills,
    Languages,
}

#[cfg(test)]
impl SectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Header => "header",
            SectionKind::Photo => "photo",
            SectionKind::Contact => "contact",
            SectionKind::Summary => "summary",
            SectionKind::Experience => "experience",
            SectionKind::Education => "education",
            SectionKind::Skills => "skills",
            SectionKind::Languages => "languages",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    Header(HeaderConfig),
    Photo(PhotoConfig),
    Contact(ContactConfig),
    Summary(SummaryConfig),
    Experience(ExperienceConfig),
    Education(EducationConfig),
    Skills(SkillsConfig),
    Languages(LanguagesConfig),
}

#[cfg(test)]
impl Section {
    pub fn kind(&self) -> SectionKind {
        match self {
            Section::Header(_) => SectionKind::Header,
            Section::Photo(_) => SectionKind::Photo,
            Section::Contact(_) => SectionKind::Contact,
            Section::Summary(_) => SectionKind::Summary,
            Section::Experience(_) => SectionKind::Experience,
            Section::Education(_) => SectionKind::Education,
            Section::Skills(_) => SectionKind::Skills,
            Section::Languages(_) => SectionKind::Languages,
        }
    }
}

/// One entry of a column's section list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawSectionSlot")]
pub struct SectionSlot {
    pub section: Section,
    pub class_name: Option<String>,
}

impl SectionSlot {
    pub fn new(section: Section) -> Self {
        Self {
            section,
            class_name: None,
        }
    }

    pub fn with_class(mut self, class_name: &str) -> Self {
        self.class_name = Some(class_name.to_string());
        self
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSectionSlot {
    #[serde(rename = "type")]
    kind: SectionKind,
    #[serde(default)]
    config: Value,
    #[serde(default)]
    class_name: Option<String>,
}

impl TryFrom<RawSectionSlot> for SectionSlot {
    type Error = serde_json::Error;

    fn try_from(raw: RawSectionSlot) -> Result<Self, Self::Error> {
        let config = match raw.config {
            Value::Null => Value::Object(serde_json::Map::new()),
            other => other,
        };

        let section = match raw.kind {
            SectionKind::Header => Section::Header(serde_json::from_value(config)?),
            SectionKind::Photo => Section::Photo(serde_json::from_value(config)?),
            SectionKind::Contact => Section::Contact(serde_json::from_value(config)?),
            SectionKind::Summary => Section::Summary(serde_json::from_value(config)?),
            SectionKind::Experience => Section::Experience(serde_json::from_value(config)?),
            SectionKind::Education => Section::Education(serde_json::from_value(config)?),
            SectionKind::Skills => Section::Skills(serde_json::from_value(config)?),
            SectionKind::Languages => Section::Languages(serde_json::from_value(config)?),
        };

        Ok(SectionSlot {
            section,
            class_name: raw.class_name,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Presentation variants
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeaderLayout {
    #[default]
    Default,
    Centered,
    Compact,
    Horizontal,
    Vertical,
    Dark,
    DarkSplit,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PhotoSize {
    Large,
    #[default]
    Medium,
    Small,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContactLayout {
    #[default]
    List,
    Inline,
}

/// Joiner for single-line contact rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Separator {
    #[default]
    Pipe,
    Bullet,
}

impl Separator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Separator::Pipe => " | ",
            Separator::Bullet => " • ",
        }
    }
}

/// Experience/education entry rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryLayout {
    #[default]
    Standard,
    Timeline,
}

/// Skills/languages list rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListLayout {
    #[default]
    Tags,
    Bullets,
    Inline,
}

// ────────────────────────────────────────────────────────────────────────────
// Per-section options
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct HeaderConfig {
    pub layout: HeaderLayout,
    pub show_photo: bool,
    pub show_contact: bool,
    pub separator: Separator,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            layout: HeaderLayout::Default,
            show_photo: false,
            show_contact: true,
            separator: Separator::Pipe,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct PhotoConfig {
    pub size: PhotoSize,
    pub circular: bool,
    pub border: bool,
}

impl Default for PhotoConfig {
    fn default() -> Self {
        Self {
            size: PhotoSize::Medium,
            circular: true,
            border: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ContactConfig {
    pub title: Option<String>,
    pub layout: ContactLayout,
    pub show_labels: bool,
    pub separator: Separator,
    pub border: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SummaryConfig {
    pub title: Option<String>,
    pub border: bool,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            title: None,
            border: true,
        }
    }
}

pub const DEFAULT_MAX_EXPERIENCES: usize = 10;
pub const DEFAULT_MAX_EDUCATION: usize = 5;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ExperienceConfig {
    pub title: Option<String>,
    pub layout: EntryLayout,
    pub max_items: usize,
    pub show_location: bool,
    pub show_company: bool,
    pub border: bool,
}

impl Default for ExperienceConfig {
    fn default() -> Self {
        Self {
            title: None,
            layout: EntryLayout::Standard,
            max_items: DEFAULT_MAX_EXPERIENCES,
            show_location: true,
            show_company: true,
            border: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct EducationConfig {
    pub title: Option<String>,
    pub layout: EntryLayout,
    pub max_items: usize,
    pub show_location: bool,
    pub border: bool,
}

impl Default for EducationConfig {
    fn default() -> Self {
        Self {
            title: None,
            layout: EntryLayout::Standard,
            max_items: DEFAULT_MAX_EDUCATION,
            show_location: true,
            border: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SkillsConfig {
    pub title: Option<String>,
    pub layout: ListLayout,
    pub max_items: Option<usize>,
    pub border: bool,
}

impl Default for SkillsConfig {
    fn default() -> Self {
        Self {
            title: None,
            layout: ListLayout::Tags,
            max_items: None,
            border: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct LanguagesConfig {
    pub title: Option<String>,
    pub layout: ListLayout,
    pub show_level: bool,
    pub border: bool,
}

impl Default for LanguagesConfig {
    fn default() -> Self {
        Self {
            title: None,
            layout: ListLayout::Bullets,
            show_level: true,
            border: true,
        }
    }
}
