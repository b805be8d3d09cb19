//! The CV record that flows, unmodified, from the form state into the renderer.
//!
//! Every field is optional. An empty string is treated exactly like an absent
//! value, so a section that only sees `""` renders nothing.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CvData {
    pub full_name: Option<String>,
    pub target_position: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin_url: Option<String>,
    pub location: Option<String>,
    /// Photo URL (or data URI). `None` renders a placeholder where a layout asks for one.
    pub photo: Option<String>,
    pub summary: Option<String>,
    /// Comma-separated list, parsed at render time.
    pub skills: Option<String>,
    /// Comma-separated list; each item may be `"Name — Level"`.
    pub languages: Option<String>,
    pub experiences: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    /// Registry key of the selected template.
    pub template: Option<String>,
    /// Cosmetic variant chosen in the form. Carried through, not interpreted.
    pub style: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// Newline-separated bullet text.
    pub achievements: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub degree: Option<String>,
    pub university: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Returns the field's value when it is present and non-empty.
pub fn filled(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.is_empty())
}

impl ExperienceEntry {
    /// An experience is shown only when it names a job title or a company.
    pub fn is_visible(&self) -> bool {
        filled(&self.job_title).is_some() || filled(&self.company).is_some()
    }

    /// Achievement lines: split on newline, trimmed, blanks dropped.
    pub fn achievement_lines(&self) -> Vec<&str> {
        filled(&self.achievements)
            .map(|text| {
                text.lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl EducationEntry {
    /// An education entry is shown only when it names a degree or a university.
    pub fn is_visible(&self) -> bool {
        filled(&self.degree).is_some() || filled(&self.university).is_some()
    }
}

impl CvData {
    /// Experiences that pass the display filter, capped at `max_items`.
    /// The underlying vector is never touched.
    pub fn visible_experiences(&self, max_items: usize) -> Vec<&ExperienceEntry> {
        self.experiences
            .iter()
            .filter(|e| e.is_visible())
            .take(max_items)
            .collect()
    }

    /// Education entries that pass the display filter, capped at `max_items`.
    pub fn visible_education(&self, max_items: usize) -> Vec<&EducationEntry> {
        self.education
            .iter()
            .filter(|e| e.is_visible())
            .take(max_items)
            .collect()
    }

    /// Contact values in display order: phone, email, location, LinkedIn.
    pub fn contact_items(&self) -> Vec<ContactItem<'_>> {
        [
            (ContactKind::Phone, &self.phone),
            (ContactKind::Email, &self.email),
            (ContactKind::Location, &self.location),
            (ContactKind::LinkedIn, &self.linkedin_url),
        ]
        .into_iter()
        .filter_map(|(kind, field)| filled(field).map(|value| ContactItem { kind, value }))
        .collect()
    }

    /// Up to two upper-case initials taken from `full_name`.
    pub fn initials(&self) -> String {
        filled(&self.full_name)
            .map(|name| {
                name.split_whitespace()
                    .filter_map(|word| word.chars().next())
                    .take(2)
                    .flat_map(char::to_uppercase)
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Phone,
    Email,
    Location,
    LinkedIn,
}

impl ContactKind {
    pub fn label(&self) -> &'static str {
        match self {
            ContactKind::Phone => "Phone",
            ContactKind::Email => "Email",
            ContactKind::Location => "Location",
            ContactKind::LinkedIn => "LinkedIn",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactItem<'a> {
    pub kind: ContactKind,
    pub value: &'a str,
}
