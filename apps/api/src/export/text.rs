//! Plain-text CV, for pasting into application forms.

use crate::models::cv::{filled, CvData};
use crate::render::format::{format_entry_dates, parse_language, split_list};

pub fn render_text(data: &CvData) -> String {
    let mut blocks: Vec<String> = Vec::new();

    let mut intro = String::new();
    if let Some(name) = filled(&data.full_name) {
        intro.push_str(&format!("{name}\n"));
    }
    if let Some(position) = filled(&data.target_position) {
        intro.push_str(&format!("{position}\n"));
    }
    let contact_line = data
        .contact_items()
        .iter()
        .map(|c| c.value)
        .collect::<Vec<_>>()
        .join(" | ");
    if !contact_line.is_empty() {
        intro.push_str(&format!("{contact_line}\n"));
    }
    if !intro.is_empty() {
        blocks.push(intro);
    }

    if let Some(summary) = filled(&data.summary) {
        blocks.push(format!("SUMMARY\n{summary}\n"));
    }

    let experiences = data.visible_experiences(usize::MAX);
    if !experiences.is_empty() {
        let mut block = String::from("EXPERIENCE\n");
        for entry in experiences {
            block.push_str(&entry_lines(
                &entry.job_title,
                &entry.company,
                &entry.location,
                format_entry_dates(&entry.start_date, &entry.end_date),
            ));
            for line in entry.achievement_lines() {
                block.push_str(&format!("• {line}\n"));
            }
        }
        blocks.push(block);
    }

    let education = data.visible_education(usize::MAX);
    if !education.is_empty() {
        let mut block = String::from("EDUCATION\n");
        for entry in education {
            block.push_str(&entry_lines(
                &entry.degree,
                &entry.university,
                &entry.location,
                format_entry_dates(&entry.start_date, &entry.end_date),
            ));
        }
        blocks.push(block);
    }

    let skills = filled(&data.skills).map(split_list).unwrap_or_default();
    if !skills.is_empty() {
        blocks.push(format!("SKILLS\n{}\n", skills.join(", ")));
    }

    let languages: Vec<String> = filled(&data.languages)
        .map(split_list)
        .unwrap_or_default()
        .into_iter()
        .map(parse_language)
        .filter(|language| !language.name.is_empty())
        .map(|language| language.display(true))
        .collect();
    if !languages.is_empty() {
        blocks.push(format!("LANGUAGES\n{}\n", languages.join(", ")));
    }

    blocks.join("\n")
}

/// `"Title — Organisation"` then an optional `"Location | Dates"` line.
fn entry_lines(
    title: &Option<String>,
    organisation: &Option<String>,
    location: &Option<String>,
    dates: String,
) -> String {
    let heading = [filled(title), filled(organisation)]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" — ");
    let meta = [filled(location), Some(dates.as_str()).filter(|d| !d.is_empty())]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" | ");

    if meta.is_empty() {
        format!("{heading}\n")
    } else {
        format!("{heading}\n{meta}\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cv::{EducationEntry, ExperienceEntry};
    use crate::models::sample::sample_cv;

    #[test]
    fn test_empty_cv_exports_empty_string() {
        assert_eq!(render_text(&CvData::default()), "");
    }

    #[test]
    fn test_sample_cv_sections_in_order() {
        let text = render_text(&sample_cv());
        let order = ["Alex Morgan", "SUMMARY", "EXPERIENCE", "EDUCATION", "SKILLS", "LANGUAGES"];
        let positions: Vec<usize> = order.iter().map(|s| text.find(s).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{text}");
        assert!(text.contains("2021 — Present"));
        assert!(text.contains("• Ran 40+ usability sessions to validate checkout changes"));
        assert!(text.contains("English (Native), French (Fluent)"));
    }

    #[test]
    fn test_uses_same_entry_filter_as_renderer() {
        let cv = CvData {
            experiences: vec![
                ExperienceEntry {
                    location: Some("Nowhere".to_string()),
                    ..Default::default()
                },
                ExperienceEntry {
                    company: Some("Acme".to_string()),
                    end_date: Some("2022-05".to_string()),
                    ..Default::default()
                },
            ],
            education: vec![EducationEntry::default()],
            ..Default::default()
        };
        let text = render_text(&cv);
        assert_eq!(text, "EXPERIENCE\nAcme\n2022-05\n");
    }
}
