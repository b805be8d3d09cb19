//! Text formatting rules shared by the HTML renderer and the exports.

/// Date range display.
///
/// A start date always produces a range, with "Present" standing in for a
/// missing end. A lone end date is shown by itself.
pub fn format_date(start: &str, end: &str) -> String {
    if !start.is_empty() {
        let end = if end.is_empty() { "Present" } else { end };
        format!("{start} — {end}")
    } else {
        end.to_string()
    }
}

/// [`format_date`] over optional fields.
pub fn format_entry_dates(start: &Option<String>, end: &Option<String>) -> String {
    format_date(
        start.as_deref().unwrap_or_default(),
        end.as_deref().unwrap_or_default(),
    )
}

/// Splits a comma-separated field into trimmed, non-empty items.
pub fn split_list(text: &str) -> Vec<&str> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect()
}

/// A language item, optionally with a proficiency level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageItem<'a> {
    pub name: &'a str,
    pub level: Option<&'a str>,
}

impl LanguageItem<'_> {
    /// `"Name (Level)"`, or just the name when the level is absent or hidden.
    pub fn display(&self, show_level: bool) -> String {
        match self.level {
            Some(level) if show_level => format!("{} ({level})", self.name),
            _ => self.name.to_string(),
        }
    }
}

/// Parses `"Name — Level"` (em dash or a spaced hyphen) into its parts.
pub fn parse_language(item: &str) -> LanguageItem<'_> {
    let split = item
        .split_once('—')
        .or_else(|| item.split_once(" - "));

    match split {
        Some((name, level)) => {
            let level = level.trim();
            LanguageItem {
                name: name.trim(),
                level: (!level.is_empty()).then_some(level),
            }
        }
        None => LanguageItem {
            name: item.trim(),
            level: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_display() {
        let language = parse_language("French — Fluent");
        assert_eq!(language.display(true), "French (Fluent)");
        assert_eq!(language.display(false), "French");
        assert_eq!(parse_language("German").display(true), "German");
    }

    #[test]
    fn test_format_date_start_without_end_is_present() {
        assert_eq!(format_date("2020-01", ""), "2020-01 — Present");
    }

    #[test]
    fn test_format_date_lone_end() {
        assert_eq!(format_date("", "2022-05"), "2022-05");
    }

    #[test]
    fn test_format_date_both_empty() {
        assert_eq!(format_date("", ""), "");
    }

    #[test]
    fn test_format_date_full_range() {
        assert_eq!(format_date("2019", "2021"), "2019 — 2021");
    }

    #[test]
    fn test_format_entry_dates_none() {
        assert_eq!(format_entry_dates(&None, &None), "");
        assert_eq!(
            format_entry_dates(&Some("2018".to_string()), &None),
            "2018 — Present"
        );
    }

    #[test]
    fn test_split_list_drops_blanks() {
        assert_eq!(split_list(" Rust, ,Go ,  "), vec!["Rust", "Go"]);
        assert!(split_list("").is_empty());
    }

    #[test]
    fn test_parse_language_with_level() {
        assert_eq!(
            parse_language("French — Fluent"),
            LanguageItem {
                name: "French",
                level: Some("Fluent")
            }
        );
        assert_eq!(parse_language("German - B2").level, Some("B2"));
    }

    #[test]
    fn test_parse_language_keeps_hyphenated_names() {
        let item = parse_language("Serbo-Croatian");
        assert_eq!(item.name, "Serbo-Croatian");
        assert_eq!(item.level, None);
    }

    #[test]
    fn test_parse_language_empty_level() {
        assert_eq!(parse_language("Italian —").level, None);
    }
}
