use maud::{html, Markup};

use crate::models::cv::{filled, CvData};
use crate::render::context::RenderContext;
use crate::render::format::{parse_language, split_list};
use crate::render::sections::skills::list;
use crate::render::sections::{heading, title_or};
use crate::templates::sections::LanguagesConfig;

pub fn render(data: &CvData, config: &LanguagesConfig, ctx: &RenderContext) -> Markup {
    let items: Vec<String> = filled(&data.languages)
        .map(split_list)
        .unwrap_or_default()
        .into_iter()
        .map(parse_language)
        .filter(|language| !language.name.is_empty())
        .map(|language| language.display(config.show_level))
        .collect();

    if items.is_empty() {
        return html! {};
    }
    let items: Vec<&str> = items.iter().map(String::as_str).collect();

    html! {
        section data-section="languages" {
            (heading(title_or(&config.title, "Languages"), config.border, ctx))
            (list(&items, config.layout, ctx))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::sections::test_support::styles;

    fn cv(languages: &str) -> CvData {
        CvData {
            languages: Some(languages.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_levels_shown_by_default() {
        let styles = styles();
        let ctx = RenderContext::new(&styles, false, None);
        let html = render(&cv("English — Native, French — B2"), &LanguagesConfig::default(), &ctx)
            .into_string();
        assert!(html.contains("<li>English (Native)</li>"));
        assert!(html.contains("<li>French (B2)</li>"));
    }

    #[test]
    fn test_show_level_false_keeps_names_only() {
        let styles = styles();
        let ctx = RenderContext::new(&styles, false, None);
        let config = LanguagesConfig {
            show_level: false,
            ..Default::default()
        };
        let html = render(&cv("English — Native, German"), &config, &ctx).into_string();
        assert!(html.contains("<li>English</li>"));
        assert!(html.contains("<li>German</li>"));
        assert!(!html.contains("Native"));
    }

    #[test]
    fn test_empty_languages_render_nothing() {
        let styles = styles();
        let ctx = RenderContext::new(&styles, false, None);
        assert!(render(&cv(""), &LanguagesConfig::default(), &ctx).0.is_empty());
        assert!(render(&cv("— Native"), &LanguagesConfig::default(), &ctx).0.is_empty());
    }
}
