//! Standalone HTML document for print and PDF conversion.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::models::cv::{filled, CvData};
use crate::render::{render_cv, RenderOptions};
use crate::templates::registry::TemplateRegistry;

const PRINT_CSS: &str = "@page { size: A4; margin: 0; }\
html, body { margin: 0; padding: 0; }\
body { -webkit-print-color-adjust: exact; print-color-adjust: exact; }\
[data-cv=\"document\"] { width: 210mm; min-height: 297mm; margin: 0 auto; }";

/// Full document wrapping the final, unwatermarked render.
pub fn render_print_document(
    registry: &TemplateRegistry,
    data: &CvData,
    stylesheet_url: Option<&str>,
) -> Markup {
    let title = filled(&data.full_name)
        .map(|name| format!("{name} — CV"))
        .unwrap_or_else(|| "CV".to_string());
    let options = RenderOptions::default();

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                @if let Some(href) = stylesheet_url {
                    link rel="stylesheet" href=(href);
                }
                style { (PreEscaped(PRINT_CSS)) }
            }
            body {
                (render_cv(registry, Some(data), &options))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample::sample_cv;
    use crate::render::composer::WATERMARK_TEXT;

    #[test]
    fn test_print_document_is_complete_and_unwatermarked() {
        let registry = TemplateRegistry::builtin().unwrap();
        let html = render_print_document(&registry, &sample_cv(), Some("/static/cv.css"))
            .into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Alex Morgan — CV</title>"));
        assert!(html.contains("<link rel=\"stylesheet\" href=\"/static/cv.css\">"));
        assert!(html.contains("@page { size: A4"));
        assert!(!html.contains(WATERMARK_TEXT));
    }

    #[test]
    fn test_print_document_without_name() {
        let registry = TemplateRegistry::builtin().unwrap();
        let html = render_print_document(&registry, &CvData::default(), None).into_string();
        assert!(html.contains("<title>CV</title>"));
        assert!(!html.contains("<link"));
    }
}
