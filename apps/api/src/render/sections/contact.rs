use maud::{html, Markup};

use crate::models::cv::CvData;
use crate::render::context::{RenderContext, TextRole};
use crate::render::sections::{heading, title_or};
use crate::templates::sections::{ContactConfig, ContactLayout};

pub fn render(data: &CvData, config: &ContactConfig, ctx: &RenderContext) -> Markup {
    let items = data.contact_items();
    if items.is_empty() {
        return html! {};
    }

    let text_style = RenderContext::color_style(ctx.text_color());

    match config.layout {
        ContactLayout::List => html! {
            section data-section="contact" {
                (heading(title_or(&config.title, "Contact"), config.border, ctx))
                ul class=(format!("{} space-y-1 break-words", ctx.text(TextRole::Body))) style=(text_style) {
                    @for item in &items {
                        li {
                            @if config.show_labels {
                                span class="font-semibold" { (item.kind.label()) ": " }
                            }
                            (item.value)
                        }
                    }
                }
            }
        },
        ContactLayout::Inline => {
            let line = items
                .iter()
                .map(|item| {
                    if config.show_labels {
                        format!("{}: {}", item.kind.label(), item.value)
                    } else {
                        item.value.to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join(config.separator.as_str());
            html! {
                section data-section="contact" {
                    @if let Some(title) = config.title.as_deref().filter(|t| !t.is_empty()) {
                        (heading(title, config.border, ctx))
                    }
                    p class=(ctx.text(TextRole::Meta)) style=(text_style) { (line) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::sections::test_support::{full_cv, styles};
    use crate::templates::sections::Separator;

    #[test]
    fn test_list_with_labels() {
        let styles = styles();
        let ctx = RenderContext::new(&styles, false, None);
        let config = ContactConfig {
            show_labels: true,
            ..Default::default()
        };
        let html = render(&full_cv(), &config, &ctx).into_string();
        assert!(html.contains(">Contact</h2>"));
        assert!(html.contains("<span class=\"font-semibold\">Email: </span>ada@example.com"));
        assert_eq!(html.matches("<li>").count(), 4);
    }

    #[test]
    fn test_inline_pipe_line_without_heading() {
        let styles = styles();
        let ctx = RenderContext::new(&styles, false, None);
        let config = ContactConfig {
            layout: ContactLayout::Inline,
            separator: Separator::Pipe,
            ..Default::default()
        };
        let cv = CvData {
            email: Some("a@b.c".to_string()),
            location: Some("Paris".to_string()),
            ..Default::default()
        };
        let html = render(&cv, &config, &ctx).into_string();
        assert!(html.contains("a@b.c | Paris"));
        assert!(!html.contains("<h2"));
    }

    #[test]
    fn test_no_contact_fields_renders_nothing() {
        let styles = styles();
        let ctx = RenderContext::new(&styles, false, None);
        let cv = CvData {
            full_name: Some("Only A Name".to_string()),
            ..Default::default()
        };
        assert!(render(&cv, &ContactConfig::default(), &ctx).0.is_empty());
    }
}
