//! Name, target position and contact line, in one of seven arrangements.
//!
//! `dark` and `dark-split` always carry a round portrait; when no photo is set
//! a gradient disc with the holder's initials stands in. The light variants
//! only show a portrait when `showPhoto` is set (`default` and `horizontal`).

use maud::{html, Markup};

use crate::models::cv::{filled, ContactItem, CvData};
use crate::render::context::{RenderContext, TextRole};
use crate::templates::sections::{HeaderConfig, HeaderLayout};

struct HeaderParts<'a> {
    name: Option<&'a str>,
    position: Option<&'a str>,
    contacts: Vec<ContactItem<'a>>,
    contact_line: String,
}

pub fn render(data: &CvData, config: &HeaderConfig, ctx: &RenderContext) -> Markup {
    let contacts = if config.show_contact {
        data.contact_items()
    } else {
        Vec::new()
    };
    let contact_line = contacts
        .iter()
        .map(|c| c.value)
        .collect::<Vec<_>>()
        .join(config.separator.as_str());

    let parts = HeaderParts {
        name: filled(&data.full_name),
        position: filled(&data.target_position),
        contacts,
        contact_line,
    };

    if parts.name.is_none() && parts.position.is_none() && parts.contacts.is_empty() {
        return html! {};
    }

    match config.layout {
        HeaderLayout::Default => default_header(data, &parts, config, ctx),
        HeaderLayout::Centered => centered(&parts, ctx),
        HeaderLayout::Compact => compact(&parts, ctx),
        HeaderLayout::Horizontal => horizontal(data, &parts, config, ctx),
        HeaderLayout::Vertical => vertical(&parts, ctx),
        HeaderLayout::Dark => dark(data, &parts, ctx),
        HeaderLayout::DarkSplit => dark_split(data, &parts, ctx),
    }
}

fn name_and_position(parts: &HeaderParts, ctx: &RenderContext, heading_color: &str) -> Markup {
    html! {
        @if let Some(name) = parts.name {
            h1 class=(ctx.text(TextRole::Name))
                style=(format!("color: {}; font-family: {};", heading_color, ctx.styles.heading_font())) {
                (name)
            }
        }
        @if let Some(position) = parts.position {
            p class=(ctx.text(TextRole::Position)) style=(RenderContext::color_style(ctx.accent_color())) {
                (position)
            }
        }
    }
}

fn contact_line(parts: &HeaderParts, ctx: &RenderContext, color: &str) -> Markup {
    html! {
        @if !parts.contact_line.is_empty() {
            p class=(format!("{} mt-2", ctx.text(TextRole::Meta))) style=(RenderContext::color_style(color)) {
                (parts.contact_line)
            }
        }
    }
}

fn default_header(data: &CvData, parts: &HeaderParts, config: &HeaderConfig, ctx: &RenderContext) -> Markup {
    html! {
        header data-section="header" data-variant="default" class="flex items-center gap-4" {
            @if config.show_photo {
                (avatar(data, ctx))
            }
            div {
                (name_and_position(parts, ctx, ctx.heading_color()))
                (contact_line(parts, ctx, ctx.muted_color()))
            }
        }
    }
}

fn centered(parts: &HeaderParts, ctx: &RenderContext) -> Markup {
    html! {
        header data-section="header" data-variant="centered" class="text-center pb-4 border-b"
            style=(format!("border-color: {};", ctx.accent_color())) {
            (name_and_position(parts, ctx, ctx.heading_color()))
            (contact_line(parts, ctx, ctx.muted_color()))
        }
    }
}

fn compact(parts: &HeaderParts, ctx: &RenderContext) -> Markup {
    html! {
        header data-section="header" data-variant="compact" {
            div class="flex flex-wrap items-baseline gap-x-3" {
                (name_and_position(parts, ctx, ctx.heading_color()))
            }
            (contact_line(parts, ctx, ctx.muted_color()))
        }
    }
}

fn horizontal(data: &CvData, parts: &HeaderParts, config: &HeaderConfig, ctx: &RenderContext) -> Markup {
    html! {
        header data-section="header" data-variant="horizontal" class="flex justify-between items-start gap-6" {
            div class="flex items-center gap-4" {
                @if config.show_photo {
                    (avatar(data, ctx))
                }
                div {
                    (name_and_position(parts, ctx, ctx.heading_color()))
                }
            }
            @if !parts.contacts.is_empty() {
                ul class=(format!("{} text-right space-y-0.5", ctx.text(TextRole::Meta)))
                    style=(RenderContext::color_style(ctx.muted_color())) {
                    @for item in &parts.contacts {
                        li { (item.value) }
                    }
                }
            }
        }
    }
}

fn vertical(parts: &HeaderParts, ctx: &RenderContext) -> Markup {
    html! {
        header data-section="header" data-variant="vertical" class="space-y-1" {
            (name_and_position(parts, ctx, ctx.heading_color()))
            @if !parts.contacts.is_empty() {
                ul class=(format!("{} mt-2 space-y-0.5", ctx.text(TextRole::Meta)))
                    style=(RenderContext::color_style(ctx.muted_color())) {
                    @for item in &parts.contacts {
                        li { (item.value) }
                    }
                }
            }
        }
    }
}

fn dark(data: &CvData, parts: &HeaderParts, ctx: &RenderContext) -> Markup {
    let band = format!(
        "background-color: {}; color: {};",
        ctx.styles.header_background, ctx.styles.header_text_color
    );
    html! {
        header data-section="header" data-variant="dark" class="flex items-center gap-6 p-8" style=(band) {
            (avatar(data, ctx))
            div {
                (name_and_position(parts, ctx, &ctx.styles.header_text_color))
                (contact_line(parts, ctx, &ctx.styles.header_text_color))
            }
        }
    }
}

fn dark_split(data: &CvData, parts: &HeaderParts, ctx: &RenderContext) -> Markup {
    let band = format!(
        "background-color: {}; color: {};",
        ctx.styles.header_background, ctx.styles.header_text_color
    );
    let strip = format!(
        "background-color: {}; color: {};",
        ctx.styles.accent_color, ctx.styles.header_text_color
    );
    html! {
        header data-section="header" data-variant="dark-split" style=(band) {
            div class="flex items-center gap-6 px-8 pt-8 pb-6" {
                (avatar(data, ctx))
                div {
                    (name_and_position(parts, ctx, &ctx.styles.header_text_color))
                }
            }
            @if !parts.contact_line.is_empty() {
                div class=(format!("{} px-8 py-2", ctx.text(TextRole::Meta))) style=(strip) {
                    (parts.contact_line)
                }
            }
        }
    }
}

/// Round portrait, or a gradient disc with initials when no photo is set.
fn avatar(data: &CvData, ctx: &RenderContext) -> Markup {
    let size = if ctx.preview { "w-10 h-10" } else { "w-24 h-24" };
    match filled(&data.photo) {
        Some(url) => html! {
            img src=(url) alt=(filled(&data.full_name).unwrap_or("Profile photo"))
                class=(format!("{size} rounded-full object-cover shrink-0"));
        },
        None => {
            let gradient = format!(
                "background: linear-gradient(135deg, {}, {}); color: #ffffff;",
                ctx.styles.primary_color, ctx.styles.accent_color
            );
            html! {
                div data-placeholder="avatar"
                    class=(format!("{size} rounded-full shrink-0 flex items-center justify-center font-semibold"))
                    style=(gradient) {
                    (data.initials())
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

    fn header(layout: HeaderLayout) -> HeaderConfig {
        HeaderConfig {
            layout,
            ..Default::default()
        }
    }

    #[test]
    fn test_all_variants_render_name() {
        let styles = styles();
        let ctx = RenderContext::new(&styles, false, None);
        let cv = full_cv();
        for layout in [
            HeaderLayout::Default,
            HeaderLayout::Centered,
            HeaderLayout::Compact,
            HeaderLayout::Horizontal,
            HeaderLayout::Vertical,
            HeaderLayout::Dark,
            HeaderLayout::DarkSplit,
        ] {
            let html = render(&cv, &header(layout), &ctx).into_string();
            assert!(html.contains("Ada Lovelace"), "{layout:?} lost the name");
            assert!(html.contains("data-section=\"header\""));
        }
    }

    #[test]
    fn test_contact_line_joined_with_separator() {
        let styles = styles();
        let ctx = RenderContext::new(&styles, false, None);
        let config = HeaderConfig {
            separator: Separator::Bullet,
            ..Default::default()
        };
        let html = render(&full_cv(), &config, &ctx).into_string();
        assert!(html.contains("555-0100 • ada@example.com • London • linkedin.com/in/ada"));
    }

    #[test]
    fn test_show_contact_false_hides_contact() {
        let styles = styles();
        let ctx = RenderContext::new(&styles, false, None);
        let config = HeaderConfig {
            show_contact: false,
            ..Default::default()
        };
        let html = render(&full_cv(), &config, &ctx).into_string();
        assert!(!html.contains("ada@example.com"));
    }

    #[test]
    fn test_dark_header_without_photo_uses_initials_placeholder() {
        let styles = styles();
        let ctx = RenderContext::new(&styles, false, None);
        let cv = CvData {
            photo: None,
            ..full_cv()
        };
        let html = render(&cv, &header(HeaderLayout::Dark), &ctx).into_string();
        assert!(html.contains("data-placeholder=\"avatar\""));
        assert!(html.contains("linear-gradient"));
        assert!(html.contains(">AL<"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_dark_split_with_photo_uses_image() {
        let styles = styles();
        let ctx = RenderContext::new(&styles, false, None);
        let html = render(&full_cv(), &header(HeaderLayout::DarkSplit), &ctx).into_string();
        assert!(html.contains("<img src=\"https://example.com/ada.png\""));
    }

    #[test]
    fn test_empty_header_renders_nothing() {
        let styles = styles();
        let ctx = RenderContext::new(&styles, false, None);
        let html = render(&CvData::default(), &header(HeaderLayout::Dark), &ctx).into_string();
        assert!(html.is_empty());
    }

    #[test]
    fn test_name_is_escaped() {
        let styles = styles();
        let ctx = RenderContext::new(&styles, false, None);
        let cv = CvData {
            full_name: Some("<script>x</script>".to_string()),
            ..Default::default()
        };
        let html = render(&cv, &HeaderConfig::default(), &ctx).into_string();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
