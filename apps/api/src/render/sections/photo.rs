use maud::{html, Markup};

use crate::models::cv::{filled, CvData};
use crate::render::context::RenderContext;
use crate::templates::sections::{PhotoConfig, PhotoSize};

const SILHOUETTE_PATH: &str = "M12 12c2.65 0 4.8-2.15 4.8-4.8S14.65 2.4 12 2.4 7.2 4.55 7.2 7.2 9.35 12 12 12zm0 2.4c-3.2 0-9.6 1.6-9.6 4.8v2.4h19.2v-2.4c0-3.2-6.4-4.8-9.6-4.8z";

fn size_class(size: PhotoSize, preview: bool) -> &'static str {
    match (size, preview) {
        (PhotoSize::Large, false) => "w-40 h-40",
        (PhotoSize::Large, true) => "w-16 h-16",
        (PhotoSize::Medium, false) => "w-32 h-32",
        (PhotoSize::Medium, true) => "w-12 h-12",
        (PhotoSize::Small, false) => "w-24 h-24",
        (PhotoSize::Small, true) => "w-10 h-10",
    }
}

/// The portrait, or a person silhouette when no photo is set. Never empty.
pub fn render(data: &CvData, config: &PhotoConfig, ctx: &RenderContext) -> Markup {
    let shape = if config.circular { "rounded-full" } else { "rounded-lg" };
    let mut class = format!("{} {shape} shrink-0", size_class(config.size, ctx.preview));
    let mut style = String::new();
    if config.border {
        class.push_str(" border-4");
        style = format!("border-color: {};", ctx.accent_color());
    }

    html! {
        div data-section="photo" class="flex justify-center" {
            @if let Some(url) = filled(&data.photo) {
                img src=(url)
                    alt=(filled(&data.full_name).unwrap_or("Profile photo"))
                    class=(format!("{class} object-cover"))
                    style=(style);
            } @else {
                div data-placeholder="photo"
                    class=(format!("{class} flex items-center justify-center bg-gray-200 text-gray-400"))
                    style=(style) {
                    svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor"
                        class="w-1/2 h-1/2" aria-hidden="true" {
                        path d=(SILHOUETTE_PATH) {}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::sections::test_support::{full_cv, styles};

    #[test]
    fn test_photo_url_renders_image() {
        let styles = styles();
        let ctx = RenderContext::new(&styles, false, None);
        let html = render(&full_cv(), &PhotoConfig::default(), &ctx).into_string();
        assert!(html.contains("<img src=\"https://example.com/ada.png\""));
        assert!(html.contains("rounded-full"));
        assert!(!html.contains("<svg"));
    }

    #[test]
    fn test_missing_photo_renders_silhouette() {
        let styles = styles();
        let ctx = RenderContext::new(&styles, false, None);
        let html = render(&CvData::default(), &PhotoConfig::default(), &ctx).into_string();
        assert!(html.contains("data-placeholder=\"photo\""));
        assert!(html.contains("<svg"));
    }

    #[test]
    fn test_square_photo_and_border() {
        let styles = styles();
        let ctx = RenderContext::new(&styles, false, None);
        let config = PhotoConfig {
            circular: false,
            border: true,
            ..Default::default()
        };
        let html = render(&full_cv(), &config, &ctx).into_string();
        assert!(html.contains("rounded-lg"));
        assert!(html.contains("border-4"));
    }

    #[test]
    fn test_size_presets_shrink_in_preview() {
        for size in [PhotoSize::Large, PhotoSize::Medium, PhotoSize::Small] {
            assert_ne!(size_class(size, false), size_class(size, true));
        }
        let styles = styles();
        let thumb = RenderContext::new(&styles, true, None);
        let config = PhotoConfig {
            size: PhotoSize::Large,
            ..Default::default()
        };
        let html = render(&full_cv(), &config, &thumb).into_string();
        assert!(html.contains("w-16 h-16"));
    }
}
