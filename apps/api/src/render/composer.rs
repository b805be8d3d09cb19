//! Arranges section renderers into the column structure a template asks for.

use maud::{html, Markup};

use crate::models::cv::CvData;
use crate::render::context::{RenderContext, Surface, TextRole};
use crate::render::sections::render_slot;
use crate::templates::config::{
    Column, DynamicLayout, SidebarPosition, SingleLayout, ThreeColumnLayout, TwoColumnLayout,
    TwoColumnWithHeaderLayout,
};
use crate::templates::sections::SectionSlot;

pub const WATERMARK_TEXT: &str = "Unlock PDF for €1.99";

const DEFAULT_SINGLE_CLASS: &str = "p-8 space-y-6";
const DEFAULT_SIDEBAR_CLASS: &str = "w-1/3 p-6 space-y-6";
const DEFAULT_CONTENT_CLASS: &str = "w-2/3 p-8 space-y-6";
const DEFAULT_HEADER_CLASS: &str = "";
const DEFAULT_THIRD_CLASS: &str = "p-5 space-y-5";

/// Renders `layout` for `data`. Produces nothing when every section list is empty.
pub fn compose_layout(
    data: &CvData,
    layout: &DynamicLayout,
    show_watermark: bool,
    ctx: &RenderContext,
) -> Markup {
    let body = match layout {
        DynamicLayout::Single(single) => single_column(data, single, ctx),
        DynamicLayout::TwoColumn(two) => two_column(data, two, ctx),
        DynamicLayout::TwoColumnWithHeader(with_header) => {
            two_column_with_header(data, with_header, ctx)
        }
        DynamicLayout::ThreeColumn(three) => three_column(data, three, ctx),
    };

    if body.0.is_empty() {
        return html! {};
    }
    frame(body, show_watermark, ctx)
}

/// Outer document container: template fonts and colours, optional preview
/// padding and the watermark overlay.
pub(crate) fn frame(body: Markup, show_watermark: bool, ctx: &RenderContext) -> Markup {
    let mut class = String::from("relative overflow-hidden");
    if show_watermark {
        class.push_str(" select-none");
    }
    if ctx.preview {
        if let Some(padding) = ctx.preview_padding {
            class.push(' ');
            class.push_str(padding);
        }
    }
    let style = format!(
        "font-family: {}; color: {}; background-color: {};",
        ctx.styles.font_family, ctx.styles.text_color, ctx.styles.background_color
    );

    html! {
        div data-cv="document" class=(class) style=(style) {
            (body)
            @if show_watermark {
                (watermark(ctx))
            }
        }
    }
}

fn watermark(ctx: &RenderContext) -> Markup {
    html! {
        div data-watermark="true" aria-hidden="true"
            class="absolute inset-0 pointer-events-none flex items-center justify-center" {
            span class=(format!("{} whitespace-nowrap", ctx.text(TextRole::Watermark)))
                style="transform: rotate(-30deg); color: rgba(17, 24, 39, 0.15);" {
                (WATERMARK_TEXT)
            }
        }
    }
}

/// One column container. Omitted entirely when the column lists no sections.
fn column(
    data: &CvData,
    sections: &[SectionSlot],
    name: &str,
    class: &str,
    style: Option<String>,
    ctx: &RenderContext,
) -> Markup {
    if sections.is_empty() {
        return html! {};
    }
    html! {
        div data-column=(name) class=(class) style=[style] {
            @for slot in sections {
                (render_slot(data, slot, ctx))
            }
        }
    }
}

fn sidebar_style(ctx: &RenderContext) -> Option<String> {
    Some(format!(
        "background-color: {}; color: {};",
        ctx.styles.sidebar_background, ctx.styles.sidebar_text_color
    ))
}

fn single_column(data: &CvData, single: &SingleLayout, ctx: &RenderContext) -> Markup {
    column(
        data,
        &single.sections,
        "main",
        single.container_class.as_deref().unwrap_or(DEFAULT_SINGLE_CLASS),
        None,
        ctx,
    )
}

/// Sidebar and content side by side, ordered by `position`.
fn side_by_side(
    data: &CvData,
    sidebar: &Column,
    content: &Column,
    sidebar_class: Option<&str>,
    content_class: Option<&str>,
    position: SidebarPosition,
    ctx: &RenderContext,
) -> Markup {
    let sidebar_ctx = ctx.on_surface(Surface::Sidebar);
    let sidebar = column(
        data,
        &sidebar.sections,
        "sidebar",
        sidebar_class.unwrap_or(DEFAULT_SIDEBAR_CLASS),
        sidebar_style(ctx),
        &sidebar_ctx,
    );
    let content = column(
        data,
        &content.sections,
        "content",
        content_class.unwrap_or(DEFAULT_CONTENT_CLASS),
        None,
        ctx,
    );

    if sidebar.0.is_empty() && content.0.is_empty() {
        return html! {};
    }

    html! {
        div class="flex items-stretch" {
            @match position {
                SidebarPosition::Left => { (sidebar) (content) }
                SidebarPosition::Right => { (content) (sidebar) }
            }
        }
    }
}

fn two_column(data: &CvData, two: &TwoColumnLayout, ctx: &RenderContext) -> Markup {
    let columns = side_by_side(
        data,
        &two.sidebar,
        &two.content,
        two.sidebar_class.as_deref(),
        two.content_class.as_deref(),
        two.sidebar_position,
        ctx,
    );
    if columns.0.is_empty() {
        return columns;
    }
    html! {
        div data-layout="two-column" { (columns) }
    }
}

fn two_column_with_header(
    data: &CvData,
    layout: &TwoColumnWithHeaderLayout,
    ctx: &RenderContext,
) -> Markup {
    let header = column(
        data,
        &layout.header.sections,
        "header",
        layout.header_class.as_deref().unwrap_or(DEFAULT_HEADER_CLASS),
        None,
        ctx,
    );
    let columns = side_by_side(
        data,
        &layout.sidebar,
        &layout.content,
        layout.sidebar_class.as_deref(),
        layout.content_class.as_deref(),
        layout.sidebar_position,
        ctx,
    );
    if header.0.is_empty() && columns.0.is_empty() {
        return html! {};
    }
    html! {
        div data-layout="two-column-with-header" {
            (header)
            (columns)
        }
    }
}

fn three_column(data: &CvData, three: &ThreeColumnLayout, ctx: &RenderContext) -> Markup {
    let columns = [
        (&three.left, "left", three.left_class.as_deref()),
        (&three.center, "center", three.center_class.as_deref()),
        (&three.right, "right", three.right_class.as_deref()),
    ]
    .into_iter()
    .map(|(col, name, class)| {
        column(
            data,
            &col.sections,
            name,
            class.unwrap_or(DEFAULT_THIRD_CLASS),
            None,
            ctx,
        )
    })
    .collect::<Vec<_>>();

    if columns.iter().all(|c| c.0.is_empty()) {
        return html! {};
    }
    html! {
        div data-layout="three-column" class="grid grid-cols-3" {
            @for col in columns {
                (col)
            }
        }
    }
}
