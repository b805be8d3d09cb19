//! Explicit style context passed by parameter to every section renderer.

use crate::templates::config::TemplateStyles;

/// Which background a section is drawn on. Decides heading and text colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Page,
    Sidebar,
}

/// Typographic roles. Each maps to a full-size and a thumbnail class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    Name,
    Position,
    SectionTitle,
    EntryTitle,
    Body,
    Meta,
    Watermark,
}

#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub styles: &'a TemplateStyles,
    /// Thumbnail rendering: shrinks typography and photo sizes, nothing else.
    pub preview: bool,
    pub preview_padding: Option<&'a str>,
    pub surface: Surface,
}

impl<'a> RenderContext<'a> {
    pub fn new(styles: &'a TemplateStyles, preview: bool, preview_padding: Option<&'a str>) -> Self {
        Self {
            styles,
            preview,
            preview_padding,
            surface: Surface::Page,
        }
    }

    pub fn on_surface(&self, surface: Surface) -> Self {
        Self { surface, ..*self }
    }

    pub fn text(&self, role: TextRole) -> &'static str {
        match (role, self.preview) {
            (TextRole::Name, false) => "text-3xl font-bold leading-tight",
            (TextRole::Name, true) => "text-base font-bold leading-tight",
            (TextRole::Position, false) => "text-lg",
            (TextRole::Position, true) => "text-[9px]",
            (TextRole::SectionTitle, false) => "text-sm font-semibold uppercase tracking-wider",
            (TextRole::SectionTitle, true) => "text-[8px] font-semibold uppercase tracking-wider",
            (TextRole::EntryTitle, false) => "text-base font-semibold",
            (TextRole::EntryTitle, true) => "text-[8px] font-semibold",
            (TextRole::Body, false) => "text-sm",
            (TextRole::Body, true) => "text-[7px]",
            (TextRole::Meta, false) => "text-xs",
            (TextRole::Meta, true) => "text-[6px]",
            (TextRole::Watermark, false) => "text-5xl font-bold",
            (TextRole::Watermark, true) => "text-xl font-bold",
        }
    }

    pub fn heading_color(&self) -> &'a str {
        match self.surface {
            Surface::Page => &self.styles.primary_color,
            Surface::Sidebar => &self.styles.sidebar_text_color,
        }
    }

    pub fn text_color(&self) -> &'a str {
        match self.surface {
            Surface::Page => &self.styles.text_color,
            Surface::Sidebar => &self.styles.sidebar_text_color,
        }
    }

    pub fn muted_color(&self) -> &'a str {
        match self.surface {
            Surface::Page => &self.styles.muted_color,
            Surface::Sidebar => &self.styles.sidebar_text_color,
        }
    }

    pub fn accent_color(&self) -> &'a str {
        match self.surface {
            Surface::Page => &self.styles.accent_color,
            Surface::Sidebar => &self.styles.sidebar_text_color,
        }
    }

    pub fn heading_style(&self) -> String {
        format!(
            "color: {}; font-family: {};",
            self.heading_color(),
            self.styles.heading_font()
        )
    }

    pub fn color_style(color: &str) -> String {
        format!("color: {color};")
    }
}
