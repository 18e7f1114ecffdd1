use dioxus::prelude::*;

pub const QUALITY_GLYPH: &str = "★";

/// Upper bound on rendered glyphs; larger ratings are shown as this many.
pub const MAX_QUALITY_GLYPHS: u32 = 10;

/// Star glyphs shown in the quality badge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BadgeModel {
    glyphs: Vec<&'static str>,
}

impl BadgeModel {
    /// Replace any previous glyphs with exactly `quality` new ones, capped
    /// at [`MAX_QUALITY_GLYPHS`].
    pub fn render(&mut self, quality: u32) {
        let count = quality.min(MAX_QUALITY_GLYPHS) as usize;
        self.glyphs.clear();
        self.glyphs.extend(std::iter::repeat(QUALITY_GLYPH).take(count));
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    pub fn glyphs(&self) -> &[&'static str] {
        &self.glyphs
    }
}

#[component]
pub fn QualityBadge(badge: BadgeModel, error: Option<String>) -> Element {
    let count = badge.glyph_count();

    rsx! {
        span {
            id: "qualityLevelBadge",
            class: "quality-badge",
            title: "{count}",
            for (index, glyph) in badge.glyphs().iter().enumerate() {
                span { key: "{index}", class: "quality-badge__glyph", aria_hidden: "true", "{glyph}" }
            }
            if let Some(err) = error {
                span { class: "quality-badge__error", "{err}" }
            }
        }
    }
}
