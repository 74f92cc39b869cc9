//! Card layout: metadata in, positioned draw operations out.
//!
//! ```text
//! ┌─┬───────────────────────────────────────────────────────────┐
//! │ │  bgslabs                                      2024-03-02  │
//! │ │    Title line one                                         │
//! │ │    Title line two                                         │
//! │ │    ───────────────────────────────────────────────────    │ ← moves with title
//! │ │    BLOG | RUST | CLI                                      │
//! │ │    2 min read  •  ~412 words                              │
//! │ │    Description line one                                   │
//! │ │    Description line two                                   │
//! │ │  ─────────────────────────────────────────────────────    │
//! │ │  bgslabs                                   Burak Güngör   │
//! └─┴───────────────────────────────────────────────────────────┘
//! ```
//!
//! Every box is a fixed offset except the title divider, which sits below the
//! last non-empty title line; the meta, info and description lines hang off
//! it. Only the text inside a box is dynamic.

use super::text::{
    Measure, TextBounds, estimate_read_time, truncate_with_ellipsis, word_count, wrap_text,
};
use crate::config::{OgConfig, Palette, Rgb};
use crate::content::{ContentMetadata, format_date};

pub const CANVAS_WIDTH: u32 = 1200;
pub const CANVAS_HEIGHT: u32 = 630;
const PADDING: i32 = 64;
const ACCENT_WIDTH: i32 = 12;
/// Extra inset of text blocks and rules past the padding.
const INSET: i32 = 20;

const TITLE_LINES: usize = 2;
const TITLE_OFFSET: i32 = 50;
const TITLE_LINE_GAP: i32 = 8;
/// Vertical space reserved per non-empty title line when placing the divider.
const TITLE_ROW: i32 = 60;
const TITLE_DIVIDER_GAP: i32 = 15;
const META_OFFSET: i32 = 25;
const INFO_OFFSET: i32 = 30;
const DESCRIPTION_LINES: usize = 2;
const DESCRIPTION_OFFSET: i32 = 70;
const DESCRIPTION_LINE_GAP: i32 = 6;
const FOOTER_TEXT_OFFSET: i32 = 15;
const RULE_THICKNESS: u32 = 2;

/// Font files a card needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFace {
    SansBold,
    SansRegular,
    MonoRegular,
}

/// A face at a size, one per text block kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Brand,
    Title,
    Author,
    Date,
    Small,
    Description,
}

impl TextStyle {
    pub fn face(self) -> FontFace {
        match self {
            TextStyle::Title | TextStyle::Author => FontFace::SansBold,
            TextStyle::Brand | TextStyle::Description => FontFace::SansRegular,
            TextStyle::Date | TextStyle::Small => FontFace::MonoRegular,
        }
    }

    /// Pixel size (em height).
    pub fn size(self) -> f32 {
        match self {
            TextStyle::Title => 52.0,
            TextStyle::Description => 28.0,
            TextStyle::Author => 24.0,
            TextStyle::Date => 22.0,
            TextStyle::Brand => 20.0,
            TextStyle::Small => 18.0,
        }
    }
}

/// Text measurement for every [`TextStyle`].
pub trait TextMetrics {
    fn bounds(&self, style: TextStyle, text: &str) -> TextBounds;
}

/// One style of a [`TextMetrics`], usable by the wrap/truncate helpers.
struct Styled<'a, M: ?Sized> {
    metrics: &'a M,
    style: TextStyle,
}

impl<M: TextMetrics + ?Sized> Measure for Styled<'_, M> {
    fn bounds(&self, text: &str) -> TextBounds {
        self.metrics.bounds(self.style, text)
    }
}

/// Everything about a card that does not depend on the content.
///
/// Built once per run from the config and shared by every card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardTheme {
    pub width: u32,
    pub height: u32,
    pub padding: i32,
    pub accent_width: i32,
    pub palette: Palette,
    pub brand_primary: String,
    pub brand_secondary: String,
    pub author: String,
    pub site_name: String,
    pub words_per_minute: u32,
    pub max_tags: usize,
}

impl CardTheme {
    pub fn from_config(config: &OgConfig) -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            padding: PADDING,
            accent_width: ACCENT_WIDTH,
            palette: config.palette.clone(),
            brand_primary: config.site.brand_primary.clone(),
            brand_secondary: config.site.brand_secondary.clone(),
            author: config.site.author.clone(),
            site_name: config.site.name.clone(),
            words_per_minute: config.card.words_per_minute,
            max_tags: config.card.max_tags,
        }
    }
}

impl Default for CardTheme {
    fn default() -> Self {
        Self::from_config(&OgConfig::default())
    }
}

/// A single paint step. Text `y` is the ascender line.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Rect {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        color: Rgb,
    },
    Text {
        x: i32,
        y: i32,
        text: String,
        style: TextStyle,
        color: Rgb,
    },
}

/// A fully positioned card, ready to rasterize.
#[derive(Debug, Clone, PartialEq)]
pub struct CardLayout {
    pub width: u32,
    pub height: u32,
    pub background: Rgb,
    /// Painted in order over the background.
    pub ops: Vec<DrawOp>,
}

impl CardLayout {
    fn rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Rgb) {
        self.ops.push(DrawOp::Rect {
            x,
            y,
            width: width.max(0) as u32,
            height: height.max(0) as u32,
            color,
        });
    }

    fn rule(&mut self, x1: i32, x2: i32, y: i32, color: Rgb) {
        self.rect(x1, y, x2 - x1, RULE_THICKNESS as i32, color);
    }

    fn text(&mut self, x: i32, y: i32, text: &str, style: TextStyle, color: Rgb) {
        if text.is_empty() {
            return;
        }
        self.ops.push(DrawOp::Text {
            x,
            y,
            text: text.to_string(),
            style,
            color,
        });
    }
}

/// `CATEGORY | TAG | TAG`, upper-cased, at most `max_tags` tags.
///
/// `None` when there is neither a category nor a tag.
pub fn meta_line(category: &str, tags: &[String], max_tags: usize) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();
    if !category.is_empty() {
        parts.push(category.to_uppercase());
    }
    let shown: Vec<&str> = tags.iter().take(max_tags).map(String::as_str).collect();
    if !shown.is_empty() {
        parts.push(shown.join(" | ").to_uppercase());
    }
    (!parts.is_empty()).then(|| parts.join(" | "))
}

/// `N min read`, plus `~W words` when there is a description.
pub fn info_line(description: &str, words_per_minute: u32) -> String {
    let read_time = estimate_read_time(description, words_per_minute);
    if description.is_empty() {
        read_time
    } else {
        format!("{read_time}  •  ~{} words", word_count(description))
    }
}

/// Position every block of the card for one piece of content.
pub fn compose(
    meta: &ContentMetadata,
    theme: &CardTheme,
    metrics: &impl TextMetrics,
) -> CardLayout {
    let palette = &theme.palette;
    let width = theme.width as i32;
    let height = theme.height as i32;
    let pad = theme.padding;
    let frame_left = pad + INSET;
    let text_left = frame_left + theme.accent_width;
    let right = width - pad - INSET;
    let max_width = (width - 2 * pad) - theme.accent_width - INSET;

    let mut card = CardLayout {
        width: theme.width,
        height: theme.height,
        background: palette.background,
        ops: Vec::new(),
    };

    card.rect(0, 0, theme.accent_width, height, palette.accent_green);

    // Brand mark, second run butts against the first.
    let primary_width = metrics.bounds(TextStyle::Brand, &theme.brand_primary).width();
    card.text(
        frame_left,
        pad,
        &theme.brand_primary,
        TextStyle::Brand,
        palette.text_primary,
    );
    card.text(
        frame_left + primary_width,
        pad,
        &theme.brand_secondary,
        TextStyle::Brand,
        palette.text_secondary,
    );

    let date = format_date(&meta.date);
    if !date.is_empty() {
        let date_width = metrics.bounds(TextStyle::Date, &date).width();
        card.text(
            right - date_width,
            pad,
            &date,
            TextStyle::Date,
            palette.text_tertiary,
        );
    }

    // Title: wrap, then truncate each line for words wider than the box.
    let title_font = Styled {
        metrics,
        style: TextStyle::Title,
    };
    let title_y = pad + TITLE_OFFSET;
    let title_lines: Vec<String> = wrap_text(&meta.title, &title_font, max_width, TITLE_LINES)
        .iter()
        .map(|line| truncate_with_ellipsis(line, &title_font, max_width))
        .collect();
    for (i, line) in title_lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        let line_height = title_font.bounds(line).height();
        card.text(
            text_left,
            title_y + i as i32 * (line_height + TITLE_LINE_GAP),
            line,
            TextStyle::Title,
            palette.text_primary,
        );
    }

    let filled = title_lines.iter().filter(|l| !l.is_empty()).count() as i32;
    let divider_y = title_y + filled * TITLE_ROW + TITLE_DIVIDER_GAP;
    card.rule(text_left, right, divider_y, palette.text_primary);

    let meta_y = divider_y + META_OFFSET;
    if let Some(line) = meta_line(meta.category.label(), &meta.tags, theme.max_tags) {
        card.text(text_left, meta_y, &line, TextStyle::Small, palette.accent_blue);
    }

    card.text(
        text_left,
        meta_y + INFO_OFFSET,
        &info_line(&meta.description, theme.words_per_minute),
        TextStyle::Small,
        palette.text_tertiary,
    );

    // Description wraps but is not truncated.
    let description_font = Styled {
        metrics,
        style: TextStyle::Description,
    };
    let description_y = meta_y + DESCRIPTION_OFFSET;
    if !meta.description.is_empty() {
        let lines = wrap_text(
            &meta.description,
            &description_font,
            max_width,
            DESCRIPTION_LINES,
        );
        for (i, line) in lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            let line_height = description_font.bounds(line).height();
            card.text(
                text_left,
                description_y + i as i32 * (line_height + DESCRIPTION_LINE_GAP),
                line,
                TextStyle::Description,
                palette.text_secondary,
            );
        }
    }

    let footer_y = height - pad - INSET;
    card.rule(frame_left, right, footer_y, palette.text_primary);

    let author_width = metrics.bounds(TextStyle::Author, &theme.author).width();
    card.text(
        right - author_width,
        footer_y + FOOTER_TEXT_OFFSET,
        &theme.author,
        TextStyle::Author,
        palette.text_primary,
    );
    card.text(
        frame_left,
        footer_y + FOOTER_TEXT_OFFSET,
        &theme.site_name,
        TextStyle::Small,
        palette.text_tertiary,
    );

    card
}
