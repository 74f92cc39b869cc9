//! Text fitting: greedy wrapping, ellipsis truncation, reading time.
//!
//! All functions here are pure. Widths come from a [`Measure`], so tests can
//! use a fixed-advance measurer instead of a real font.

/// Ink bounding box of a string, in pixels, relative to the draw origin
/// (left edge of the pen, ascender line).
///
/// `left` can be non-zero when the first glyph has side bearing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBounds {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// Something that can measure a string in one font at one size.
pub trait Measure {
    fn bounds(&self, text: &str) -> TextBounds;

    fn width(&self, text: &str) -> i32 {
        self.bounds(text).width()
    }
}

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "...";

/// Greedily wrap `text` into exactly `max_lines` lines of at most `max_width`.
///
/// Words that do not fit once `max_lines` lines are committed are dropped.
/// A single word wider than `max_width` still gets its own line; pair with
/// [`truncate_with_ellipsis`] when that matters. Missing lines are empty
/// strings.
pub fn wrap_text(
    text: &str,
    measure: &impl Measure,
    max_width: i32,
    max_lines: usize,
) -> Vec<String> {
    let mut lines: Vec<String> = Vec::with_capacity(max_lines);
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if measure.width(&candidate) <= max_width {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        current = word.to_string();
        if lines.len() >= max_lines {
            current.clear();
            break;
        }
    }

    if !current.is_empty() && lines.len() < max_lines {
        lines.push(current);
    }
    lines.resize(max_lines, String::new());
    lines
}

/// Shorten `text` to the longest char prefix that fits with [`ELLIPSIS`].
///
/// Text that already fits is returned unchanged; when not even one char
/// fits, the ellipsis alone is returned. Empty stays empty.
pub fn truncate_with_ellipsis(text: &str, measure: &impl Measure, max_width: i32) -> String {
    if text.is_empty() || measure.width(text) <= max_width {
        return text.to_string();
    }

    // Prefix ends, longest first; the full text already failed to fit.
    let ends: Vec<usize> = text.char_indices().map(|(i, _)| i).skip(1).collect();
    for &end in ends.iter().rev() {
        let candidate = format!("{}{}", &text[..end], ELLIPSIS);
        if measure.width(&candidate) <= max_width {
            return candidate;
        }
    }
    ELLIPSIS.to_string()
}

/// Whitespace-separated word count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Reading time label, e.g. `"3 min read"`; never below one minute.
///
/// Halves round to even, so 500 words at 200 wpm is 2 minutes.
pub fn estimate_read_time(text: &str, words_per_minute: u32) -> String {
    if text.is_empty() || words_per_minute == 0 {
        return "1 min read".to_string();
    }
    let minutes = (word_count(text) as f64 / f64::from(words_per_minute)).round_ties_even();
    format!("{} min read", (minutes as u64).max(1))
}
