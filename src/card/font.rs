//! TrueType loading, measurement and glyph outlines.
//!
//! Text is positioned by its ascender line: a string drawn at `y` has its
//! font ascender at `y` and its baseline at `y + ascender`. Measured bounds
//! are the ink box relative to that origin, so a lowercase `x` starts below
//! `top = 0`. Kerning is not applied; glyphs advance by their horizontal
//! metrics only.

use super::RenderError;
use super::layout::{FontFace, TextMetrics, TextStyle};
use super::text::TextBounds;
use crate::config::FontsConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tiny_skia::PathBuilder;
use ttf_parser::{Face, GlyphId, OutlineBuilder};

/// Raw bytes of a font file that has been checked to parse.
#[derive(Debug)]
pub struct FontFile {
    path: PathBuf,
    data: Vec<u8>,
}

impl FontFile {
    pub fn load(path: &Path) -> Result<Self, RenderError> {
        if !path.is_file() {
            return Err(RenderError::MissingAsset(path.to_path_buf()));
        }
        let font = Self {
            path: path.to_path_buf(),
            data: fs::read(path)?,
        };
        font.face()?;
        Ok(font)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn face(&self) -> Result<Face<'_>, RenderError> {
        Face::parse(&self.data, 0).map_err(|e| RenderError::InvalidFont {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }
}

/// The three faces a card uses.
#[derive(Debug)]
pub struct FontSet {
    sans_bold: FontFile,
    sans_regular: FontFile,
    mono_regular: FontFile,
}

impl FontSet {
    /// Load every configured font from `dir`. The first missing or broken
    /// file is the error.
    pub fn load(dir: &Path, names: &FontsConfig) -> Result<Self, RenderError> {
        Ok(Self {
            sans_bold: FontFile::load(&dir.join(&names.sans_bold))?,
            sans_regular: FontFile::load(&dir.join(&names.sans_regular))?,
            mono_regular: FontFile::load(&dir.join(&names.mono_regular))?,
        })
    }

    pub fn typesetter(&self) -> Result<Typesetter<'_>, RenderError> {
        Ok(Typesetter {
            sans_bold: self.sans_bold.face()?,
            sans_regular: self.sans_regular.face()?,
            mono_regular: self.mono_regular.face()?,
        })
    }
}

/// Parsed faces, borrowed from a [`FontSet`].
pub struct Typesetter<'a> {
    sans_bold: Face<'a>,
    sans_regular: Face<'a>,
    mono_regular: Face<'a>,
}

impl<'a> Typesetter<'a> {
    fn scaled(&self, style: TextStyle) -> Scaled<'_, 'a> {
        let face = match style.face() {
            FontFace::SansBold => &self.sans_bold,
            FontFace::SansRegular => &self.sans_regular,
            FontFace::MonoRegular => &self.mono_regular,
        };
        Scaled {
            face,
            scale: style.size() / f32::from(face.units_per_em()),
        }
    }

    /// Glyph outlines of `text` drawn with its ascender line at `(x, y)`.
    ///
    /// `None` when nothing has ink (empty or whitespace-only text).
    pub fn outline(&self, style: TextStyle, text: &str, x: f32, y: f32) -> Option<tiny_skia::Path> {
        let font = self.scaled(style);
        let mut builder = PathBuilder::new();
        let baseline = y + font.ascent();
        let mut pen = x;
        for glyph in font.glyphs(text) {
            let mut sink = GlyphSink {
                builder: &mut builder,
                scale: font.scale,
                x: pen,
                baseline,
            };
            font.face.outline_glyph(glyph, &mut sink);
            pen += font.advance(glyph);
        }
        builder.finish()
    }
}

impl TextMetrics for Typesetter<'_> {
    fn bounds(&self, style: TextStyle, text: &str) -> TextBounds {
        self.scaled(style).bounds(text)
    }
}

/// A face at one pixel size.
struct Scaled<'f, 'a> {
    face: &'f Face<'a>,
    scale: f32,
}

impl Scaled<'_, '_> {
    fn ascent(&self) -> f32 {
        f32::from(self.face.ascender()) * self.scale
    }

    fn glyphs<'t>(&'t self, text: &'t str) -> impl Iterator<Item = GlyphId> + 't {
        let face = self.face;
        text.chars()
            .map(move |c| face.glyph_index(c).unwrap_or(GlyphId(0)))
    }

    fn advance(&self, glyph: GlyphId) -> f32 {
        f32::from(self.face.glyph_hor_advance(glyph).unwrap_or(0)) * self.scale
    }

    fn bounds(&self, text: &str) -> TextBounds {
        let ascent = self.ascent();
        let mut pen = 0.0f32;
        let mut ink: Option<(f32, f32, f32, f32)> = None;

        for glyph in self.glyphs(text) {
            if let Some(rect) = self.face.glyph_bounding_box(glyph) {
                let left = pen + f32::from(rect.x_min) * self.scale;
                let right = pen + f32::from(rect.x_max) * self.scale;
                let top = ascent - f32::from(rect.y_max) * self.scale;
                let bottom = ascent - f32::from(rect.y_min) * self.scale;
                ink = Some(match ink {
                    None => (left, top, right, bottom),
                    Some((l, t, r, b)) => (l.min(left), t.min(top), r.max(right), b.max(bottom)),
                });
            }
            pen += self.advance(glyph);
        }

        match ink {
            Some((left, top, right, bottom)) => TextBounds {
                left: left.floor() as i32,
                top: top.floor() as i32,
                right: right.ceil() as i32,
                bottom: bottom.ceil() as i32,
            },
            // Whitespace only: no ink, but it still takes up room.
            None => TextBounds {
                left: 0,
                top: 0,
                right: pen.round() as i32,
                bottom: 0,
            },
        }
    }
}

/// Feeds font-unit outlines into a pixel-space path, flipping y.
struct GlyphSink<'p> {
    builder: &'p mut PathBuilder,
    scale: f32,
    x: f32,
    baseline: f32,
}

impl GlyphSink<'_> {
    fn point(&self, x: f32, y: f32) -> (f32, f32) {
        (self.x + x * self.scale, self.baseline - y * self.scale)
    }
}

impl OutlineBuilder for GlyphSink<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.point(x, y);
        self.builder.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.point(x, y);
        self.builder.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (x1, y1) = self.point(x1, y1);
        let (x, y) = self.point(x, y);
        self.builder.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (x1, y1) = self.point(x1, y1);
        let (x2, y2) = self.point(x2, y2);
        let (x, y) = self.point(x, y);
        self.builder.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.builder.close();
    }
}
