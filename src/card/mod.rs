//! Social-preview card rendering.
//!
//! Rendering is split so each step can be tested on its own:
//!
//! | Module | Role |
//! |--------|------|
//! | [`text`] | Pure wrapping, truncation and reading-time helpers |
//! | [`layout`] | Metadata + theme → positioned [`DrawOp`](layout::DrawOp)s |
//! | [`font`] | TrueType loading, measurement and glyph outlines |
//! | [`raster`] | Draw ops → pixels → PNG |
//!
//! The [`CardRenderer`] trait is the seam the generator calls through; the
//! production implementation is [`RasterRenderer`].

pub mod font;
pub mod layout;
pub mod raster;
pub mod text;

use crate::config::{FontsConfig, OgConfig};
use crate::content::ContentMetadata;
use font::FontSet;
use layout::CardTheme;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Missing asset: {}", .0.display())]
    MissingAsset(PathBuf),
    #[error("Invalid font {}: {reason}", path.display())]
    InvalidFont { path: PathBuf, reason: String },
    #[error("Cannot allocate a {0}x{1} canvas")]
    Canvas(u32, u32),
    #[error("PNG encode failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Renders one card image for one piece of content.
pub trait CardRenderer {
    fn render(&self, meta: &ContentMetadata, output: &Path) -> Result<(), RenderError>;
}

/// Measures with real fonts, paints with tiny-skia, encodes PNG.
///
/// Fonts are loaded on every call, so a missing font fails each card
/// individually instead of the whole run.
#[derive(Debug, Clone)]
pub struct RasterRenderer {
    theme: CardTheme,
    fonts_dir: PathBuf,
    fonts: FontsConfig,
}

impl RasterRenderer {
    pub fn new(theme: CardTheme, fonts_dir: PathBuf, fonts: FontsConfig) -> Self {
        Self {
            theme,
            fonts_dir,
            fonts,
        }
    }

    /// Renderer for a project root, with fonts resolved from the config.
    pub fn from_config(config: &OgConfig, root: &Path) -> Self {
        Self::new(
            CardTheme::from_config(config),
            config.resolve_paths(root).fonts,
            config.fonts.clone(),
        )
    }
}

impl CardRenderer for RasterRenderer {
    fn render(&self, meta: &ContentMetadata, output: &Path) -> Result<(), RenderError> {
        let fonts = FontSet::load(&self.fonts_dir, &self.fonts)?;
        let typesetter = fonts.typesetter()?;
        let card = layout::compose(meta, &self.theme, &typesetter);
        let pixmap = raster::paint(&card, &typesetter)?;
        raster::encode_png(&pixmap, output)
    }
}
