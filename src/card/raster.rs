//! Rasterize a [`CardLayout`] with tiny-skia and write it as PNG.

use super::RenderError;
use super::font::Typesetter;
use super::layout::{CardLayout, DrawOp};
use crate::config::Rgb;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::RgbImage;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tiny_skia::{Color, FillRule, Paint, Pixmap, Rect, Transform};

fn paint_for(color: Rgb) -> Paint<'static> {
    let [r, g, b] = color.0;
    let mut paint = Paint::default();
    paint.set_color(Color::from_rgba8(r, g, b, 255));
    paint.anti_alias = true;
    paint
}

/// Paint every op of `layout` over its background, in order.
pub fn paint(layout: &CardLayout, fonts: &Typesetter<'_>) -> Result<Pixmap, RenderError> {
    let mut pixmap = Pixmap::new(layout.width, layout.height)
        .ok_or(RenderError::Canvas(layout.width, layout.height))?;
    let [r, g, b] = layout.background.0;
    pixmap.fill(Color::from_rgba8(r, g, b, 255));

    for op in &layout.ops {
        match op {
            DrawOp::Rect {
                x,
                y,
                width,
                height,
                color,
            } => {
                // Zero-sized rects are skipped.
                if let Some(rect) =
                    Rect::from_xywh(*x as f32, *y as f32, *width as f32, *height as f32)
                {
                    pixmap.fill_rect(rect, &paint_for(*color), Transform::identity(), None);
                }
            }
            DrawOp::Text {
                x,
                y,
                text,
                style,
                color,
            } => {
                if let Some(path) = fonts.outline(*style, text, *x as f32, *y as f32) {
                    pixmap.fill_path(
                        &path,
                        &paint_for(*color),
                        FillRule::Winding,
                        Transform::identity(),
                        None,
                    );
                }
            }
        }
    }
    Ok(pixmap)
}

/// Write `pixmap` as an 8-bit RGB PNG, replacing any existing file.
pub fn encode_png(pixmap: &Pixmap, path: &Path) -> Result<(), RenderError> {
    let rgb: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|px| {
            let c = px.demultiply();
            [c.red(), c.green(), c.blue()]
        })
        .collect();
    let image = RgbImage::from_raw(pixmap.width(), pixmap.height(), rgb)
        .ok_or(RenderError::Canvas(pixmap.width(), pixmap.height()))?;

    let writer = BufWriter::new(File::create(path)?);
    let encoder =
        PngEncoder::new_with_quality(writer, CompressionType::Best, FilterType::Adaptive);
    image.write_with_encoder(encoder)?;
    Ok(())
}
