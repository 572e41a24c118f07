//! Text measurement and drawing.

use std::sync::Arc;

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;
use swash::scale::{Render, ScaleContext, Source, StrikeWith};
use swash::shape::ShapeContext;
use swash::zeno::{Format, Vector};

use crate::font::Typeface;
use crate::glyphs::{GLYPH_HEIGHT, GLYPH_WIDTH, ascii_glyph};

/// Advance of a narrow (ASCII) glyph in the built-in font, in pixels.
pub const BUILTIN_NARROW_ADVANCE: u32 = 6;
/// Advance of a wide (CJK, symbol) glyph in the built-in font, in pixels.
pub const BUILTIN_WIDE_ADVANCE: u32 = 11;
/// Line height of the built-in font, independent of the requested size.
pub const BUILTIN_LINE_HEIGHT: u32 = 11;

/// Rows above an ASCII bitmap inside its cell.
const BUILTIN_GLYPH_TOP: u32 = (BUILTIN_LINE_HEIGHT - GLYPH_HEIGHT) / 2;

/// Horizontal metrics needed by the layout templates.
pub trait TextMeasure {
    /// Advance width of `text` at `size` pixels.
    fn text_width(&mut self, text: &str, size: f32) -> f32;
    /// Height of one line of text at `size` pixels.
    fn line_height(&mut self, size: f32) -> f32;
}

/// Shapes, measures and draws text with one shared [`Typeface`].
///
/// Owns the swash scratch contexts; the typeface itself is never mutated.
pub struct TextEngine {
    typeface: Arc<Typeface>,
    shape_context: ShapeContext,
    scale_context: ScaleContext,
}

impl TextEngine {
    pub fn new(typeface: Arc<Typeface>) -> Self {
        Self {
            typeface,
            shape_context: ShapeContext::new(),
            scale_context: ScaleContext::new(),
        }
    }

    pub fn typeface(&self) -> &Typeface {
        &self.typeface
    }

    /// Draw `text` with its top-left corner at `(x, y)`.
    pub fn draw(
        &mut self,
        img: &mut RgbImage,
        text: &str,
        (x, y): (i32, i32),
        size: f32,
        color: Rgb<u8>,
    ) {
        match self.typeface.as_ref() {
            Typeface::Outline(font) => {
                let Some(font) = font.font_ref() else {
                    return;
                };
                let mut shaper = self.shape_context.builder(font).size(size).build();
                shaper.add_str(text);
                let mut scaler = self.scale_context.builder(font).size(size).build();

                let mut pen_x = x as f32;
                let pen_y = y as f32 + size;

                shaper.shape_with(|cluster| {
                    for glyph in cluster.glyphs {
                        let rendered = Render::new(&[
                            Source::ColorOutline(0),
                            Source::ColorBitmap(StrikeWith::BestFit),
                            Source::Outline,
                        ])
                        .format(Format::Alpha)
                        .offset(Vector::new(glyph.x, glyph.y))
                        .render(&mut scaler, glyph.id);

                        if let Some(mask) = rendered {
                            let glyph_x = (pen_x + mask.placement.left as f32) as i32;
                            let glyph_y = (pen_y - mask.placement.top as f32) as i32;
                            blend_mask(
                                img,
                                &mask.data,
                                mask.placement.width,
                                mask.placement.height,
                                (glyph_x, glyph_y),
                                color,
                            );
                        }
                        pen_x += glyph.advance;
                    }
                });
            }
            Typeface::Builtin => draw_builtin(img, text, x, y, color),
        }
    }
}

impl TextMeasure for TextEngine {
    fn text_width(&mut self, text: &str, size: f32) -> f32 {
        match self.typeface.as_ref() {
            Typeface::Outline(font) => {
                let Some(font) = font.font_ref() else {
                    return 0.0;
                };
                let mut shaper = self.shape_context.builder(font).size(size).build();
                shaper.add_str(text);
                let mut width = 0.0;
                shaper.shape_with(|cluster| {
                    for glyph in cluster.glyphs {
                        width += glyph.advance;
                    }
                });
                width
            }
            Typeface::Builtin => builtin_width(text) as f32,
        }
    }

    fn line_height(&mut self, size: f32) -> f32 {
        match self.typeface.as_ref() {
            Typeface::Outline(_) => size,
            Typeface::Builtin => BUILTIN_LINE_HEIGHT as f32,
        }
    }
}

fn builtin_advance(ch: char) -> u32 {
    if ch.is_ascii() {
        BUILTIN_NARROW_ADVANCE
    } else {
        BUILTIN_WIDE_ADVANCE
    }
}

fn builtin_width(text: &str) -> u32 {
    text.chars().map(builtin_advance).sum()
}

/// Printable ASCII is drawn from the 5×7 bitmap table; other non-blank
/// characters have no bitmap and are drawn as an outlined cell.
fn draw_builtin(img: &mut RgbImage, text: &str, x: i32, y: i32, color: Rgb<u8>) {
    let mut pen_x = x;
    for ch in text.chars() {
        let advance = builtin_advance(ch);
        if let Some(glyph) = ascii_glyph(ch) {
            draw_bitmap(img, glyph, (pen_x, y + BUILTIN_GLYPH_TOP as i32), color);
        } else if !ch.is_whitespace() && !ch.is_ascii_control() {
            draw_hollow_rect_mut(
                img,
                Rect::at(pen_x, y).of_size(advance - 1, BUILTIN_LINE_HEIGHT),
                color,
            );
        }
        pen_x += advance as i32;
    }
}

fn draw_bitmap(img: &mut RgbImage, glyph: &[u8; 5], (x, y): (i32, i32), color: Rgb<u8>) {
    for (column, bits) in (0..GLYPH_WIDTH).zip(glyph) {
        for row in 0..GLYPH_HEIGHT {
            if (bits >> row) & 1 == 0 {
                continue;
            }
            let px = x + column as i32;
            let py = y + row as i32;
            if px >= 0 && py >= 0 && (px as u32) < img.width() && (py as u32) < img.height() {
                img.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}

/// Alpha-blend a coverage mask onto the image, clipping at the edges.
fn blend_mask(
    img: &mut RgbImage,
    mask: &[u8],
    width: u32,
    height: u32,
    (origin_x, origin_y): (i32, i32),
    color: Rgb<u8>,
) {
    for py in 0..height {
        for px in 0..width {
            let idx = (py * width + px) as usize;
            let Some(&alpha) = mask.get(idx) else {
                return;
            };
            if alpha == 0 {
                continue;
            }
            let dest_x = origin_x + px as i32;
            let dest_y = origin_y + py as i32;
            if dest_x < 0
                || dest_y < 0
                || dest_x as u32 >= img.width()
                || dest_y as u32 >= img.height()
            {
                continue;
            }
            let dest = img.get_pixel_mut(dest_x as u32, dest_y as u32);
            let a = f32::from(alpha) / 255.0;
            let inv_a = 1.0 - a;
            for channel in 0..3 {
                dest[channel] =
                    (f32::from(color[channel]) * a + f32::from(dest[channel]) * inv_a) as u8;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_width_distinguishes_wide_glyphs() {
        let mut engine = TextEngine::new(Arc::new(Typeface::Builtin));
        assert_eq!(engine.text_width("12.50", 26.0), 30.0);
        assert_eq!(engine.text_width("血常规", 48.0), 33.0);
        assert_eq!(engine.line_height(48.0), 11.0);
    }

    fn draw_builtin_text(text: &str) -> RgbImage {
        let mut engine = TextEngine::new(Arc::new(Typeface::Builtin));
        let mut img = RgbImage::from_pixel(60, 20, Rgb([255, 255, 255]));
        engine.draw(&mut img, text, (0, 0), 26.0, Rgb([0, 0, 0]));
        img
    }

    fn inked(img: &RgbImage) -> Vec<(u32, u32)> {
        img.enumerate_pixels()
            .filter(|(_, _, pixel)| pixel[0] == 0)
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    #[test]
    fn builtin_draws_ascii_bitmaps_and_skips_spaces() {
        let img = draw_builtin_text("A B");
        // Left stroke of each 'A' sits two rows below the cell top.
        assert_eq!(img.get_pixel(0, 5), &Rgb([0, 0, 0]));
        assert_eq!(img.get_pixel(12, 5), &Rgb([0, 0, 0]));
        assert_eq!(img.get_pixel(0, 0), &Rgb([255, 255, 255]));
        assert!((6..12).all(|x| (0..11).all(|y| img.get_pixel(x, y)[0] == 255)));
    }

    #[test]
    fn builtin_digits_are_legible() {
        let ones = inked(&draw_builtin_text("1.00"));
        let eights = inked(&draw_builtin_text("8.88"));
        assert!(!ones.is_empty());
        assert_ne!(ones, eights);
        assert_ne!(inked(&draw_builtin_text("3.50")), inked(&draw_builtin_text("5.30")));
    }

    #[test]
    fn builtin_outlines_glyphs_without_bitmaps() {
        let img = draw_builtin_text("血");
        // Outlined 10×11 cell: corners inked, centre blank.
        assert_eq!(img.get_pixel(0, 0), &Rgb([0, 0, 0]));
        assert_eq!(img.get_pixel(9, 10), &Rgb([0, 0, 0]));
        assert_eq!(img.get_pixel(5, 5), &Rgb([255, 255, 255]));
    }

    #[test]
    fn blending_clips_outside_the_canvas() {
        let mut img = RgbImage::from_pixel(4, 4, Rgb([255, 255, 255]));
        let mask = [255u8; 16];
        blend_mask(&mut img, &mask, 4, 4, (2, 2), Rgb([0, 0, 0]));
        assert_eq!(img.get_pixel(3, 3), &Rgb([0, 0, 0]));
        assert_eq!(img.get_pixel(1, 1), &Rgb([255, 255, 255]));
    }
}
