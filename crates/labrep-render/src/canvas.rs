//! Rasterization of a [`Layout`].

use image::RgbImage;
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

use crate::layout::{BACKGROUND, DrawOp, INK, Layout};
use crate::text::TextEngine;

/// Paint every operation of `layout` onto a fresh white canvas.
pub fn rasterize(layout: &Layout, engine: &mut TextEngine) -> RgbImage {
    let mut img = RgbImage::from_pixel(layout.width, layout.height, BACKGROUND);
    for op in &layout.ops {
        match op {
            DrawOp::Text { x, y, size, text } => engine.draw(&mut img, text, (*x, *y), *size, INK),
            DrawOp::Rule {
                x0,
                x1,
                y,
                thickness,
                color,
            } => {
                let (left, right) = if x0 <= x1 { (*x0, *x1) } else { (*x1, *x0) };
                let length = (right - left).max(1) as u32;
                let thickness = (*thickness).max(1);
                let top = y - (thickness as i32) / 2;
                draw_filled_rect_mut(
                    &mut img,
                    Rect::at(left, top).of_size(length, thickness),
                    *color,
                );
            }
        }
    }
    img
}
