//! Positioned draw operations produced by the report templates.
//!
//! Templates only decide where things go; [`crate::canvas`] turns a
//! [`Layout`] into pixels. Coordinates are absolute canvas pixels and are not
//! clipped: text wider than its column simply runs past it.

use image::Rgb;
use labrep_model::{Report, TemplateKind};

use crate::templates::{SingleColumnTemplate, TwoColumnTemplate};
use crate::text::TextMeasure;

pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
pub const INK: Rgb<u8> = Rgb([0, 0, 0]);
pub const ROW_RULE: Rgb<u8> = Rgb([0x99, 0x99, 0x99]);

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Text with its top-left corner at `(x, y)`.
    Text {
        x: i32,
        y: i32,
        size: f32,
        text: String,
    },
    /// Horizontal rule from `x0` to `x1` centered on `y`.
    Rule {
        x0: i32,
        x1: i32,
        y: i32,
        thickness: u32,
        color: Rgb<u8>,
    },
}

/// A fully positioned report page.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub ops: Vec<DrawOp>,
}

impl Layout {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn text(&mut self, (x, y): (i32, i32), size: f32, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        self.ops.push(DrawOp::Text { x, y, size, text });
    }

    pub fn rule(&mut self, (x0, x1): (i32, i32), y: i32, thickness: u32, color: Rgb<u8>) {
        self.ops.push(DrawOp::Rule {
            x0,
            x1,
            y,
            thickness,
            color,
        });
    }

    /// Text operations in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = (i32, i32, &str)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { x, y, text, .. } => Some((*x, *y, text.as_str())),
            DrawOp::Rule { .. } => None,
        })
    }

    /// Position of the first text operation drawing exactly `needle`.
    pub fn position_of(&self, needle: &str) -> Option<(i32, i32)> {
        self.texts()
            .find(|(_, _, text)| *text == needle)
            .map(|(x, y, _)| (x, y))
    }

    pub fn rules(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Rule { .. }))
    }
}

/// A fixed visual template for one report kind.
pub trait ReportTemplate {
    fn kind(&self) -> TemplateKind;

    /// Canvas `(width, height)` in pixels.
    fn canvas_size(&self) -> (u32, u32);

    fn layout(&self, report: &Report<'_>, measure: &mut dyn TextMeasure) -> Layout;
}

/// The template implementation for `kind`.
pub fn template_for(kind: TemplateKind) -> Box<dyn ReportTemplate> {
    match kind {
        TemplateKind::SingleColumn => Box::new(SingleColumnTemplate),
        TemplateKind::TwoColumn => Box::new(TwoColumnTemplate),
    }
}

/// Left edges of consecutive columns starting at `start`, plus the right
/// edge of the last column.
pub(crate) fn column_edges(start: i32, widths: &[i32]) -> Vec<i32> {
    let mut edges = Vec::with_capacity(widths.len() + 1);
    edges.push(start);
    let mut x = start;
    for width in widths {
        x += width;
        edges.push(x);
    }
    edges
}

/// Horizontal offset that centers `text` on a canvas `width` pixels wide.
pub(crate) fn centered_x(measure: &mut dyn TextMeasure, text: &str, size: f32, width: u32) -> i32 {
    let text_width = measure.text_width(text, size).round() as i32;
    (width as i32 - text_width).div_euclid(2)
}
