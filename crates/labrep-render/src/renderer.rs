use std::sync::Arc;

use image::RgbImage;
use labrep_model::{Report, TemplateKind};
use tracing::trace;

use crate::canvas::rasterize;
use crate::font::Typeface;
use crate::layout::{Layout, ReportTemplate, template_for};
use crate::text::TextEngine;

/// Lays out and rasterizes reports for one template.
///
/// The typeface is loaded once and shared read-only; the renderer can be
/// reused for any number of reports.
pub struct ReportRenderer {
    template: Box<dyn ReportTemplate>,
    engine: TextEngine,
}

impl ReportRenderer {
    pub fn new(kind: TemplateKind, typeface: Arc<Typeface>) -> Self {
        Self {
            template: template_for(kind),
            engine: TextEngine::new(typeface),
        }
    }

    pub fn kind(&self) -> TemplateKind {
        self.template.kind()
    }

    pub fn typeface(&self) -> &Typeface {
        self.engine.typeface()
    }

    pub fn layout(&mut self, report: &Report<'_>) -> Layout {
        self.template.layout(report, &mut self.engine)
    }

    pub fn render(&mut self, report: &Report<'_>) -> RgbImage {
        let layout = self.layout(report);
        trace!(ops = layout.ops.len(), "rasterizing report");
        rasterize(&layout, &mut self.engine)
    }
}
