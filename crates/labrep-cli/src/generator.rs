//! One-shot report generation: patient, sampled rows, rendered image.

use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDateTime;
use image::RgbImage;
use labrep_model::{PatientInfo, Report, TemplateKind};
use labrep_render::{FontProfile, ReportRenderer, Typeface};
use labrep_synth::{
    Catalog, NameSource, PatientSynthesizer, SamplingStrategy, ZhCnNames, sample_panels,
};
use rand::RngCore;
use tracing::debug;

/// A rendered report plus the facts the batch driver logs about it.
#[derive(Debug, Clone)]
pub struct GeneratedReport {
    pub patient: PatientInfo,
    pub image: RgbImage,
    pub row_count: usize,
    pub abnormal_count: usize,
}

/// Everything needed to produce reports of one template.
///
/// The catalog and the typeface are built once; each call to
/// [`ReportGenerator::generate`] draws a fresh patient and fresh values.
pub struct ReportGenerator<N = ZhCnNames> {
    catalog: Catalog,
    strategy: SamplingStrategy,
    patients: PatientSynthesizer<N>,
    renderer: ReportRenderer,
}

impl ReportGenerator {
    pub fn new(kind: TemplateKind, typeface: Arc<Typeface>) -> Self {
        Self::with_names(kind, typeface, ZhCnNames)
    }

    /// Load the font for `kind` according to `profile`.
    pub fn from_profile(kind: TemplateKind, profile: &FontProfile) -> labrep_render::Result<Self> {
        let typeface = profile.load()?;
        Ok(Self::new(kind, Arc::new(typeface)))
    }
}

impl<N: NameSource> ReportGenerator<N> {
    pub fn with_names(kind: TemplateKind, typeface: Arc<Typeface>, names: N) -> Self {
        Self {
            catalog: Catalog::for_template(kind),
            strategy: SamplingStrategy::for_template(kind),
            patients: PatientSynthesizer::new(names),
            renderer: ReportRenderer::new(kind, typeface),
        }
    }

    pub fn kind(&self) -> TemplateKind {
        self.renderer.kind()
    }

    /// Font file reports are drawn with; `None` for the built-in font.
    pub fn font_path(&self) -> Option<&Path> {
        self.renderer.typeface().path()
    }

    pub fn generate<R: RngCore>(&mut self, rng: &mut R, now: NaiveDateTime) -> GeneratedReport {
        let patient = self.patients.generate(rng, now);
        let gender = patient.gender;
        let panels = sample_panels(&self.catalog, self.strategy, gender, rng);
        let report = Report::new(patient, panels);
        let row_count = report.row_count();
        let abnormal_count = report.abnormal_count();
        debug!(rows = row_count, abnormal = abnormal_count, %gender, "sampled report");

        let image = self.renderer.render(&report);
        GeneratedReport {
            patient: report.patient,
            image,
            row_count,
            abnormal_count,
        }
    }
}
