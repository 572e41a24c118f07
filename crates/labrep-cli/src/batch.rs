//! Sequential batch driver: generate, render and write N report images.

use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use image::RgbImage;
use labrep_synth::NameSource;
use rand::RngCore;
use thiserror::Error;
use tracing::{info, info_span};

use crate::clock::Clock;
use crate::generator::ReportGenerator;
use crate::logging::redact_value;

pub const FILE_PREFIX: &str = "血常规报告";
/// Second-resolution stamp used in file names.
pub const FILE_TIME_FORMAT: &str = "%Y%m%d%H%M%S";
/// Print resolution recorded in every image.
pub const REPORT_DPI: u32 = 200;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("failed to create output directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write report image {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: png::EncodingError,
    },
}

/// One image that made it to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenReport {
    pub path: PathBuf,
    pub row_count: usize,
    pub abnormal_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub output_dir: PathBuf,
    /// Font file used for every report; `None` for the built-in font.
    pub font: Option<PathBuf>,
    pub reports: Vec<WrittenReport>,
}

impl BatchSummary {
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn total_abnormal(&self) -> usize {
        self.reports.iter().map(|report| report.abnormal_count).sum()
    }
}

/// `血常规报告_{name}_{YYYYMMDDhhmmss}.png`
///
/// Two reports for the same name within one second share a file name; the
/// later one overwrites the earlier.
pub fn report_file_name(name: &str, at: NaiveDateTime) -> String {
    format!("{FILE_PREFIX}_{name}_{}.png", at.format(FILE_TIME_FORMAT))
}

/// Generate `count` reports into `output_dir`, creating it if needed.
///
/// Reports are produced one after another; the first write failure stops
/// the batch. `on_written` is called after each file is saved.
pub fn run_batch<N, R>(
    generator: &mut ReportGenerator<N>,
    rng: &mut R,
    clock: &dyn Clock,
    count: usize,
    output_dir: &Path,
    mut on_written: impl FnMut(&WrittenReport),
) -> Result<BatchSummary, BatchError>
where
    N: NameSource,
    R: RngCore,
{
    let font = generator.font_path().map(Path::to_path_buf);
    let span = info_span!(
        "batch",
        template = %generator.kind(),
        font = ?font,
        count,
        output_dir = %output_dir.display()
    );
    let _guard = span.enter();

    fs::create_dir_all(output_dir).map_err(|source| BatchError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut reports = Vec::with_capacity(count);
    for index in 0..count {
        let report_span = info_span!("report", index);
        let _report_guard = report_span.enter();

        let now = clock.now();
        let generated = generator.generate(rng, now);
        let path = output_dir.join(report_file_name(&generated.patient.name, now));
        write_png(&generated.image, &path).map_err(|source| BatchError::Write {
            path: path.clone(),
            source,
        })?;
        info!(
            patient = redact_value(&generated.patient.name),
            abnormal = generated.abnormal_count,
            path = %path.display(),
            "report written"
        );

        let written = WrittenReport {
            path,
            row_count: generated.row_count,
            abnormal_count: generated.abnormal_count,
        };
        on_written(&written);
        reports.push(written);
    }

    info!(written = reports.len(), "batch complete");
    Ok(BatchSummary {
        output_dir: output_dir.to_path_buf(),
        font,
        reports,
    })
}

/// Pixels per metre for `dpi`, rounded as PNG readers expect.
fn pixels_per_metre(dpi: u32) -> u32 {
    (f64::from(dpi) / 0.0254).round() as u32
}

/// Encode `image` as 8-bit RGB PNG with a pHYs chunk at [`REPORT_DPI`].
pub fn write_png(image: &RgbImage, path: &Path) -> Result<(), png::EncodingError> {
    let file = BufWriter::new(File::create(path)?);
    let mut encoder = png::Encoder::new(file, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let ppm = pixels_per_metre(REPORT_DPI);
    encoder.set_pixel_dims(Some(png::PixelDimensions {
        xppu: ppm,
        yppu: ppm,
        unit: png::Unit::Meter,
    }));
    let mut writer = encoder.write_header()?;
    writer.write_image_data(image.as_raw())?;
    writer.finish()
}
