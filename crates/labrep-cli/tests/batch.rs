//! Batch driver tests with the built-in font and a fixed clock.

use std::cell::Cell;
use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::BufReader;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use labrep_cli::batch::{BatchError, run_batch};
use labrep_cli::clock::FixedClock;
use labrep_cli::generator::ReportGenerator;
use labrep_model::{Gender, TemplateKind};
use labrep_render::Typeface;
use labrep_synth::NameSource;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Numbers patients in order so file names never collide.
#[derive(Default)]
struct SequentialNames {
    next: Cell<u32>,
}

impl NameSource for SequentialNames {
    fn person_name(&self, _gender: Gender, _rng: &mut dyn RngCore) -> String {
        let n = self.next.get() + 1;
        self.next.set(n);
        format!("患者{n}")
    }

    fn professional_name(&self, _rng: &mut dyn RngCore) -> String {
        "医师".to_string()
    }
}

fn report_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

fn generator(kind: TemplateKind) -> ReportGenerator<SequentialNames> {
    ReportGenerator::with_names(kind, Arc::new(Typeface::Builtin), SequentialNames::default())
}

#[test]
fn batch_writes_uniquely_named_pngs() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("blood_reports");
    let mut generator = generator(TemplateKind::TwoColumn);
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut callbacks = 0;

    let summary = run_batch(
        &mut generator,
        &mut rng,
        &FixedClock(report_time()),
        5,
        &output,
        |_| callbacks += 1,
    )
    .unwrap();

    assert_eq!(summary.len(), 5);
    assert_eq!(callbacks, 5);
    assert_eq!(summary.output_dir, output);
    assert_eq!(summary.font, None);

    let on_disk: BTreeSet<String> = fs::read_dir(&output)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    let expected: BTreeSet<String> = (1..=5)
        .map(|n| format!("血常规报告_患者{n}_20240301093000.png"))
        .collect();
    assert_eq!(on_disk, expected);

    for report in &summary.reports {
        assert_eq!(report.row_count, 25);
        let img = image::open(&report.path).unwrap();
        assert_eq!((img.width(), img.height()), (2480, 1748));
    }
}

#[test]
fn written_pngs_record_200_dpi() {
    let dir = tempfile::tempdir().unwrap();
    let mut generator = generator(TemplateKind::TwoColumn);
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    let summary = run_batch(
        &mut generator,
        &mut rng,
        &FixedClock(report_time()),
        1,
        dir.path(),
        |_| {},
    )
    .unwrap();

    let file = BufReader::new(File::open(&summary.reports[0].path).unwrap());
    let reader = png::Decoder::new(file).read_info().unwrap();
    let info = reader.info();
    assert_eq!((info.width, info.height), (2480, 1748));
    assert_eq!(info.color_type, png::ColorType::Rgb);
    let dims = info.pixel_dims.as_ref().unwrap();
    assert_eq!((dims.xppu, dims.yppu), (7874, 7874));
    assert_eq!(dims.unit, png::Unit::Meter);
}

#[test]
fn single_column_batch_uses_portrait_canvas() {
    let dir = tempfile::tempdir().unwrap();
    let mut generator = generator(TemplateKind::SingleColumn);
    let mut rng = ChaCha8Rng::seed_from_u64(8);

    let summary = run_batch(
        &mut generator,
        &mut rng,
        &FixedClock(report_time()),
        1,
        dir.path(),
        |_| {},
    )
    .unwrap();

    let report = &summary.reports[0];
    assert_eq!(report.row_count, 25);
    let img = image::open(&report.path).unwrap();
    assert_eq!((img.width(), img.height()), (1000, 1800));
}

#[test]
fn seeded_batches_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let mut outputs = Vec::new();
    for run in ["a", "b"] {
        let output = dir.path().join(run);
        let mut generator = generator(TemplateKind::TwoColumn);
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let summary = run_batch(
            &mut generator,
            &mut rng,
            &FixedClock(report_time()),
            2,
            &output,
            |_| {},
        )
        .unwrap();
        let bytes: Vec<Vec<u8>> = summary
            .reports
            .iter()
            .map(|report| fs::read(&report.path).unwrap())
            .collect();
        outputs.push(bytes);
    }
    assert_eq!(outputs[0], outputs[1]);
}

#[test]
fn zero_count_only_creates_the_directory() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("nested").join("reports");
    let mut generator = generator(TemplateKind::TwoColumn);
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let summary = run_batch(
        &mut generator,
        &mut rng,
        &FixedClock(report_time()),
        0,
        &output,
        |_| {},
    )
    .unwrap();

    assert!(summary.is_empty());
    assert!(output.is_dir());
    assert_eq!(fs::read_dir(&output).unwrap().count(), 0);
}

#[test]
fn output_path_that_is_a_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("reports");
    fs::write(&blocker, b"not a directory").unwrap();
    let mut generator = generator(TemplateKind::TwoColumn);
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let error = run_batch(
        &mut generator,
        &mut rng,
        &FixedClock(report_time()),
        1,
        &blocker,
        |_| {},
    )
    .unwrap_err();

    assert!(matches!(error, BatchError::CreateDir { ref path, .. } if *path == blocker));
}
