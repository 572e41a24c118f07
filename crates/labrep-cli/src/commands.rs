use anyhow::{Context, Result};
use comfy_table::{Cell, CellAlignment, Table};
use indicatif::{ProgressBar, ProgressStyle};
use labrep_cli::batch::{BatchSummary, run_batch};
use labrep_cli::clock::SystemClock;
use labrep_cli::config::{FileConfig, GenerateSettings};
use labrep_cli::generator::ReportGenerator;
use labrep_model::{Gender, TemplateKind};
use labrep_render::FontProfile;
use labrep_synth::{Catalog, resolve};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::cli::{GenerateArgs, PanelsArgs};
use crate::summary::{align_column, apply_table_style};

pub fn run_generate(args: &GenerateArgs) -> Result<(GenerateSettings, BatchSummary)> {
    let file = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let settings = GenerateSettings::resolve(args.overrides(), file);
    info!(
        template = %settings.template,
        count = settings.count,
        seed = ?settings.seed,
        "starting generation"
    );

    let profile = FontProfile::for_template(settings.template).with_preferred(&settings.fonts);
    let mut generator = ReportGenerator::from_profile(settings.template, &profile)
        .with_context(|| format!("prepare {} template", settings.template))?;
    let mut rng = match settings.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let progress = progress_bar(settings.count);
    let summary = run_batch(
        &mut generator,
        &mut rng,
        &SystemClock,
        settings.count,
        &settings.output_dir,
        |written| {
            if let Some(name) = written.path.file_name() {
                progress.set_message(name.to_string_lossy().into_owned());
            }
            progress.inc(1);
        },
    );
    progress.finish_and_clear();
    Ok((settings, summary?))
}

pub fn run_panels(args: &PanelsArgs) -> Result<()> {
    let kind = TemplateKind::from(args.template);
    let catalog = Catalog::for_template(kind);
    let mut table = Table::new();
    table.set_header(vec!["Panel", "#", "Code", "Item", "Unit", "Reference", "Male", "Female"]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (panel, items) in catalog.panels().iter().enumerate() {
        for item in items {
            let male = resolve(&item.reference, Gender::Male);
            let female = resolve(&item.reference, Gender::Female);
            table.add_row(vec![
                Cell::new(panel + 1),
                Cell::new(item.seq),
                Cell::new(item.code.as_deref().unwrap_or("-")),
                Cell::new(&item.name),
                Cell::new(&item.unit),
                Cell::new(&item.reference),
                Cell::new(format!("{}-{}", male.low(), male.high())),
                Cell::new(format!("{}-{}", female.low(), female.high())),
            ]);
        }
    }
    println!("Template: {} ({} items)", catalog.kind(), catalog.len());
    println!("{table}");
    Ok(())
}

fn progress_bar(count: usize) -> ProgressBar {
    let bar = ProgressBar::new(count as u64);
    match ProgressStyle::with_template("{spinner} [{bar:40}] {pos}/{len} {wide_msg}") {
        Ok(style) => bar.set_style(style.progress_chars("=> ")),
        Err(error) => tracing::debug!(%error, "using default progress style"),
    }
    bar
}
