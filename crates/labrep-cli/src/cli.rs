//! CLI argument definitions for the report generator.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use labrep_cli::GenerateOverrides;
use labrep_model::TemplateKind;

#[derive(Parser)]
#[command(
    name = "labrep",
    version,
    about = "Generate synthetic blood test report images",
    long_about = "Generate synthetic Chinese-language complete blood count reports as PNG images.\n\n\
                  Patients, results and abnormal flags are random; every value is plausible \
                  for its reference range."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include patient names in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a batch of report images.
    Generate(GenerateArgs),

    /// List the test items printed by a template.
    Panels(PanelsArgs),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Report layout [default: two-col].
    #[arg(long, value_enum)]
    pub template: Option<TemplateArg>,

    /// Number of reports to generate [default: 3].
    #[arg(long, short = 'n')]
    pub count: Option<usize>,

    /// Directory the images are written to [default: blood_reports].
    #[arg(long = "output-dir", short = 'o', value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Seed for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Font file to try before the built-in candidates (repeatable).
    #[arg(long = "font", value_name = "PATH")]
    pub fonts: Vec<PathBuf>,

    /// TOML file with default settings.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl GenerateArgs {
    pub fn overrides(&self) -> GenerateOverrides {
        GenerateOverrides {
            template: self.template.map(TemplateKind::from),
            count: self.count,
            output_dir: self.output_dir.clone(),
            seed: self.seed,
            fonts: self.fonts.clone(),
        }
    }
}

#[derive(Args)]
pub struct PanelsArgs {
    /// Report layout whose catalog is listed.
    #[arg(long, value_enum, default_value = "two-col")]
    pub template: TemplateArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum TemplateArg {
    /// Portrait, one 25-row table.
    #[value(name = "one-col")]
    OneCol,
    /// A4 landscape, two tables side by side.
    #[value(name = "two-col")]
    TwoCol,
}

impl From<TemplateArg> for TemplateKind {
    fn from(arg: TemplateArg) -> Self {
        match arg {
            TemplateArg::OneCol => TemplateKind::SingleColumn,
            TemplateArg::TwoCol => TemplateKind::TwoColumn,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
