//! Generator settings from an optional TOML file and command-line overrides.
//!
//! Precedence is command line, then file, then built-in defaults. A file
//! looks like:
//!
//! ```toml
//! template = "one-col"
//! count = 10
//! output_dir = "reports"
//! seed = 42
//! fonts = ["/usr/share/fonts/noto/NotoSansSC-Regular.otf"]
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use labrep_model::TemplateKind;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_COUNT: usize = 3;
pub const DEFAULT_OUTPUT_DIR: &str = "blood_reports";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Settings as written in a config file; every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub template: Option<TemplateKind>,
    pub count: Option<usize>,
    pub output_dir: Option<PathBuf>,
    pub seed: Option<u64>,
    /// Font files probed before the template's stock candidates.
    pub fonts: Vec<PathBuf>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }
}

/// Values given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateOverrides {
    pub template: Option<TemplateKind>,
    pub count: Option<usize>,
    pub output_dir: Option<PathBuf>,
    pub seed: Option<u64>,
    pub fonts: Vec<PathBuf>,
}

/// Fully resolved settings for one `generate` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSettings {
    pub template: TemplateKind,
    pub count: usize,
    pub output_dir: PathBuf,
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
    pub fonts: Vec<PathBuf>,
}

impl Default for GenerateSettings {
    fn default() -> Self {
        Self {
            template: TemplateKind::default(),
            count: DEFAULT_COUNT,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            seed: None,
            fonts: Vec::new(),
        }
    }
}

impl GenerateSettings {
    /// Merge command-line values over file values over defaults.
    ///
    /// Fonts accumulate: command-line fonts are probed first, then file fonts.
    pub fn resolve(cli: GenerateOverrides, file: FileConfig) -> Self {
        let defaults = Self::default();
        let mut fonts = cli.fonts;
        fonts.extend(file.fonts);
        Self {
            template: cli.template.or(file.template).unwrap_or(defaults.template),
            count: cli.count.or(file.count).unwrap_or(defaults.count),
            output_dir: cli
                .output_dir
                .or(file.output_dir)
                .unwrap_or(defaults.output_dir),
            seed: cli.seed.or(file.seed),
            fonts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sources_resolve_to_defaults() {
        let settings =
            GenerateSettings::resolve(GenerateOverrides::default(), FileConfig::default());
        assert_eq!(settings.template, TemplateKind::TwoColumn);
        assert_eq!(settings.count, 3);
        assert_eq!(settings.output_dir, PathBuf::from("blood_reports"));
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn command_line_wins_over_file() {
        let file = FileConfig {
            template: Some(TemplateKind::SingleColumn),
            count: Some(10),
            output_dir: Some(PathBuf::from("from-file")),
            seed: Some(1),
            fonts: vec![PathBuf::from("file.ttf")],
        };
        let cli = GenerateOverrides {
            count: Some(2),
            seed: Some(9),
            fonts: vec![PathBuf::from("cli.ttf")],
            ..GenerateOverrides::default()
        };
        let settings = GenerateSettings::resolve(cli, file);
        assert_eq!(settings.template, TemplateKind::SingleColumn);
        assert_eq!(settings.count, 2);
        assert_eq!(settings.output_dir, PathBuf::from("from-file"));
        assert_eq!(settings.seed, Some(9));
        assert_eq!(
            settings.fonts,
            vec![PathBuf::from("cli.ttf"), PathBuf::from("file.ttf")]
        );
    }
}
