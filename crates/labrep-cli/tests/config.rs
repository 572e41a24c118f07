//! Config file loading.

use std::fs;
use std::path::PathBuf;

use labrep_cli::config::{ConfigError, FileConfig, GenerateOverrides, GenerateSettings};
use labrep_model::TemplateKind;

#[test]
fn full_file_is_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("labrep.toml");
    fs::write(
        &path,
        r#"
template = "one-col"
count = 10
output_dir = "reports"
seed = 42
fonts = ["/fonts/a.ttf", "/fonts/b.otf"]
"#,
    )
    .unwrap();

    let config = FileConfig::load(&path).unwrap();
    assert_eq!(
        config,
        FileConfig {
            template: Some(TemplateKind::SingleColumn),
            count: Some(10),
            output_dir: Some(PathBuf::from("reports")),
            seed: Some(42),
            fonts: vec![PathBuf::from("/fonts/a.ttf"), PathBuf::from("/fonts/b.otf")],
        }
    );
}

#[test]
fn partial_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("labrep.toml");
    fs::write(&path, "count = 7\n").unwrap();

    let settings =
        GenerateSettings::resolve(GenerateOverrides::default(), FileConfig::load(&path).unwrap());
    assert_eq!(settings.template, TemplateKind::TwoColumn);
    assert_eq!(settings.count, 7);
    assert_eq!(settings.output_dir, PathBuf::from("blood_reports"));
    assert!(settings.fonts.is_empty());
}

#[test]
fn unknown_keys_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("labrep.toml");
    fs::write(&path, "reports = 3\n").unwrap();

    let error = FileConfig::load(&path).unwrap_err();
    assert!(matches!(error, ConfigError::Parse { .. }));
    assert!(error.to_string().contains("labrep.toml"));
}

#[test]
fn unknown_template_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("labrep.toml");
    fs::write(&path, "template = \"three-col\"\n").unwrap();

    assert!(matches!(
        FileConfig::load(&path),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
fn missing_file_reports_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let error = FileConfig::load(&path).unwrap_err();
    assert!(matches!(error, ConfigError::Read { .. }));
    assert!(error.to_string().contains("absent.toml"));
}
