//! YAML v1 configuration loading
//!
//! Files are written to a temp dir and loaded through `PipelineConfig::from_yaml`.

use codegraph_embedscope::config::{ConfigError, PipelineConfig, Preset};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_yaml(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_preset_only() {
    let file = write_yaml("version: 1\npreset: fast\n");
    let config = PipelineConfig::from_yaml(file.path()).unwrap();

    assert_eq!(config.preset(), Preset::Fast);
    assert_eq!(config.embedding().batch_size, 32);
    assert!(config.embedding().parallel_backends);
}

#[test]
fn test_load_with_overrides() {
    let file = write_yaml(
        "\
version: 1
preset: balanced
overrides:
  embedding:
    batch_size: 16
    max_retries: 3
  analysis:
    capture_from_imports: true
",
    );
    let config = PipelineConfig::from_yaml(file.path()).unwrap();

    assert_eq!(config.preset(), Preset::Balanced);
    assert_eq!(config.embedding().batch_size, 16);
    assert_eq!(config.embedding().max_retries, 3);
    assert!(config.analysis().capture_from_imports);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = PipelineConfig::from_yaml(dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_unknown_top_level_field_rejected() {
    let err = PipelineConfig::from_yaml_str("version: 1\npreset: fast\nextra: true\n").unwrap_err();
    assert!(matches!(err, ConfigError::Yaml(_)));
}

#[test]
fn test_unknown_override_stage_rejected() {
    let yaml = "version: 1\npreset: fast\noverrides:\n  rendering:\n    dpi: 300\n";
    let err = PipelineConfig::from_yaml_str(yaml).unwrap_err();
    assert!(matches!(err, ConfigError::Yaml(_)));
}

#[test]
fn test_unsupported_version() {
    let err = PipelineConfig::from_yaml_str("version: 2\npreset: fast\n").unwrap_err();
    match err {
        ConfigError::UnsupportedVersion { found, supported } => {
            assert_eq!(found, 2);
            assert_eq!(supported, vec![1]);
        }
        other => panic!("expected UnsupportedVersion, got {other:?}"),
    }
}

#[test]
fn test_unknown_preset() {
    let err = PipelineConfig::from_yaml_str("version: 1\npreset: turbo\n").unwrap_err();
    assert!(matches!(err, ConfigError::UnknownPreset(ref name) if name == "turbo"));
}

#[test]
fn test_out_of_range_override_rejected() {
    let yaml = "version: 1\npreset: balanced\noverrides:\n  embedding:\n    batch_size: 0\n";
    let err = PipelineConfig::from_yaml_str(yaml).unwrap_err();
    match err {
        ConfigError::Range { field, .. } => assert_eq!(field, "batch_size"),
        other => panic!("expected Range, got {other:?}"),
    }
}

#[test]
fn test_exported_yaml_reloads_to_same_config() {
    let original = PipelineConfig::preset(Preset::Thorough)
        .embedding(|c| c.batch_size(8))
        .projection(|c| c.max_iterations(500))
        .build()
        .unwrap();

    let file = write_yaml(&original.to_yaml().unwrap());
    let reloaded = PipelineConfig::from_yaml(file.path()).unwrap();

    assert_eq!(reloaded.preset(), Preset::Thorough);
    assert_eq!(reloaded.embedding(), original.embedding());
    assert_eq!(reloaded.projection(), original.projection());
    assert_eq!(reloaded.analysis(), original.analysis());
}
