//! Shared configuration loader for c2cpp.
//!
//! `defaults/c2cpp.default.toml` is embedded into the binary so that the
//! documented defaults and runtime behavior stay in sync. Callers layer
//! user files on top via [`Loader`] before deserializing into [`C2cppConfig`].

use c2cpp_rewrite::{Converter, Extensions, Pipeline, RuleKind};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/c2cpp.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct C2cppConfig {
    pub pipeline: PipelineConfig,
    pub walker: WalkerConfig,
}

/// Which rewrite rules run.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    pub rules: Vec<RuleKind>,
}

impl PipelineConfig {
    pub fn to_pipeline(&self) -> Pipeline {
        Pipeline::with_rules(self.rules.iter().copied())
    }
}

/// File extensions used in directory mode.
#[derive(Debug, Clone, Deserialize)]
pub struct WalkerConfig {
    pub source_extension: String,
    pub header_extension: String,
    pub converted_extension: String,
}

impl WalkerConfig {
    pub fn extensions(&self) -> Extensions {
        Extensions {
            source: self.source_extension.clone(),
            header: self.header_extension.clone(),
            converted: self.converted_extension.clone(),
        }
    }
}

impl C2cppConfig {
    /// Converter wired up with this configuration.
    pub fn converter(&self) -> Converter {
        Converter::new(self.pipeline.to_pipeline(), self.walker.extensions())
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<C2cppConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<C2cppConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.pipeline.rules, RuleKind::DEFAULTS.to_vec());
        assert_eq!(config.walker.source_extension, "c");
        assert_eq!(config.walker.header_extension, "h");
        assert_eq!(config.walker.converted_extension, "cpp");
    }

    #[test]
    fn defaults_match_library_defaults() {
        let config = load_defaults().unwrap();
        assert_eq!(config.pipeline.to_pipeline(), Pipeline::new());
        assert_eq!(config.walker.extensions(), Extensions::default());
    }

    #[test]
    fn converter_uses_walker_extensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("c2cpp.toml");
        fs::write(&path, "[walker]\nconverted_extension = \"cc\"\n").unwrap();

        let config = Loader::new().with_file(&path).build().unwrap();
        let converter = config.converter();
        assert_eq!(converter.pipeline(), &Pipeline::new());

        let input = dir.path().join("x.c");
        fs::write(&input, "p = NULL;\n").unwrap();
        let conversions = converter.convert_dir(dir.path(), &dir.path().join("out")).unwrap();
        assert_eq!(conversions.len(), 1);
        assert_eq!(conversions[0].output, dir.path().join("out").join("x.cc"));
    }

    #[test]
    fn optional_file_is_layered_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("c2cpp.toml");
        fs::write(&path, "[pipeline]\nrules = [\"null\"]\n").unwrap();

        let config = Loader::new().with_optional_file(&path).build().unwrap();
        assert_eq!(config.pipeline.rules, vec![RuleKind::Null]);
    }

    #[test]
    fn user_file_replaces_rule_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("c2cpp.toml");
        fs::write(&path, "[pipeline]\nrules = [\"extern-c\", \"null\"]\n").unwrap();

        let config = Loader::new().with_file(&path).build().unwrap();
        let pipeline = config.pipeline.to_pipeline();

        assert_eq!(pipeline.rules(), &[RuleKind::Null, RuleKind::ExternC]);
        assert_eq!(config.walker.source_extension, "c");
    }

    #[test]
    fn unknown_rule_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("c2cpp.toml");
        fs::write(&path, "[pipeline]\nrules = [\"tabs\"]\n").unwrap();

        assert!(Loader::new().with_file(&path).build().is_err());
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Loader::new().with_file(dir.path().join("absent.toml")).build();
        assert!(result.is_err());
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let config = Loader::new()
            .with_optional_file(dir.path().join("absent.toml"))
            .build()
            .unwrap();
        assert_eq!(config.walker.header_extension, "h");
    }
}
