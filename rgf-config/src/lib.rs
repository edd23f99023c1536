//! Shared configuration loader for the rgf toolchain.
//!
//! `defaults/rgf.default.toml` is embedded into the binary so that docs and runtime
//! behavior stay in sync. The CLI layers `rgf.toml`, an explicit `--config` file and
//! `--set` overrides on top of those defaults via [`Loader`] before deserializing
//! into [`RgfConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use rgf_parser::rgf::extraction::CallSite;
use rgf_parser::rgf::formats::JsModule;
use rgf_parser::rgf::loader::ExtractOptions;
use rgf_parser::rgf::records::RecordKind;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/rgf.default.toml");

/// Top-level configuration consumed by rgf applications.
#[derive(Debug, Clone, Deserialize)]
pub struct RgfConfig {
    pub extract: ExtractConfig,
    pub patch: PatchConfig,
}

/// Where the tables come from and where they go.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractConfig {
    pub source: PathBuf,
    pub out_dir: PathBuf,
    pub receiver: String,
    pub banner: String,
    pub genre: TableConfig,
    pub accent: TableConfig,
}

/// Per-table call keyword and output naming.
#[derive(Debug, Clone, Deserialize)]
pub struct TableConfig {
    pub keyword: String,
    pub export: String,
    pub file: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PatchConfig {
    pub target: PathBuf,
}

impl ExtractConfig {
    pub fn table(&self, kind: RecordKind) -> &TableConfig {
        match kind {
            RecordKind::Genre => &self.genre,
            RecordKind::Accent => &self.accent,
        }
    }

    /// Call sites for the extractor.
    pub fn options(&self) -> ExtractOptions {
        ExtractOptions {
            genre: CallSite::new(&self.genre.keyword, &self.receiver),
            accent: CallSite::new(&self.accent.keyword, &self.receiver),
        }
    }

    /// Renderer for one table's data module.
    pub fn module(&self, kind: RecordKind) -> JsModule {
        JsModule::new(&self.banner, &self.table(kind).export)
    }

    /// Output path of one table's data module.
    pub fn output_path(&self, kind: RecordKind) -> PathBuf {
        self.out_dir.join(&self.table(kind).file)
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

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Apply a `key=value` override as given on the command line.
    pub fn set_assignment(self, assignment: &str) -> Result<Self, ConfigError> {
        let (key, value) = assignment.split_once('=').ok_or_else(|| {
            ConfigError::Message(format!(
                "invalid override '{}', expected key=value",
                assignment
            ))
        })?;
        self.set_override(key.trim(), value.trim())
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<RgfConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<RgfConfig, ConfigError> {
    Loader::new().build()
}
