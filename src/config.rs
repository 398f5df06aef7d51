//! Configuration management for the schema exporter
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (dandi-schemas.toml)
//! - Environment variables (DANDI_SCHEMAS__*)
//!
//! ## Example config file (dandi-schemas.toml):
//! ```toml
//! [output]
//! dir = "./src/schemas"
//! format = "pretty"
//!
//! [simplify]
//! max_pattern_len = 50
//! max_union_len = 5
//! keep_union_len = 3
//! pattern_keys = ["pattern"]
//! union_keys = ["anyOf"]
//!
//! [generator]
//! draft = "draft2019_09"
//! ```

use std::path::PathBuf;

use config_crate::{Config, ConfigError, Environment, File};
use schemars::gen::SchemaSettings;
use serde::{Deserialize, Serialize};

use crate::simplify::SimplifyRules;

/// Main configuration for the exporter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExporterConfig {
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Simplification thresholds
    #[serde(default)]
    pub simplify: SimplifyRules,

    /// Schema generator settings
    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving the schema files (defaults to `<crate>/src/schemas`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,

    /// Output format (pretty or compact)
    #[serde(default)]
    pub format: OutputFormat,
}

/// Output format for JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Pretty,
    Compact,
}

impl OutputFormat {
    /// Render a value; pretty output uses 2-space indentation
    pub fn render<T: Serialize + ?Sized>(&self, value: &T) -> serde_json::Result<String> {
        match self {
            OutputFormat::Pretty => serde_json::to_string_pretty(value),
            OutputFormat::Compact => serde_json::to_string(value),
        }
    }
}

/// Schema generator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// JSON Schema dialect to emit
    #[serde(default)]
    pub draft: SchemaDraft,
}

/// JSON Schema dialects supported by the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SchemaDraft {
    #[serde(rename = "draft07")]
    Draft07,
    /// Definitions live under `$defs` and refs point at `#/$defs/`, matching
    /// what pydantic emits for the upstream models
    #[default]
    #[serde(rename = "draft2019_09")]
    Draft2019_09,
    #[serde(rename = "openapi3")]
    OpenApi3,
}

impl SchemaDraft {
    /// Generator settings for this dialect
    pub fn settings(self) -> SchemaSettings {
        match self {
            SchemaDraft::Draft07 => SchemaSettings::draft07(),
            SchemaDraft::Draft2019_09 => SchemaSettings::draft2019_09().with(|s| {
                s.definitions_path = "#/$defs/".to_string();
            }),
            SchemaDraft::OpenApi3 => SchemaSettings::openapi3(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("schemas")
}

impl ExporterConfig {
    /// Load configuration from a specific file
    pub fn load_from(config_path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        // Load from default locations
        let config_locations = [
            "dandi-schemas.toml",
            ".dandi-schemas.toml",
            "config/dandi-schemas.toml",
        ];

        for location in config_locations {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        // Load from the platform config directory
        if let Some(dirs) = directories::ProjectDirs::from("org", "dandi", "dandi-schemas") {
            let user_config = dirs.config_dir().join("dandi-schemas.toml");
            if user_config.exists() {
                builder = builder.add_source(File::from(user_config).required(false));
            }
        }

        // Load from specified path
        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // Load from environment variables (DANDI_SCHEMAS__*)
        builder = builder.add_source(
            Environment::with_prefix("DANDI_SCHEMAS")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Get the output directory (resolves relative paths against the working directory)
    pub fn output_dir(&self) -> std::io::Result<PathBuf> {
        match &self.output.dir {
            Some(dir) if dir.is_absolute() => Ok(dir.clone()),
            Some(dir) => Ok(std::env::current_dir()?.join(dir)),
            None => Ok(default_output_dir()),
        }
    }
}
