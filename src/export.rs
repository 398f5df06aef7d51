//! Schema Exporter
//!
//! Walks a [`ModelRegistry`], simplifies each model's schema and writes:
//!
//! ```text
//! <output_dir>/
//! ├── dandiset.schema.json
//! ├── person.schema.json
//! ├── ...
//! ├── all_schemas.json
//! └── schema_summary.json
//! ```
//!
//! A model that fails to export or write is reported and skipped; the
//! combined file and the summary only list models that made it to disk.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use schemars::gen::SchemaSettings;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::checksum::Checksum;
use crate::config::{ExporterConfig, OutputFormat, SchemaDraft};
use crate::error::{ExportError, Result};
use crate::registry::{schema_filename, ModelDefinition, ModelRegistry};
use crate::simplify::SimplifyRules;
use crate::summary::SchemaSummary;

pub const COMBINED_FILENAME: &str = "all_schemas.json";
pub const SUMMARY_FILENAME: &str = "schema_summary.json";

/// A schema file written for one model
#[derive(Debug, Clone)]
pub struct ExportedSchema {
    pub name: String,
    pub filename: String,
    pub checksum: Checksum,
}

/// A model skipped during the run
#[derive(Debug)]
pub struct ModelFailure {
    pub name: String,
    pub error: ExportError,
}

/// Outcome of [`SchemaExporter::export_all`]
#[derive(Debug)]
pub struct ExportReport {
    pub output_dir: PathBuf,
    /// Simplified schemas keyed by model name, in registry order
    pub schemas: Map<String, Value>,
    pub written: Vec<ExportedSchema>,
    pub failures: Vec<ModelFailure>,
    pub summary: SchemaSummary,
    pub combined_checksum: Checksum,
}

/// Per-model event emitted while [`SchemaExporter::export_all_with`] runs
#[derive(Debug, Clone, Copy)]
pub enum Progress<'a> {
    Extracted(&'a ExportedSchema),
    Failed(&'a ModelFailure),
}

impl ExportReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Exports simplified model schemas to a directory
pub struct SchemaExporter {
    output_dir: PathBuf,
    rules: SimplifyRules,
    format: OutputFormat,
    settings: SchemaSettings,
}

impl SchemaExporter {
    /// Exporter with default rules, pretty output and draft 2019-09 schemas
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            rules: SimplifyRules::default(),
            format: OutputFormat::Pretty,
            settings: SchemaDraft::default().settings(),
        }
    }

    pub fn from_config(config: &ExporterConfig) -> Result<Self> {
        Ok(Self {
            output_dir: config.output_dir()?,
            rules: config.simplify.clone(),
            format: config.output.format,
            settings: config.generator.draft.settings(),
        })
    }

    pub fn with_rules(mut self, rules: SimplifyRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Export every model in the registry.
    ///
    /// Per-model failures are collected in the report. Failing to create the
    /// output directory or to write the combined and summary files is an error.
    pub fn export_all(&self, registry: &ModelRegistry) -> Result<ExportReport> {
        self.export_all_with(registry, |_| {})
    }

    /// Build the registry with `load`, then export it.
    ///
    /// A loader error is returned before the output directory is touched.
    pub fn load_and_export<L, F>(&self, load: L, on_progress: F) -> Result<ExportReport>
    where
        L: FnOnce() -> Result<ModelRegistry>,
        F: FnMut(Progress<'_>),
    {
        let registry = load()?;
        debug!(models = registry.len(), "registry loaded");
        self.export_all_with(&registry, on_progress)
    }

    /// Like [`export_all`](Self::export_all), calling `on_progress` as each
    /// model is written or skipped, in registry order
    pub fn export_all_with<F>(
        &self,
        registry: &ModelRegistry,
        mut on_progress: F,
    ) -> Result<ExportReport>
    where
        F: FnMut(Progress<'_>),
    {
        fs::create_dir_all(&self.output_dir).map_err(|source| ExportError::Write {
            path: self.output_dir.clone(),
            source,
        })?;

        let mut schemas = Map::new();
        let mut written = Vec::new();
        let mut failures = Vec::new();

        for model in registry.iter() {
            match self.export_one(model) {
                Ok((schema, exported)) => {
                    debug!(
                        model = model.name(),
                        file = %exported.filename,
                        checksum = %exported.checksum,
                        "wrote schema"
                    );
                    on_progress(Progress::Extracted(&exported));
                    schemas.insert(model.name().to_string(), schema);
                    written.push(exported);
                }
                Err(error) => {
                    warn!(model = model.name(), %error, "skipping model");
                    let failure = ModelFailure {
                        name: model.name().to_string(),
                        error,
                    };
                    on_progress(Progress::Failed(&failure));
                    failures.push(failure);
                }
            }
        }

        let combined_checksum = self.write_json(COMBINED_FILENAME, &schemas)?;

        let summary = SchemaSummary::new(&schemas, Utc::now());
        self.write_json(SUMMARY_FILENAME, &summary)?;

        info!(
            extracted = schemas.len(),
            failed = failures.len(),
            dir = %self.output_dir.display(),
            "schema export complete"
        );

        Ok(ExportReport {
            output_dir: self.output_dir.clone(),
            schemas,
            written,
            failures,
            summary,
            combined_checksum,
        })
    }

    fn export_one(&self, model: &dyn ModelDefinition) -> Result<(Value, ExportedSchema)> {
        let schema = model.json_schema(&self.settings)?;
        let simplified = self.rules.apply(schema);

        let filename = schema_filename(model.name());
        let checksum = self.write_json(&filename, &simplified)?;

        let exported = ExportedSchema {
            name: model.name().to_string(),
            filename,
            checksum,
        };
        Ok((simplified, exported))
    }

    fn write_json<T: Serialize + ?Sized>(&self, filename: &str, value: &T) -> Result<Checksum> {
        let path = self.output_dir.join(filename);
        let content = self.format.render(value)?;
        fs::write(&path, &content).map_err(|source| ExportError::Write { path, source })?;
        Ok(Checksum::from_bytes(content.as_bytes()))
    }
}
