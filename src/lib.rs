//! DANDI Schema Exporter
//!
//! Exports the JSON Schemas of the DANDI metadata models, simplified for use
//! as LLM output constraints.
//!
//! ## Features
//!
//! - **Derived Schemas**: Every model derives `schemars::JsonSchema`
//! - **LLM Simplification**: Long regex patterns are dropped and wide `anyOf`
//!   unions truncated, with configurable thresholds
//! - **Per-Model Isolation**: A failing model is reported and skipped
//! - **Checksums**: SHA256 digests of every written file
//!
//! ## Output
//!
//! ```text
//! src/schemas/
//! ├── dandiset.schema.json
//! ├── person.schema.json
//! ├── ...
//! ├── all_schemas.json
//! └── schema_summary.json
//! ```

pub mod checksum;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod registry;
pub mod simplify;
pub mod summary;

pub use checksum::Checksum;
pub use config::{ExporterConfig, OutputFormat, SchemaDraft};
pub use error::{ExportError, Result};
pub use export::{ExportReport, ExportedSchema, ModelFailure, Progress, SchemaExporter};
pub use registry::{schema_filename, DerivedModel, ModelDefinition, ModelRegistry};
pub use simplify::{simplify_for_llm, SimplifyRules};
pub use summary::SchemaSummary;
