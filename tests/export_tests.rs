//! End-to-end tests for the DANDI schema export
//!
//! Runs the exporter over the real model registry into temporary directories.

use std::fs;
use std::path::Path;
use std::process::Command;

use dandi_schemas::export::{COMBINED_FILENAME, SUMMARY_FILENAME};
use dandi_schemas::{
    ExportError, ModelDefinition, ModelRegistry, Progress, Result, SchemaDraft, SchemaExporter,
};
use schemars::gen::SchemaSettings;
use serde_json::Value;
use tempfile::TempDir;

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn file_count(dir: &Path) -> usize {
    fs::read_dir(dir).unwrap().count()
}

/// Collect every value stored under `key` anywhere in the tree
fn collect_key<'a>(value: &'a Value, key: &str, out: &mut Vec<&'a Value>) {
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                if k == key {
                    out.push(v);
                }
                collect_key(v, key, out);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_key(item, key, out);
            }
        }
        _ => {}
    }
}

/// Wraps a model and fails its export
struct Broken(Box<dyn ModelDefinition>);

impl ModelDefinition for Broken {
    fn name(&self) -> &str {
        self.0.name()
    }

    fn json_schema(&self, _settings: &SchemaSettings) -> Result<Value> {
        Err(ExportError::Schema {
            model: self.name().to_string(),
            reason: "model unavailable".to_string(),
        })
    }
}

// =============================================================================
// Output layout
// =============================================================================

#[test]
fn test_full_export_writes_every_model() {
    let dir = TempDir::new().unwrap();
    let registry = ModelRegistry::dandi().unwrap();

    let report = SchemaExporter::new(dir.path()).export_all(&registry).unwrap();

    assert!(report.is_complete());
    assert_eq!(report.schemas.len(), 18);
    assert_eq!(report.written.len(), 18);
    assert_eq!(file_count(dir.path()), 20);
    assert!(dir.path().join("dandiset.schema.json").is_file());
    assert!(dir.path().join("accessrequirements.schema.json").is_file());
    assert!(dir.path().join("bareasset.schema.json").is_file());
}

#[test]
fn test_individual_files_match_combined() {
    let dir = TempDir::new().unwrap();
    let registry = ModelRegistry::dandi().unwrap();
    SchemaExporter::new(dir.path()).export_all(&registry).unwrap();

    let combined = read_json(&dir.path().join(COMBINED_FILENAME));
    let combined = combined.as_object().unwrap();
    assert_eq!(combined.len(), 18);

    for (name, schema) in combined {
        let file = dir.path().join(format!("{}.schema.json", name.to_lowercase()));
        assert_eq!(&read_json(&file), schema, "mismatch for {}", name);
    }
}

#[test]
fn test_summary_matches_combined() {
    let dir = TempDir::new().unwrap();
    let registry = ModelRegistry::dandi().unwrap();
    SchemaExporter::new(dir.path()).export_all(&registry).unwrap();

    let combined = read_json(&dir.path().join(COMBINED_FILENAME));
    let summary = read_json(&dir.path().join(SUMMARY_FILENAME));

    let keys: Vec<Value> = combined
        .as_object()
        .unwrap()
        .keys()
        .map(|k| Value::String(k.clone()))
        .collect();

    assert_eq!(summary["total_schemas"], keys.len());
    assert_eq!(summary["schema_names"], Value::Array(keys));
    assert_eq!(summary["schema_names"][0], "Dandiset");
    assert_eq!(summary["file_locations"]["AssetsSummary"], "assetssummary.schema.json");
    assert!(summary["extracted_at"].as_str().unwrap().contains('T'));
}

#[test]
fn test_rerun_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let registry = ModelRegistry::dandi().unwrap();
    let exporter = SchemaExporter::new(dir.path());

    let first = exporter.export_all(&registry).unwrap();
    let first_bytes = fs::read(dir.path().join(COMBINED_FILENAME)).unwrap();
    let second = exporter.export_all(&registry).unwrap();
    let second_bytes = fs::read(dir.path().join(COMBINED_FILENAME)).unwrap();

    assert_eq!(first_bytes, second_bytes);
    assert_eq!(first.combined_checksum, second.combined_checksum);
    for (a, b) in first.written.iter().zip(&second.written) {
        assert_eq!(a.checksum, b.checksum, "{} changed between runs", a.name);
    }
    assert_eq!(file_count(dir.path()), 20);
}

// =============================================================================
// Simplification on real schemas
// =============================================================================

#[test]
fn test_exported_schemas_respect_thresholds() {
    let dir = TempDir::new().unwrap();
    let registry = ModelRegistry::dandi().unwrap();
    let report = SchemaExporter::new(dir.path()).export_all(&registry).unwrap();

    for (name, schema) in &report.schemas {
        let mut patterns = Vec::new();
        collect_key(schema, "pattern", &mut patterns);
        for pattern in patterns.iter().filter_map(|p| p.as_str()) {
            assert!(pattern.chars().count() <= 50, "{} kept {}", name, pattern);
        }

        let mut unions = Vec::new();
        collect_key(schema, "anyOf", &mut unions);
        for union in unions.iter().filter_map(|u| u.as_array()) {
            assert!(union.len() <= 5, "{} kept a union of {}", name, union.len());
        }
    }
}

#[test]
fn test_long_patterns_dropped_short_patterns_kept() {
    let dir = TempDir::new().unwrap();
    let registry = ModelRegistry::dandi().unwrap();
    let report = SchemaExporter::new(dir.path()).export_all(&registry).unwrap();

    let mut asset_patterns = Vec::new();
    collect_key(&report.schemas["Asset"], "pattern", &mut asset_patterns);
    assert!(!asset_patterns
        .iter()
        .any(|p| p.as_str().map_or(false, |s| s.starts_with("^dandiasset:"))));

    let mut person_patterns = Vec::new();
    collect_key(&report.schemas["Person"], "pattern", &mut person_patterns);
    assert!(person_patterns
        .iter()
        .any(|p| p.as_str() == Some(r"^\d{4}-\d{4}-\d{4}-(\d{3}X|\d{4})$")));
}

#[test]
fn test_wide_property_value_union_truncated() {
    let registry = ModelRegistry::dandi().unwrap();
    let model = registry
        .iter()
        .find(|m| m.name() == "PropertyValue")
        .unwrap();

    let raw = model.json_schema(&SchemaDraft::Draft2019_09.settings()).unwrap();
    let raw_union = raw["$defs"]["PropertyValueContent"]["anyOf"]
        .as_array()
        .unwrap()
        .clone();
    assert_eq!(raw_union.len(), 6);

    let dir = TempDir::new().unwrap();
    let report = SchemaExporter::new(dir.path()).export_all(&registry).unwrap();
    let union = report.schemas["PropertyValue"]["$defs"]["PropertyValueContent"]["anyOf"]
        .as_array()
        .unwrap();
    assert_eq!(union.as_slice(), &raw_union[..3]);
}

#[test]
fn test_exported_refs_point_into_defs() {
    let dir = TempDir::new().unwrap();
    let registry = ModelRegistry::dandi().unwrap();
    let report = SchemaExporter::new(dir.path()).export_all(&registry).unwrap();

    for (name, schema) in &report.schemas {
        assert!(schema.get("definitions").is_none(), "{} kept definitions", name);

        let mut refs = Vec::new();
        collect_key(schema, "$ref", &mut refs);
        for r in refs.iter().filter_map(|r| r.as_str()) {
            let target = r
                .strip_prefix("#/$defs/")
                .unwrap_or_else(|| panic!("{} has ref {}", name, r));
            assert!(schema["$defs"][target].is_object(), "{} has dangling {}", name, r);
        }
    }

    let mut dandiset_refs = Vec::new();
    collect_key(&report.schemas["Dandiset"], "$ref", &mut dandiset_refs);
    assert!(!dandiset_refs.is_empty());
}

// =============================================================================
// Failure handling
// =============================================================================

#[test]
fn test_one_failing_model_does_not_abort_batch() {
    let dir = TempDir::new().unwrap();
    let models = ModelRegistry::dandi()
        .unwrap()
        .into_models()
        .into_iter()
        .map(|m| {
            if m.name() == "Session" {
                Box::new(Broken(m)) as Box<dyn ModelDefinition>
            } else {
                m
            }
        })
        .collect();
    let registry = ModelRegistry::new(models).unwrap();

    let report = SchemaExporter::new(dir.path()).export_all(&registry).unwrap();

    assert!(!report.is_complete());
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].name, "Session");
    assert_eq!(report.schemas.len(), 17);
    assert!(!dir.path().join("session.schema.json").exists());
    assert_eq!(file_count(dir.path()), 19);

    let summary = read_json(&dir.path().join(SUMMARY_FILENAME));
    assert_eq!(summary["total_schemas"], 17);
    let names = summary["schema_names"].as_array().unwrap();
    assert_eq!(names.len(), 17);
    assert!(!names.iter().any(|n| n == "Session"));
    assert!(summary["file_locations"].get("Session").is_none());
}

#[test]
fn test_write_failure_is_per_model() {
    let dir = TempDir::new().unwrap();
    // A directory squatting on the file name makes that single write fail
    fs::create_dir(dir.path().join("agent.schema.json")).unwrap();

    let registry = ModelRegistry::dandi().unwrap();
    let report = SchemaExporter::new(dir.path()).export_all(&registry).unwrap();

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].name, "Agent");
    assert!(matches!(report.failures[0].error, ExportError::Write { .. }));
    assert_eq!(report.schemas.len(), 17);
}

#[test]
fn test_empty_registry_is_fatal_before_any_output() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("schemas");

    let result =
        SchemaExporter::new(&out).load_and_export(|| ModelRegistry::new(Vec::new()), |_| {});

    assert!(matches!(result, Err(ExportError::EmptyRegistry)));
    assert!(!out.exists());
}

#[test]
fn test_progress_follows_registry_order() {
    let dir = TempDir::new().unwrap();
    let mut seen = Vec::new();

    let report = SchemaExporter::new(dir.path())
        .load_and_export(ModelRegistry::dandi, |progress| {
            if let Progress::Extracted(exported) = progress {
                seen.push(exported.name.clone());
            }
        })
        .unwrap();

    let expected: Vec<String> = report.schemas.keys().cloned().collect();
    assert_eq!(seen, expected);
    assert_eq!(seen.len(), 18);
}

// =============================================================================
// Binary
// =============================================================================

#[test]
fn test_binary_exports_into_output_dir() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("schemas");

    let output = Command::new(env!("CARGO_BIN_EXE_dandi-schema-export"))
        .current_dir(dir.path())
        .arg("--output-dir")
        .arg(&out)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✓ Extracted schema for Dandiset"));
    assert!(stdout.contains("Schema extraction complete!"));

    let loaded = stdout.find("Successfully loaded 18 DANDI schema models").unwrap();
    let first = stdout.find("✓ Extracted schema for Dandiset").unwrap();
    let last = stdout.find("✓ Extracted schema for BareAsset").unwrap();
    let totals = stdout.find("✓ Extracted 18 schemas to").unwrap();
    assert!(loaded < first && first < last && last < totals);
    assert_eq!(file_count(&out), 20);
}

#[test]
fn test_binary_fatal_error_exits_nonzero_without_output() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("schemas");

    let output = Command::new(env!("CARGO_BIN_EXE_dandi-schema-export"))
        .current_dir(dir.path())
        .arg("--config")
        .arg(dir.path().join("missing.toml"))
        .arg("--output-dir")
        .arg(&out)
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(!out.exists());
}
