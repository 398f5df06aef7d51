//! Model Registry
//!
//! An ordered, immutable list of named model definitions. Each definition can
//! export its JSON Schema; the exporter walks the registry in order.

use std::collections::HashMap;
use std::marker::PhantomData;

use schemars::gen::SchemaSettings;
use schemars::JsonSchema;
use serde_json::Value;

use crate::error::{ExportError, Result};
use crate::models;

/// A named model able to describe itself as a JSON Schema
pub trait ModelDefinition {
    /// Human-readable model name, e.g. "Dandiset"
    fn name(&self) -> &str;

    /// Produce the model's JSON Schema
    fn json_schema(&self, settings: &SchemaSettings) -> Result<Value>;
}

/// A model whose schema is derived from a [`JsonSchema`] type
pub struct DerivedModel<T> {
    name: &'static str,
    _model: PhantomData<fn() -> T>,
}

impl<T: JsonSchema> DerivedModel<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            _model: PhantomData,
        }
    }
}

impl<T: JsonSchema> ModelDefinition for DerivedModel<T> {
    fn name(&self) -> &str {
        self.name
    }

    fn json_schema(&self, settings: &SchemaSettings) -> Result<Value> {
        let root = settings.clone().into_generator().into_root_schema_for::<T>();
        let schema = serde_json::to_value(root).map_err(|e| ExportError::Schema {
            model: self.name.to_string(),
            reason: e.to_string(),
        })?;
        Ok(relocate_definitions(schema, settings))
    }
}

/// Move the root `definitions` map to the key the refs point at.
///
/// `RootSchema` always serializes its definitions as `definitions`, while refs
/// follow `definitions_path`. Paths nested deeper than one key (OpenAPI's
/// `#/components/schemas/`) are left alone.
fn relocate_definitions(schema: Value, settings: &SchemaSettings) -> Value {
    let key = settings
        .definitions_path
        .trim_start_matches("#/")
        .trim_end_matches('/');
    if key == "definitions" || key.is_empty() || key.contains('/') {
        return schema;
    }

    match schema {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| if k == "definitions" { (key.to_string(), v) } else { (k, v) })
                .collect(),
        ),
        other => other,
    }
}

/// File name a model's schema is written to
pub fn schema_filename(name: &str) -> String {
    format!("{}.schema.json", name.to_lowercase())
}

macro_rules! derived_models {
    ($($model:ident),* $(,)?) => {
        vec![
            $(Box::new(DerivedModel::<models::$model>::new(stringify!($model))) as Box<dyn ModelDefinition>),*
        ]
    };
}

/// The ordered set of models exported in one run
pub struct ModelRegistry {
    models: Vec<Box<dyn ModelDefinition>>,
}

impl ModelRegistry {
    /// Build a registry, rejecting an empty list and names that would share a file
    pub fn new(models: Vec<Box<dyn ModelDefinition>>) -> Result<Self> {
        if models.is_empty() {
            return Err(ExportError::EmptyRegistry);
        }

        let mut seen: HashMap<String, &str> = HashMap::new();
        for model in &models {
            let filename = schema_filename(model.name());
            if let Some(existing) = seen.get(&filename) {
                return Err(ExportError::DuplicateModel {
                    name: model.name().to_string(),
                    existing: existing.to_string(),
                    filename,
                });
            }
            seen.insert(filename, model.name());
        }

        Ok(Self { models })
    }

    /// The DANDI metadata models, in export order
    pub fn dandi() -> Result<Self> {
        Self::new(derived_models![
            Dandiset,
            Person,
            Organization,
            Contributor,
            ContactPoint,
            Affiliation,
            AssetsSummary,
            AccessRequirements,
            PropertyValue,
            Resource,
            Activity,
            Project,
            Session,
            Equipment,
            Software,
            Agent,
            Asset,
            BareAsset,
        ])
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn ModelDefinition> {
        self.models.iter().map(|m| m.as_ref())
    }

    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|m| m.name()).collect()
    }

    /// Take the definitions back out, e.g. to wrap or reorder them
    pub fn into_models(self) -> Vec<Box<dyn ModelDefinition>> {
        self.models
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SchemaDraft;

    #[test]
    fn test_dandi_registry_order() {
        let registry = ModelRegistry::dandi().unwrap();
        assert_eq!(registry.len(), 18);
        assert_eq!(
            registry.names(),
            vec![
                "Dandiset",
                "Person",
                "Organization",
                "Contributor",
                "ContactPoint",
                "Affiliation",
                "AssetsSummary",
                "AccessRequirements",
                "PropertyValue",
                "Resource",
                "Activity",
                "Project",
                "Session",
                "Equipment",
                "Software",
                "Agent",
                "Asset",
                "BareAsset",
            ]
        );
    }

    #[test]
    fn test_schema_filename() {
        assert_eq!(schema_filename("AssetsSummary"), "assetssummary.schema.json");
        assert_eq!(schema_filename("Dandiset"), "dandiset.schema.json");
    }

    #[test]
    fn test_empty_registry_rejected() {
        assert!(matches!(
            ModelRegistry::new(Vec::new()),
            Err(ExportError::EmptyRegistry)
        ));
    }

    #[test]
    fn test_case_insensitive_duplicates_rejected() {
        let models: Vec<Box<dyn ModelDefinition>> = vec![
            Box::new(DerivedModel::<models::Person>::new("Person")),
            Box::new(DerivedModel::<models::Agent>::new("PERSON")),
        ];

        match ModelRegistry::new(models) {
            Err(ExportError::DuplicateModel { name, existing, filename }) => {
                assert_eq!(name, "PERSON");
                assert_eq!(existing, "Person");
                assert_eq!(filename, "person.schema.json");
            }
            Err(other) => panic!("Expected DuplicateModel, got {:?}", other),
            Ok(_) => panic!("Expected DuplicateModel, got a registry"),
        }
    }

    #[test]
    fn test_every_dandi_model_exports_an_object_schema() {
        let registry = ModelRegistry::dandi().unwrap();
        let settings = SchemaDraft::Draft2019_09.settings();

        for model in registry.iter() {
            let schema = model.json_schema(&settings).unwrap();
            assert!(schema.is_object(), "{} schema is not an object", model.name());
            assert_eq!(schema["title"], model.name());
        }
    }

    /// Collect every `$ref` string anywhere in the tree
    fn refs(value: &Value, out: &mut Vec<String>) {
        match value {
            Value::Object(map) => {
                for (k, v) in map {
                    match (k.as_str(), v) {
                        ("$ref", Value::String(r)) => out.push(r.clone()),
                        _ => refs(v, out),
                    }
                }
            }
            Value::Array(items) => items.iter().for_each(|v| refs(v, out)),
            _ => {}
        }
    }

    #[test]
    fn test_draft_2019_uses_defs() {
        let model = DerivedModel::<models::Dandiset>::new("Dandiset");
        let schema = model.json_schema(&SchemaDraft::Draft2019_09.settings()).unwrap();
        assert!(schema["$defs"]["Person"].is_object());
        assert!(schema["$defs"]["AssetsSummary"].is_object());
        assert!(schema.get("definitions").is_none());
        assert_eq!(schema["properties"]["name"]["maxLength"], 150);
    }

    #[test]
    fn test_draft_2019_refs_resolve_into_defs() {
        let model = DerivedModel::<models::Dandiset>::new("Dandiset");
        let schema = model.json_schema(&SchemaDraft::Draft2019_09.settings()).unwrap();

        let mut found = Vec::new();
        refs(&schema, &mut found);
        assert!(!found.is_empty());
        for r in &found {
            let name = r
                .strip_prefix("#/$defs/")
                .unwrap_or_else(|| panic!("ref {} does not point into $defs", r));
            assert!(schema["$defs"][name].is_object(), "dangling ref {}", r);
        }
    }

    #[test]
    fn test_defs_stay_last_after_relocation() {
        let model = DerivedModel::<models::Person>::new("Person");
        let schema = model.json_schema(&SchemaDraft::Draft2019_09.settings()).unwrap();
        let keys: Vec<&String> = schema.as_object().unwrap().keys().collect();
        assert_eq!(keys.last().map(|k| k.as_str()), Some("$defs"));
    }

    #[test]
    fn test_draft_07_uses_definitions() {
        let model = DerivedModel::<models::Person>::new("Person");
        let schema = model.json_schema(&SchemaDraft::Draft07.settings()).unwrap();
        assert!(schema["definitions"]["Affiliation"].is_object());
        assert!(schema.get("$defs").is_none());
    }
}
