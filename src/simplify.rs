//! Schema simplification for LLM-constrained consumers
//!
//! Generated schemas carry constraints that constrained decoders handle poorly:
//! long regular expressions and wide `anyOf` unions. [`SimplifyRules`] walks a
//! schema tree and:
//!
//! - removes string-valued `pattern` keys longer than `max_pattern_len` characters
//! - truncates `anyOf` lists longer than `max_union_len` to their first
//!   `keep_union_len` alternatives
//!
//! Objects are simplified recursively. Arrays found under an object key have
//! their object elements simplified; any other element passes through unchanged.
//! The transform takes ownership of the tree and returns a new one, so shared
//! sub-schemas are never aliased.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_MAX_PATTERN_LEN: usize = 50;
pub const DEFAULT_MAX_UNION_LEN: usize = 5;
pub const DEFAULT_KEEP_UNION_LEN: usize = 3;

/// Thresholds and keys driving [`SimplifyRules::apply`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplifyRules {
    /// Patterns longer than this (in characters) are dropped
    #[serde(default = "default_max_pattern_len")]
    pub max_pattern_len: usize,

    /// Unions with more alternatives than this are truncated
    #[serde(default = "default_max_union_len")]
    pub max_union_len: usize,

    /// Number of leading alternatives kept when a union is truncated
    #[serde(default = "default_keep_union_len")]
    pub keep_union_len: usize,

    /// Keys holding pattern constraints
    #[serde(default = "default_pattern_keys")]
    pub pattern_keys: Vec<String>,

    /// Keys holding union constraints
    #[serde(default = "default_union_keys")]
    pub union_keys: Vec<String>,
}

fn default_max_pattern_len() -> usize {
    DEFAULT_MAX_PATTERN_LEN
}

fn default_max_union_len() -> usize {
    DEFAULT_MAX_UNION_LEN
}

fn default_keep_union_len() -> usize {
    DEFAULT_KEEP_UNION_LEN
}

fn default_pattern_keys() -> Vec<String> {
    vec!["pattern".to_string()]
}

fn default_union_keys() -> Vec<String> {
    vec!["anyOf".to_string()]
}

impl Default for SimplifyRules {
    fn default() -> Self {
        Self {
            max_pattern_len: DEFAULT_MAX_PATTERN_LEN,
            max_union_len: DEFAULT_MAX_UNION_LEN,
            keep_union_len: DEFAULT_KEEP_UNION_LEN,
            pattern_keys: default_pattern_keys(),
            union_keys: default_union_keys(),
        }
    }
}

impl SimplifyRules {
    /// Simplify a schema tree.
    ///
    /// Only objects are rewritten; a top-level array or scalar is returned as is.
    pub fn apply(&self, schema: Value) -> Value {
        match schema {
            Value::Object(map) => Value::Object(self.simplify_object(map)),
            other => other,
        }
    }

    fn simplify_object(&self, map: Map<String, Value>) -> Map<String, Value> {
        map.into_iter()
            .filter(|(key, value)| !self.is_long_pattern(key, value))
            .map(|(key, value)| {
                let value = match value {
                    Value::Array(items) if self.is_wide_union(&key, &items) => {
                        Value::Array(items.into_iter().take(self.keep_union_len).collect())
                    }
                    other => other,
                };
                let value = self.simplify_child(value);
                (key, value)
            })
            .collect()
    }

    fn simplify_child(&self, value: Value) -> Value {
        match value {
            Value::Object(map) => Value::Object(self.simplify_object(map)),
            Value::Array(items) => Value::Array(
                items
                    .into_iter()
                    .map(|item| match item {
                        Value::Object(map) => Value::Object(self.simplify_object(map)),
                        other => other,
                    })
                    .collect(),
            ),
            other => other,
        }
    }

    fn is_long_pattern(&self, key: &str, value: &Value) -> bool {
        if !self.pattern_keys.iter().any(|k| k == key) {
            return false;
        }
        // Only regex strings count; a property that happens to be named
        // "pattern" is an object and stays.
        value
            .as_str()
            .map_or(false, |pattern| pattern.chars().count() > self.max_pattern_len)
    }

    fn is_wide_union(&self, key: &str, items: &[Value]) -> bool {
        items.len() > self.max_union_len && self.union_keys.iter().any(|k| k == key)
    }
}

/// Simplify a schema with the default rules
pub fn simplify_for_llm(schema: Value) -> Value {
    SimplifyRules::default().apply(schema)
}
