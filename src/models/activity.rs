use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::{IdentifierType, RelationType, ResourceType};
use super::contributors::{AssociatedAgent, Equipment};

/// Information about the activity that generated the data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub identifier: Option<String>,
    /// The name of the activity
    #[schemars(length(max = 150))]
    pub name: String,
    /// A description of the activity
    pub description: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    /// Identifier of agents (persons, organizations, software) associated with this activity
    pub was_associated_with: Option<Vec<AssociatedAgent>>,
    /// A listing of equipment used for the activity
    pub used: Option<Vec<Equipment>>,
    pub schema_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub identifier: Option<String>,
    /// The name of the project that generated this dandiset or asset
    #[schemars(length(max = 150))]
    pub name: String,
    /// A brief description of the project
    pub description: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub was_associated_with: Option<Vec<AssociatedAgent>>,
    pub used: Option<Vec<Equipment>>,
    pub schema_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub identifier: Option<String>,
    /// The name of the logical session associated with the asset
    #[schemars(length(max = 150))]
    pub name: String,
    /// A brief description of the session
    pub description: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub was_associated_with: Option<Vec<AssociatedAgent>>,
    pub used: Option<Vec<Equipment>>,
    pub schema_key: String,
}

/// Any activity kind an asset can be generated by
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum GeneratingActivity {
    Session(Session),
    Project(Project),
    Activity(Activity),
}

/// The value carried by a [`PropertyValue`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum PropertyValueContent {
    Text(String),
    Integer(i64),
    Number(f64),
    Boolean(bool),
    List(Vec<Value>),
    Object(Map<String, Value>),
}

/// A measured or categorical value with its unit and reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyValue {
    pub max_value: Option<f64>,
    pub min_value: Option<f64>,
    pub unit_text: Option<String>,
    pub value: Option<PropertyValueContent>,
    /// Reference to other property values
    pub value_reference: Option<Box<PropertyValue>>,
    /// A commonly used identifier for the characteristic represented by the property
    #[serde(rename = "propertyID")]
    pub property_id: Option<IdentifierType>,
    pub schema_key: String,
}

/// An external resource related to a dandiset or asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub identifier: Option<String>,
    /// A title of the resource
    pub name: Option<String>,
    #[schemars(url)]
    pub url: Option<String>,
    /// Name of the repository in which the resource is housed
    pub repository: Option<String>,
    /// Indicates how the resource is related to the dataset
    pub relation: RelationType,
    /// The type of resource
    pub resource_type: Option<ResourceType>,
    pub schema_key: String,
}
