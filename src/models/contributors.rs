//! People, organizations and tools credited in DANDI metadata.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::RoleType;

/// A research organization identified by its ROR id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Affiliation {
    /// A ROR (Research Organization Registry) identifier
    #[schemars(regex(pattern = r"^https://ror.org/[a-z0-9]+$"))]
    pub identifier: Option<String>,
    /// Name of organization
    pub name: String,
    pub schema_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactPoint {
    /// Email address of contact
    #[schemars(email)]
    pub email: Option<String>,
    /// A Web page to find information on how to contact
    #[schemars(url)]
    pub url: Option<String>,
    pub schema_key: String,
}

/// Common fields of anyone credited for a dandiset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Contributor {
    /// Use a common identifier such as ORCID for people or ROR for institutions
    pub identifier: Option<String>,
    pub name: Option<String>,
    #[schemars(email)]
    pub email: Option<String>,
    #[schemars(url)]
    pub url: Option<String>,
    /// Role(s) of the contributor. Multiple roles can be selected
    pub role_name: Option<Vec<RoleType>>,
    /// A flag to indicate whether a contributor should be included when
    /// generating a citation for the item
    #[serde(default)]
    pub include_in_citation: bool,
    /// Identifier for an associated research award
    pub award_number: Option<String>,
    pub schema_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// An ORCID identifier
    #[schemars(regex(pattern = r"^\d{4}-\d{4}-\d{4}-(\d{3}X|\d{4})$"))]
    pub identifier: Option<String>,
    /// Use the format: familyname, given names ...
    #[schemars(regex(pattern = r"^([\w\s\-\.']+),\s+([\w\s\-\.']+)$"))]
    pub name: String,
    #[schemars(email)]
    pub email: Option<String>,
    #[schemars(url)]
    pub url: Option<String>,
    pub role_name: Option<Vec<RoleType>>,
    #[serde(default)]
    pub include_in_citation: bool,
    pub award_number: Option<String>,
    /// An organization that this person is affiliated with
    pub affiliation: Option<Vec<Affiliation>>,
    pub schema_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// A ROR identifier
    #[schemars(regex(pattern = r"^https://ror.org/[a-z0-9]+$"))]
    pub identifier: Option<String>,
    pub name: String,
    #[schemars(email)]
    pub email: Option<String>,
    #[schemars(url)]
    pub url: Option<String>,
    pub role_name: Option<Vec<RoleType>>,
    #[serde(default)]
    pub include_in_citation: bool,
    pub award_number: Option<String>,
    pub contact_point: Option<Vec<ContactPoint>>,
    pub schema_key: String,
}

/// Either kind of dandiset contributor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ContributorRef {
    Person(Person),
    Organization(Organization),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Software {
    /// Research Resource Identifier
    #[schemars(regex(pattern = r"^RRID:.*"))]
    pub identifier: Option<String>,
    pub name: String,
    pub version: String,
    #[schemars(url)]
    pub url: Option<String>,
    pub schema_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub identifier: Option<String>,
    pub name: String,
    #[schemars(url)]
    pub url: Option<String>,
    pub schema_key: String,
}

/// Instrument or device used in an activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub identifier: Option<String>,
    #[schemars(length(max = 150))]
    pub name: String,
    /// The description of the equipment
    pub description: Option<String>,
    pub schema_key: String,
}

/// Anything an activity can be associated with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum AssociatedAgent {
    Person(Person),
    Organization(Organization),
    Software(Software),
    Agent(Agent),
}
