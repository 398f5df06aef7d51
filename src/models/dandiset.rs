use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::activity::{Project, Resource};
use super::common::{
    AboutItem, AccessType, ApproachType, LicenseType, MeasurementTechniqueType, SpeciesType,
    StandardsType,
};
use super::contributors::{ContactPoint, ContributorRef};

/// Access restrictions of a dandiset or asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccessRequirements {
    /// The access status of the item
    pub status: AccessType,
    /// Who or where to look for information about access
    pub contact_point: Option<ContactPoint>,
    /// Information about access requirements when embargoed or restricted
    pub description: Option<String>,
    /// Date on which embargo ends
    pub embargoed_until: Option<NaiveDate>,
    pub schema_key: String,
}

/// Aggregate statistics over the assets of a dandiset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssetsSummary {
    pub number_of_bytes: u64,
    pub number_of_files: u64,
    pub number_of_subjects: Option<u64>,
    pub number_of_samples: Option<u64>,
    pub number_of_cells: Option<u64>,
    pub data_standard: Option<Vec<StandardsType>>,
    pub approach: Option<Vec<ApproachType>>,
    pub measurement_technique: Option<Vec<MeasurementTechniqueType>>,
    pub variable_measured: Option<Vec<String>>,
    pub species: Option<Vec<SpeciesType>>,
    pub schema_key: String,
}

/// A body of structured information describing a DANDI dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Dandiset {
    /// Uniform resource identifier
    #[schemars(regex(pattern = r"^(dandi|DANDI):\d{6}(/(draft|\d+\.\d+\.\d+))?$"))]
    pub id: String,
    #[schemars(regex(pattern = r"^DANDI:\d{6}$"))]
    pub identifier: String,
    /// Title of the dandiset
    #[schemars(length(max = 150))]
    pub name: String,
    /// A description of the dandiset, e.g., a structured abstract
    #[schemars(length(max = 3000))]
    pub description: String,
    /// Contributors to this dandiset (persons or organizations)
    pub contributor: Vec<ContributorRef>,
    /// The subject matter of the dataset
    pub about: Option<Vec<AboutItem>>,
    /// Licenses associated with the item
    pub license: Vec<LicenseType>,
    /// A list of persistent URLs describing the protocol
    pub protocol: Option<Vec<String>>,
    /// Keywords used to describe this content
    pub keywords: Option<Vec<String>>,
    pub acknowledgement: Option<String>,
    pub access: Vec<AccessRequirements>,
    /// Permalink to the dandiset
    #[schemars(regex(pattern = r"^https://dandiarchive\.org/dandiset/\d{6}/(draft|\d+\.\d+\.\d+)$"))]
    pub url: Option<String>,
    #[schemars(url)]
    pub repository: Option<String>,
    pub related_resource: Option<Vec<Resource>>,
    pub was_generated_by: Option<Vec<Project>>,
    pub citation: Option<String>,
    pub assets_summary: AssetsSummary,
    pub manifest_location: Vec<String>,
    #[schemars(regex(pattern = r"^(draft|\d+\.\d+\.\d+)$"))]
    pub version: String,
    #[schemars(regex(pattern = r"^(10\.\d{4,}/[a-z][-a-z]*\.\d{6}/\d+\.\d+\.\d+|)$"))]
    pub doi: Option<String>,
    pub date_created: Option<DateTime<Utc>>,
    pub date_modified: Option<DateTime<Utc>>,
    pub schema_version: String,
    pub schema_key: String,
}
