use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::activity::{GeneratingActivity, PropertyValue};
use super::common::{
    AgeReferenceType, Anatomy, ApproachType, AssayType, DigestType,
    MeasurementTechniqueType, SampleType, SexType, SpeciesType, StrainType,
};
use super::dandiset::AccessRequirements;

/// Age of a participant relative to a reference event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantAge {
    /// ISO 8601 duration, e.g. P90D
    pub value: String,
    pub value_reference: Option<AgeReferenceType>,
    pub unit_text: Option<String>,
}

/// A subject from which data was collected
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub identifier: String,
    pub age: Option<ParticipantAge>,
    pub species: Option<SpeciesType>,
    pub sex: Option<SexType>,
    pub strain: Option<StrainType>,
    pub genotype: Option<String>,
    pub disorder: Option<Vec<PropertyValue>>,
    pub schema_key: String,
}

/// A tissue, slice or cell sample an asset was derived from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BioSample {
    pub identifier: String,
    pub sample_type: SampleType,
    pub assay_type: Option<Vec<AssayType>>,
    pub anatomy: Option<Vec<Anatomy>>,
    /// Describes the hierarchy of sample derivation or aggregation
    pub was_derived_from: Option<Vec<BioSample>>,
    pub schema_key: String,
}

/// Metadata used to describe an asset anywhere (local or server)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BareAsset {
    /// Size of the file in bytes
    pub content_size: u64,
    /// Media type, typically expressed using a MIME format
    pub encoding_format: String,
    /// A map of dandi digests to their values
    pub digest: BTreeMap<DigestType, String>,
    /// Path to the asset within the dandiset
    pub path: String,
    pub date_modified: Option<DateTime<Utc>>,
    /// Last modification time of the underlying blob
    pub blob_date_modified: Option<DateTime<Utc>>,
    pub was_derived_from: Option<Vec<BioSample>>,
    /// Locations of this asset across dandi instances
    pub same_as: Option<Vec<String>>,
    pub approach: Option<Vec<ApproachType>>,
    pub measurement_technique: Option<Vec<MeasurementTechniqueType>>,
    pub variable_measured: Option<Vec<PropertyValue>>,
    /// Participants or subjects associated with the asset
    pub was_attributed_to: Option<Vec<Participant>>,
    pub was_generated_by: Option<Vec<GeneratingActivity>>,
    pub access: Option<Vec<AccessRequirements>>,
    pub schema_key: String,
}

/// Metadata of an asset stored in the archive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Uniform resource identifier
    #[schemars(regex(
        pattern = r"^dandiasset:[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$"
    ))]
    pub id: String,
    pub identifier: Uuid,
    /// URLs from which the asset content can be retrieved
    pub content_url: Vec<String>,
    #[serde(flatten)]
    pub base: BareAsset,
}

