//! Vocabulary shared by the DANDI models: controlled enums and ontology terms.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Role of a contributor, from the DataCite contributor vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum RoleType {
    #[serde(rename = "dcite:Author")]
    Author,
    #[serde(rename = "dcite:Conceptualization")]
    Conceptualization,
    #[serde(rename = "dcite:ContactPerson")]
    ContactPerson,
    #[serde(rename = "dcite:DataCollector")]
    DataCollector,
    #[serde(rename = "dcite:DataCurator")]
    DataCurator,
    #[serde(rename = "dcite:DataManager")]
    DataManager,
    #[serde(rename = "dcite:FormalAnalysis")]
    FormalAnalysis,
    #[serde(rename = "dcite:FundingAcquisition")]
    FundingAcquisition,
    #[serde(rename = "dcite:Investigation")]
    Investigation,
    #[serde(rename = "dcite:Maintainer")]
    Maintainer,
    #[serde(rename = "dcite:Methodology")]
    Methodology,
    #[serde(rename = "dcite:ProjectLeader")]
    ProjectLeader,
    #[serde(rename = "dcite:ProjectMember")]
    ProjectMember,
    #[serde(rename = "dcite:Researcher")]
    Researcher,
    #[serde(rename = "dcite:Software")]
    Software,
    #[serde(rename = "dcite:Supervision")]
    Supervision,
    #[serde(rename = "dcite:Funder")]
    Funder,
    #[serde(rename = "dcite:Sponsor")]
    Sponsor,
    #[serde(rename = "dcite:Other")]
    Other,
}

/// Relation of a resource to the dandiset or asset that cites it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum RelationType {
    #[serde(rename = "dcite:IsCitedBy")]
    IsCitedBy,
    #[serde(rename = "dcite:Cites")]
    Cites,
    #[serde(rename = "dcite:IsSupplementTo")]
    IsSupplementTo,
    #[serde(rename = "dcite:IsSupplementedBy")]
    IsSupplementedBy,
    #[serde(rename = "dcite:Describes")]
    Describes,
    #[serde(rename = "dcite:IsDescribedBy")]
    IsDescribedBy,
    #[serde(rename = "dcite:IsPartOf")]
    IsPartOf,
    #[serde(rename = "dcite:HasPart")]
    HasPart,
    #[serde(rename = "dcite:IsReferencedBy")]
    IsReferencedBy,
    #[serde(rename = "dcite:References")]
    References,
    #[serde(rename = "dcite:IsDocumentedBy")]
    IsDocumentedBy,
    #[serde(rename = "dcite:Documents")]
    Documents,
    #[serde(rename = "dcite:IsDerivedFrom")]
    IsDerivedFrom,
    #[serde(rename = "dcite:IsSourceOf")]
    IsSourceOf,
    #[serde(rename = "dcite:IsPublishedIn")]
    IsPublishedIn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum ResourceType {
    #[serde(rename = "dcite:Audiovisual")]
    Audiovisual,
    #[serde(rename = "dcite:Book")]
    Book,
    #[serde(rename = "dcite:ComputationalNotebook")]
    ComputationalNotebook,
    #[serde(rename = "dcite:ConferencePaper")]
    ConferencePaper,
    #[serde(rename = "dcite:DataPaper")]
    DataPaper,
    #[serde(rename = "dcite:Dataset")]
    Dataset,
    #[serde(rename = "dcite:Image")]
    Image,
    #[serde(rename = "dcite:JournalArticle")]
    JournalArticle,
    #[serde(rename = "dcite:Model")]
    Model,
    #[serde(rename = "dcite:Preprint")]
    Preprint,
    #[serde(rename = "dcite:Software")]
    Software,
    #[serde(rename = "dcite:Standard")]
    Standard,
    #[serde(rename = "dcite:Workflow")]
    Workflow,
    #[serde(rename = "dcite:Other")]
    Other,
}

/// Access status of a dandiset or asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum AccessType {
    #[serde(rename = "dandi:OpenAccess")]
    OpenAccess,
    #[serde(rename = "dandi:EmbargoedAccess")]
    EmbargoedAccess,
    #[serde(rename = "dandi:RestrictedAccess")]
    RestrictedAccess,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum LicenseType {
    #[serde(rename = "spdx:CC0-1.0")]
    Cc0,
    #[serde(rename = "spdx:CC-BY-4.0")]
    CcBy40,
}

/// Digest algorithms accepted for asset content
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub enum DigestType {
    #[serde(rename = "md5")]
    Md5,
    #[serde(rename = "sha1")]
    Sha1,
    #[serde(rename = "sha2-256")]
    Sha2_256,
    #[serde(rename = "sha3-256")]
    Sha3_256,
    #[serde(rename = "blake2b-256")]
    Blake2b256,
    #[serde(rename = "blake3")]
    Blake3,
    #[serde(rename = "dandi:dandi-etag")]
    DandiEtag,
    #[serde(rename = "dandi:dandi-zarr-checksum")]
    DandiZarrChecksum,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum IdentifierType {
    #[serde(rename = "dandi:doi")]
    Doi,
    #[serde(rename = "dandi:orcid")]
    Orcid,
    #[serde(rename = "dandi:ror")]
    Ror,
    #[serde(rename = "dandi:dandi")]
    Dandi,
    #[serde(rename = "dandi:rrid")]
    Rrid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum AgeReferenceType {
    #[serde(rename = "dandi:BirthReference")]
    BirthReference,
    #[serde(rename = "dandi:GestationalReference")]
    GestationalReference,
}

macro_rules! ontology_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            /// The URI of the ontology term
            pub identifier: Option<String>,
            /// The name of the term
            pub name: Option<String>,
            pub schema_key: String,
        }
    };
}

ontology_type!(
    /// An ontology term without a more specific category
    GenericType
);
ontology_type!(
    /// A data standard used by the files
    StandardsType
);
ontology_type!(
    /// An experimental approach, e.g. electrophysiology
    ApproachType
);
ontology_type!(
    /// A technique used to collect the data
    MeasurementTechniqueType
);
ontology_type!(SexType);
ontology_type!(StrainType);
ontology_type!(SampleType);
ontology_type!(AssayType);
ontology_type!(
    /// Biomedical condition under study
    Disorder
);
ontology_type!(
    /// UBERON or other anatomical term
    Anatomy
);

/// Species, identified by an NCBI taxonomy URI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesType {
    #[schemars(regex(pattern = r"^http://purl.obolibrary.org/obo/NCBITaxon_\d+$"))]
    pub identifier: Option<String>,
    pub name: Option<String>,
    pub schema_key: String,
}

/// Subject matter of a dandiset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum AboutItem {
    Disorder(Disorder),
    Anatomy(Anatomy),
    Generic(GenericType),
}
