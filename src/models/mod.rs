//! DANDI metadata models
//!
//! Rust renditions of the DANDI archive metadata models. Every type derives
//! [`schemars::JsonSchema`] so its JSON Schema can be exported; field names
//! serialize in camelCase to match the archive's JSON-LD documents.

pub mod activity;
pub mod asset;
pub mod common;
pub mod contributors;
pub mod dandiset;

pub use activity::{
    Activity, GeneratingActivity, Project, PropertyValue, PropertyValueContent, Resource, Session,
};
pub use asset::{Asset, BareAsset, BioSample, Participant, ParticipantAge};
pub use common::*;
pub use contributors::{
    Affiliation, Agent, AssociatedAgent, ContactPoint, Contributor, ContributorRef, Equipment,
    Organization, Person, Software,
};
pub use dandiset::{AccessRequirements, AssetsSummary, Dandiset};
