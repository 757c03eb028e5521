//! Core data models for the Customs Clearance Engine.
//!
//! This module contains all the domain value objects used throughout the
//! engine: the importer category, the engine kind, the immutable request and
//! the resulting cost breakdown.

mod clearance_cost;
mod clearance_request;
mod engine_kind;
mod importer;

pub use clearance_cost::ClearanceCost;
pub use clearance_request::ClearanceRequest;
pub use engine_kind::EngineKind;
pub use importer::ImporterCategory;
