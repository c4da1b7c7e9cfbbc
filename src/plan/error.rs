//! Error types for plant records and plan computation.

use thiserror::Error;

/// A plant record that cannot be turned into a [`PlantSpec`](super::types::PlantSpec).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlantRecordError {
    /// A field required by the plant's type is absent.
    #[error("plant \"{plant}\" of type \"{plant_type}\" is missing `{field}`")]
    MissingField {
        plant: String,
        plant_type: String,
        field: &'static str,
    },
}

/// Domain-level failure of the planning core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    /// Neither dispatch nor adjustment could bring the allocated total
    /// within tolerance of the requested load.
    #[error("unable to meet load of {load} MW with given constraints ({residual} MW unresolved)")]
    Infeasible {
        /// Requested load (MW).
        load: f64,
        /// Load still missing after adjustment (MW, negative means surplus).
        residual: f64,
    },
}
