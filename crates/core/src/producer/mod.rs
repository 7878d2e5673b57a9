//! Producer records: stored entity, inbound payloads, and the normalized
//! forms handed to the record store.

pub mod display;
pub mod normalize;
pub mod service;
pub mod store;
pub mod validation;

#[cfg(test)]
pub(crate) mod memory;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{DbId, Timestamp};

/// Entity name used in not-found errors.
pub const ENTITY: &str = "Producer";

/// A persisted producer with canonical (numeric) area fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Producer {
    pub id: DbId,
    pub identifier: String,
    pub name: String,
    pub farm_name: String,
    pub city: String,
    pub state: String,
    pub total_area_hectares: f64,
    pub arable_area_hectares: f64,
    pub vegetation_area_hectares: f64,
    pub planted_crops: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
    /// Stored and returned, never read by any operation.
    pub is_active: bool,
}

/// A hectare value as received: a plain number or locale text like `"3,5 ha"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AreaInput {
    Number(f64),
    Text(String),
}

impl From<f64> for AreaInput {
    fn from(value: f64) -> Self {
        AreaInput::Number(value)
    }
}

impl From<&str> for AreaInput {
    fn from(value: &str) -> Self {
        AreaInput::Text(value.to_string())
    }
}

/// Inbound payload for creating a producer.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProducer {
    /// CPF or CNPJ, punctuation allowed.
    #[serde(alias = "cpf_cnpj")]
    pub identifier: String,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 1, max = 255))]
    pub farm_name: String,
    #[validate(length(min = 1, max = 100))]
    pub city: String,
    #[validate(length(equal = 2))]
    pub state: String,
    pub total_area_hectares: AreaInput,
    pub arable_area_hectares: AreaInput,
    pub vegetation_area_hectares: AreaInput,
    #[validate(length(max = 500))]
    pub planted_crops: Option<String>,
}

/// Inbound payload for a partial update. Absent fields stay untouched.
///
/// The identifier is immutable and therefore not accepted here.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProducer {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub farm_name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub city: Option<String>,
    #[validate(length(equal = 2))]
    pub state: Option<String>,
    pub total_area_hectares: Option<AreaInput>,
    pub arable_area_hectares: Option<AreaInput>,
    pub vegetation_area_hectares: Option<AreaInput>,
    #[validate(length(max = 500))]
    pub planted_crops: Option<String>,
}

/// A normalized, validated record ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProducer {
    pub identifier: String,
    pub name: String,
    pub farm_name: String,
    pub city: String,
    pub state: String,
    pub total_area_hectares: f64,
    pub arable_area_hectares: f64,
    pub vegetation_area_hectares: f64,
    pub planted_crops: Option<String>,
}

/// Normalized partial changes. Only `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProducerChanges {
    pub name: Option<String>,
    pub farm_name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub total_area_hectares: Option<f64>,
    pub arable_area_hectares: Option<f64>,
    pub vegetation_area_hectares: Option<f64>,
    pub planted_crops: Option<String>,
}

/// The three area values of a record, in hectares.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaTriple {
    pub total: f64,
    pub arable: f64,
    pub vegetation: f64,
}

impl ProducerChanges {
    /// Area values the record will hold once these changes are applied.
    pub fn merged_areas(&self, existing: &Producer) -> AreaTriple {
        AreaTriple {
            total: self
                .total_area_hectares
                .unwrap_or(existing.total_area_hectares),
            arable: self
                .arable_area_hectares
                .unwrap_or(existing.arable_area_hectares),
            vegetation: self
                .vegetation_area_hectares
                .unwrap_or(existing.vegetation_area_hectares),
        }
    }

    /// Whether any area field is part of the change set.
    pub fn touches_areas(&self) -> bool {
        self.total_area_hectares.is_some()
            || self.arable_area_hectares.is_some()
            || self.vegetation_area_hectares.is_some()
    }
}

/// One page of the producer listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ProducerPage {
    pub producers: Vec<Producer>,
    /// Number of records in this page.
    pub count: usize,
    /// Number of records across all pages.
    pub total: i64,
    pub offset: i64,
    pub limit: i64,
}

/// Acknowledgement returned after a physical delete.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteConfirmation {
    pub id: DbId,
    pub message: String,
}

impl DeleteConfirmation {
    pub fn new(id: DbId) -> Self {
        Self {
            id,
            message: format!("Producer with ID {id} deleted successfully."),
        }
    }
}
