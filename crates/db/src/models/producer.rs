//! Row model for the `producers` table.

use agro_core::producer::Producer;
use agro_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `producers` table.
#[derive(Debug, Clone, FromRow)]
pub struct ProducerRow {
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
    pub is_active: bool,
}

impl From<ProducerRow> for Producer {
    fn from(row: ProducerRow) -> Self {
        Self {
            id: row.id,
            identifier: row.identifier,
            name: row.name,
            farm_name: row.farm_name,
            city: row.city,
            state: row.state,
            total_area_hectares: row.total_area_hectares,
            arable_area_hectares: row.arable_area_hectares,
            vegetation_area_hectares: row.vegetation_area_hectares,
            planted_crops: row.planted_crops,
            created_at: row.created_at,
            updated_at: row.updated_at,
            is_active: row.is_active,
        }
    }
}
