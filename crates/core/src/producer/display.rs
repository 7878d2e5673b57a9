//! Rendering of stored producers for output, with areas in locale text.
//!
//! Areas are printed with the shortest decimal that round-trips the stored
//! `f64` (whole numbers keep one fractional digit), the period swapped for
//! a comma, and `" ha"` appended. Values entered with one decimal digit
//! come back exactly as typed; values needing more precision than the
//! stored float holds do not.

use serde::Serialize;

use crate::types::{DbId, Timestamp};

use super::{Producer, ProducerPage};

/// Format a canonical hectare value as locale text, e.g. `3.5 -> "3,5 ha"`.
pub fn format_hectares(value: f64) -> String {
    let text = if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    };
    format!("{} ha", text.replace('.', ","))
}

/// A producer as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProducerView {
    pub id: DbId,
    pub identifier: String,
    pub name: String,
    pub farm_name: String,
    pub city: String,
    pub state: String,
    pub total_area_hectares: String,
    pub arable_area_hectares: String,
    pub vegetation_area_hectares: String,
    pub planted_crops: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
    pub is_active: bool,
}

impl From<Producer> for ProducerView {
    fn from(producer: Producer) -> Self {
        Self {
            id: producer.id,
            identifier: producer.identifier,
            name: producer.name,
            farm_name: producer.farm_name,
            city: producer.city,
            state: producer.state,
            total_area_hectares: format_hectares(producer.total_area_hectares),
            arable_area_hectares: format_hectares(producer.arable_area_hectares),
            vegetation_area_hectares: format_hectares(producer.vegetation_area_hectares),
            planted_crops: producer.planted_crops,
            created_at: producer.created_at,
            updated_at: producer.updated_at,
            is_active: producer.is_active,
        }
    }
}

/// A listing page as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProducerPageView {
    pub producers: Vec<ProducerView>,
    pub count: usize,
    pub total: i64,
    pub offset: i64,
    pub limit: i64,
}

impl From<ProducerPage> for ProducerPageView {
    fn from(page: ProducerPage) -> Self {
        Self {
            producers: page.producers.into_iter().map(ProducerView::from).collect(),
            count: page.count,
            total: page.total,
            offset: page.offset,
            limit: page.limit,
        }
    }
}
