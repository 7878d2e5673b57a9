//! In-memory [`ProducerStore`] for unit tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::error::CoreError;
use crate::types::DbId;

use super::store::ProducerStore;
use super::{NewProducer, Producer, ProducerChanges, ENTITY};

#[derive(Debug, Default)]
pub(crate) struct MemoryProducerStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    last_id: DbId,
    rows: BTreeMap<DbId, Producer>,
}

#[async_trait]
impl ProducerStore for MemoryProducerStore {
    async fn insert(&self, record: &NewProducer) -> Result<Producer, CoreError> {
        let mut inner = self.inner.lock().unwrap();
        if inner
            .rows
            .values()
            .any(|p| p.identifier == record.identifier)
        {
            return Err(CoreError::DuplicateIdentifier {
                identifier: record.identifier.clone(),
            });
        }

        inner.last_id += 1;
        let producer = Producer {
            id: inner.last_id,
            identifier: record.identifier.clone(),
            name: record.name.clone(),
            farm_name: record.farm_name.clone(),
            city: record.city.clone(),
            state: record.state.clone(),
            total_area_hectares: record.total_area_hectares,
            arable_area_hectares: record.arable_area_hectares,
            vegetation_area_hectares: record.vegetation_area_hectares,
            planted_crops: record.planted_crops.clone(),
            created_at: Utc::now(),
            updated_at: None,
            is_active: true,
        };
        inner.rows.insert(producer.id, producer.clone());
        Ok(producer)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Producer>, CoreError> {
        Ok(self.inner.lock().unwrap().rows.get(&id).cloned())
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Producer>, CoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .rows
            .values()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<i64, CoreError> {
        Ok(self.inner.lock().unwrap().rows.len() as i64)
    }

    async fn update(&self, id: DbId, changes: &ProducerChanges) -> Result<Producer, CoreError> {
        let mut inner = self.inner.lock().unwrap();
        let producer = inner
            .rows
            .get_mut(&id)
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;

        if let Some(name) = &changes.name {
            producer.name = name.clone();
        }
        if let Some(farm_name) = &changes.farm_name {
            producer.farm_name = farm_name.clone();
        }
        if let Some(city) = &changes.city {
            producer.city = city.clone();
        }
        if let Some(state) = &changes.state {
            producer.state = state.clone();
        }
        if let Some(total) = changes.total_area_hectares {
            producer.total_area_hectares = total;
        }
        if let Some(arable) = changes.arable_area_hectares {
            producer.arable_area_hectares = arable;
        }
        if let Some(vegetation) = changes.vegetation_area_hectares {
            producer.vegetation_area_hectares = vegetation;
        }
        if let Some(crops) = &changes.planted_crops {
            producer.planted_crops = Some(crops.clone());
        }
        producer.updated_at = Some(Utc::now());

        Ok(producer.clone())
    }

    async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        self.inner
            .lock()
            .unwrap()
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(CoreError::NotFound { entity: ENTITY, id })
    }
}
