//! Producer operations: validation in front of the record store.

use crate::error::CoreError;
use crate::types::DbId;

use super::store::ProducerStore;
use super::validation::{check_area_sum, validate_changes, validate_new};
use super::{
    CreateProducer, DeleteConfirmation, Producer, ProducerPage, UpdateProducer, ENTITY,
};

/// Stateless orchestration of producer operations over a [`ProducerStore`].
#[derive(Debug, Clone)]
pub struct ProducerService<S> {
    store: S,
}

impl<S: ProducerStore> ProducerService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Normalize, validate, and insert a new producer.
    pub async fn create(&self, input: CreateProducer) -> Result<Producer, CoreError> {
        tracing::info!(name = %input.name, "Creating producer");
        let record = validate_new(&input).inspect_err(|err| {
            tracing::warn!(code = err.code(), error = %err, "Rejected producer input");
        })?;

        let producer = self.store.insert(&record).await.inspect_err(|err| {
            if let CoreError::DuplicateIdentifier { .. } = err {
                tracing::warn!("Producer identifier already exists");
            }
        })?;

        tracing::info!(id = producer.id, "Producer created");
        Ok(producer)
    }

    /// Fetch one producer, reporting absence as [`CoreError::NotFound`].
    pub async fn get(&self, id: DbId) -> Result<Producer, CoreError> {
        tracing::debug!(id, "Fetching producer");
        self.store.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(id, "Producer not found");
            CoreError::NotFound { entity: ENTITY, id }
        })
    }

    /// One page of producers ordered by id.
    pub async fn list(&self, offset: i64, limit: i64) -> Result<ProducerPage, CoreError> {
        tracing::info!(offset, limit, "Listing producers");
        let producers = self.store.list(offset, limit).await?;
        let total = self.store.count().await?;

        Ok(ProducerPage {
            count: producers.len(),
            producers,
            total,
            offset,
            limit,
        })
    }

    /// Apply a partial update.
    ///
    /// The area sum rule is checked against the record as it will look after
    /// the update, so untouched areas come from the stored record.
    pub async fn update(&self, id: DbId, input: UpdateProducer) -> Result<Producer, CoreError> {
        tracing::info!(id, "Updating producer");
        let existing = self.get(id).await?;

        let changes = validate_changes(&input)
            .and_then(|changes| {
                check_area_sum(changes.merged_areas(&existing))?;
                Ok(changes)
            })
            .inspect_err(|err| {
                tracing::warn!(id, code = err.code(), error = %err, "Rejected producer update");
            })?;

        let producer = self.store.update(id, &changes).await?;
        tracing::info!(id, "Producer updated");
        Ok(producer)
    }

    /// Physically delete a producer.
    pub async fn delete(&self, id: DbId) -> Result<DeleteConfirmation, CoreError> {
        tracing::info!(id, "Deleting producer");
        self.get(id).await?;
        self.store.delete(id).await?;
        tracing::info!(id, "Producer deleted");
        Ok(DeleteConfirmation::new(id))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::error::ValidationError;
    use crate::producer::memory::MemoryProducerStore;
    use crate::producer::AreaInput;

    fn service() -> ProducerService<MemoryProducerStore> {
        ProducerService::new(MemoryProducerStore::default())
    }

    fn payload(identifier: &str) -> CreateProducer {
        CreateProducer {
            identifier: identifier.to_string(),
            name: "Prod Original".to_string(),
            farm_name: "Fazenda Original".to_string(),
            city: "Cidade A".to_string(),
            state: "sp".to_string(),
            total_area_hectares: "100,0 ha".into(),
            arable_area_hectares: "60,0 ha".into(),
            vegetation_area_hectares: "40,0 ha".into(),
            planted_crops: None,
        }
    }

    // --- Create ---

    #[tokio::test]
    async fn create_assigns_id_and_timestamps() {
        let svc = service();
        let producer = svc.create(payload("222.333.444-55")).await.unwrap();

        assert_eq!(producer.id, 1);
        assert_eq!(producer.identifier, "22233344455");
        assert_eq!(producer.state, "SP");
        assert!(producer.updated_at.is_none());
        assert!(producer.is_active);
    }

    #[tokio::test]
    async fn create_rejects_identifier_that_normalizes_to_existing() {
        let svc = service();
        svc.create(payload("22233344455")).await.unwrap();

        let err = svc.create(payload("222.333.444-55")).await.unwrap_err();
        assert_matches!(
            err,
            CoreError::DuplicateIdentifier { identifier } if identifier == "22233344455"
        );
    }

    #[tokio::test]
    async fn create_rejects_area_sum_above_total() {
        let svc = service();
        let input = CreateProducer {
            arable_area_hectares: AreaInput::Number(70.0),
            ..payload("22233344455")
        };

        let err = svc.create(input).await.unwrap_err();
        assert_matches!(
            err,
            CoreError::Validation(ValidationError::AreaSumExceedsTotal { .. })
        );
        assert_eq!(svc.list(0, 10).await.unwrap().total, 0);
    }

    // --- Read ---

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let err = service().get(9999).await.unwrap_err();
        assert_matches!(err, CoreError::NotFound { entity: "Producer", id: 9999 });
    }

    // --- List ---

    #[tokio::test]
    async fn list_returns_first_page_in_id_order() {
        let svc = service();
        for i in 0..10 {
            svc.create(payload(&format!("{i:011}"))).await.unwrap();
        }

        let page = svc.list(0, 3).await.unwrap();
        let ids: Vec<_> = page.producers.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(page.count, 3);
        assert_eq!(page.total, 10);
        assert_eq!(page.offset, 0);
        assert_eq!(page.limit, 3);
    }

    #[tokio::test]
    async fn list_past_the_end_is_empty() {
        let svc = service();
        for i in 0..4 {
            svc.create(payload(&format!("{i:011}"))).await.unwrap();
        }

        let tail = svc.list(3, 5).await.unwrap();
        assert_eq!(tail.count, 1);

        let empty = svc.list(10, 5).await.unwrap();
        assert!(empty.producers.is_empty());
        assert_eq!(empty.total, 4);
    }

    // --- Update ---

    #[tokio::test]
    async fn partial_update_keeps_untouched_fields() {
        let svc = service();
        let created = svc.create(payload("22233344455")).await.unwrap();

        let updated = svc
            .update(
                created.id,
                UpdateProducer {
                    name: Some("Prod Atualizado".to_string()),
                    planted_crops: Some("Milho".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Prod Atualizado");
        assert_eq!(updated.planted_crops.as_deref(), Some("Milho"));
        assert_eq!(updated.state, created.state);
        assert_eq!(updated.total_area_hectares, 100.0);
        assert_eq!(updated.arable_area_hectares, 60.0);
        assert_eq!(updated.vegetation_area_hectares, 40.0);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at.is_some());
    }

    #[tokio::test]
    async fn update_checks_area_sum_against_merged_record() {
        let svc = service();
        let created = svc.create(payload("22233344455")).await.unwrap();

        // 60 + 40 fits in 100 but not in 90.
        let err = svc
            .update(
                created.id,
                UpdateProducer {
                    total_area_hectares: Some("90 ha".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_matches!(
            err,
            CoreError::Validation(ValidationError::AreaSumExceedsTotal { .. })
        );

        let unchanged = svc.get(created.id).await.unwrap();
        assert_eq!(unchanged.total_area_hectares, 100.0);
        assert!(unchanged.updated_at.is_none());
    }

    #[tokio::test]
    async fn update_may_shrink_areas_together() {
        let svc = service();
        let created = svc.create(payload("22233344455")).await.unwrap();

        let updated = svc
            .update(
                created.id,
                UpdateProducer {
                    total_area_hectares: Some("50 ha".into()),
                    arable_area_hectares: Some("30 ha".into()),
                    vegetation_area_hectares: Some("20 ha".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.total_area_hectares, 50.0);
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let err = service()
            .update(
                9999,
                UpdateProducer {
                    name: Some("Inexistente".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_matches!(err, CoreError::NotFound { id: 9999, .. });
    }

    // --- Delete ---

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let svc = service();
        let created = svc.create(payload("22233344455")).await.unwrap();

        let confirmation = svc.delete(created.id).await.unwrap();
        assert_eq!(confirmation.id, created.id);
        assert_eq!(
            confirmation.message,
            format!("Producer with ID {} deleted successfully.", created.id)
        );

        assert_matches!(
            svc.get(created.id).await,
            Err(CoreError::NotFound { .. })
        );
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        assert_matches!(
            service().delete(9999).await,
            Err(CoreError::NotFound { id: 9999, .. })
        );
    }
}
