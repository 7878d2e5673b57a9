//! Persistence contract for producer records.

use async_trait::async_trait;

use crate::error::CoreError;
use crate::types::DbId;

use super::{NewProducer, Producer, ProducerChanges};

/// Storage backend for producers.
///
/// Implementations own all persisted state and enforce identifier
/// uniqueness atomically with the write. Failures unrelated to the domain
/// rules are reported as [`CoreError::Internal`].
#[async_trait]
pub trait ProducerStore: Send + Sync {
    /// Persist a new record, assigning `id` and `created_at`.
    ///
    /// Fails with [`CoreError::DuplicateIdentifier`] if the identifier is taken.
    async fn insert(&self, record: &NewProducer) -> Result<Producer, CoreError>;

    /// Fetch a record. Absence is `Ok(None)`, not an error.
    async fn find_by_id(&self, id: DbId) -> Result<Option<Producer>, CoreError>;

    /// Records ordered by ascending `id`, skipping `offset` and returning at
    /// most `limit`. Past the end this is an empty vector.
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Producer>, CoreError>;

    /// Number of stored records.
    async fn count(&self) -> Result<i64, CoreError>;

    /// Apply the supplied fields and refresh `updated_at`.
    ///
    /// Fails with [`CoreError::NotFound`] if no record has this id.
    async fn update(&self, id: DbId, changes: &ProducerChanges) -> Result<Producer, CoreError>;

    /// Physically remove a record.
    ///
    /// Fails with [`CoreError::NotFound`] if no record has this id.
    async fn delete(&self, id: DbId) -> Result<(), CoreError>;
}
