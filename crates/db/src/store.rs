//! [`ProducerStore`] backed by PostgreSQL.

use agro_core::error::CoreError;
use agro_core::producer::store::ProducerStore;
use agro_core::producer::{NewProducer, Producer, ProducerChanges, ENTITY};
use agro_core::types::DbId;
use async_trait::async_trait;

use crate::repositories::producer_repo::IDENTIFIER_CONSTRAINT;
use crate::repositories::ProducerRepo;
use crate::DbPool;

/// PostgreSQL unique-violation SQLSTATE.
const UNIQUE_VIOLATION: &str = "23505";

/// Record store over a connection pool. Cheap to clone.
#[derive(Debug, Clone)]
pub struct PgProducerStore {
    pool: DbPool,
}

impl PgProducerStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Whether `err` is a violation of the named unique constraint.
fn is_unique_violation(err: &sqlx::Error, constraint: &str) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some(UNIQUE_VIOLATION)
                && db_err.constraint() == Some(constraint)
        }
        _ => false,
    }
}

fn internal(err: sqlx::Error) -> CoreError {
    CoreError::Internal(err.to_string())
}

#[async_trait]
impl ProducerStore for PgProducerStore {
    async fn insert(&self, record: &NewProducer) -> Result<Producer, CoreError> {
        match ProducerRepo::create(&self.pool, record).await {
            Ok(row) => Ok(row.into()),
            Err(err) if is_unique_violation(&err, IDENTIFIER_CONSTRAINT) => {
                Err(CoreError::DuplicateIdentifier {
                    identifier: record.identifier.clone(),
                })
            }
            Err(err) => Err(internal(err)),
        }
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Producer>, CoreError> {
        let row = ProducerRepo::find_by_id(&self.pool, id)
            .await
            .map_err(internal)?;
        Ok(row.map(Producer::from))
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Producer>, CoreError> {
        let rows = ProducerRepo::list(&self.pool, offset, limit)
            .await
            .map_err(internal)?;
        Ok(rows.into_iter().map(Producer::from).collect())
    }

    async fn count(&self) -> Result<i64, CoreError> {
        ProducerRepo::count(&self.pool).await.map_err(internal)
    }

    async fn update(&self, id: DbId, changes: &ProducerChanges) -> Result<Producer, CoreError> {
        ProducerRepo::update(&self.pool, id, changes)
            .await
            .map_err(internal)?
            .map(Producer::from)
            .ok_or(CoreError::NotFound { entity: ENTITY, id })
    }

    async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        if ProducerRepo::delete(&self.pool, id).await.map_err(internal)? {
            Ok(())
        } else {
            Err(CoreError::NotFound { entity: ENTITY, id })
        }
    }
}
