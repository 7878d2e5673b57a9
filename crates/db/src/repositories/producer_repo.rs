//! Repository for the `producers` table.

use agro_core::producer::{NewProducer, ProducerChanges};
use agro_core::types::DbId;
use sqlx::PgPool;

use crate::models::producer::ProducerRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, identifier, name, farm_name, city, state, \
    total_area_hectares, arable_area_hectares, vegetation_area_hectares, \
    planted_crops, created_at, updated_at, is_active";

/// Unique constraint guarding `identifier`.
pub const IDENTIFIER_CONSTRAINT: &str = "uq_producers_identifier";

/// Provides CRUD operations for producers.
pub struct ProducerRepo;

impl ProducerRepo {
    /// Insert a new producer, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewProducer) -> Result<ProducerRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO producers (identifier, name, farm_name, city, state,
                total_area_hectares, arable_area_hectares, vegetation_area_hectares, planted_crops)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProducerRow>(&query)
            .bind(&input.identifier)
            .bind(&input.name)
            .bind(&input.farm_name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(input.total_area_hectares)
            .bind(input.arable_area_hectares)
            .bind(input.vegetation_area_hectares)
            .bind(&input.planted_crops)
            .fetch_one(pool)
            .await
    }

    /// Find a producer by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ProducerRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM producers WHERE id = $1");
        sqlx::query_as::<_, ProducerRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List producers by ascending ID with offset pagination.
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<ProducerRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM producers ORDER BY id ASC LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, ProducerRow>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count all producers.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM producers")
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// Update a producer. Only non-`None` fields in `input` are applied and
    /// `updated_at` is always refreshed.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ProducerChanges,
    ) -> Result<Option<ProducerRow>, sqlx::Error> {
        let query = format!(
            "UPDATE producers SET
                name = COALESCE($2, name),
                farm_name = COALESCE($3, farm_name),
                city = COALESCE($4, city),
                state = COALESCE($5, state),
                total_area_hectares = COALESCE($6, total_area_hectares),
                arable_area_hectares = COALESCE($7, arable_area_hectares),
                vegetation_area_hectares = COALESCE($8, vegetation_area_hectares),
                planted_crops = COALESCE($9, planted_crops),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProducerRow>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.farm_name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(input.total_area_hectares)
            .bind(input.arable_area_hectares)
            .bind(input.vegetation_area_hectares)
            .bind(&input.planted_crops)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a producer by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM producers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
