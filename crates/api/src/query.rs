//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Pagination parameters (`?offset=&limit=`, with `skip` accepted for `offset`).
///
/// Values are clamped in the handler via `clamp_limit` / `clamp_offset`.
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    #[serde(alias = "skip")]
    pub offset: Option<i64>,
}
