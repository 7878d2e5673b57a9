use agro_core::producer::service::ProducerService;
use agro_db::PgProducerStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is reference-counted).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: agro_db::DbPool,
}

impl AppState {
    /// Producer service bound to this state's pool.
    pub fn producers(&self) -> ProducerService<PgProducerStore> {
        ProducerService::new(PgProducerStore::new(self.pool.clone()))
    }
}
