use async_trait::async_trait;
use sqlx::PgPool;
use tracing::warn;

use notes_core::error::DomainError;
use notes_core::repositories::HealthRepository;

pub struct PgHealthRepository {
    pool: PgPool,
}

impl PgHealthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HealthRepository for PgHealthRepository {
    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| {
                warn!("Database health check failed: {}", e);
                DomainError::DatabaseError(e.to_string())
            })
    }
}
