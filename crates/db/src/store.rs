//! PostgreSQL implementation of [`LandingPageStore`].

use async_trait::async_trait;
use indiepage_core::error::CoreError;
use indiepage_core::landing_page::{LandingPage, LandingPagePatch, NewLandingPage};
use indiepage_core::store::LandingPageStore;
use indiepage_core::types::DbId;

use crate::repositories::landing_page_repo::{UQ_OWNER_ID, UQ_PERSONAL_LINK};
use crate::repositories::LandingPageRepo;
use crate::DbPool;

/// [`LandingPageStore`] over a PostgreSQL pool.
#[derive(Debug, Clone)]
pub struct PgLandingPageStore {
    pool: DbPool,
}

impl PgLandingPageStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LandingPageStore for PgLandingPageStore {
    async fn insert(&self, page: NewLandingPage) -> Result<LandingPage, CoreError> {
        let row = LandingPageRepo::insert(&self.pool, &page)
            .await
            .map_err(classify_sqlx_error)?;
        Ok(row.into())
    }

    async fn find_by_owner(&self, owner_id: &str) -> Result<Option<LandingPage>, CoreError> {
        let row = LandingPageRepo::find_by_owner(&self.pool, owner_id)
            .await
            .map_err(classify_sqlx_error)?;
        Ok(row.map(Into::into))
    }

    async fn find_by_slug(&self, personal_link: &str) -> Result<Option<LandingPage>, CoreError> {
        let row = LandingPageRepo::find_by_slug(&self.pool, personal_link)
            .await
            .map_err(classify_sqlx_error)?;
        Ok(row.map(Into::into))
    }

    async fn update_by_id(
        &self,
        id: DbId,
        patch: &LandingPagePatch,
    ) -> Result<LandingPage, CoreError> {
        LandingPageRepo::update_by_id(&self.pool, id, patch)
            .await
            .map_err(classify_sqlx_error)?
            .map(Into::into)
            .ok_or_else(|| CoreError::NotFound {
                entity: "LandingPage",
                key: id.to_string(),
            })
    }

    async fn ping(&self) -> Result<(), CoreError> {
        crate::health_check(&self.pool)
            .await
            .map_err(classify_sqlx_error)
    }
}

/// Classify a sqlx error into the core taxonomy.
///
/// - Unique violations (PostgreSQL 23505) on a `uq_` constraint map to `Conflict`.
/// - Connection-level failures map to `StoreUnavailable`.
/// - Everything else maps to `Internal`.
pub fn classify_sqlx_error(err: sqlx::Error) -> CoreError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
            match db_err.constraint() {
                Some(UQ_PERSONAL_LINK) => {
                    CoreError::Conflict("personalLink is already taken".to_string())
                }
                Some(UQ_OWNER_ID) => {
                    CoreError::Conflict("A landing page already exists for this owner".to_string())
                }
                Some(constraint) if constraint.starts_with("uq_") => CoreError::Conflict(format!(
                    "Duplicate value violates unique constraint: {constraint}"
                )),
                _ => {
                    tracing::error!(error = %db_err, "Unclassified unique violation");
                    CoreError::Internal(db_err.to_string())
                }
            }
        }
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::WorkerCrashed => {
            tracing::error!(error = %err, "Database unreachable");
            CoreError::StoreUnavailable(err.to_string())
        }
        _ => {
            tracing::error!(error = %err, "Database error");
            CoreError::Internal(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn pool_failures_are_store_unavailable() {
        assert_matches!(
            classify_sqlx_error(sqlx::Error::PoolTimedOut),
            CoreError::StoreUnavailable(_)
        );
        assert_matches!(
            classify_sqlx_error(sqlx::Error::PoolClosed),
            CoreError::StoreUnavailable(_)
        );
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        assert_matches!(
            classify_sqlx_error(sqlx::Error::Io(io)),
            CoreError::StoreUnavailable(_)
        );
    }

    #[test]
    fn other_errors_are_internal() {
        assert_matches!(
            classify_sqlx_error(sqlx::Error::RowNotFound),
            CoreError::Internal(_)
        );
        assert_matches!(
            classify_sqlx_error(sqlx::Error::Protocol("bad frame".into())),
            CoreError::Internal(_)
        );
    }
}
