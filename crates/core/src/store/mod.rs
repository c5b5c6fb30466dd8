//! Configuration store abstraction.
//!
//! [`LandingPageStore`] is the seam between the service and persistence.
//! `indiepage-db` implements it over PostgreSQL; [`memory::MemoryStore`]
//! implements it in-process for tests and local tooling.

pub mod memory;

use async_trait::async_trait;

use crate::error::CoreError;
use crate::landing_page::{LandingPage, LandingPagePatch, NewLandingPage};
use crate::types::DbId;

/// Durable keyed storage for landing-page documents.
///
/// Implementations must enforce that a `personal_link` value and an
/// `owner_id` value each belong to at most one document, reporting
/// violations as [`CoreError::Conflict`].
#[async_trait]
pub trait LandingPageStore: Send + Sync {
    /// Insert a new document, assigning its id and timestamps.
    async fn insert(&self, page: NewLandingPage) -> Result<LandingPage, CoreError>;

    /// The document owned by `owner_id`, if any.
    async fn find_by_owner(&self, owner_id: &str) -> Result<Option<LandingPage>, CoreError>;

    /// The document published under `personal_link`, if any.
    async fn find_by_slug(&self, personal_link: &str) -> Result<Option<LandingPage>, CoreError>;

    /// Merge `patch` into document `id` and refresh `updated_at` and
    /// `date_modified`.
    ///
    /// Fails with [`CoreError::NotFound`] for an unknown id.
    async fn update_by_id(
        &self,
        id: DbId,
        patch: &LandingPagePatch,
    ) -> Result<LandingPage, CoreError>;

    /// Check that the backing store is reachable.
    async fn ping(&self) -> Result<(), CoreError>;
}
