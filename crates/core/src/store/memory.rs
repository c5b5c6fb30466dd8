//! In-process [`LandingPageStore`] backed by a lock-protected vector.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::LandingPageStore;
use crate::error::CoreError;
use crate::landing_page::{LandingPage, LandingPagePatch, NewLandingPage};
use crate::types::DbId;

#[derive(Debug, Default)]
struct Inner {
    next_id: DbId,
    pages: Vec<LandingPage>,
}

/// Landing pages held in memory, with the same uniqueness rules as the
/// PostgreSQL schema.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents.
    pub async fn len(&self) -> usize {
        self.inner.read().await.pages.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

fn slug_taken(pages: &[LandingPage], slug: &str, except: Option<DbId>) -> bool {
    pages
        .iter()
        .any(|p| Some(p.id) != except && p.personal_link.as_deref() == Some(slug))
}

#[async_trait]
impl LandingPageStore for MemoryStore {
    async fn insert(&self, page: NewLandingPage) -> Result<LandingPage, CoreError> {
        let mut inner = self.inner.write().await;

        if inner.pages.iter().any(|p| p.owner_id == page.owner_id) {
            return Err(CoreError::Conflict(format!(
                "A landing page already exists for owner '{}'",
                page.owner_id
            )));
        }
        if let Some(slug) = &page.personal_link {
            if slug_taken(&inner.pages, slug, None) {
                return Err(CoreError::Conflict(format!(
                    "personalLink '{slug}' is already taken"
                )));
            }
        }

        inner.next_id += 1;
        let stored = page.into_unsaved(chrono::Utc::now());
        let stored = LandingPage {
            id: inner.next_id,
            ..stored
        };
        inner.pages.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_owner(&self, owner_id: &str) -> Result<Option<LandingPage>, CoreError> {
        let inner = self.inner.read().await;
        Ok(inner.pages.iter().find(|p| p.owner_id == owner_id).cloned())
    }

    async fn find_by_slug(&self, personal_link: &str) -> Result<Option<LandingPage>, CoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .pages
            .iter()
            .find(|p| p.personal_link.as_deref() == Some(personal_link))
            .cloned())
    }

    async fn update_by_id(
        &self,
        id: DbId,
        patch: &LandingPagePatch,
    ) -> Result<LandingPage, CoreError> {
        let mut inner = self.inner.write().await;

        if let Some(slug) = &patch.personal_link {
            if slug_taken(&inner.pages, slug, Some(id)) {
                return Err(CoreError::Conflict(format!(
                    "personalLink '{slug}' is already taken"
                )));
            }
        }

        let page = inner
            .pages
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| CoreError::NotFound {
                entity: "LandingPage",
                key: id.to_string(),
            })?;

        let now = chrono::Utc::now();
        *page = LandingPage {
            updated_at: now,
            date_modified: now,
            ..page.merged(patch)
        };
        Ok(page.clone())
    }

    async fn ping(&self) -> Result<(), CoreError> {
        Ok(())
    }
}
