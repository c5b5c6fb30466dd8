//! Configuration service: validation and default policy over a store.
//!
//! Editor writes go through [`LandingPageService::create_or_update`], which
//! validates the patch before touching the store, inserts a defaulted
//! document on an owner's first save, and merges into the existing document
//! afterwards. Visitor reads go through [`LandingPageService::get_by_slug`].

use std::sync::Arc;

use crate::error::CoreError;
use crate::landing_page::{apply_defaults, LandingPage, LandingPagePatch};
use crate::personal_link;
use crate::render::{render, DisplayModel};
use crate::store::LandingPageStore;

/// Result of a create-or-update call.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    Created(LandingPage),
    Updated(LandingPage),
}

impl SaveOutcome {
    pub fn page(&self) -> &LandingPage {
        match self {
            SaveOutcome::Created(p) | SaveOutcome::Updated(p) => p,
        }
    }

    pub fn into_page(self) -> LandingPage {
        match self {
            SaveOutcome::Created(p) | SaveOutcome::Updated(p) => p,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, SaveOutcome::Created(_))
    }
}

/// Read/write API over a [`LandingPageStore`]. Cheap to clone.
#[derive(Clone)]
pub struct LandingPageService {
    store: Arc<dyn LandingPageStore>,
}

impl LandingPageService {
    pub fn new(store: Arc<dyn LandingPageStore>) -> Self {
        Self { store }
    }

    /// Validate `patch`, then insert the owner's first page or merge into
    /// the existing one.
    ///
    /// Validation failures leave the store untouched. A slug owned by another
    /// document fails with [`CoreError::Conflict`].
    pub async fn create_or_update(
        &self,
        owner_id: &str,
        patch: LandingPagePatch,
    ) -> Result<SaveOutcome, CoreError> {
        patch.check()?;

        if let Some(existing) = self.store.find_by_owner(owner_id).await? {
            let page = self.store.update_by_id(existing.id, &patch).await?;
            tracing::info!(
                owner_id,
                page_id = page.id,
                personal_link = page.personal_link.as_deref(),
                "Landing page updated",
            );
            return Ok(SaveOutcome::Updated(page));
        }

        match self.store.insert(apply_defaults(owner_id, patch.clone())).await {
            Ok(page) => {
                tracing::info!(
                    owner_id,
                    page_id = page.id,
                    personal_link = page.personal_link.as_deref(),
                    "Landing page created",
                );
                Ok(SaveOutcome::Created(page))
            }
            Err(CoreError::Conflict(msg)) => {
                // A concurrent first save for the same owner may have won the
                // insert; fold this patch into that document instead.
                match self.store.find_by_owner(owner_id).await? {
                    Some(existing) => {
                        tracing::debug!(owner_id, "Insert lost first-save race, merging");
                        let page = self.store.update_by_id(existing.id, &patch).await?;
                        Ok(SaveOutcome::Updated(page))
                    }
                    None => Err(CoreError::Conflict(msg)),
                }
            }
            Err(e) => Err(e),
        }
    }

    /// The owner's page, or `None` when nothing has been configured yet.
    pub async fn get_for_owner(&self, owner_id: &str) -> Result<Option<LandingPage>, CoreError> {
        self.store.find_by_owner(owner_id).await
    }

    /// The page published under `personal_link`, or `None` when no such
    /// page exists. Slugs that could never have been stored are answered
    /// without a store round trip.
    pub async fn get_by_slug(&self, personal_link: &str) -> Result<Option<LandingPage>, CoreError> {
        if !personal_link::is_well_formed(personal_link) {
            tracing::debug!(personal_link, "Rejected malformed slug lookup");
            return Ok(None);
        }
        self.store.find_by_slug(personal_link).await
    }

    /// Render what the owner's page would look like with `patch` applied,
    /// without saving anything.
    pub async fn preview(
        &self,
        owner_id: &str,
        patch: LandingPagePatch,
    ) -> Result<DisplayModel, CoreError> {
        patch.check()?;

        let page = match self.store.find_by_owner(owner_id).await? {
            Some(existing) => existing.merged(&patch),
            None => apply_defaults(owner_id, patch).into_unsaved(chrono::Utc::now()),
        };
        Ok(render(&page))
    }

    /// Whether the backing store answers.
    pub async fn store_healthy(&self) -> bool {
        match self.store.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Store health check failed");
                false
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::landing_page::{ContentPatch, CustomizationsPatch, NewLandingPage};
    use crate::store::memory::MemoryStore;
    use crate::types::DbId;

    fn service() -> (LandingPageService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (LandingPageService::new(store.clone()), store)
    }

    fn patch(value: serde_json::Value) -> LandingPagePatch {
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn first_save_inserts_with_defaults() {
        let (svc, store) = service();
        let outcome = svc
            .create_or_update("u1", patch(json!({ "personalLink": "alice" })))
            .await
            .unwrap();

        assert!(outcome.is_created());
        let page = outcome.into_page();
        assert_eq!(page.owner_id, "u1");
        assert_eq!(page.customizations.theme, "light");
        assert_eq!(page.customizations.font, "Lato");
        assert!(page.content.show_user_icon);
        assert!(page.content.show_email_input);
        assert!(page.content.show_cta_button);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn second_save_merges_into_existing() {
        let (svc, store) = service();
        svc.create_or_update(
            "u1",
            patch(json!({
                "personalLink": "alice",
                "customizations": { "theme": "dracula" },
                "content": { "mainHeadline": "Hi", "ctaText": "Go" },
            })),
        )
        .await
        .unwrap();

        let outcome = svc
            .create_or_update(
                "u1",
                patch(json!({
                    "customizations": { "font": "Poppins" },
                    "content": { "ctaText": "Join" },
                })),
            )
            .await
            .unwrap();

        assert!(!outcome.is_created());
        let page = outcome.page();
        assert_eq!(page.customizations.theme, "dracula");
        assert_eq!(page.customizations.font, "Poppins");
        assert_eq!(page.content.main_headline.as_deref(), Some("Hi"));
        assert_eq!(page.content.cta_text.as_deref(), Some("Join"));
        assert_eq!(page.personal_link.as_deref(), Some("alice"));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn same_slug_same_owner_updates() {
        let (svc, store) = service();
        let first = svc
            .create_or_update("u1", patch(json!({ "personalLink": "alice" })))
            .await
            .unwrap()
            .into_page();

        let second = svc
            .create_or_update(
                "u1",
                patch(json!({ "personalLink": "alice", "title": "Again" })),
            )
            .await
            .unwrap();

        assert_matches!(&second, SaveOutcome::Updated(p) if p.id == first.id);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn same_slug_other_owner_conflicts() {
        let (svc, store) = service();
        svc.create_or_update("u1", patch(json!({ "personalLink": "alice" })))
            .await
            .unwrap();

        let err = svc
            .create_or_update("u2", patch(json!({ "personalLink": "alice" })))
            .await
            .unwrap_err();

        assert_matches!(err, CoreError::Conflict(_));
        assert_eq!(store.len().await, 1);
        assert!(svc.get_for_owner("u2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn renaming_onto_taken_slug_conflicts() {
        let (svc, _store) = service();
        svc.create_or_update("u1", patch(json!({ "personalLink": "alice" })))
            .await
            .unwrap();
        svc.create_or_update("u2", patch(json!({ "personalLink": "bob" })))
            .await
            .unwrap();

        let err = svc
            .create_or_update("u2", patch(json!({ "personalLink": "alice" })))
            .await
            .unwrap_err();
        assert_matches!(err, CoreError::Conflict(_));

        let bob = svc.get_by_slug("bob").await.unwrap().unwrap();
        assert_eq!(bob.owner_id, "u2");
    }

    #[tokio::test]
    async fn invalid_slug_leaves_store_unchanged() {
        let (svc, store) = service();
        let err = svc
            .create_or_update("u1", patch(json!({ "personalLink": "bob!" })))
            .await
            .unwrap_err();

        assert_matches!(err, CoreError::Validation(_));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn invalid_update_leaves_existing_page_unchanged() {
        let (svc, _store) = service();
        let before = svc
            .create_or_update("u1", patch(json!({ "personalLink": "alice" })))
            .await
            .unwrap()
            .into_page();

        let err = svc
            .create_or_update(
                "u1",
                patch(json!({
                    "title": "Changed",
                    "content": { "products": [{ "productName": "X", "productPrice": -3 }] },
                })),
            )
            .await
            .unwrap_err();
        assert_matches!(err, CoreError::Validation(_));

        let after = svc.get_for_owner("u1").await.unwrap().unwrap();
        assert_eq!(after, before);
    }

    async fn page_with_products(svc: &LandingPageService) -> LandingPage {
        svc.create_or_update(
            "u1",
            patch(json!({
                "personalLink": "alice",
                "content": {
                    "products": [{ "productName": "A", "productURL": "https://a.example" }],
                },
            })),
        )
        .await
        .unwrap()
        .into_page()
    }

    #[tokio::test]
    async fn non_numeric_product_price_is_rejected_before_saving() {
        let (svc, _store) = service();
        let before = page_with_products(&svc).await;

        let submitted = serde_json::from_value::<LandingPagePatch>(json!({
            "content": {
                "products": [
                    { "productName": "A", "productURL": "https://a.example" },
                    { "productName": "B", "productPrice": "-5" },
                ],
            },
        }));
        assert!(submitted.is_err(), "unparseable product entry must not be dropped");

        let after = svc.get_for_owner("u1").await.unwrap().unwrap();
        assert_eq!(after, before);
        assert_eq!(after.content.products.items.len(), 1);
    }

    #[tokio::test]
    async fn scalar_products_value_is_rejected_before_saving() {
        let (svc, _store) = service();
        let before = page_with_products(&svc).await;

        let submitted =
            serde_json::from_value::<LandingPagePatch>(json!({ "content": { "products": "oops" } }));
        assert!(submitted.is_err(), "a scalar must not erase the stored products");

        let after = svc.get_for_owner("u1").await.unwrap().unwrap();
        assert_eq!(after, before);
        assert!(after.content.products.is_visible());
    }

    #[tokio::test]
    async fn get_for_owner_without_page_is_none() {
        let (svc, _store) = service();
        assert!(svc.get_for_owner("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn unknown_slug_is_none() {
        let (svc, _store) = service();
        assert!(svc.get_by_slug("nonexistent").await.unwrap().is_none());
        assert!(svc.get_by_slug("bad slug!").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn hidden_email_input_scenario() {
        let (svc, _store) = service();
        svc.create_or_update(
            "u1",
            patch(json!({
                "personalLink": "alice",
                "content": { "showEmailInput": false },
            })),
        )
        .await
        .unwrap();

        let page = svc.get_by_slug("alice").await.unwrap().unwrap();
        assert!(page.content.show_user_icon);
        assert!(page.content.show_cta_button);

        let model = render(&page);
        assert!(model.email_capture.is_none());
        assert!(model.user_icon.is_some());
    }

    #[tokio::test]
    async fn preview_does_not_write() {
        let (svc, store) = service();
        let model = svc
            .preview(
                "u1",
                LandingPagePatch {
                    customizations: Some(CustomizationsPatch {
                        theme: Some("synthwave".into()),
                        font: None,
                    }),
                    ..LandingPagePatch::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(model.theme, "synthwave");
        assert_eq!(model.font, "Lato");
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn preview_merges_onto_stored_page() {
        let (svc, _store) = service();
        svc.create_or_update(
            "u1",
            patch(json!({ "content": { "mainHeadline": "Stored", "ctaText": "Go" } })),
        )
        .await
        .unwrap();

        let model = svc
            .preview(
                "u1",
                LandingPagePatch {
                    content: Some(ContentPatch {
                        cta_text: Some("Preview".into()),
                        ..ContentPatch::default()
                    }),
                    ..LandingPagePatch::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(model.headline.as_deref(), Some("Stored"));
        let cta = model.email_capture.unwrap().cta_button.unwrap();
        assert_eq!(cta.text.as_deref(), Some("Preview"));

        let stored = svc.get_for_owner("u1").await.unwrap().unwrap();
        assert_eq!(stored.content.cta_text.as_deref(), Some("Go"));
    }

    #[tokio::test]
    async fn preview_rejects_invalid_patch() {
        let (svc, _store) = service();
        let err = svc
            .preview("u1", patch(json!({ "personalLink": "no way" })))
            .await
            .unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
    }

    /// Store whose first lookup misses but whose insert reports the owner
    /// already exists, as happens when two first saves race.
    struct RacingStore {
        inner: MemoryStore,
        lookups: std::sync::atomic::AtomicUsize,
    }

    #[async_trait]
    impl LandingPageStore for RacingStore {
        async fn insert(&self, page: NewLandingPage) -> Result<LandingPage, CoreError> {
            self.inner.insert(page).await
        }

        async fn find_by_owner(&self, owner_id: &str) -> Result<Option<LandingPage>, CoreError> {
            let n = self
                .lookups
                .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            if n == 0 {
                return Ok(None);
            }
            self.inner.find_by_owner(owner_id).await
        }

        async fn find_by_slug(&self, slug: &str) -> Result<Option<LandingPage>, CoreError> {
            self.inner.find_by_slug(slug).await
        }

        async fn update_by_id(
            &self,
            id: DbId,
            patch: &LandingPagePatch,
        ) -> Result<LandingPage, CoreError> {
            self.inner.update_by_id(id, patch).await
        }

        async fn ping(&self) -> Result<(), CoreError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn lost_first_save_race_becomes_update() {
        let inner = MemoryStore::new();
        inner
            .insert(apply_defaults("u1", patch(json!({ "title": "Winner" }))))
            .await
            .unwrap();
        let store = Arc::new(RacingStore {
            inner,
            lookups: std::sync::atomic::AtomicUsize::new(0),
        });
        let svc = LandingPageService::new(store.clone());

        let outcome = svc
            .create_or_update("u1", patch(json!({ "description": "Loser" })))
            .await
            .unwrap();

        assert!(!outcome.is_created());
        let page = outcome.into_page();
        assert_eq!(page.title.as_deref(), Some("Winner"));
        assert_eq!(page.description.as_deref(), Some("Loser"));
        assert_eq!(store.inner.len().await, 1);
    }

    #[tokio::test]
    async fn healthy_memory_store() {
        let (svc, _store) = service();
        assert!(svc.store_healthy().await);
    }
}
