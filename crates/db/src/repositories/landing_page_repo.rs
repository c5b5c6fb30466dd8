//! Repository for the `landing_pages` table.

use indiepage_core::landing_page::{LandingPagePatch, NewLandingPage};
use indiepage_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::landing_page::LandingPageRow;

/// Column list for `landing_pages` queries.
const COLUMNS: &str = "\
    id, owner_id, title, description, template, customizations, content, \
    personal_link, created_at, updated_at, date_modified";

/// Unique constraint on `personal_link`.
pub const UQ_PERSONAL_LINK: &str = "uq_landing_pages_personal_link";

/// Unique constraint on `owner_id`.
pub const UQ_OWNER_ID: &str = "uq_landing_pages_owner_id";

/// Provides data access for landing pages.
pub struct LandingPageRepo;

impl LandingPageRepo {
    /// Insert a fully-defaulted landing page.
    pub async fn insert(pool: &PgPool, page: &NewLandingPage) -> Result<LandingPageRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO landing_pages \
                 (owner_id, title, description, template, customizations, content, personal_link) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LandingPageRow>(&query)
            .bind(&page.owner_id)
            .bind(&page.title)
            .bind(&page.description)
            .bind(&page.template)
            .bind(Json(&page.customizations))
            .bind(Json(&page.content))
            .bind(&page.personal_link)
            .fetch_one(pool)
            .await
    }

    /// Find the landing page owned by `owner_id`.
    pub async fn find_by_owner(
        pool: &PgPool,
        owner_id: &str,
    ) -> Result<Option<LandingPageRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM landing_pages WHERE owner_id = $1");
        sqlx::query_as::<_, LandingPageRow>(&query)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// Find the landing page published under `personal_link`.
    pub async fn find_by_slug(
        pool: &PgPool,
        personal_link: &str,
    ) -> Result<Option<LandingPageRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM landing_pages WHERE personal_link = $1");
        sqlx::query_as::<_, LandingPageRow>(&query)
            .bind(personal_link)
            .fetch_optional(pool)
            .await
    }

    /// Partially update a landing page.
    ///
    /// Scalar columns use `COALESCE`; the JSONB sections are merged with `||`
    /// so only the keys present in the patch are replaced. Legacy spellings of
    /// keys the patch sets are dropped first, otherwise the row would carry
    /// both spellings and fail to decode. Returns `None` if no row has the
    /// given id.
    pub async fn update_by_id(
        pool: &PgPool,
        id: DbId,
        patch: &LandingPagePatch,
    ) -> Result<Option<LandingPageRow>, sqlx::Error> {
        let query = format!(
            "UPDATE landing_pages SET \
                 title = COALESCE($2, title), \
                 description = COALESCE($3, description), \
                 template = COALESCE($4, template), \
                 personal_link = COALESCE($5, personal_link), \
                 customizations = customizations || $6, \
                 content = (content - $8::text[]) || $7, \
                 updated_at = NOW(), \
                 date_modified = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LandingPageRow>(&query)
            .bind(id)
            .bind(&patch.title)
            .bind(&patch.description)
            .bind(&patch.template)
            .bind(&patch.personal_link)
            .bind(Json(patch.customizations.clone().unwrap_or_default()))
            .bind(Json(patch.content.clone().unwrap_or_default()))
            .bind(superseded_legacy_keys(patch))
            .fetch_optional(pool)
            .await
    }
}

/// Legacy content keys that must be removed because the patch writes their
/// canonical spelling.
fn superseded_legacy_keys(patch: &LandingPagePatch) -> Vec<&'static str> {
    let Some(content) = &patch.content else {
        return Vec::new();
    };
    let mut keys = Vec::new();
    if content.input_field.is_some() {
        keys.push("emailInputValue");
    }
    if content.cta_text.is_some() {
        keys.push("ctaButtonText");
    }
    if content.show_cta_button.is_some() {
        keys.push("showCtaButton");
    }
    keys
}
