//! Row model for the `landing_pages` table.

use indiepage_core::landing_page::{Customizations, LandingPage, PageContent};
use indiepage_core::types::{DbId, Timestamp};
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `landing_pages` table.
///
/// `customizations` and `content` are JSONB documents; missing keys decode
/// to their defaults and legacy product shapes are normalized on decode.
#[derive(Debug, Clone, FromRow)]
pub struct LandingPageRow {
    pub id: DbId,
    pub owner_id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub template: Option<String>,
    pub customizations: Json<Customizations>,
    pub content: Json<PageContent>,
    pub personal_link: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub date_modified: Timestamp,
}

impl From<LandingPageRow> for LandingPage {
    fn from(row: LandingPageRow) -> Self {
        LandingPage {
            id: row.id,
            owner_id: row.owner_id,
            title: row.title,
            description: row.description,
            template: row.template,
            customizations: row.customizations.0,
            content: row.content.0,
            personal_link: row.personal_link,
            created_at: row.created_at,
            updated_at: row.updated_at,
            date_modified: row.date_modified,
        }
    }
}
