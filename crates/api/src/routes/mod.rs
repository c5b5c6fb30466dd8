pub mod health;
pub mod landing_page;
pub mod pages;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /landing-page                  get, save (auth required)
/// /landing-page/preview          render unsaved changes (POST, auth required)
/// /landing-page/options          theme and font catalogs (GET)
///
/// /pages/{personal_link}         public display model (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Editor routes for the authenticated owner's page.
        .nest("/landing-page", landing_page::router())
        // Visitor routes.
        .nest("/pages", pages::router())
}
