//! Route definitions for the landing-page editor.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::landing_page;
use crate::state::AppState;

/// Editor routes mounted at `/landing-page`.
///
/// ```text
/// GET  /          -> get_landing_page
/// PUT  /          -> save_landing_page
/// POST /preview   -> preview_landing_page
/// GET  /options   -> get_editor_options
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(landing_page::get_landing_page).put(landing_page::save_landing_page),
        )
        .route("/preview", post(landing_page::preview_landing_page))
        .route("/options", get(landing_page::get_editor_options))
}
