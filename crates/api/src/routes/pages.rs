//! Route definitions for published pages.

use axum::routing::get;
use axum::Router;

use crate::handlers::public_page;
use crate::state::AppState;

/// Visitor routes mounted at `/pages`.
///
/// ```text
/// GET /{personal_link}  -> get_public_page
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{personal_link}", get(public_page::get_public_page))
}
