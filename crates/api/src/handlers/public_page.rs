//! Visitor endpoint: a published landing page by its personal link.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use indiepage_core::error::CoreError;
use indiepage_core::render::render;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/pages/{personal_link}
///
/// Return the display model for a published page, or 404 when no page uses
/// this personal link.
pub async fn get_public_page(
    State(state): State<AppState>,
    Path(personal_link): Path<String>,
) -> AppResult<impl IntoResponse> {
    let page = state
        .pages
        .get_by_slug(&personal_link)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "LandingPage",
                key: personal_link.clone(),
            })
        })?;

    tracing::debug!(page_id = page.id, personal_link = %personal_link, "Serving public page");

    Ok(Json(DataResponse { data: render(&page) }))
}
