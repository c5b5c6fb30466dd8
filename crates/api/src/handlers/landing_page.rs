//! Editor endpoints for the authenticated owner's landing page.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use indiepage_core::catalog::editor_options;
use indiepage_core::landing_page::LandingPagePatch;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/landing-page
///
/// Retrieve the authenticated owner's landing page.
/// Returns 204 if no page has been configured yet.
pub async fn get_landing_page(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let page = state.pages.get_for_owner(&user.owner_id).await?;

    match page {
        Some(p) => Ok(Json(DataResponse { data: p }).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

/// PUT /api/v1/landing-page
///
/// Create the owner's landing page (201) or merge the partial payload into
/// the existing one (200).
pub async fn save_landing_page(
    user: AuthUser,
    State(state): State<AppState>,
    payload: Result<Json<LandingPagePatch>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(patch) = payload?;
    let outcome = state.pages.create_or_update(&user.owner_id, patch).await?;

    let status = if outcome.is_created() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(DataResponse { data: outcome.into_page() })))
}

/// POST /api/v1/landing-page/preview
///
/// Render the owner's page with the payload applied, without saving it.
pub async fn preview_landing_page(
    user: AuthUser,
    State(state): State<AppState>,
    payload: Result<Json<LandingPagePatch>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(patch) = payload?;
    let model = state.pages.preview(&user.owner_id, patch).await?;

    Ok(Json(DataResponse { data: model }))
}

/// GET /api/v1/landing-page/options
///
/// Theme and font catalogs for the editor pickers.
pub async fn get_editor_options() -> impl IntoResponse {
    Json(DataResponse {
        data: editor_options(),
    })
}
