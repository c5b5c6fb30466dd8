//! Request handlers.
//!
//! Handlers delegate to the [`LandingPageService`](indiepage_core::service::LandingPageService)
//! held in [`AppState`](crate::state::AppState) and map errors via
//! [`AppError`](crate::error::AppError).

pub mod landing_page;
pub mod public_page;
