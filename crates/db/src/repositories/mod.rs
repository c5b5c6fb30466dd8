//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod landing_page_repo;

pub use landing_page_repo::LandingPageRepo;
