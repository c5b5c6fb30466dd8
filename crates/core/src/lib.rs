//! Domain core for the Indie Page landing-page builder.
//!
//! Holds the landing-page document model, its default and merge policy,
//! validation rules, the render mapper, the store abstraction, and the
//! configuration service that ties them together. Nothing here performs
//! HTTP or SQL; the `indiepage-db` and `indiepage-api` crates plug in at the
//! [`store::LandingPageStore`] seam.

pub mod catalog;
pub mod error;
pub mod landing_page;
pub mod personal_link;
pub mod products;
pub mod render;
pub mod service;
pub mod store;
pub mod types;
