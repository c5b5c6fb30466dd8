//! Database row structs.

pub mod landing_page;
