//! Projects module - project slug parsing and project lookup

mod api;
mod models;

pub use models::{Project, ProjectSlug};
