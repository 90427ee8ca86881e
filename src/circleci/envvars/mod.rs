//! Project environment variables module (API v1.1)

mod api;
mod models;

pub use models::ProjectEnvVar;
