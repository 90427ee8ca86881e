//! Contexts module - org-scoped stores of environment variables

mod api;
mod models;

pub use models::{Context, ContextEnvVar, ContextOwner, OwnerType};
