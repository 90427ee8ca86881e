//! CircleCI API client module
//!
//! Contexts and their variables live on API v2; project variables are only
//! exposed through API v1.1.

mod client;
pub mod contexts;
pub mod envvars;
pub mod projects;
pub mod traits;

pub use client::CircleClient;
pub use contexts::{Context, ContextEnvVar, ContextOwner, OwnerType};
pub use envvars::ProjectEnvVar;
pub use projects::{Project, ProjectSlug};
pub use traits::{ApiListResponse, CircleApi, CircleResource, PaginatedResponse};

use crate::error::Result;

impl CircleApi for CircleClient {
    async fn get_project(&self, slug: &ProjectSlug) -> Result<Project> {
        CircleClient::get_project(self, slug).await
    }

    async fn get_contexts(&self, owner: &ContextOwner) -> Result<Vec<Context>> {
        CircleClient::get_contexts(self, owner).await
    }

    async fn add_context(&self, name: &str, owner: &ContextOwner) -> Result<Context> {
        CircleClient::add_context(self, name, owner).await
    }

    async fn delete_context(&self, context_id: &str) -> Result<()> {
        CircleClient::delete_context(self, context_id).await
    }

    async fn get_context_envvars(&self, context_id: &str) -> Result<Vec<ContextEnvVar>> {
        CircleClient::get_context_envvars(self, context_id).await
    }

    async fn add_context_envvar(&self, context_id: &str, name: &str, value: &str) -> Result<()> {
        CircleClient::add_context_envvar(self, context_id, name, value).await
    }

    async fn delete_context_envvar(&self, context_id: &str, name: &str) -> Result<()> {
        CircleClient::delete_context_envvar(self, context_id, name).await
    }

    async fn list_envvars(&self, slug: &ProjectSlug) -> Result<Vec<ProjectEnvVar>> {
        CircleClient::list_envvars(self, slug).await
    }

    async fn add_envvar(&self, slug: &ProjectSlug, name: &str, value: &str) -> Result<()> {
        CircleClient::add_envvar(self, slug, name, value).await
    }

    async fn delete_envvar(&self, slug: &ProjectSlug, name: &str) -> Result<()> {
        CircleClient::delete_envvar(self, slug, name).await
    }
}
