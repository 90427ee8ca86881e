//! Common traits for CircleCI resources and the API collaborator seam

use serde::Deserialize;

use crate::circleci::contexts::{Context, ContextEnvVar, ContextOwner};
use crate::circleci::envvars::ProjectEnvVar;
use crate::circleci::projects::{Project, ProjectSlug};
use crate::error::Result;

/// Common trait for named CircleCI resources
pub trait CircleResource {
    /// Get the resource ID
    fn id(&self) -> &str;

    /// Get the human-readable name
    fn name(&self) -> &str;

    /// Exact, case-sensitive name match
    fn has_name(&self, name: &str) -> bool {
        self.name() == name
    }
}

/// Trait for API responses that contain one page of data
///
/// Implement this trait for any list response to enable use with
/// `CircleClient::fetch_all_pages()`.
pub trait PaginatedResponse<T> {
    /// Consume self and return the items
    fn into_items(self) -> Vec<T>;
    /// Cursor for the next page, if there is one
    fn next_page_token(&self) -> Option<&str>;
}

/// Generic v2 list response (`items` + `next_page_token`)
#[derive(Deserialize, Debug)]
pub struct ApiListResponse<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

impl<T> PaginatedResponse<T> for ApiListResponse<T> {
    fn into_items(self) -> Vec<T> {
        self.items
    }

    fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.as_deref()
    }
}

/// The remote operations the environment manager depends on
///
/// `CircleClient` is the production implementation; tests substitute
/// in-memory fakes.
#[allow(async_fn_in_trait)]
pub trait CircleApi {
    /// Fetch project metadata (including the owning organization id)
    async fn get_project(&self, slug: &ProjectSlug) -> Result<Project>;

    /// List every context belonging to an owner
    async fn get_contexts(&self, owner: &ContextOwner) -> Result<Vec<Context>>;

    /// Create a context
    async fn add_context(&self, name: &str, owner: &ContextOwner) -> Result<Context>;

    /// Delete a context and everything stored in it
    async fn delete_context(&self, context_id: &str) -> Result<()>;

    /// List variables stored in a context (names only, values are never returned)
    async fn get_context_envvars(&self, context_id: &str) -> Result<Vec<ContextEnvVar>>;

    /// Add or update a context variable
    async fn add_context_envvar(&self, context_id: &str, name: &str, value: &str) -> Result<()>;

    /// Delete a context variable
    async fn delete_context_envvar(&self, context_id: &str, name: &str) -> Result<()>;

    /// List project variables (values are masked by the server)
    async fn list_envvars(&self, slug: &ProjectSlug) -> Result<Vec<ProjectEnvVar>>;

    /// Add or update a project variable
    async fn add_envvar(&self, slug: &ProjectSlug, name: &str, value: &str) -> Result<()>;

    /// Delete a project variable
    async fn delete_envvar(&self, slug: &ProjectSlug, name: &str) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestResource {
        id: String,
        name: String,
    }

    impl CircleResource for TestResource {
        fn id(&self) -> &str {
            &self.id
        }

        fn name(&self) -> &str {
            &self.name
        }
    }

    #[test]
    fn test_has_name_exact() {
        let resource = TestResource {
            id: "c-123".to_string(),
            name: "staging".to_string(),
        };
        assert!(resource.has_name("staging"));
        assert!(!resource.has_name("Staging"));
        assert!(!resource.has_name("c-123"));
        assert_eq!(resource.id(), "c-123");
    }

    #[test]
    fn test_api_list_response_with_token() {
        let response: ApiListResponse<serde_json::Value> =
            serde_json::from_value(serde_json::json!({
                "items": [{"id": "1"}, {"id": "2"}],
                "next_page_token": "abc"
            }))
            .unwrap();
        assert_eq!(response.next_page_token(), Some("abc"));
        assert_eq!(response.into_items().len(), 2);
    }

    #[test]
    fn test_api_list_response_without_token() {
        let response: ApiListResponse<serde_json::Value> =
            serde_json::from_value(serde_json::json!({
                "items": [{"id": "1"}]
            }))
            .unwrap();
        assert!(response.next_page_token().is_none());
        assert_eq!(response.into_items().len(), 1);
    }

    #[test]
    fn test_api_list_response_null_token() {
        let response: ApiListResponse<serde_json::Value> =
            serde_json::from_value(serde_json::json!({
                "items": [],
                "next_page_token": null
            }))
            .unwrap();
        assert!(response.next_page_token().is_none());
        assert!(response.into_items().is_empty());
    }
}
