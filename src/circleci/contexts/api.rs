//! Context API operations (API v2)

use log::debug;

use crate::circleci::traits::ApiListResponse;
use crate::circleci::CircleClient;
use crate::config::api;
use crate::error::Result;

use super::models::{Context, ContextEnvVar, ContextOwner, NewContextRequest};

impl CircleClient {
    /// Get all contexts for an owner (with pagination)
    pub async fn get_contexts(&self, owner: &ContextOwner) -> Result<Vec<Context>> {
        let url = format!(
            "{}/{}?owner-id={}&owner-type={}",
            self.v2_url(),
            api::CONTEXT,
            urlencoding::encode(&owner.id),
            owner.owner_type
        );
        let error_context = format!("list contexts for {} '{}'", owner.owner_type, owner.org);

        self.fetch_all_pages::<Context, ApiListResponse<Context>>(&url, &error_context)
            .await
    }

    /// Create a new context
    pub async fn add_context(&self, name: &str, owner: &ContextOwner) -> Result<Context> {
        let url = format!("{}/{}", self.v2_url(), api::CONTEXT);

        debug!("Creating context '{}' for {}", name, owner.org);

        let response = self
            .post(&url)
            .json(&NewContextRequest::new(name, owner))
            .send()
            .await?;
        let context: Context = self
            .parse_api_response(response, &format!("create context '{}'", name))
            .await?;

        debug!("Created context '{}' with id {}", name, context.id);
        Ok(context)
    }

    /// Delete a context
    pub async fn delete_context(&self, context_id: &str) -> Result<()> {
        let url = format!(
            "{}/{}/{}",
            self.v2_url(),
            api::CONTEXT,
            urlencoding::encode(context_id)
        );

        debug!("Deleting context: {}", context_id);

        let response = self.delete(&url).send().await?;
        self.expect_success(response, &format!("delete context '{}'", context_id))
            .await
    }

    /// Get all environment variables of a context (with pagination)
    pub async fn get_context_envvars(&self, context_id: &str) -> Result<Vec<ContextEnvVar>> {
        let url = self.context_envvars_url(context_id);
        let error_context = format!("list variables of context '{}'", context_id);

        self.fetch_all_pages::<ContextEnvVar, ApiListResponse<ContextEnvVar>>(&url, &error_context)
            .await
    }

    /// Add or update a context environment variable
    pub async fn add_context_envvar(&self, context_id: &str, name: &str, value: &str) -> Result<()> {
        let url = format!(
            "{}/{}",
            self.context_envvars_url(context_id),
            urlencoding::encode(name)
        );

        debug!("Setting variable {} in context {}", name, context_id);

        let response = self
            .put(&url)
            .json(&serde_json::json!({ "value": value }))
            .send()
            .await?;
        self.expect_success(response, &format!("add/update context variable '{}'", name))
            .await
    }

    /// Delete a context environment variable
    pub async fn delete_context_envvar(&self, context_id: &str, name: &str) -> Result<()> {
        let url = format!(
            "{}/{}",
            self.context_envvars_url(context_id),
            urlencoding::encode(name)
        );

        debug!("Deleting variable {} from context {}", name, context_id);

        let response = self.delete(&url).send().await?;
        self.expect_success(response, &format!("delete context variable '{}'", name))
            .await
    }

    fn context_envvars_url(&self, context_id: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.v2_url(),
            api::CONTEXT,
            urlencoding::encode(context_id),
            api::CONTEXT_ENVVARS
        )
    }
}
