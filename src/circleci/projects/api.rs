//! Project API operations

use log::debug;

use crate::circleci::CircleClient;
use crate::config::api;
use crate::error::Result;

use super::models::{Project, ProjectSlug};

impl CircleClient {
    /// Get a project by slug (API v2)
    pub async fn get_project(&self, slug: &ProjectSlug) -> Result<Project> {
        let url = format!("{}/{}/{}", self.v2_url(), api::PROJECT, slug.as_path());

        debug!("Fetching project {} from: {}", slug, url);

        let response = self.get(&url).send().await?;
        self.parse_api_response(response, &format!("fetch project '{}'", slug))
            .await
    }
}
