//! Project environment variable API operations

use log::debug;

use crate::circleci::projects::ProjectSlug;
use crate::circleci::CircleClient;
use crate::config::api;
use crate::error::Result;

use super::models::{NewEnvVarRequest, ProjectEnvVar};

impl CircleClient {
    /// List environment variables of a project
    pub async fn list_envvars(&self, slug: &ProjectSlug) -> Result<Vec<ProjectEnvVar>> {
        let url = self.project_envvars_url(slug);

        debug!("Listing variables of project {} from: {}", slug, url);

        let response = self.get(&url).send().await?;
        self.parse_api_response(response, &format!("list variables of project '{}'", slug))
            .await
    }

    /// Add or replace a project environment variable
    pub async fn add_envvar(&self, slug: &ProjectSlug, name: &str, value: &str) -> Result<()> {
        let url = self.project_envvars_url(slug);

        debug!("Setting variable {} in project {}", name, slug);

        let response = self
            .post(&url)
            .json(&NewEnvVarRequest { name, value })
            .send()
            .await?;
        self.expect_success(response, &format!("add/update variable '{}'", name))
            .await
    }

    /// Delete a project environment variable
    pub async fn delete_envvar(&self, slug: &ProjectSlug, name: &str) -> Result<()> {
        let url = format!(
            "{}/{}",
            self.project_envvars_url(slug),
            urlencoding::encode(name)
        );

        debug!("Deleting variable {} from project {}", name, slug);

        let response = self.delete(&url).send().await?;
        self.expect_success(response, &format!("delete variable '{}'", name))
            .await
    }

    fn project_envvars_url(&self, slug: &ProjectSlug) -> String {
        format!(
            "{}/{}/{}/{}",
            self.v1_url(),
            api::PROJECT,
            slug.as_path(),
            api::PROJECT_ENVVARS
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn slug() -> ProjectSlug {
        "github/acme/widgets".parse().unwrap()
    }

    #[tokio::test]
    async fn test_list_envvars() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1.1/project/github/acme/widgets/envvar"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"name": "FOO", "value": "xxxxbar"},
                {"name": "TOKEN", "value": "xxxx1234"}
            ])))
            .mount(&mock_server)
            .await;

        let client = CircleClient::test_client(&mock_server.uri());
        let vars = client.list_envvars(&slug()).await.unwrap();

        assert_eq!(vars.len(), 2);
        assert_eq!(vars[0].name, "FOO");
        assert_eq!(vars[1].name, "TOKEN");
    }

    #[tokio::test]
    async fn test_add_envvar() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1.1/project/github/acme/widgets/envvar"))
            .and(body_json(serde_json::json!({"name": "FOO", "value": "bar"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "name": "FOO",
                "value": "xxxxbar"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = CircleClient::test_client(&mock_server.uri());
        assert!(client.add_envvar(&slug(), "FOO", "bar").await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_envvar() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/v1.1/project/github/acme/widgets/envvar/FOO"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "message": "ok"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = CircleClient::test_client(&mock_server.uri());
        assert!(client.delete_envvar(&slug(), "FOO").await.is_ok());
    }

    #[tokio::test]
    async fn test_add_envvar_rate_limited() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1.1/project/github/acme/widgets/envvar"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&mock_server)
            .await;

        let client = CircleClient::test_client(&mock_server.uri());
        let err = client.add_envvar(&slug(), "FOO", "bar").await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::RateLimited);
        assert!(err.to_string().contains("FOO"));
    }
}
