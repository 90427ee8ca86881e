/// Configuration constants for the CircleCI API
pub mod api {
    /// Path prefix for CircleCI API v2
    pub const V2_PATH: &str = "/v2";

    /// Path prefix for CircleCI API v1.1 (project environment variables)
    pub const V1_PATH: &str = "/v1.1";

    /// Projects endpoint
    pub const PROJECT: &str = "project";

    /// Contexts endpoint
    pub const CONTEXT: &str = "context";

    /// Context environment variables sub-resource
    pub const CONTEXT_ENVVARS: &str = "environment-variable";

    /// Project environment variables sub-resource (v1.1)
    pub const PROJECT_ENVVARS: &str = "envvar";

    /// Query parameter carrying the v2 pagination cursor
    pub const PAGE_TOKEN_PARAM: &str = "page-token";

    /// Header carrying the personal API token
    pub const TOKEN_HEADER: &str = "Circle-Token";

    /// Maximum number of variable operations in flight at once
    pub const MAX_CONCURRENT_REQUESTS: usize = 5;
}

/// Default values for CLI
pub mod defaults {
    /// Default CircleCI API base URL
    pub const API_URL: &str = "https://circleci.com/api";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_paths_format() {
        assert!(api::V2_PATH.starts_with('/'));
        assert!(api::V1_PATH.starts_with('/'));
    }

    #[test]
    fn test_concurrency_cap() {
        assert_eq!(api::MAX_CONCURRENT_REQUESTS, 5);
    }

    #[test]
    fn test_default_api_url_is_valid() {
        assert!(defaults::API_URL.starts_with("https://"));
        assert!(!defaults::API_URL.ends_with('/'));
    }
}
