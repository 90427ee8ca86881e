//! Project data models

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::error::CircleError;

/// Compound project identifier `vcs_type/org/project`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSlug {
    pub vcs_type: String,
    pub org: String,
    pub project: String,
}

impl ProjectSlug {
    /// Slug as used in URL paths
    pub fn as_path(&self) -> String {
        format!("{}/{}/{}", self.vcs_type, self.org, self.project)
    }
}

impl FromStr for ProjectSlug {
    type Err = CircleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        match parts.as_slice() {
            [vcs_type, org, project]
                if !vcs_type.is_empty() && !org.is_empty() && !project.is_empty() =>
            {
                Ok(Self {
                    vcs_type: vcs_type.to_string(),
                    org: org.to_string(),
                    project: project.to_string(),
                })
            }
            _ => Err(CircleError::InvalidSlug(s.to_string())),
        }
    }
}

impl fmt::Display for ProjectSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_path())
    }
}

/// Project data from CircleCI API v2
#[derive(Deserialize, Debug, Clone)]
pub struct Project {
    pub id: Option<String>,
    pub slug: String,
    pub name: String,
    pub organization_name: Option<String>,
    pub organization_slug: Option<String>,
    pub organization_id: String,
}

impl Project {
    /// Id of the organization (or account) owning the project
    pub fn owner_id(&self) -> &str {
        &self.organization_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_slug() {
        let slug: ProjectSlug = "github/acme/widgets".parse().unwrap();
        assert_eq!(slug.vcs_type, "github");
        assert_eq!(slug.org, "acme");
        assert_eq!(slug.project, "widgets");
        assert_eq!(slug.to_string(), "github/acme/widgets");
    }

    #[test]
    fn test_parse_too_few_parts() {
        let err = "github/acme".parse::<ProjectSlug>().unwrap_err();
        assert!(matches!(err, CircleError::InvalidSlug(s) if s == "github/acme"));
    }

    #[test]
    fn test_parse_too_many_parts() {
        assert!("github/acme/widgets/extra".parse::<ProjectSlug>().is_err());
    }

    #[test]
    fn test_parse_empty_component() {
        assert!("github//widgets".parse::<ProjectSlug>().is_err());
        assert!("".parse::<ProjectSlug>().is_err());
    }

    #[test]
    fn test_project_deserialize() {
        let project: Project = serde_json::from_value(serde_json::json!({
            "slug": "gh/acme/widgets",
            "name": "widgets",
            "id": "p-1",
            "organization_name": "acme",
            "organization_slug": "gh/acme",
            "organization_id": "org-uuid",
            "vcs_info": {"vcs_url": "https://github.com/acme/widgets"}
        }))
        .unwrap();
        assert_eq!(project.owner_id(), "org-uuid");
        assert_eq!(project.id.as_deref(), Some("p-1"));
        assert_eq!(project.name, "widgets");
    }
}
