//! Single-variable operation requests

use std::fmt;

use crate::circleci::ProjectSlug;

use super::variables::parse_entry;

/// What to do with a variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AddOrUpdate,
    Delete,
}

impl Action {
    pub fn from_delete_flag(delete: bool) -> Self {
        if delete {
            Action::Delete
        } else {
            Action::AddOrUpdate
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::AddOrUpdate => write!(f, "add/update"),
            Action::Delete => write!(f, "delete"),
        }
    }
}

/// Where a variable lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A context, by server-assigned id
    Context { id: String },
    /// A project's own variables
    Project(ProjectSlug),
}

/// A pending operation on one variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVarRequest {
    pub key: String,
    pub value: String,
    pub action: Action,
    pub target: Target,
}

impl EnvVarRequest {
    /// Build a request from a raw `KEY=VALUE` entry
    pub fn from_entry(entry: &str, action: Action, target: Target) -> Self {
        let (key, value) = parse_entry(entry);
        Self {
            key,
            value,
            action,
            target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_display() {
        assert_eq!(Action::AddOrUpdate.to_string(), "add/update");
        assert_eq!(Action::Delete.to_string(), "delete");
    }

    #[test]
    fn test_action_from_delete_flag() {
        assert_eq!(Action::from_delete_flag(true), Action::Delete);
        assert_eq!(Action::from_delete_flag(false), Action::AddOrUpdate);
    }

    #[test]
    fn test_request_from_entry() {
        let request = EnvVarRequest::from_entry(
            "FOO=bar",
            Action::AddOrUpdate,
            Target::Context {
                id: "ctx-1".to_string(),
            },
        );
        assert_eq!(request.key, "FOO");
        assert_eq!(request.value, "bar");
        assert_eq!(
            request.target,
            Target::Context {
                id: "ctx-1".to_string()
            }
        );
    }

    #[test]
    fn test_request_from_bare_key() {
        let slug: ProjectSlug = "github/acme/widgets".parse().unwrap();
        let request = EnvVarRequest::from_entry("OLD_KEY", Action::Delete, Target::Project(slug));
        assert_eq!(request.key, "OLD_KEY");
        assert!(request.value.is_empty());
        assert_eq!(request.action, Action::Delete);
    }
}
