//! Context data models

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::circleci::traits::CircleResource;

/// Kind of owner a context belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OwnerType {
    /// Organization-owned context (default)
    #[default]
    Organization,
    /// Personal account context
    Account,
}

impl OwnerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OwnerType::Organization => "organization",
            OwnerType::Account => "account",
        }
    }
}

impl std::fmt::Display for OwnerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Owner a context lookup or creation is scoped to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextOwner {
    /// Organization or account id (a UUID)
    pub id: String,
    /// Organization or user name
    pub org: String,
    pub owner_type: OwnerType,
    pub vcs_type: String,
}

/// Context data from CircleCI API v2
#[derive(Deserialize, Debug, Clone)]
pub struct Context {
    pub id: String,
    pub name: String,
    pub created_at: Option<String>,
}

impl CircleResource for Context {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Context environment variable (the value is never returned by the API)
#[derive(Deserialize, Debug, Clone)]
pub struct ContextEnvVar {
    pub variable: String,
    pub context_id: Option<String>,
    pub created_at: Option<String>,
}

/// Request body for creating a context
#[derive(Serialize, Debug)]
pub(crate) struct NewContextRequest<'a> {
    pub name: &'a str,
    pub owner: NewContextOwner<'a>,
}

/// Owner part of the create-context body
#[derive(Serialize, Debug)]
pub(crate) struct NewContextOwner<'a> {
    pub id: &'a str,
    #[serde(rename = "type")]
    pub owner_type: OwnerType,
}

impl<'a> NewContextRequest<'a> {
    pub fn new(name: &'a str, owner: &'a ContextOwner) -> Self {
        Self {
            name,
            owner: NewContextOwner {
                id: &owner.id,
                owner_type: owner.owner_type,
            },
        }
    }
}
