//! Project environment variable models

use serde::{Deserialize, Serialize};

/// Project environment variable as returned by API v1.1
///
/// The server masks values, e.g. `xxxx1234`.
#[derive(Deserialize, Debug, Clone)]
pub struct ProjectEnvVar {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

/// Request body for creating or replacing a project variable
#[derive(Serialize, Debug)]
pub(crate) struct NewEnvVarRequest<'a> {
    pub name: &'a str,
    pub value: &'a str,
}
