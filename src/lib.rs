//! circleci-env - Manage CircleCI contexts and environment variables
//!
//! A CLI tool to add, update, delete and list context and project
//! environment variables through the CircleCI API.
//!
//! # Features
//!
//! - Add/update or delete project variables
//! - Add/update or delete context variables, creating the context on demand
//! - Delete whole contexts (with confirmation)
//! - List variable names
//! - Variables from the command line and/or an env file
//! - Parallel dispatch (at most 5 requests in flight)
//!
//! # Example
//!
//! ```bash
//! # Add a project variable
//! circleci-env -p github/acme/widgets -e FOO=bar
//!
//! # Load a context from a file, creating the context if needed
//! circleci-env -p github/acme/widgets -c staging -f staging.env
//!
//! # List the variables of a context
//! circleci-env -p github/acme/widgets -c staging -l
//!
//! # Delete a context
//! circleci-env -p github/acme/widgets -c staging -d
//! ```

pub mod circleci;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod manager;
pub mod ui;

pub use circleci::{
    CircleApi, CircleClient, Context, ContextEnvVar, ContextOwner, OwnerType, Project,
    ProjectEnvVar, ProjectSlug,
};
pub use cli::Cli;
pub use error::{CircleError, ErrorKind, Result};
pub use manager::{
    Action, DispatchSummary, EnvManager, EnvVarRequest, ListScope, Outcome, RunOptions, Target,
    VariableList,
};
pub use ui::{Prompter, TerminalPrompter};
