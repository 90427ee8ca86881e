//! Environment variable and context management
//!
//! [`EnvManager`] turns one CLI invocation into a sequence of CircleCI API
//! calls: resolve (or create) the target context, short-circuit on listing,
//! then apply every variable with at most
//! [`MAX_CONCURRENT_REQUESTS`](crate::config::api::MAX_CONCURRENT_REQUESTS)
//! calls in flight.

mod request;
mod variables;

use futures::stream::{self, StreamExt};
use log::{debug, error, info};
use std::path::PathBuf;

use crate::circleci::{CircleApi, CircleResource, ContextOwner, OwnerType, ProjectSlug};
use crate::config::api;
use crate::error::{ErrorKind, Result};
use crate::ui::{create_spinner, finish_spinner, Prompter};

pub use request::{Action, EnvVarRequest, Target};
pub use variables::{parse_entry, VariableList};

/// Everything one run needs, independent of how it was collected
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Project slug, `vcs_type/org/project`
    pub project: String,
    /// Context name; project variables are targeted when `None`
    pub context: Option<String>,
    pub owner_type: OwnerType,
    /// Explicit `KEY=VALUE` entries
    pub env: Vec<String>,
    /// File with one `KEY=VALUE` entry per line
    pub env_file: Option<PathBuf>,
    pub list_envs: bool,
    pub delete: bool,
}

/// Which variable names to list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListScope {
    Context { id: String },
    Project(ProjectSlug),
}

/// Result of dispatching the variable list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    pub succeeded: usize,
    /// Failed keys with the kind of failure
    pub failures: Vec<(String, ErrorKind)>,
}

impl DispatchSummary {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Variables were dispatched
    Applied(DispatchSummary),
    /// Names were listed; nothing was changed
    Listed(Vec<String>),
    /// Context deletion was confirmed and attempted
    ContextDeleted { deleted: bool },
    /// The operator declined a confirmation
    Cancelled,
}

/// Orchestrates context resolution and variable operations
pub struct EnvManager<A, P> {
    api: A,
    prompter: P,
    /// Suppress spinners (debug output would interleave with them)
    quiet: bool,
}

impl<A: CircleApi, P: Prompter> EnvManager<A, P> {
    pub fn new(api: A, prompter: P) -> Self {
        Self {
            api,
            prompter,
            quiet: false,
        }
    }

    /// Disable progress spinners
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Find the id of the first context named exactly `name`
    ///
    /// A failure to list contexts is returned as an error and is fatal for
    /// the run.
    pub async fn resolve_context(&self, owner: &ContextOwner, name: &str) -> Result<Option<String>> {
        debug!(
            "Looking up context '{}' for {} {} ({})",
            name, owner.owner_type, owner.org, owner.vcs_type
        );

        let contexts = self.api.get_contexts(owner).await?;
        let found = contexts
            .into_iter()
            .find(|c| c.has_name(name))
            .map(|c| c.id);

        match &found {
            Some(id) => debug!("Context '{}' resolved to {}", name, id),
            None => debug!("Context '{}' not found", name),
        }
        Ok(found)
    }

    /// Return `existing`, or create the context after confirmation
    ///
    /// `Ok(None)` means the operator declined.
    pub async fn ensure_context(
        &self,
        owner: &ContextOwner,
        name: &str,
        existing: Option<String>,
    ) -> Result<Option<String>> {
        if let Some(id) = existing {
            return Ok(Some(id));
        }

        let prompt = format!(
            "The context named \"{}\" was not found. Do you want to create it?",
            name
        );
        if !self.prompter.confirm(&prompt)? {
            info!("Context \"{}\" not created", name);
            return Ok(None);
        }

        let context = self.api.add_context(name, owner).await?;
        info!("Successfully create context: {}", name);
        Ok(Some(context.id))
    }

    /// Names of the variables in a context or project
    pub async fn list_names(&self, scope: &ListScope) -> Result<Vec<String>> {
        let names = match scope {
            ListScope::Context { id } => self
                .api
                .get_context_envvars(id)
                .await?
                .into_iter()
                .map(|v| v.variable)
                .collect(),
            ListScope::Project(slug) => self
                .api
                .list_envvars(slug)
                .await?
                .into_iter()
                .map(|v| v.name)
                .collect(),
        };
        Ok(names)
    }

    /// Delete a whole context after confirmation
    ///
    /// The variables stored in the context go with it; they are not listed
    /// or confirmed individually.
    pub async fn delete_context(&self, name: &str, context_id: &str) -> Result<Outcome> {
        let prompt = format!("Are you sure want to delete the context \"{}\"?", name);
        if !self.prompter.confirm(&prompt)? {
            info!("Context \"{}\" not deleted", name);
            return Ok(Outcome::Cancelled);
        }

        match self.api.delete_context(context_id).await {
            Ok(()) => {
                info!("Successfully delete context: {}", name);
                Ok(Outcome::ContextDeleted { deleted: true })
            }
            Err(e) => {
                error!("Error: {} ({})", e, e.kind());
                Ok(Outcome::ContextDeleted { deleted: false })
            }
        }
    }

    /// Perform exactly one remote mutation
    ///
    /// Errors are logged here and reported as their kind; they never abort
    /// sibling operations.
    pub async fn apply_variable(&self, request: &EnvVarRequest) -> std::result::Result<(), ErrorKind> {
        let key = request.key.as_str();
        let (result, scope) = match (&request.target, request.action) {
            (Target::Context { id }, Action::AddOrUpdate) => (
                self.api.add_context_envvar(id, key, &request.value).await,
                "context variable",
            ),
            (Target::Context { id }, Action::Delete) => (
                self.api.delete_context_envvar(id, key).await,
                "context variable",
            ),
            (Target::Project(slug), Action::AddOrUpdate) => (
                self.api.add_envvar(slug, key, &request.value).await,
                "variable",
            ),
            (Target::Project(slug), Action::Delete) => {
                (self.api.delete_envvar(slug, key).await, "variable")
            }
        };

        match result {
            Ok(()) => {
                info!("Successfully {} {}: {}", request.action, scope, key);
                Ok(())
            }
            Err(e) => {
                let kind = e.kind();
                error!("Error: {} ({})", e, kind);
                Err(kind)
            }
        }
    }

    /// Apply every request, at most `MAX_CONCURRENT_REQUESTS` at a time
    pub async fn dispatch(&self, requests: &[EnvVarRequest]) -> DispatchSummary {
        debug!(
            "Dispatching {} variable operation(s) (max {} concurrent)",
            requests.len(),
            api::MAX_CONCURRENT_REQUESTS
        );

        let results: Vec<(String, std::result::Result<(), ErrorKind>)> =
            stream::iter(requests.iter().map(|request| async move {
                (request.key.clone(), self.apply_variable(request).await)
            }))
            .buffer_unordered(api::MAX_CONCURRENT_REQUESTS)
            .collect()
            .await;

        let mut summary = DispatchSummary::default();
        for (key, result) in results {
            match result {
                Ok(()) => summary.succeeded += 1,
                Err(kind) => summary.failures.push((key, kind)),
            }
        }

        if summary.is_success() {
            info!("Completed successfully");
        } else {
            info!(
                "Completed with {} failed operation(s) out of {}",
                summary.failed(),
                requests.len()
            );
        }
        summary
    }

    /// Run one invocation end to end
    pub async fn run(&self, options: &RunOptions) -> Result<Outcome> {
        let slug: ProjectSlug = options.project.parse()?;
        let variables = VariableList::build(&options.env, options.env_file.as_deref())?;
        let action = Action::from_delete_flag(options.delete);

        debug!(
            "Project {}, context {:?}, {} variable(s), action {}",
            slug,
            options.context,
            variables.len(),
            action
        );

        let target = match &options.context {
            Some(name) => {
                let spinner = create_spinner(
                    &format!("Resolving context '{}'...", name),
                    self.quiet,
                );
                let resolved = self.lookup_context(&slug, options.owner_type, name).await;
                finish_spinner(spinner);
                let (owner, existing) = resolved?;

                let Some(context_id) = self.ensure_context(&owner, name, existing).await? else {
                    return Ok(Outcome::Cancelled);
                };

                if options.list_envs {
                    return self.list(&ListScope::Context { id: context_id }).await;
                }

                if variables.is_empty() && options.delete {
                    return self.delete_context(name, &context_id).await;
                }

                Target::Context { id: context_id }
            }
            None => {
                if options.list_envs {
                    return self.list(&ListScope::Project(slug)).await;
                }
                Target::Project(slug)
            }
        };

        let requests: Vec<EnvVarRequest> = variables
            .entries()
            .iter()
            .map(|entry| EnvVarRequest::from_entry(entry, action, target.clone()))
            .collect();

        if requests.is_empty() {
            debug!("No variables given, nothing to do");
        }

        Ok(Outcome::Applied(self.dispatch(&requests).await))
    }

    /// Owner of the project plus the id of the named context, if it exists
    async fn lookup_context(
        &self,
        slug: &ProjectSlug,
        owner_type: OwnerType,
        name: &str,
    ) -> Result<(ContextOwner, Option<String>)> {
        let project = self.api.get_project(slug).await?;
        let owner = ContextOwner {
            id: project.owner_id().to_string(),
            org: slug.org.clone(),
            owner_type,
            vcs_type: slug.vcs_type.clone(),
        };
        let existing = self.resolve_context(&owner, name).await?;
        Ok((owner, existing))
    }

    /// Print names one per line on stdout
    async fn list(&self, scope: &ListScope) -> Result<Outcome> {
        let spinner = create_spinner("Fetching variables...", self.quiet);
        let names = self.list_names(scope).await;
        finish_spinner(spinner);
        let names = names?;

        for name in &names {
            println!("{}", name);
        }
        debug!("Listed {} variable name(s)", names.len());
        Ok(Outcome::Listed(names))
    }
}
