//! CLI argument parsing

use clap::parser::ValueSource;
use clap::{CommandFactory, FromArgMatches, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::circleci::OwnerType;
use crate::config::defaults;
use crate::manager::RunOptions;

/// CircleCI contexts and environment variables CLI
///
/// All options can also be given as environment variables named
/// CIRCLE_<OPTION>, e.g. CIRCLE_TOKEN=********
#[derive(Parser, Debug)]
#[command(name = "circleci-env")]
#[command(version)]
#[command(about = "CLI tool to manage CircleCI contexts and environment variables")]
pub struct Cli {
    /// CircleCI API URL
    #[arg(short = 'u', long, env = "CIRCLE_API_URL", default_value = defaults::API_URL)]
    pub api_url: String,

    /// CircleCI personal API token
    #[arg(short = 't', long, env = "CIRCLE_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Context name (you will be asked to create it if it does not exist)
    #[arg(short = 'c', long, env = "CIRCLE_CONTEXT")]
    pub context: Option<String>,

    /// Project slug, e.g. github/org-name/project-name
    #[arg(short = 'p', long, env = "CIRCLE_PROJECT")]
    pub project: String,

    /// Environment variable as KEY=VALUE (repeatable)
    #[arg(short = 'e', long = "env", env = "CIRCLE_ENV", hide_env_values = true)]
    pub env: Vec<String>,

    /// File with one KEY=VALUE per line (duplicate lines are ignored)
    #[arg(short = 'f', long, env = "CIRCLE_ENV_FILE")]
    pub env_file: Option<PathBuf>,

    /// List variable names of the context, or of the project without --context
    #[arg(short = 'l', long, env = "CIRCLE_LIST_ENVS", default_value_t = false)]
    pub list_envs: bool,

    /// Delete instead of add/update
    ///
    ///   context only     deletes the context (after confirmation)
    ///   context + vars   deletes the context variables
    ///   vars only        deletes the project variables
    #[arg(short = 'd', long, env = "CIRCLE_DELETE", default_value_t = false, verbatim_doc_comment)]
    pub delete: bool,

    /// Owner type of the context
    #[arg(short = 'o', long, env = "CIRCLE_OWNER_TYPE", value_enum, default_value_t = OwnerType::Organization)]
    pub owner_type: OwnerType,

    /// Enable verbose output
    #[arg(long, env = "CIRCLE_DEBUG", default_value_t = false)]
    pub debug: bool,
}

impl Cli {
    /// Parse process arguments, exiting with usage on error
    pub fn parse_args() -> Self {
        Self::try_parse_args_from(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    /// Parse arguments, splitting `CIRCLE_ENV` into whitespace-separated entries
    ///
    /// `--env` values given on the command line are kept as typed.
    pub fn try_parse_args_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command().try_get_matches_from(args)?;
        let mut cli = Self::from_arg_matches(&matches)?;
        if matches.value_source("env") == Some(ValueSource::EnvVariable) {
            cli.env = split_env_entries(&cli.env);
        }
        Ok(cli)
    }

    /// Options for `EnvManager::run`
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            project: self.project.clone(),
            context: self.context.clone(),
            owner_type: self.owner_type,
            env: self.env.clone(),
            env_file: self.env_file.clone(),
            list_envs: self.list_envs,
            delete: self.delete,
        }
    }
}

/// Whitespace-separated entries of a multi-value environment variable
fn split_env_entries(values: &[String]) -> Vec<String> {
    values
        .iter()
        .flat_map(|v| v.split_whitespace())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_every_option_has_prefixed_env_var() {
        let cmd = Cli::command();
        for arg in cmd.get_arguments() {
            let id = arg.get_id().as_str();
            if id == "help" || id == "version" {
                continue;
            }
            let env = arg
                .get_env()
                .unwrap_or_else(|| panic!("option {} has no env var", id));
            assert!(env.to_string_lossy().starts_with("CIRCLE_"));
        }
    }

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::try_parse_from([
            "circleci-env",
            "-t",
            "token",
            "-p",
            "github/acme/widgets",
        ])
        .unwrap();
        assert_eq!(cli.api_url, defaults::API_URL);
        assert_eq!(cli.owner_type, OwnerType::Organization);
        assert!(cli.context.is_none());
        assert!(cli.env.is_empty());
        assert!(cli.env_file.is_none());
        assert!(!cli.list_envs);
        assert!(!cli.delete);
        assert!(!cli.debug);
    }

    #[test]
    fn test_cli_repeated_env() {
        let cli = Cli::try_parse_from([
            "circleci-env",
            "-t",
            "token",
            "-p",
            "github/acme/widgets",
            "-e",
            "A=1",
            "--env",
            "B=2",
        ])
        .unwrap();
        assert_eq!(cli.env, vec!["A=1".to_string(), "B=2".to_string()]);
    }

    #[test]
    fn test_cli_all_options() {
        let cli = Cli::try_parse_from([
            "circleci-env",
            "--api-url",
            "https://cci.example.com/api",
            "--token",
            "secret",
            "--context",
            "staging",
            "--project",
            "bitbucket/acme/widgets",
            "--env-file",
            "vars.env",
            "--list-envs",
            "--delete",
            "--owner-type",
            "account",
            "--debug",
        ])
        .unwrap();

        assert_eq!(cli.api_url, "https://cci.example.com/api");
        assert_eq!(cli.token, "secret");
        assert_eq!(cli.context.as_deref(), Some("staging"));
        assert_eq!(cli.env_file, Some(PathBuf::from("vars.env")));
        assert!(cli.list_envs);
        assert!(cli.delete);
        assert_eq!(cli.owner_type, OwnerType::Account);
        assert!(cli.debug);

        let options = cli.run_options();
        assert_eq!(options.project, "bitbucket/acme/widgets");
        assert_eq!(options.owner_type, OwnerType::Account);
        assert!(options.list_envs && options.delete);
    }

    #[test]
    fn test_split_env_entries() {
        let values = vec!["A=1 B=2\tC=3\n".to_string()];
        assert_eq!(
            split_env_entries(&values),
            vec!["A=1".to_string(), "B=2".to_string(), "C=3".to_string()]
        );
        assert!(split_env_entries(&["   ".to_string()]).is_empty());
    }

    #[test]
    fn test_command_line_env_keeps_spaces() {
        let cli = Cli::try_parse_args_from([
            "circleci-env",
            "-t",
            "token",
            "-p",
            "github/acme/widgets",
            "--env",
            "GREETING=hello world",
        ])
        .unwrap();
        assert_eq!(cli.env, vec!["GREETING=hello world".to_string()]);
    }

    #[test]
    fn test_cli_invalid_owner_type() {
        let result = Cli::try_parse_from([
            "circleci-env",
            "-t",
            "token",
            "-p",
            "github/acme/widgets",
            "-o",
            "team",
        ]);
        assert!(result.is_err());
    }
}
