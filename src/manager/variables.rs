//! Variable list assembly from `--env` entries and an env file

use log::debug;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{CircleError, Result};

/// Split a raw `KEY=VALUE` entry on the first `=`
///
/// An entry without `=` is a key with an empty value. Both halves are
/// trimmed of surrounding whitespace.
pub fn parse_entry(raw: &str) -> (String, String) {
    match raw.split_once('=') {
        Some((key, value)) => (key.trim().to_string(), value.trim().to_string()),
        None => (raw.trim().to_string(), String::new()),
    }
}

/// Ordered list of raw `KEY=VALUE` entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableList {
    entries: Vec<String>,
}

impl VariableList {
    /// Explicit entries first, then the de-duplicated lines of `env_file`
    pub fn build(explicit: &[String], env_file: Option<&Path>) -> Result<Self> {
        let mut entries = explicit.to_vec();

        if let Some(path) = env_file {
            let contents = fs::read_to_string(path).map_err(|e| {
                CircleError::EnvFile(format!(
                    "Could not read env file {}: {}",
                    path.display(),
                    e
                ))
            })?;
            let lines = dedup_lines(&contents);
            debug!(
                "Read {} distinct entries from {}",
                lines.len(),
                path.display()
            );
            entries.extend(lines);
        }

        Ok(Self { entries })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Raw entries in order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

/// Distinct non-blank lines, keeping the first occurrence of each
fn dedup_lines(contents: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    contents
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .filter(|line| seen.insert(line.to_string()))
        .map(str::to_string)
        .collect()
}
