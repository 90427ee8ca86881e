//! User confirmation prompts for context creation and deletion

use dialoguer::Confirm;
use std::io::{self, IsTerminal, Write};

use crate::error::Result;

/// Source of yes/no answers for interactive confirmations
pub trait Prompter {
    /// Ask `prompt`; `true` only for an affirmative answer
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// Prompts on the controlling terminal
///
/// Uses a dialoguer prompt when stdin is a terminal. Otherwise reads one
/// line from stdin, so answers can be piped in from scripts.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        if io::stdin().is_terminal() {
            return Ok(Confirm::new()
                .with_prompt(prompt)
                .default(false)
                .interact()?);
        }

        eprint!("{} [y/n]: ", prompt);
        io::stderr().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            return Ok(false);
        }
        Ok(is_affirmative(&input))
    }
}

/// Only `y` (any case) counts as yes
pub fn is_affirmative(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_affirmative() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("Y\n"));
        assert!(is_affirmative("  y  "));
    }

    #[test]
    fn test_is_not_affirmative() {
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("yes please"));
        assert!(!is_affirmative("sure"));
    }
}
