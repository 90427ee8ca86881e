//! UI utilities for terminal interaction
//!
//! This module provides confirmation prompts and progress spinners.

mod confirm;
mod spinner;

pub use confirm::{is_affirmative, Prompter, TerminalPrompter};
pub use spinner::{create_spinner, finish_spinner};
