//! Interactive terminal prompts using cliclack
//!
//! This module is optional and only available when the `tui` feature is enabled.

mod prompts;

pub use prompts::TerminalPrompter;
