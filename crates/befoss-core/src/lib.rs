//! Befoss Core - licence wizard library
//!
//! Walks a user through choosing a licence, author metadata and optional extra
//! documents, then writes them to disk.
//!
//! # Architecture
//!
//! - **Data**: [`config`] (answers collected from the prompts) and [`licence`] (the
//!   licence catalog with the built-in MIT, GPLv3 and MPL entries)
//! - **Output**: [`templates`] renders the prepend and `.envrc` blocks with Handlebars
//!   and writes `LICENCE`, `CONTRIBUTE.md` and `.envrc`
//! - **Flow**: [`wizard`] sequences the prompt stages against any [`Prompter`]
//! - **Frontends**: a cliclack terminal prompter (feature-gated) and a scripted
//!   prompter fed from a YAML answers file
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based terminal prompter
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use befoss_core::{config::Answers, wizard, RunOptions, ScriptedPrompter};
//!
//! let answers = Answers::from_path("answers.yaml".as_ref())?;
//! let mut prompter = ScriptedPrompter::new(answers);
//! let report = wizard::run(&mut prompter, RunOptions::default()).await?;
//! ```

pub mod config;
pub mod error;
pub mod licence;
pub mod prompt;
pub mod runtime;
pub mod templates;
pub mod wizard;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{Answers, Config};
pub use error::{BefossError, Result};
pub use licence::{Category, Licence, LicenceCatalog};
pub use prompt::{Prompter, ScriptedPrompter};
pub use wizard::{run, RunOptions, RunReport};

#[cfg(feature = "tui")]
pub use tui::TerminalPrompter;
