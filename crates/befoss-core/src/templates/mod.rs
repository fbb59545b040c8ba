//! Template rendering and output file writing
//!
//! This module provides:
//! - The prepend and `.envrc` templates and the data they are rendered with
//! - A strict Handlebars renderer
//! - The writer for `LICENCE`, `CONTRIBUTE.md` and the `.envrc` merge

pub mod env;
pub mod renderer;
pub mod writer;

pub use env::EnvVars;
pub use renderer::{PrependPayload, TemplateRenderer, ENV_TEMPLATE, PREPEND_TEMPLATE};
pub use writer::{splice_header, FileEmitter, CONTRIBUTING_FILE, ENVRC_FILE, LICENCE_FILE};
