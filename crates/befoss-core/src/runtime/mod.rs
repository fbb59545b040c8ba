//! Interaction with the environment outside the wizard
//!
//! This module provides:
//! - Editor discovery from `$EDITOR` and the fixed editor choices
//! - The best-effort celebration command run after a successful wizard

pub mod celebrate;
pub mod editor;

pub use celebrate::Celebration;
pub use editor::{editor_from_env, EDITORS};
