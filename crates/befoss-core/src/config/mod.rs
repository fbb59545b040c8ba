//! Configuration model filled in by the wizard stages
//!
//! Each stage returns its own record; [`Config`] is assembled from those records once
//! the prompting for identity is done. The selected licence is kept as a key so that
//! later edits to a catalog entry are visible wherever the key is used.

pub mod answers;
pub mod validate;

use serde::Serialize;

pub use answers::Answers;

/// Default program name offered by the identity stage
pub const DEFAULT_PROGRAM: &str = "befoss";

/// Default program description offered by the identity stage
pub const DEFAULT_DESCRIPTION: &str = "The standard legal tool for software.";

/// Placeholder contact address
pub const DEFAULT_EMAIL: &str = "diogenesoft@protonmail.com";

/// Name and description of the program being licensed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Program {
    pub name: String,
    pub description: String,
}

impl Default for Program {
    fn default() -> Self {
        Self {
            name: DEFAULT_PROGRAM.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

/// Who holds the copyright
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    pub full_name: String,
    pub email: String,
}

/// Optional artifacts the user asked for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Features {
    pub licence_file: bool,
    pub contributing_guide: bool,
    pub prepend: bool,
}

/// Everything collected from the prompts for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Editor identifier, used as a hint for long-text prompts
    pub editor: Option<String>,
    pub program: Program,
    pub author: Author,
    pub features: Features,
    /// Key of the selected catalog entry (or the custom sentinel until resolved)
    pub licence_key: String,
    /// Free text from the "anything extra" prompt
    pub details: String,
    pub year: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_defaults() {
        let program = Program::default();
        assert_eq!(program.name, "befoss");
        assert_eq!(program.description, DEFAULT_DESCRIPTION);
    }

    #[test]
    fn test_features_default_to_off() {
        let features = Features::default();
        assert!(!features.licence_file);
        assert!(!features.contributing_guide);
        assert!(!features.prepend);
    }
}
