//! Variables exported from the generated `.envrc`

use crate::error::{BefossError, Result};
use serde::Serialize;
use std::collections::BTreeMap;

/// Ordered set of environment variables, keyed by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvVars {
    vars: BTreeMap<String, String>,
}

/// Row handed to the env template
#[derive(Debug, Serialize)]
pub(crate) struct EnvEntry<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

impl EnvVars {
    pub fn new() -> Self {
        Self::default()
    }

    /// The variables every generated `.envrc` starts with
    pub fn seeded() -> Self {
        let mut vars = Self::new();
        vars.vars.insert("VAR2".to_string(), "value2".to_string());
        vars
    }

    /// Add or replace a variable. Names must be non-empty and usable after `export`.
    pub fn insert(&mut self, name: &str, value: &str) -> Result<()> {
        if name.is_empty() {
            return Err(BefossError::Validation(
                "Environment variable name cannot be empty".to_string(),
            ));
        }
        if name.contains(|c: char| c.is_whitespace() || c == '=') {
            return Err(BefossError::Validation(format!(
                "Invalid environment variable name: '{}'",
                name
            )));
        }
        self.vars.insert(name.to_string(), value.to_string());
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub(crate) fn entries(&self) -> Vec<EnvEntry<'_>> {
        self.vars
            .iter()
            .map(|(name, value)| EnvEntry { name, value })
            .collect()
    }
}
