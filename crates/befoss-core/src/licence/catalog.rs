//! Licence catalog: lookup, registration and the selectable option list

use super::builtin::{builtin_licences, NoticeContext, BUILTIN_OPTIONS};
use super::Licence;
use crate::error::{BefossError, Result};
use std::collections::HashMap;

/// Sentinel key that sends the wizard into the custom licence flow
pub const CUSTOM_KEY: &str = "custom";

/// One entry of the licence select prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenceOption {
    pub label: String,
    pub key: String,
}

/// Registry of licences for the current run
///
/// Options are known from the start; the built-in records need the author identity
/// and are installed once it has been collected.
#[derive(Debug, Clone)]
pub struct LicenceCatalog {
    entries: HashMap<String, Licence>,
    options: Vec<LicenceOption>,
}

impl Default for LicenceCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl LicenceCatalog {
    /// Catalog offering the built-in options, with no records yet
    pub fn new() -> Self {
        let options = BUILTIN_OPTIONS
            .iter()
            .map(|(label, key)| LicenceOption {
                label: label.to_string(),
                key: key.to_string(),
            })
            .collect();

        Self {
            entries: HashMap::new(),
            options,
        }
    }

    #[cfg(test)]
    fn with_builtins(ctx: &NoticeContext) -> Self {
        let mut catalog = Self::new();
        catalog.install_builtins(ctx);
        catalog
    }

    /// Register the MIT, GPLv3 and MPL records built from `ctx`
    pub fn install_builtins(&mut self, ctx: &NoticeContext) {
        for licence in builtin_licences(ctx) {
            self.register(licence);
        }
    }

    pub fn lookup(&self, key: &str) -> Result<&Licence> {
        self.entries
            .get(key)
            .ok_or_else(|| BefossError::NotFound(key.to_string()))
    }

    /// Insert a licence, replacing any entry with the same key
    pub fn register(&mut self, licence: Licence) {
        self.entries.insert(licence.key.clone(), licence);
    }

    pub fn list_selectable(&self) -> &[LicenceOption] {
        &self.options
    }

    /// Offer another option in the select prompt. Keys already offered are ignored.
    pub fn add_selectable(&mut self, label: &str, key: &str) {
        if self.options.iter().any(|o| o.key == key) {
            return;
        }
        self.options.push(LicenceOption {
            label: label.to_string(),
            key: key.to_string(),
        });
    }

    /// Number of registered records
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
