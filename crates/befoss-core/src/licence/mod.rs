//! Licence records and the catalog they live in
//!
//! This module provides:
//! - The licence record type and its category
//! - The built-in MIT, GPLv3 and MPL entries
//! - The catalog used by the wizard for selection and lookup

pub mod builtin;
pub mod catalog;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use builtin::NoticeContext;
pub use catalog::{LicenceCatalog, CUSTOM_KEY};

/// Broad family a licence belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Foss,
    Open,
    SourceAvailable,
    Proprietary,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Foss,
        Category::Open,
        Category::SourceAvailable,
        Category::Proprietary,
    ];

    /// Stable identifier used by prompts and answers files
    pub fn key(&self) -> &'static str {
        match self {
            Category::Foss => "foss",
            Category::Open => "open",
            Category::SourceAvailable => "source-available",
            Category::Proprietary => "proprietary",
        }
    }

    /// Label shown in the category select prompt
    pub fn label(&self) -> &'static str {
        match self {
            Category::Foss => "Freedom! FOSS bossin', copying left and right.",
            Category::Open => "Open and permissive, let it be!",
            Category::SourceAvailable => "They can see but they can't touch. Source available",
            Category::Proprietary => "After All, Why Not? Why Shouldn't I Keep It? It's mine.",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "foss" => Ok(Category::Foss),
            "open" => Ok(Category::Open),
            "source-available" | "avail" => Ok(Category::SourceAvailable),
            "proprietary" | "prop" => Ok(Category::Proprietary),
            _ => Err(format!("Unknown licence category: {}", s)),
        }
    }
}

/// A licence as stored in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Licence {
    /// Catalog key (`mit`, `gpl`, or a custom title)
    pub key: String,
    /// Display name
    pub name: String,
    /// Full text written to the LICENCE file
    pub content: String,
    /// Header notice for source files; empty when the licence has none
    pub short_notice: String,
    pub category: Category,
}
