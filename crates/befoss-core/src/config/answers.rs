//! Pre-filled prompt answers loaded from a YAML file
//!
//! ```yaml
//! licence: mit
//! licence_file: true
//! author: Jane Doe
//! program: demo
//! description: A sample tool for testing
//! email: jane@example.com
//! ```

use crate::error::{BefossError, Result};
use anyhow::Context;
use serde::Deserialize;
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// Answers keyed by prompt key
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Answers {
    values: BTreeMap<String, Value>,
}

impl Answers {
    /// Read an answers file from disk
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Parse answers from YAML text. An empty document gives no answers.
    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Builder used to assemble answers in code
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.values.insert(key.to_string(), value.into());
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Answer for a text or select prompt. Scalars are accepted as text.
    pub fn text(&self, key: &str) -> Result<Option<String>> {
        match self.values.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(Value::Number(n)) => Ok(Some(n.to_string())),
            Some(Value::Bool(b)) => Ok(Some(b.to_string())),
            Some(_) => Err(BefossError::Validation(format!(
                "Answer for '{}' must be a single value",
                key
            ))),
        }
    }

    /// Answer for a yes/no prompt
    pub fn flag(&self, key: &str) -> Result<Option<bool>> {
        match self.values.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(Value::String(s)) => match s.to_lowercase().as_str() {
                "yes" | "y" | "true" => Ok(Some(true)),
                "no" | "n" | "false" => Ok(Some(false)),
                _ => Err(BefossError::Validation(format!(
                    "Answer for '{}' must be yes or no, got '{}'",
                    key, s
                ))),
            },
            Some(_) => Err(BefossError::Validation(format!(
                "Answer for '{}' must be yes or no",
                key
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flat_mapping() {
        let answers = Answers::from_yaml(
            "licence: mit\nlicence_file: true\nauthor: Jane Doe\nyear_hint: 2024\n",
        )
        .unwrap();

        assert_eq!(answers.text("licence").unwrap().as_deref(), Some("mit"));
        assert_eq!(answers.flag("licence_file").unwrap(), Some(true));
        assert_eq!(answers.text("year_hint").unwrap().as_deref(), Some("2024"));
        assert_eq!(answers.text("email").unwrap(), None);
    }

    #[test]
    fn test_empty_document_has_no_answers() {
        let answers = Answers::from_yaml("  \n").unwrap();
        assert!(!answers.contains("licence"));
    }

    #[test]
    fn test_flag_accepts_yes_no_strings() {
        let answers = Answers::default()
            .with("prepend", "yes")
            .with("contributing", "No");
        assert_eq!(answers.flag("prepend").unwrap(), Some(true));
        assert_eq!(answers.flag("contributing").unwrap(), Some(false));
    }

    #[test]
    fn test_flag_rejects_garbage() {
        let answers = Answers::default().with("prepend", "perhaps");
        assert!(answers.flag("prepend").is_err());
    }

    #[test]
    fn test_text_rejects_sequences() {
        let answers = Answers::from_yaml("author:\n  - Jane\n  - Doe\n").unwrap();
        assert!(answers.text("author").is_err());
    }

    #[test]
    fn test_from_path_reports_missing_file() {
        let err = Answers::from_path(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
