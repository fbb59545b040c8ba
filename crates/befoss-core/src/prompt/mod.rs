//! Prompt provider abstraction
//!
//! The wizard only talks to a [`Prompter`]. Two implementations exist:
//! - `tui::TerminalPrompter`: cliclack inline prompts (feature `tui`)
//! - [`ScriptedPrompter`]: answers from a YAML file, for non-interactive runs
//!
//! Every field carries a stable `key`, which is also the key used in answers files.

mod scripted;

pub use scripted::ScriptedPrompter;

use crate::config::validate::Validator;
use crate::error::Result;

/// One choice of a select prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub hint: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            hint: String::new(),
        }
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }
}

/// Pick one value out of a list
#[derive(Debug, Clone)]
pub struct SelectField {
    pub key: &'static str,
    pub prompt: String,
    pub options: Vec<SelectOption>,
}

/// Yes/no question
#[derive(Debug, Clone)]
pub struct ConfirmField {
    pub key: &'static str,
    pub prompt: String,
    pub initial: bool,
}

/// Single-line text input
#[derive(Debug, Clone)]
pub struct InputField {
    pub key: &'static str,
    pub prompt: String,
    pub placeholder: Option<String>,
    /// Value used when the user submits nothing
    pub default: Option<String>,
    pub required: bool,
    pub validator: Option<Validator>,
}

impl InputField {
    pub fn new(key: &'static str, prompt: impl Into<String>) -> Self {
        Self {
            key,
            prompt: prompt.into(),
            placeholder: None,
            default: None,
            required: true,
            validator: None,
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn validate(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Run the validator, if any, against `value`
    pub fn check(&self, value: &str) -> Result<()> {
        match self.validator {
            Some(validator) => validator(value),
            None => Ok(()),
        }
    }
}

/// Multi-line text block
#[derive(Debug, Clone)]
pub struct TextField {
    pub key: &'static str,
    pub prompt: String,
    /// Editor the user prefers for long text
    pub editor: Option<String>,
    pub validator: Option<Validator>,
}

impl TextField {
    pub fn new(key: &'static str, prompt: impl Into<String>) -> Self {
        Self {
            key,
            prompt: prompt.into(),
            editor: None,
            validator: None,
        }
    }

    pub fn editor(mut self, editor: Option<&str>) -> Self {
        self.editor = editor.map(str::to_string);
        self
    }

    pub fn validate(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn check(&self, value: &str) -> Result<()> {
        match self.validator {
            Some(validator) => validator(value),
            None => Ok(()),
        }
    }
}

/// Interactive form capability used by the wizard
///
/// A prompt returns only once its answer validates. Errors returned from these methods
/// are fatal to the run.
pub trait Prompter {
    fn intro(&mut self, title: &str) -> Result<()>;
    fn outro(&mut self, message: &str) -> Result<()>;
    fn info(&mut self, message: &str) -> Result<()>;
    fn warning(&mut self, message: &str) -> Result<()>;
    fn success(&mut self, message: &str) -> Result<()>;
    /// Show a titled block of text
    fn note(&mut self, title: &str, body: &str) -> Result<()>;

    fn select(&mut self, field: &SelectField) -> Result<String>;
    fn confirm(&mut self, field: &ConfirmField) -> Result<bool>;
    fn input(&mut self, field: &InputField) -> Result<String>;
    fn text(&mut self, field: &TextField) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::validate;

    #[test]
    fn test_input_field_check_uses_validator() {
        let field =
            InputField::new("author", "What's your full name?").validate(validate::full_name);
        assert!(field.check("Jane Doe").is_ok());
        assert!(field.check("J").is_err());
    }

    #[test]
    fn test_input_field_without_validator_accepts_anything() {
        let field = InputField::new("email", "Email").optional();
        assert!(field.check("").is_ok());
        assert!(!field.required);
    }

    #[test]
    fn test_text_field_keeps_editor_hint() {
        let field = TextField::new("details", "Anything extra?").editor(Some("hx"));
        assert_eq!(field.editor.as_deref(), Some("hx"));
    }
}
