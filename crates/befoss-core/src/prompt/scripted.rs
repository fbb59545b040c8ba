//! Prompter that answers from an [`Answers`] map
//!
//! Used for non-interactive runs (`--answers`) and for driving the wizard in tests.
//! Missing answers fall back to the prompt's default. There is nobody to re-prompt,
//! so a value that fails validation is returned as an error.

use super::{ConfirmField, InputField, Prompter, SelectField, TextField};
use crate::config::Answers;
use crate::error::{BefossError, Result};
use colored::Colorize;

/// Non-interactive prompter
pub struct ScriptedPrompter {
    answers: Answers,
    echo: bool,
    transcript: Vec<String>,
}

impl ScriptedPrompter {
    /// Silent prompter, messages are only kept in the transcript
    pub fn new(answers: Answers) -> Self {
        Self {
            answers,
            echo: false,
            transcript: Vec::new(),
        }
    }

    /// Also print messages to stdout
    pub fn echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Messages and answers, in the order they happened
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    fn record(&mut self, line: String, styled: String) {
        if self.echo {
            println!("{}", styled);
        }
        self.transcript.push(line);
    }

    fn answered(&mut self, key: &str, value: &str) {
        let line = format!("{} = {}", key, value);
        let styled = format!("{} {}", "◇".green(), line.dimmed());
        self.record(line, styled);
    }
}

/// Answer files may spell option values in any case, with `_` for `-`
fn normalize(value: &str) -> String {
    value.trim().to_lowercase().replace('_', "-")
}

impl Prompter for ScriptedPrompter {
    fn intro(&mut self, title: &str) -> Result<()> {
        self.record(title.to_string(), title.bold().to_string());
        Ok(())
    }

    fn outro(&mut self, message: &str) -> Result<()> {
        self.record(message.to_string(), message.bold().to_string());
        Ok(())
    }

    fn info(&mut self, message: &str) -> Result<()> {
        self.record(message.to_string(), format!("{} {}", "●".blue(), message));
        Ok(())
    }

    fn warning(&mut self, message: &str) -> Result<()> {
        self.record(message.to_string(), format!("{} {}", "▲".yellow(), message));
        Ok(())
    }

    fn success(&mut self, message: &str) -> Result<()> {
        self.record(message.to_string(), format!("{} {}", "◆".green(), message));
        Ok(())
    }

    fn note(&mut self, title: &str, body: &str) -> Result<()> {
        let line = format!("{}\n{}", title, body);
        let styled = format!("{}\n{}", title.cyan().bold(), body);
        self.record(line, styled);
        Ok(())
    }

    fn select(&mut self, field: &SelectField) -> Result<String> {
        let value = match self.answers.text(field.key)? {
            Some(value) => value,
            None => field
                .options
                .first()
                .map(|o| o.value.clone())
                .ok_or_else(|| {
                    BefossError::Validation(format!("No options for '{}'", field.key))
                })?,
        };

        let wanted = normalize(&value);
        let Some(option) = field.options.iter().find(|o| normalize(&o.value) == wanted) else {
            let available: Vec<&str> = field.options.iter().map(|o| o.value.as_str()).collect();
            return Err(BefossError::Validation(format!(
                "'{}' is not a valid answer for '{}'. Available: {}",
                value,
                field.key,
                available.join(", ")
            )));
        };

        let value = option.value.clone();
        self.answered(field.key, &value);
        Ok(value)
    }

    fn confirm(&mut self, field: &ConfirmField) -> Result<bool> {
        let value = self.answers.flag(field.key)?.unwrap_or(field.initial);
        self.answered(field.key, if value { "yes" } else { "no" });
        Ok(value)
    }

    fn input(&mut self, field: &InputField) -> Result<String> {
        let value = match self.answers.text(field.key)? {
            Some(value) if !value.is_empty() => value,
            _ => field.default.clone().unwrap_or_default(),
        };

        if value.is_empty() && field.required {
            return Err(BefossError::Validation(format!(
                "An answer for '{}' is required",
                field.key
            )));
        }
        field.check(&value)?;

        self.answered(field.key, &value);
        Ok(value)
    }

    fn text(&mut self, field: &TextField) -> Result<String> {
        let value = self.answers.text(field.key)?.unwrap_or_default();
        field.check(&value)?;
        self.answered(field.key, &value);
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::validate;
    use crate::prompt::SelectOption;

    fn licence_select() -> SelectField {
        SelectField {
            key: "licence",
            prompt: "Choose your licence".to_string(),
            options: vec![
                SelectOption::new("gpl", "GPL"),
                SelectOption::new("mit", "MIT"),
            ],
        }
    }

    #[test]
    fn test_select_uses_answer() {
        let mut prompter = ScriptedPrompter::new(Answers::default().with("licence", "mit"));
        assert_eq!(prompter.select(&licence_select()).unwrap(), "mit");
    }

    #[test]
    fn test_select_defaults_to_first_option() {
        let mut prompter = ScriptedPrompter::new(Answers::default());
        assert_eq!(prompter.select(&licence_select()).unwrap(), "gpl");
    }

    #[test]
    fn test_select_rejects_unknown_value() {
        let mut prompter = ScriptedPrompter::new(Answers::default().with("licence", "bsd"));
        let err = prompter.select(&licence_select()).unwrap_err();
        assert!(err.to_string().contains("Available: gpl, mit"));
    }

    #[test]
    fn test_select_returns_canonical_value_for_loose_spelling() {
        let field = SelectField {
            key: "licence_category",
            prompt: "Category".to_string(),
            options: vec![
                SelectOption::new("source-available", "Source available"),
                SelectOption::new("proprietary", "Proprietary"),
            ],
        };

        let mut prompter =
            ScriptedPrompter::new(Answers::default().with("licence_category", "PROPRIETARY"));
        assert_eq!(prompter.select(&field).unwrap(), "proprietary");

        let mut prompter = ScriptedPrompter::new(
            Answers::default().with("licence_category", "SOURCE_AVAILABLE"),
        );
        assert_eq!(prompter.select(&field).unwrap(), "source-available");
        assert_eq!(prompter.transcript(), &["licence_category = source-available"]);
    }

    #[test]
    fn test_confirm_falls_back_to_initial() {
        let mut prompter = ScriptedPrompter::new(Answers::default());
        let field = ConfirmField {
            key: "prepend",
            prompt: "Prepend?".to_string(),
            initial: false,
        };
        assert!(!prompter.confirm(&field).unwrap());
    }

    #[test]
    fn test_input_default_and_validation() {
        let field = InputField::new("program", "Program").default_value("befoss");
        let mut prompter = ScriptedPrompter::new(Answers::default());
        assert_eq!(prompter.input(&field).unwrap(), "befoss");

        let name = InputField::new("author", "Name").validate(validate::full_name);
        let mut prompter = ScriptedPrompter::new(Answers::default().with("author", "J"));
        assert!(matches!(
            prompter.input(&name),
            Err(BefossError::Validation(_))
        ));
    }

    #[test]
    fn test_required_input_without_answer_fails() {
        let name = InputField::new("author", "Name");
        let mut prompter = ScriptedPrompter::new(Answers::default());
        assert!(prompter.input(&name).is_err());
    }

    #[test]
    fn test_transcript_records_answers_and_messages() {
        let mut prompter = ScriptedPrompter::new(Answers::default().with("licence", "mit"));
        prompter.info("hello").unwrap();
        prompter.select(&licence_select()).unwrap();
        assert_eq!(prompter.transcript(), &["hello", "licence = mit"]);
    }
}
