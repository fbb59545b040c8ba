//! Terminal prompter using cliclack

use crate::error::{BefossError, Result};
use crate::prompt::{ConfirmField, InputField, Prompter, SelectField, TextField};

/// Prompter backed by the interactive terminal
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }
}

fn provider(err: std::io::Error) -> BefossError {
    BefossError::Provider(err)
}

impl Prompter for TerminalPrompter {
    fn intro(&mut self, title: &str) -> Result<()> {
        cliclack::intro(title).map_err(provider)
    }

    fn outro(&mut self, message: &str) -> Result<()> {
        cliclack::outro(message).map_err(provider)
    }

    fn info(&mut self, message: &str) -> Result<()> {
        cliclack::log::info(message).map_err(provider)
    }

    fn warning(&mut self, message: &str) -> Result<()> {
        cliclack::log::warning(message).map_err(provider)
    }

    fn success(&mut self, message: &str) -> Result<()> {
        cliclack::log::success(message).map_err(provider)
    }

    fn note(&mut self, title: &str, body: &str) -> Result<()> {
        cliclack::note(title, body).map_err(provider)
    }

    fn select(&mut self, field: &SelectField) -> Result<String> {
        let mut select = cliclack::select(&field.prompt);
        for option in &field.options {
            select = select.item(option.value.clone(), &option.label, &option.hint);
        }
        select.interact().map_err(provider)
    }

    fn confirm(&mut self, field: &ConfirmField) -> Result<bool> {
        cliclack::confirm(&field.prompt)
            .initial_value(field.initial)
            .interact()
            .map_err(provider)
    }

    fn input(&mut self, field: &InputField) -> Result<String> {
        let mut input = cliclack::input(&field.prompt).required(field.required);

        if let Some(placeholder) = &field.placeholder {
            input = input.placeholder(placeholder);
        }
        if let Some(default) = &field.default {
            input = input.default_input(default);
        }
        if let Some(validator) = field.validator {
            input = input.validate(move |value: &String| validator(value));
        }

        input.interact().map_err(provider)
    }

    fn text(&mut self, field: &TextField) -> Result<String> {
        // cliclack has no external editor support; the editor is surfaced as a hint
        let prompt = match &field.editor {
            Some(editor) => format!(
                "{} (paste from {} if you like, Esc to submit)",
                field.prompt, editor
            ),
            None => format!("{} (Esc to submit)", field.prompt),
        };

        let mut input = cliclack::input(prompt).multiline().required(false);
        if let Some(validator) = field.validator {
            input = input.validate(move |value: &String| validator(value));
        }

        input.interact().map_err(provider)
    }
}
