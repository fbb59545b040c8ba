//! Custom licence flow
//!
//! Runs when the user picked the `custom` sentinel and wants a licence file. The new
//! licence is registered under its title and selected for the rest of the run.

use crate::config::{validate, Config};
use crate::error::{BefossError, Result};
use crate::licence::{Category, Licence, LicenceCatalog, CUSTOM_KEY};
use crate::prompt::{InputField, Prompter, SelectField, SelectOption, TextField};

/// Whether the custom licence prompts have to run for this configuration
pub fn needs_custom_flow(config: &Config) -> bool {
    config.features.licence_file && config.licence_key == CUSTOM_KEY
}

/// Ask for the custom licence's title, notice, text and category
pub fn prompt_custom_licence<P: Prompter + ?Sized>(
    prompter: &mut P,
    editor: Option<&str>,
) -> Result<Licence> {
    let title = prompter.input(
        &InputField::new("licence_title", "What's your licence called?")
            .validate(validate::licence_title),
    )?;

    let short_notice = prompter.text(
        &TextField::new(
            "licence_short",
            "Gimme your lunch mon--I mean please enter a short licence description",
        )
        .editor(editor)
        .validate(validate::licence_short),
    )?;

    let content = prompter.text(
        &TextField::new(
            "licence_content",
            "I want the loooongest description you got for your licence",
        )
        .editor(editor),
    )?;

    let category = prompter.select(&SelectField {
        key: "licence_category",
        prompt: "What type of licences are we talkin' about here?".to_string(),
        options: Category::ALL
            .iter()
            .map(|c| SelectOption::new(c.key(), c.label()))
            .collect(),
    })?;
    let category: Category = category.parse().map_err(BefossError::Validation)?;

    Ok(Licence {
        key: title.clone(),
        name: title,
        content,
        short_notice,
        category,
    })
}

/// Collect a custom licence, register it, and select it
///
/// Returns the configuration with `licence_key` set to the new licence's title.
pub fn resolve_custom_licence<P: Prompter + ?Sized>(
    prompter: &mut P,
    catalog: &mut LicenceCatalog,
    config: Config,
) -> Result<Config> {
    let licence = prompt_custom_licence(prompter, config.editor.as_deref())?;
    let key = licence.key.clone();

    catalog.register(licence);
    catalog.add_selectable(&key, &key);

    // Never go on to write an empty LICENCE
    catalog.lookup(&key)?;

    prompter.success(&format!("Registered custom licence '{}'", key))?;

    Ok(Config {
        licence_key: key,
        ..config
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Answers, Author, Features, Program};
    use crate::prompt::ScriptedPrompter;

    fn custom_config(licence_file: bool) -> Config {
        Config {
            editor: Some("vim".to_string()),
            program: Program::default(),
            author: Author {
                full_name: "Jane Doe".to_string(),
                email: "jane@example.com".to_string(),
            },
            features: Features {
                licence_file,
                ..Features::default()
            },
            licence_key: CUSTOM_KEY.to_string(),
            details: String::new(),
            year: 2024,
        }
    }

    fn zed_answers() -> Answers {
        Answers::default()
            .with("licence_title", "Zed Licence")
            .with("licence_short", "short text")
            .with("licence_content", "long text")
            .with("licence_category", "proprietary")
    }

    #[test]
    fn test_flow_only_for_custom_with_licence_file() {
        assert!(needs_custom_flow(&custom_config(true)));
        assert!(!needs_custom_flow(&custom_config(false)));

        let mut mit = custom_config(true);
        mit.licence_key = "mit".to_string();
        assert!(!needs_custom_flow(&mit));
    }

    #[test]
    fn test_resolve_registers_and_selects() {
        let mut prompter = ScriptedPrompter::new(zed_answers());
        let mut catalog = LicenceCatalog::new();

        let config =
            resolve_custom_licence(&mut prompter, &mut catalog, custom_config(true)).unwrap();

        assert_eq!(config.licence_key, "Zed Licence");
        let licence = catalog.lookup("Zed Licence").unwrap();
        assert_eq!(licence.content, "long text");
        assert_eq!(licence.short_notice, "short text");
        assert_eq!(licence.category, Category::Proprietary);
        assert!(catalog
            .list_selectable()
            .iter()
            .any(|o| o.key == "Zed Licence"));
    }

    #[test]
    fn test_resolve_rejects_short_title() {
        let mut prompter = ScriptedPrompter::new(zed_answers().with("licence_title", "Z"));
        let mut catalog = LicenceCatalog::new();

        let err = resolve_custom_licence(&mut prompter, &mut catalog, custom_config(true))
            .unwrap_err();
        assert!(matches!(err, BefossError::Validation(_)));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_resolve_twice_overwrites() {
        let mut catalog = LicenceCatalog::new();

        let mut first = ScriptedPrompter::new(zed_answers());
        resolve_custom_licence(&mut first, &mut catalog, custom_config(true)).unwrap();

        let mut second = ScriptedPrompter::new(
            zed_answers()
                .with("licence_content", "longer text")
                .with("licence_category", "foss"),
        );
        resolve_custom_licence(&mut second, &mut catalog, custom_config(true)).unwrap();

        assert_eq!(catalog.len(), 1);
        let licence = catalog.lookup("Zed Licence").unwrap();
        assert_eq!(licence.content, "longer text");
        assert_eq!(licence.category, Category::Foss);
        let offered = catalog
            .list_selectable()
            .iter()
            .filter(|o| o.key == "Zed Licence")
            .count();
        assert_eq!(offered, 1);
    }
}
