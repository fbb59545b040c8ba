//! Wizard stages
//!
//! Each stage asks its prompts and returns a record; later stages receive what they
//! need from earlier ones as arguments.

use crate::config::{
    validate, Author, Config, Features, Program, DEFAULT_DESCRIPTION, DEFAULT_EMAIL,
    DEFAULT_PROGRAM,
};
use crate::error::Result;
use crate::licence::{LicenceCatalog, NoticeContext, CUSTOM_KEY};
use crate::prompt::{ConfirmField, InputField, Prompter, SelectField, SelectOption, TextField};
use crate::runtime::EDITORS;

/// Output of the licence & feature selection stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub licence_key: String,
    pub features: Features,
}

/// Output of the identity & description stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub author: Author,
    pub program: Program,
    pub details: String,
}

/// Stage 1: use the editor from the environment, or ask for one
pub fn choose_editor<P: Prompter + ?Sized>(
    prompter: &mut P,
    from_env: Option<String>,
) -> Result<String> {
    if let Some(editor) = from_env {
        return Ok(editor);
    }

    let field = SelectField {
        key: "editor",
        prompt: "Choose an editor, WARNING you will be judged. Pick wisely hero.".to_string(),
        options: EDITORS
            .iter()
            .map(|(id, label)| SelectOption::new(*id, *label))
            .collect(),
    };
    prompter.select(&field)
}

/// Stage 2: licence and the three feature toggles
pub fn select_licence<P: Prompter + ?Sized>(
    prompter: &mut P,
    catalog: &LicenceCatalog,
) -> Result<Selection> {
    let mut options: Vec<SelectOption> = catalog
        .list_selectable()
        .iter()
        .map(|o| SelectOption::new(o.key.clone(), o.label.clone()))
        .collect();
    options.push(
        SelectOption::new(CUSTOM_KEY, "Roll your own, custom licence")
            .hint("you'll be asked for the details"),
    );

    let licence_key = prompter.select(&SelectField {
        key: "licence",
        prompt: "Choose your licence".to_string(),
        options,
    })?;

    let licence_file = prompter.confirm(&ConfirmField {
        key: "licence_file",
        prompt: "Would you like to create a Licence file?".to_string(),
        initial: true,
    })?;
    let contributing_guide = prompter.confirm(&ConfirmField {
        key: "contributing",
        prompt: "Would you like to create a contributing guide?".to_string(),
        initial: false,
    })?;
    let prepend = prompter.confirm(&ConfirmField {
        key: "prepend",
        prompt: format!("Would you like to prepend {} to your files?", licence_key),
        initial: false,
    })?;

    Ok(Selection {
        licence_key,
        features: Features {
            licence_file,
            contributing_guide,
            prepend,
        },
    })
}

/// Stage 3: author, program and contact details
pub fn collect_identity<P: Prompter + ?Sized>(prompter: &mut P, editor: &str) -> Result<Identity> {
    let full_name = prompter.input(
        &InputField::new("author", "What's your full name?").validate(validate::full_name),
    )?;

    let name = prompter.input(
        &InputField::new("program", "What's your program called anyway?")
            .placeholder(DEFAULT_PROGRAM)
            .default_value(DEFAULT_PROGRAM),
    )?;

    let description = prompter.input(
        &InputField::new("description", "I need the bloody description too!")
            .placeholder(DEFAULT_DESCRIPTION)
            .default_value(DEFAULT_DESCRIPTION)
            .validate(validate::description),
    )?;

    let email = prompter.input(
        &InputField::new(
            "email",
            "People will need to contact you in some way..., an email or mailing address would be nice",
        )
        .placeholder(DEFAULT_EMAIL)
        .default_value(DEFAULT_EMAIL),
    )?;

    let details = prompter.text(
        &TextField::new(
            "details",
            "If you want to add somethin' extra, now's yer chance mate.",
        )
        .editor(Some(editor)),
    )?;

    Ok(Identity {
        author: Author { full_name, email },
        program: Program { name, description },
        details,
    })
}

/// Combine the stage outputs into the run's configuration
pub fn assemble(editor: String, selection: Selection, identity: Identity, year: i32) -> Config {
    Config {
        editor: Some(editor),
        program: identity.program,
        author: identity.author,
        features: selection.features,
        licence_key: selection.licence_key,
        details: identity.details,
        year,
    }
}

/// Values the built-in licences are generated from
pub fn notice_context(config: &Config) -> NoticeContext {
    NoticeContext {
        year: config.year,
        author: config.author.full_name.clone(),
        program: config.program.name.clone(),
        description: config.program.description.clone(),
        email: config.author.email.clone(),
    }
}

/// Text for `CONTRIBUTE.md`
pub fn collect_contributing<P: Prompter + ?Sized>(
    prompter: &mut P,
    editor: Option<&str>,
) -> Result<String> {
    prompter.info(
        "Please note that the following text in your editor will be passed to a markdown file.",
    )?;
    prompter.text(
        &TextField::new(
            "contributing_text",
            "Give us your standards for what a contribution looks like.",
        )
        .editor(editor),
    )
}

/// Extra text for the prepend block
pub fn collect_prepend_text<P: Prompter + ?Sized>(
    prompter: &mut P,
    editor: Option<&str>,
) -> Result<String> {
    prompter.text(
        &TextField::new(
            "prepend_text",
            "Give us any text you would like to be prepended to your files in addition to licence information.",
        )
        .editor(editor),
    )
}
