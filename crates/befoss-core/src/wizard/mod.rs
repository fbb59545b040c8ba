//! The licence wizard
//!
//! Prompting happens in fixed stages (editor, licence & features, identity). Once the
//! identity is known the built-in licences are generated, then each enabled feature is
//! handled in order: licence file, contributing guide, prepend block and `.envrc`.
//! Nothing is rolled back if a later step fails.

pub mod custom;
pub mod stages;

use crate::config::Config;
use crate::error::{BefossError, Result};
use crate::licence::LicenceCatalog;
use crate::prompt::Prompter;
use crate::runtime::celebrate::{Celebration, CelebrationOutcome, CONFETTI_URL};
use crate::templates::{EnvVars, FileEmitter, PrependPayload, TemplateRenderer};
use chrono::Datelike;
use std::path::PathBuf;

/// Settings for one wizard run
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Directory the artifacts are written to
    pub output_dir: PathBuf,
    /// Editor from the environment; prompted for when `None`
    pub editor: Option<String>,
    /// Copyright year, defaults to the current year
    pub year: Option<i32>,
    /// Command run after a successful wizard, if any
    pub celebration: Option<Celebration>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            editor: None,
            year: None,
            celebration: Some(Celebration::confetti()),
        }
    }
}

/// What a completed run produced
#[derive(Debug)]
pub struct RunReport {
    pub config: Config,
    /// The catalog as it stands at the end of the run, custom licence included
    pub catalog: LicenceCatalog,
    /// Files written, in order
    pub written: Vec<PathBuf>,
    /// Rendered prepend block, when the prepend feature was enabled
    pub prepend_block: Option<String>,
    pub celebration: Option<CelebrationOutcome>,
}

/// The current local calendar year
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Run the whole wizard against `prompter`
pub async fn run<P: Prompter + ?Sized>(
    prompter: &mut P,
    options: RunOptions,
) -> Result<RunReport> {
    prompter.intro("befoss")?;
    prompter.info("It's dangerous to go alone, take a licence.")?;

    let mut catalog = LicenceCatalog::new();

    // Stage 1-3: prompts
    let editor = stages::choose_editor(prompter, options.editor.clone())?;
    let selection = stages::select_licence(prompter, &catalog)?;
    let identity = stages::collect_identity(prompter, &editor)?;
    let year = options.year.unwrap_or_else(current_year);
    let config = stages::assemble(editor, selection, identity, year);

    catalog.install_builtins(&stages::notice_context(&config));

    let emitter = FileEmitter::new(&options.output_dir);
    let renderer = TemplateRenderer::new();
    let mut written = Vec::new();

    // Licence file
    let config = if config.features.licence_file {
        let config = if custom::needs_custom_flow(&config) {
            custom::resolve_custom_licence(prompter, &mut catalog, config)?
        } else {
            config
        };

        let licence = catalog.lookup(&config.licence_key)?;
        let path = emitter.write_licence(licence).await?;
        prompter.success(&format!("Created {} ({})", path.display(), licence.name))?;
        written.push(path);
        config
    } else {
        prompter.info("What? You don't want a licence file?!")?;
        config
    };

    // Contributing guide
    if config.features.contributing_guide {
        let text = stages::collect_contributing(prompter, config.editor.as_deref())?;
        let path = emitter.write_contributing(&text).await?;
        prompter.success(&format!("Created {}", path.display()))?;
        written.push(path);
    }

    // Prepend block and .envrc
    let prepend_block = if config.features.prepend {
        let extra_text = stages::collect_prepend_text(prompter, config.editor.as_deref())?;
        let licence_short = licence_short_notice(prompter, &catalog, &config)?;

        let payload = PrependPayload {
            program: config.program.clone(),
            licence_short,
            author: config.author.full_name.clone(),
            email: config.author.email.clone(),
            year: config.year,
            details: config.details.clone(),
            extra_text,
        };
        let block = renderer.render_prepend(&payload)?;
        prompter.note("Prepend block", &block)?;

        let env_block = renderer.render_env(&EnvVars::seeded())?;
        let path = emitter.merge_envrc(&env_block).await?;
        prompter.success(&format!("Updated {}", path.display()))?;
        written.push(path);

        Some(block)
    } else {
        None
    };

    let celebration = match &options.celebration {
        Some(celebration) => Some(celebrate(prompter, celebration).await?),
        None => None,
    };

    prompter.outro("Go forth and licence!")?;

    Ok(RunReport {
        config,
        catalog,
        written,
        prepend_block,
        celebration,
    })
}

/// Short notice of the selected licence; empty when the key never resolved
fn licence_short_notice<P: Prompter + ?Sized>(
    prompter: &mut P,
    catalog: &LicenceCatalog,
    config: &Config,
) -> Result<String> {
    match catalog.lookup(&config.licence_key) {
        Ok(licence) => Ok(licence.short_notice.clone()),
        Err(BefossError::NotFound(key)) => {
            prompter.warning(&format!(
                "No notice available for '{}', the prepend block will not include one",
                key
            ))?;
            Ok(String::new())
        }
        Err(e) => Err(e),
    }
}

async fn celebrate<P: Prompter + ?Sized>(
    prompter: &mut P,
    celebration: &Celebration,
) -> Result<CelebrationOutcome> {
    let outcome = celebration.launch().await;
    match &outcome {
        CelebrationOutcome::Celebrated => {}
        CelebrationOutcome::Missing => prompter.info(&format!(
            "No confetti, for more fun please install the {} command. For more info go here: {}",
            celebration.program(),
            CONFETTI_URL
        ))?,
        CelebrationOutcome::Failed(code) => prompter.info(&format!(
            "{} exited with status {}",
            celebration.program(),
            code.map(|c| c.to_string())
                .unwrap_or_else(|| "unknown".to_string())
        ))?,
        CelebrationOutcome::TimedOut => {
            prompter.info(&format!("{} took too long, stopped it", celebration.program()))?
        }
    }
    Ok(outcome)
}
