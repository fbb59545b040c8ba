//! Befoss CLI - pick a licence and write it down

use anyhow::{Context, Result};
use befoss_core::runtime::{editor_from_env, Celebration};
use befoss_core::{Answers, Prompter, RunOptions, ScriptedPrompter, TerminalPrompter};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "befoss")]
#[command(about = "Befoss starts a form for you to choose your licence.")]
#[command(version)]
pub struct Args {
    /// Directory to write LICENCE, CONTRIBUTE.md and .envrc into
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,

    /// YAML file with pre-filled answers (non-interactive mode)
    #[arg(short, long)]
    pub answers: Option<PathBuf>,

    /// Editor to use for long text, instead of $EDITOR
    #[arg(short, long)]
    pub editor: Option<String>,

    /// Copyright year (defaults to the current year)
    #[arg(long)]
    pub year: Option<i32>,

    /// Don't try to launch confetti at the end
    #[arg(long = "no-confetti")]
    pub no_confetti: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    let mut prompter: Box<dyn Prompter> = match &args.answers {
        Some(path) => Box::new(ScriptedPrompter::new(Answers::from_path(path)?).echo(true)),
        None => Box::new(TerminalPrompter::new()),
    };

    let options = RunOptions {
        output_dir: args.dir.clone(),
        editor: args.editor.clone().or_else(editor_from_env),
        year: args.year,
        celebration: (!args.no_confetti).then(Celebration::confetti),
    };

    let result = befoss_core::run(prompter.as_mut(), options)
        .await
        .with_context(|| format!("befoss could not finish in {}", args.dir.display()));

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result.map(|_| ())
}
