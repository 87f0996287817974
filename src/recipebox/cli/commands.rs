//! # CLI Layer
//!
//! One possible UI client for recipebox. This is the only place that knows about
//! stdout, stderr, exit codes and argument parsing.
//!
//! Each handler loads the list first when it needs positions, resolves the 1-based
//! index against that same snapshot, and then works by id. Messages go to stdout;
//! errors bubble up to `main`, which prints them and exits non-zero.
//!
//! `config` runs before any store is built, so a broken `api-url` can be fixed with
//! the tool itself.

use super::render::{print_messages, render_config, render_full_recipe, render_recipe_list};
use super::setup::{Cli, Commands, RecipeArgs};
use clap::Parser;
use recipebox::api::{CmdMessage, CmdResult, ConfigAction};
use recipebox::commands;
use recipebox::error::{RecipeError, Result};
use recipebox::form::FormFields;
use recipebox::init::{self, RecipeContext};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let config_dir = init::config_dir()?;
    debug!(dir = %config_dir.display(), "config dir");

    let api_url = cli.api_url.as_deref();
    let context = || init::initialize(&config_dir, api_url);

    match cli.command {
        None | Some(Commands::List) => handle_list(&mut context()?),
        Some(Commands::View { index }) => handle_view(&mut context()?, index),
        Some(Commands::Add { fields }) => handle_add(&mut context()?, fields),
        Some(Commands::Edit { index, fields }) => handle_edit(&mut context()?, index, fields),
        Some(Commands::Delete { index }) => handle_delete(&mut context()?, index),
        Some(Commands::Page { output }) => handle_page(&mut context()?, output),
        Some(Commands::Config { key, value }) => handle_config(&config_dir, key, value),
    }
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("recipebox=debug")
        } else {
            EnvFilter::new("recipebox=warn")
        }
    });

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn handle_list(ctx: &mut RecipeContext) -> Result<()> {
    ctx.api.load()?;
    print!("{}", render_recipe_list(ctx.api.recipes()));
    Ok(())
}

fn handle_view(ctx: &mut RecipeContext, index: usize) -> Result<()> {
    ctx.api.load()?;
    let id = ctx.api.id_at(index)?;
    let recipe = ctx
        .api
        .recipes()
        .iter()
        .find(|r| r.id == id)
        .ok_or(RecipeError::NotFound(id))?;
    print!("{}", render_full_recipe(index, recipe));
    Ok(())
}

fn handle_add(ctx: &mut RecipeContext, fields: RecipeArgs) -> Result<()> {
    ctx.api.fill_form(fields.apply(FormFields::default()));
    let result = ctx.api.submit()?;
    report(&result);
    Ok(())
}

fn handle_edit(ctx: &mut RecipeContext, index: usize, fields: RecipeArgs) -> Result<()> {
    ctx.api.load()?;
    let id = ctx.api.id_at(index)?;
    ctx.api.begin_edit(&id)?;

    let current = ctx.api.form().fields().clone();
    ctx.api.fill_form(fields.apply(current));
    let result = ctx.api.submit()?;
    report(&result);
    Ok(())
}

fn handle_delete(ctx: &mut RecipeContext, index: usize) -> Result<()> {
    ctx.api.load()?;
    let id = ctx.api.id_at(index)?;
    let result = ctx.api.delete(&id)?;
    report(&result);
    Ok(())
}

/// Renders the page even when loading failed, so the load-error region shows it.
fn handle_page(ctx: &mut RecipeContext, output: Option<PathBuf>) -> Result<()> {
    let loaded = ctx.api.load();
    let html = ctx.api.render_page()?;

    match output {
        Some(path) => {
            std::fs::write(&path, html)?;
            print_messages(&[CmdMessage::success(format!(
                "Page written to {}",
                path.display()
            ))]);
        }
        None => print!("{}", html),
    }

    loaded.map(|_| ())
}

fn handle_config(dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = commands::config::run(dir, action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

/// Prints the outcome of a mutation followed by the redrawn list; a failed reload
/// after it is a warning only.
fn report(result: &CmdResult) {
    let mut messages = result.messages.clone();
    if let Some(load_error) = &result.load_error {
        warn!(error = %load_error, "list not refreshed");
        messages.push(CmdMessage::warning(load_error.clone()));
    }
    print_messages(&messages);
    print!("{}", render_recipe_list(&result.listed));
}
