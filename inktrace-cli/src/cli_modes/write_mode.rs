use super::describe_store_error;
use super::editor_utils::{compose_in_editor, resolve_editor};
use crate::{Cli, render::Renderer};
use anyhow::{Result, anyhow};
use inktrace_core::{Config, CreateOutcome, Timeline};

pub fn write_mode(
    cli: &Cli,
    renderer: &Renderer,
    timeline: &mut Timeline,
    config: &Config,
) -> Result<()> {
    let raw_text = if !cli.text.is_empty() {
        cli.text.join(" ")
    } else {
        let editor = resolve_editor(config);
        let input = compose_in_editor(&editor, "")?;
        if input.trim().is_empty() {
            renderer.print_info("No entry to save, because no text was received.");
            return Ok(());
        }
        input
    };
    let raw_tags = cli.tags.as_deref().unwrap_or("");

    let outcome = timeline
        .create_entry(&raw_text, raw_tags)
        .map_err(|e| anyhow!("your entry was not saved: {}", describe_store_error(&e)))?;
    match outcome {
        CreateOutcome::Created(entry) => {
            renderer.print_info("Added new entry.");
            renderer.print_entry_line(&entry);
        }
        CreateOutcome::EmptyText => {
            renderer.print_info("Please add some text. Nothing was saved.");
        }
    }
    Ok(())
}
