use super::describe_store_error;
use super::editor_utils::{compose_in_editor, resolve_editor};
use crate::{Cli, render::Renderer};
use anyhow::{Result, anyhow};
use inktrace_core::{Config, Timeline, UpdateOutcome};

pub fn edit_mode(
    cli: &Cli,
    renderer: &Renderer,
    timeline: &mut Timeline,
    config: &Config,
    id: &str,
) -> Result<()> {
    let existing = timeline.find(id).cloned();

    let raw_text = if !cli.text.is_empty() {
        cli.text.join(" ")
    } else {
        let editor = resolve_editor(config);
        let seed = existing.as_ref().map(|e| e.text.as_str()).unwrap_or_default();
        let input = compose_in_editor(&editor, seed)?;
        if input.trim().is_empty() {
            renderer.print_info("No text received; the entry was left untouched.");
            return Ok(());
        }
        input
    };

    // The original edit form came pre-filled with the current tags; -t
    // replaces them.
    let raw_tags = match (&cli.tags, &existing) {
        (Some(tags), _) => tags.clone(),
        (None, Some(entry)) => entry.tags.join(", "),
        (None, None) => String::new(),
    };

    let outcome = timeline
        .update_entry(id, &raw_text, &raw_tags)
        .map_err(|e| anyhow!("your changes were not saved: {}", describe_store_error(&e)))?;
    match outcome {
        UpdateOutcome::Updated(entry) => {
            renderer.print_info("Entry updated.");
            renderer.print_entry_line(&entry);
        }
        UpdateOutcome::CreatedNew(entry) => {
            renderer.print_info(&format!(
                "No entry with id '{id}'; saved as a new entry instead."
            ));
            renderer.print_entry_line(&entry);
        }
        UpdateOutcome::EmptyText => {
            renderer.print_info("Please add some text. Nothing was changed.");
        }
    }
    Ok(())
}
