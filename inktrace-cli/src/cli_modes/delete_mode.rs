use super::{confirm::confirm, describe_store_error};
use crate::{Cli, render::Renderer};
use anyhow::{Result, anyhow};
use inktrace_core::{DeleteOutcome, Timeline};

pub fn delete_mode(
    cli: &Cli,
    renderer: &Renderer,
    timeline: &mut Timeline,
    id: &str,
) -> Result<()> {
    let outcome = timeline
        .delete_entry(id, || cli.yes || confirm("Delete this entry?"))
        .map_err(|e| anyhow!("the deletion was not saved: {}", describe_store_error(&e)))?;
    match outcome {
        DeleteOutcome::Deleted => renderer.print_info("Entry deleted."),
        DeleteOutcome::Cancelled => renderer.print_info("Nothing deleted."),
        DeleteOutcome::NotFound => renderer.print_info(&format!("No entry with id '{id}'.")),
    }
    Ok(())
}
