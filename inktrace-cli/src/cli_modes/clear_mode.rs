use super::{confirm::confirm, describe_store_error};
use crate::{Cli, render::Renderer};
use anyhow::{Result, anyhow};
use inktrace_core::{ClearOutcome, Timeline};

pub fn clear_mode(cli: &Cli, renderer: &Renderer, timeline: &mut Timeline) -> Result<()> {
    let outcome = timeline
        .clear_all(|| cli.yes || confirm("Clear all entries? This cannot be undone."))
        .map_err(|e| anyhow!("the journal was not cleared: {}", describe_store_error(&e)))?;
    match outcome {
        ClearOutcome::Cleared => renderer.print_info("All entries cleared."),
        ClearOutcome::Cancelled => renderer.print_info("Nothing cleared."),
    }
    Ok(())
}
