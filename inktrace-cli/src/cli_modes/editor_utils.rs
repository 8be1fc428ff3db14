use anyhow::Result;
use inktrace_core::Config;
use std::{fs, process::Command};

pub fn resolve_editor(config: &Config) -> String {
    config
        .editor
        .as_deref()
        .map(str::to_string)
        .or_else(|| std::env::var("VISUAL").ok())
        .or_else(|| std::env::var("EDITOR").ok())
        .unwrap_or_else(|| "vim".into())
}

/// Opens a temp buffer (optionally seeded with existing text) in the
/// editor and returns its contents once the editor exits.
pub fn compose_in_editor(editor_cmd: &str, initial: &str) -> Result<String> {
    let file = tempfile::Builder::new()
        .prefix("inktrace")
        .suffix(".md")
        .tempfile()?;

    let path = file.path().to_path_buf();
    if !initial.is_empty() {
        fs::write(&path, initial)?;
    }
    let status = Command::new(editor_cmd).arg(&path).status()?;
    if !status.success() {
        anyhow::bail!("Editor exited with status {}", status);
    }
    Ok(fs::read_to_string(&path)?)
}
