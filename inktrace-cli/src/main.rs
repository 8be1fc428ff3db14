mod cli_modes;
mod render;

use anyhow::Result;
use clap::{ArgGroup, Parser};
use cli_modes::{
    clear_mode, cloud_mode, delete_mode, describe_store_error, edit_mode, read_mode, use_color,
    write_mode,
};
use inktrace_core::{Config, StoreError, Timeline};
use render::{ColorMode, RenderOptions, Renderer};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// inktrace — timestamped, tagged journal entries in one local blob
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    group(ArgGroup::new("read_mode").args(["list", "search", "tag"]).conflicts_with("text")),
    group(ArgGroup::new("edit_mode").args(["edit"])),
    group(ArgGroup::new("destructive").args(["delete", "clear"]).conflicts_with_all(["read_mode", "edit_mode", "text"])),
    group(ArgGroup::new("solo").args(["path", "cloud"]).conflicts_with_all(["read_mode", "edit_mode", "destructive", "text"])),
)]
pub struct Cli {
    /// Prints the entries blob location
    #[arg(long, short)]
    pub path: bool,
    /// Prints the tag cloud: every tag with its usage count, most used first.
    #[arg(long)]
    pub cloud: bool,

    /// Shows the timeline, newest entry first.
    #[arg(long, short)]
    pub list: bool,
    /// Shows entries whose text or tags contain TERM (case-insensitive).
    /// A leading `#` searches tags only (e.g. `inktrace -s '#work'`).
    #[arg(long, short)]
    pub search: Option<String>,
    /// Shows entries carrying exactly this tag.
    #[arg(long)]
    pub tag: Option<String>,
    /// Only shows one line per entry.
    #[arg(long)]
    pub short: bool,

    /// Rewrites the entry with this id from the given text and --tags.
    /// With no text, your editor opens with the current text to revise.
    #[arg(long, short)]
    pub edit: Option<String>,
    /// Deletes the entry with this id. Asks first.
    #[arg(long, short)]
    pub delete: Option<String>,
    /// Deletes every entry and the blob itself. Asks first.
    #[arg(long)]
    pub clear: bool,
    /// Answers yes to confirmation prompts.
    #[arg(long, short)]
    pub yes: bool,

    /// Comma separated tags for a new or edited entry (e.g. `-t "work, ideas"`).
    #[arg(long, short, value_name = "TAGS")]
    pub tags: Option<String>,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
    /// Free text for a new entry (e.g., `inktrace "Shipped the release" -t work`).
    #[arg()]
    pub text: Vec<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("inktrace: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let (mut timeline, load_errors) = Timeline::open(&config);

    let renderer = Renderer::new(Some(RenderOptions {
        date_format: config.date_format.clone(),
        use_color: use_color(&cli),
        short_mode: cli.short,
    }));
    print_load_warnings(&renderer, &load_errors);

    if cli.path {
        renderer.print_info(&format!("{}", timeline.store().path().display()));
        return Ok(());
    }
    if cli.cloud {
        cloud_mode(&renderer, &timeline);
        return Ok(());
    }

    // Read mode
    if cli.list || cli.search.is_some() || cli.tag.is_some() {
        read_mode(&cli, &renderer, &mut timeline);
        return Ok(());
    }

    if let Some(id) = &cli.delete {
        return delete_mode(&cli, &renderer, &mut timeline, id);
    }
    if cli.clear {
        return clear_mode(&cli, &renderer, &mut timeline);
    }
    if let Some(id) = &cli.edit {
        return edit_mode(&cli, &renderer, &mut timeline, &config, id);
    }

    // Insert mode (default)
    write_mode(&cli, &renderer, &mut timeline, &config)
}

fn print_load_warnings(renderer: &Renderer, errors: &[StoreError]) {
    for error in errors {
        renderer.print_info(&format!(
            "Starting with an empty journal: {}",
            describe_store_error(error)
        ));
    }
}
