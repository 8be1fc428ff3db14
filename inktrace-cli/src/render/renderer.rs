use super::theme::Gruvbox;
use inktrace_core::{Entry, timestamps::format_display};
use termimad::{
    MadSkin,
    crossterm::style::{Color, Stylize},
};

#[derive(Clone)]
pub struct RenderOptions {
    pub date_format: String,
    pub use_color: bool,
    pub short_mode: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: Gruvbox::default_gruvbox_skin(),
            opts: match config {
                Some(config) => config,
                None => RenderOptions {
                    date_format: "%d %b %Y, %H:%M".to_string(),
                    use_color: true,
                    short_mode: false,
                },
            },
        }
    }

    pub fn print_md(&self, md: &str) {
        self.skin.print_text(md);
    }

    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            let md = format!("|-|\n| {message} |\n|-|\n");
            self.skin.print_text(&md);
        } else {
            println!("{message}");
        }
    }

    /// One entry on one line: date, an excerpt of the text, tags, id.
    pub fn print_entry_line(&self, entry: &Entry) {
        let mut date = format_display(&entry.created_at, &self.opts.date_format);
        let mut excerpt = excerpt(&entry.text);
        let mut tags = String::new();
        let mut id = format!("({})", entry.id);
        if !entry.tags.is_empty() {
            tags = format!("[{}] ", entry.tags.join(", "));
        }
        if self.opts.use_color {
            date = date.with(Color::Cyan).to_string();
            excerpt = excerpt.with(Color::Yellow).to_string();
            tags = tags.with(Color::Green).to_string();
            id = id.with(Color::DarkGrey).to_string();
        }
        println!("{} - {} {}{}", date, excerpt, tags, id);
    }

    pub fn print_entries(&self, entries: &[&Entry]) {
        if entries.is_empty() {
            self.print_info("No entries found.");
            return;
        }

        for (i, entry) in entries.iter().enumerate() {
            if self.opts.short_mode {
                self.print_entry_line(entry);
                continue;
            }

            let date = format_display(&entry.created_at, &self.opts.date_format);
            let mut heading = format!("## {} - {}", date, entry.id);
            if let Some(updated) = &entry.updated_at {
                let edited = format_display(updated, &self.opts.date_format);
                heading.push_str(&format!("\n*edited {edited}*"));
            }

            let body = highlight_tags(entry.text.trim_end());
            let tag_line = if entry.tags.is_empty() {
                String::new()
            } else {
                entry
                    .tags
                    .iter()
                    .map(|t| format!("`#{t}`"))
                    .collect::<Vec<_>>()
                    .join(" ")
            };

            let mut md = format!("{heading}\n{body}\n");
            if !tag_line.is_empty() {
                md.push_str(&format!("{tag_line}\n"));
            }

            if self.opts.use_color {
                self.print_md(&md);
            } else {
                print!("{md}");
            }

            if i + 1 < entries.len() {
                println!();
            }

            if self.opts.use_color {
                self.print_md("---");
            } else {
                println!("---");
            }
        }
    }

    pub fn print_tag_cloud(&self, cloud: &[(String, usize)]) {
        for (tag, count) in cloud {
            if self.opts.use_color {
                self.print_md(&format!("* `#{tag}` ({count})"));
            } else {
                println!("#{tag} ({count})");
            }
        }
    }
}

fn excerpt(text: &str) -> String {
    let first_line = text.lines().next().unwrap_or_default();
    let mut out: String = first_line.chars().take(60).collect();
    if first_line.chars().count() > 60 || text.lines().count() > 1 {
        out.push('…');
    }
    out
}

/// Marks inline `#tag` mentions in the body as code so the skin colors them.
fn highlight_tags(body: &str) -> String {
    let re = regex::Regex::new(r"(?m)(^|\s)#([A-Za-z0-9_][\w-]*)").unwrap();
    re.replace_all(body, "$1`#$2`").to_string()
}
