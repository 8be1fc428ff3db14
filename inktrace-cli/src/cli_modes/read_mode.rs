use crate::{Cli, render::Renderer};
use inktrace_core::Timeline;

pub fn read_mode(cli: &Cli, renderer: &Renderer, timeline: &mut Timeline) {
    if let Some(tag) = &cli.tag {
        timeline.set_tag_filter(tag);
    } else if let Some(term) = &cli.search {
        timeline.set_text_filter(term);
    }

    let view = timeline.filtered_view();
    if view.is_empty() {
        renderer.print_info("No entries found.");
        return;
    }
    renderer.print_info(&format!("{} entries found.", view.len()));
    renderer.print_entries(&view);
}
