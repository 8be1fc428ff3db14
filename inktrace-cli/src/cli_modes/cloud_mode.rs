use crate::render::Renderer;
use inktrace_core::Timeline;

pub fn cloud_mode(renderer: &Renderer, timeline: &Timeline) {
    let cloud = timeline.tag_cloud();
    if cloud.is_empty() {
        renderer.print_info("No tags found.");
        return;
    }
    renderer.print_info(&format!("{} unique tags found.", cloud.len()));
    renderer.print_tag_cloud(&cloud);
}
