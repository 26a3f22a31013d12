use super::super::state::App;
use preview_core::ScrollSample;
use std::time::Instant;
use tracing::trace;

impl App {
    pub(super) fn handle_scrolled(
        &mut self,
        scroll_top: f32,
        client_height: f32,
        scroll_height: f32,
    ) {
        let sample = ScrollSample {
            scroll_top,
            client_height,
            scroll_height,
        };
        self.session.on_scroll(sample, Instant::now());
        trace!(
            scroll_top,
            progress = self.session.scroll_progress_percent(),
            "Preview scrolled"
        );
    }
}
