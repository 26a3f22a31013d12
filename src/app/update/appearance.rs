use super::super::state::App;
use super::Effect;
use preview_core::SessionCommand;
use std::time::Instant;
use tracing::debug;

impl App {
    pub(super) fn handle_zoom_in(&mut self, effects: &mut Vec<Effect>) {
        self.dispatch_session_command(SessionCommand::ZoomIn, effects);
    }

    pub(super) fn handle_zoom_out(&mut self, effects: &mut Vec<Effect>) {
        self.dispatch_session_command(SessionCommand::ZoomOut, effects);
    }

    pub(super) fn handle_reset_zoom(&mut self, effects: &mut Vec<Effect>) {
        self.dispatch_session_command(SessionCommand::ResetZoom, effects);
    }

    pub(super) fn handle_zoom_changed(&mut self, scale: f32, effects: &mut Vec<Effect>) {
        self.dispatch_session_command(SessionCommand::SetZoom { scale }, effects);
    }

    pub(super) fn handle_window_resized(&mut self, width: f32, height: f32) {
        debug!(width, height, "Window resized");
        self.session.on_resize(width, Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::messages::Message;
    use crate::config::AppConfig;
    use std::path::PathBuf;

    fn loaded_app() -> App {
        let mut app = App::bootstrap(AppConfig::default(), PathBuf::from("book.txt")).0;
        app.reduce(Message::OpenPreview);
        let generation = app.session.generation();
        app.reduce(Message::DocumentLoaded {
            generation,
            pages: vec!["one".to_string(), "two".to_string(), "three".to_string()],
        });
        app
    }

    #[test]
    fn zoom_reanchors_current_page() {
        let mut app = loaded_app();
        app.reduce(Message::NextPage);
        let effects = app.reduce(Message::ZoomIn);
        let [Effect::ScrollTo(request)] = effects.as_slice() else {
            panic!("expected a re-anchor scroll, got {effects:?}");
        };
        assert_eq!(request.page, 2);
        assert_eq!(app.session.scale(), 1.2);
    }

    #[test]
    fn zoom_is_clamped_at_bounds() {
        let mut app = loaded_app();
        for _ in 0..20 {
            app.reduce(Message::ZoomOut);
        }
        assert_eq!(app.session.scale(), 0.5);
        app.reduce(Message::ResetZoom);
        assert_eq!(app.session.scale(), 1.0);
    }

    #[test]
    fn slider_zoom_is_snapped() {
        let mut app = loaded_app();
        app.reduce(Message::ZoomChanged(1.754));
        assert_eq!(app.session.scale(), 1.75);
    }

    #[test]
    fn zoom_and_input_are_ignored_while_closed() {
        let mut app = loaded_app();
        app.reduce(Message::ClosePreview);

        assert!(app.reduce(Message::ZoomIn).is_empty());
        app.reduce(Message::ZoomChanged(2.0));
        app.reduce(Message::PageInputChanged("abc".to_string()));
        assert_eq!(app.session.scale(), 1.0);
        assert_eq!(app.session.pending_page_input(), "1");

        app.reduce(Message::OpenPreview);
        let snapshot = app.session.snapshot();
        assert_eq!(snapshot.scale, 1.0);
        assert_eq!(snapshot.pending_page_input, "1");
    }

    #[test]
    fn page_font_follows_zoom() {
        let mut app = loaded_app();
        let before = app.page_font_size();
        app.reduce(Message::ZoomIn);
        assert!(app.page_font_size() > before);
    }
}
