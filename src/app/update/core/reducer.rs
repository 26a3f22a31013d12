use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use preview_core::{LoadState, ScrollRequest, SessionCommand};
use std::time::Instant;
use tracing::{debug, info};

impl App {
    pub(in crate::app::update) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::OpenPreview => self.handle_open_preview(&mut effects),
            Message::ClosePreview => self.handle_close_preview(&mut effects),
            Message::NextPage => self.handle_next_page(&mut effects),
            Message::PreviousPage => self.handle_previous_page(&mut effects),
            Message::PageInputChanged(text) => {
                self.handle_page_input_changed(text, &mut effects);
            }
            Message::PageInputSubmitted => self.handle_page_input_submitted(&mut effects),
            Message::ZoomIn => self.handle_zoom_in(&mut effects),
            Message::ZoomOut => self.handle_zoom_out(&mut effects),
            Message::ResetZoom => self.handle_reset_zoom(&mut effects),
            Message::ZoomChanged(scale) => self.handle_zoom_changed(scale, &mut effects),
            Message::Scrolled {
                scroll_top,
                client_height,
                scroll_height,
            } => self.handle_scrolled(scroll_top, client_height, scroll_height),
            Message::WindowResized { width, height } => {
                self.handle_window_resized(width, height);
            }
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
            Message::DocumentLoaded { generation, pages } => {
                self.handle_document_loaded(generation, pages, &mut effects);
            }
            Message::DocumentLoadFailed { generation, error } => {
                self.handle_document_load_failed(generation, error);
            }
            Message::Tick(now) => self.handle_tick(now, &mut effects),
            Message::PollSystemSignals => self.handle_poll_system_signals(&mut effects),
            Message::SafeQuit => effects.push(Effect::QuitSafely),
        }

        effects
    }

    /// Run a session command and queue the scroll it asks for, if any.
    pub(in crate::app::update) fn dispatch_session_command(
        &mut self,
        command: SessionCommand,
        effects: &mut Vec<Effect>,
    ) {
        let event = self.session.apply_command(command, Instant::now());
        debug!(
            action = event.action,
            page = event.snapshot.current_page,
            limit = event.snapshot.visible_page_limit,
            scale = event.snapshot.scale,
            nav_mode = event.snapshot.nav_mode,
            "Applied session command"
        );
        if let Some(request) = event.scroll_request {
            effects.push(Effect::ScrollTo(request));
        }
    }

    fn handle_open_preview(&mut self, effects: &mut Vec<Effect>) {
        self.pages.clear();
        self.dispatch_session_command(SessionCommand::Open, effects);
        info!(
            path = %self.source_path.display(),
            generation = self.session.generation(),
            "Requesting preview document"
        );
        effects.push(Effect::LoadDocument {
            path: self.source_path.clone(),
            generation: self.session.generation(),
        });
    }

    fn handle_close_preview(&mut self, effects: &mut Vec<Effect>) {
        if !self.session.is_open() {
            return;
        }
        self.dispatch_session_command(SessionCommand::Close, effects);
        self.pages.clear();
    }

    fn handle_document_loaded(
        &mut self,
        generation: u64,
        mut pages: Vec<String>,
        effects: &mut Vec<Effect>,
    ) {
        let page_count = u32::try_from(pages.len()).unwrap_or(u32::MAX);
        if !self.session.on_document_loaded(generation, page_count) {
            return;
        }
        if !matches!(self.session.load_state(), LoadState::Ready) {
            return;
        }
        pages.truncate(self.session.visible_page_limit() as usize);
        self.pages = pages;
        effects.push(Effect::ScrollTo(ScrollRequest {
            page: 1,
            offset_y: 0.0,
        }));
    }

    fn handle_document_load_failed(&mut self, generation: u64, error: String) {
        if !self.session.on_document_error(generation, error) {
            debug!(generation, "Ignored stale document load failure");
        }
    }

    fn handle_tick(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        if let Some(request) = self.session.tick(now) {
            effects.push(Effect::ScrollTo(request));
        }
    }

    fn handle_poll_system_signals(&mut self, effects: &mut Vec<Effect>) {
        if crate::take_sigint_requested() {
            info!("Received Ctrl+C; running safe shutdown");
            effects.push(Effect::QuitSafely);
        }
    }
}
