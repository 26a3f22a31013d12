use super::messages::Message;
use crate::config::AppConfig;
use iced::Task;
use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;
use preview_core::PreviewSession;
use std::path::PathBuf;

/// Page width the configured base font size is tuned for.
pub(crate) const REFERENCE_PAGE_WIDTH: f32 = 560.0;
pub(crate) const MIN_PAGE_FONT_SIZE: f32 = 6.0;
pub(crate) static PAGES_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("preview-pages"));

/// Application state: the preview session plus the pages it renders.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) source_path: PathBuf,
    /// Rendered page texts, already cut to the visible page limit.
    pub(super) pages: Vec<String>,
    pub(super) session: PreviewSession,
}

impl App {
    pub(super) fn bootstrap(config: AppConfig, source_path: PathBuf) -> (App, Task<Message>) {
        let mut session = PreviewSession::new(config.tuning.clone(), config.layout, config.access);
        session.set_viewport_width(config.window_width);
        let app = App {
            config,
            source_path,
            pages: Vec::new(),
            session,
        };
        (app, Task::done(Message::OpenPreview))
    }

    pub fn title(&self) -> String {
        let name = self
            .source_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());
        format!("Preview: {name}")
    }

    /// Font size for page text, following the rendered page width.
    pub(super) fn page_font_size(&self) -> f32 {
        let ratio = self.session.page_width() / REFERENCE_PAGE_WIDTH;
        (self.config.base_font_size * ratio).max(MIN_PAGE_FONT_SIZE)
    }
}
