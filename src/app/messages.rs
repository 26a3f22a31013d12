use iced::keyboard::{Key, Modifiers};
use std::time::Instant;

/// Messages emitted by the UI and by background tasks.
#[derive(Debug, Clone)]
pub enum Message {
    OpenPreview,
    ClosePreview,
    NextPage,
    PreviousPage,
    PageInputChanged(String),
    PageInputSubmitted,
    ZoomIn,
    ZoomOut,
    ResetZoom,
    ZoomChanged(f32),
    Scrolled {
        scroll_top: f32,
        client_height: f32,
        scroll_height: f32,
    },
    WindowResized {
        width: f32,
        height: f32,
    },
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    DocumentLoaded {
        generation: u64,
        pages: Vec<String>,
    },
    DocumentLoadFailed {
        generation: u64,
        error: String,
    },
    Tick(Instant),
    PollSystemSignals,
    SafeQuit,
}
