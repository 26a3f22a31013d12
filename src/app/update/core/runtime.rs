use super::super::super::messages::Message;
use super::super::super::state::{App, PAGES_SCROLL_ID};
use super::super::Effect;
use crate::epub_loader::load_document_text;
use crate::pagination::paginate;
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::widget::scrollable::{self, AbsoluteOffset};
use iced::window;
use tracing::{debug, info};

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::ScrollTo(request) => {
                // Immediate jump: iced scrollables have no animated scroll.
                scrollable::scroll_to(
                    PAGES_SCROLL_ID.clone(),
                    AbsoluteOffset {
                        x: 0.0,
                        y: request.offset_y.max(0.0),
                    },
                )
            }
            Effect::LoadDocument { path, generation } => {
                let Some(cancel) = self
                    .session
                    .load_token()
                    .filter(|token| token.generation() == generation)
                else {
                    debug!(generation, "Session no longer waiting on this load");
                    return Task::none();
                };
                let chars_per_page = self.config.chars_per_page;
                info!(path = %path.display(), generation, "Dispatching document load task");
                Task::perform(
                    async move {
                        match load_document_text(&path, &cancel) {
                            Ok(text) => Message::DocumentLoaded {
                                generation,
                                pages: paginate(&text, chars_per_page),
                            },
                            Err(err) => Message::DocumentLoadFailed {
                                generation,
                                error: format!("{err:#}"),
                            },
                        }
                    },
                    |message| message,
                )
            }
            Effect::QuitSafely => {
                self.session.close();
                info!("Preview closed; exiting");
                iced::exit()
            }
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    if let Event::Window(window::Event::CloseRequested) = event {
        return Some(Message::SafeQuit);
    }
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized {
            width: size.width,
            height: size.height,
        }),
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Size;

    fn window_id() -> window::Id {
        window::Id::unique()
    }

    #[test]
    fn close_request_maps_to_safe_quit() {
        let message = runtime_event_to_message(
            Event::Window(window::Event::CloseRequested),
            event::Status::Ignored,
            window_id(),
        );
        assert!(matches!(message, Some(Message::SafeQuit)));
    }

    #[test]
    fn resize_maps_to_window_resized() {
        let message = runtime_event_to_message(
            Event::Window(window::Event::Resized(Size::new(800.0, 600.0))),
            event::Status::Ignored,
            window_id(),
        );
        assert!(matches!(
            message,
            Some(Message::WindowResized { width, height }) if width == 800.0 && height == 600.0
        ));
    }
}
