use super::super::super::messages::Message;
use super::super::super::state::App;
use iced::keyboard::{Key, Modifiers, key};

impl App {
    pub(super) fn shortcut_message_for_key(
        &self,
        key: Key,
        modifiers: Modifiers,
    ) -> Option<Message> {
        let pressed = Self::pressed_token(&key)?;
        let keys = &self.config.keys;

        if Self::shortcut_matches(&keys.next_page, "right", &pressed, modifiers) {
            Some(Message::NextPage)
        } else if Self::shortcut_matches(&keys.prev_page, "left", &pressed, modifiers) {
            Some(Message::PreviousPage)
        } else if Self::shortcut_matches(&keys.zoom_in, "ctrl+=", &pressed, modifiers) {
            Some(Message::ZoomIn)
        } else if Self::shortcut_matches(&keys.zoom_out, "ctrl+-", &pressed, modifiers) {
            Some(Message::ZoomOut)
        } else if Self::shortcut_matches(&keys.reset_zoom, "ctrl+0", &pressed, modifiers) {
            Some(Message::ResetZoom)
        } else if Self::shortcut_matches(&keys.close_preview, "escape", &pressed, modifiers) {
            Some(Message::ClosePreview)
        } else if Self::shortcut_matches(&keys.safe_quit, "q", &pressed, modifiers) {
            Some(Message::SafeQuit)
        } else {
            None
        }
    }

    fn pressed_token(key: &Key) -> Option<String> {
        let token = match key.as_ref() {
            Key::Named(key::Named::Space) => "space".to_string(),
            Key::Named(key::Named::ArrowRight) => "right".to_string(),
            Key::Named(key::Named::ArrowLeft) => "left".to_string(),
            Key::Named(key::Named::PageDown) => "pagedown".to_string(),
            Key::Named(key::Named::PageUp) => "pageup".to_string(),
            Key::Named(key::Named::Escape) => "escape".to_string(),
            Key::Character(ch) => ch.to_ascii_lowercase(),
            _ => return None,
        };
        Some(token)
    }

    pub(super) fn shortcut_matches(
        raw: &str,
        fallback: &str,
        pressed: &str,
        modifiers: Modifiers,
    ) -> bool {
        let normalized = Self::normalize_shortcut_token(raw, fallback);

        let mut required_ctrl = false;
        let mut required_alt = false;
        let mut required_logo = false;
        let mut required_shift = false;
        let mut required_key: Option<&str> = None;

        for token in normalized
            .split('+')
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            match token {
                "ctrl" | "control" => required_ctrl = true,
                "alt" => required_alt = true,
                "logo" | "meta" | "super" | "cmd" | "command" => required_logo = true,
                "shift" => required_shift = true,
                key => required_key = Some(key),
            }
        }

        // "ctrl++" leaves no key token after splitting; the key is '+'.
        let required_key = match required_key {
            Some(key) => key,
            None if normalized.ends_with('+') => "+",
            None => fallback,
        };
        if pressed != required_key {
            return false;
        }

        modifiers.control() == required_ctrl
            && modifiers.alt() == required_alt
            && modifiers.logo() == required_logo
            && modifiers.shift() == required_shift
    }

    pub(super) fn normalize_shortcut_token(raw: &str, fallback: &str) -> String {
        let normalized = raw.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            return fallback.to_string();
        }
        normalized
            .replace("spacebar", "space")
            .replace("arrowright", "right")
            .replace("arrowleft", "left")
    }
}
