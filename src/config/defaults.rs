pub(crate) fn default_chars_per_page() -> usize {
    1800
}

pub(crate) fn default_base_font_size() -> f32 {
    15.0
}

pub(crate) fn default_window_width() -> f32 {
    1024.0
}

pub(crate) fn default_window_height() -> f32 {
    768.0
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Debug
}

pub(crate) fn default_key_next_page() -> String {
    "right".to_string()
}

pub(crate) fn default_key_prev_page() -> String {
    "left".to_string()
}

pub(crate) fn default_key_zoom_in() -> String {
    "ctrl+=".to_string()
}

pub(crate) fn default_key_zoom_out() -> String {
    "ctrl+-".to_string()
}

pub(crate) fn default_key_reset_zoom() -> String {
    "ctrl+0".to_string()
}

pub(crate) fn default_key_close_preview() -> String {
    "escape".to_string()
}

pub(crate) fn default_key_safe_quit() -> String {
    "q".to_string()
}
