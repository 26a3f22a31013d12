use preview_core::{PageLayout, PreviewAccess, PreviewTuning};
use serde::Deserialize;

/// Flattened app configuration built from the TOML tables.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub tuning: PreviewTuning,
    pub layout: PageLayout,
    pub access: PreviewAccess,
    /// Characters of document text placed on one rendered page.
    pub chars_per_page: usize,
    /// Font size at 100% zoom on a 560px page; scaled with the page width.
    pub base_font_size: f32,
    pub window_width: f32,
    pub window_height: f32,
    pub log_level: LogLevel,
    pub keys: KeyBindings,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            tuning: PreviewTuning::default(),
            layout: PageLayout::default(),
            access: PreviewAccess::default(),
            chars_per_page: crate::config::defaults::default_chars_per_page(),
            base_font_size: crate::config::defaults::default_base_font_size(),
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            log_level: crate::config::defaults::default_log_level(),
            keys: KeyBindings::default(),
        }
    }
}

impl AppConfig {
    /// Pull out-of-range values back to something the app can render.
    pub fn sanitized(mut self) -> Self {
        self.tuning = self.tuning.sanitized();
        self.layout = self.layout.sanitized();
        self.chars_per_page = self.chars_per_page.clamp(200, 20_000);
        if !self.base_font_size.is_finite() || self.base_font_size < 6.0 {
            self.base_font_size = crate::config::defaults::default_base_font_size();
        }
        if !self.window_width.is_finite() || self.window_width < 320.0 {
            self.window_width = crate::config::defaults::default_window_width();
        }
        if !self.window_height.is_finite() || self.window_height < 240.0 {
            self.window_height = crate::config::defaults::default_window_height();
        }
        self
    }
}

/// Shortcut strings such as `"ctrl+="` or `"right"`; empty means default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KeyBindings {
    #[serde(default = "crate::config::defaults::default_key_next_page")]
    pub next_page: String,
    #[serde(default = "crate::config::defaults::default_key_prev_page")]
    pub prev_page: String,
    #[serde(default = "crate::config::defaults::default_key_zoom_in")]
    pub zoom_in: String,
    #[serde(default = "crate::config::defaults::default_key_zoom_out")]
    pub zoom_out: String,
    #[serde(default = "crate::config::defaults::default_key_reset_zoom")]
    pub reset_zoom: String,
    #[serde(default = "crate::config::defaults::default_key_close_preview")]
    pub close_preview: String,
    #[serde(default = "crate::config::defaults::default_key_safe_quit")]
    pub safe_quit: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        KeyBindings {
            next_page: crate::config::defaults::default_key_next_page(),
            prev_page: crate::config::defaults::default_key_prev_page(),
            zoom_in: crate::config::defaults::default_key_zoom_in(),
            zoom_out: crate::config::defaults::default_key_zoom_out(),
            reset_zoom: crate::config::defaults::default_key_reset_zoom(),
            close_preview: crate::config::defaults::default_key_close_preview(),
            safe_quit: crate::config::defaults::default_key_safe_quit(),
        }
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    #[default]
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
