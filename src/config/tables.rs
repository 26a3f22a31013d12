use super::defaults;
use super::models::{AppConfig, KeyBindings, LogLevel};
use preview_core::{PageLayout, PreviewAccess, PreviewTuning};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    viewer: PreviewTuning,
    #[serde(default)]
    layout: PageLayout,
    #[serde(default)]
    preview: PreviewConfig,
    #[serde(default)]
    window: WindowConfig,
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    keys: KeyBindings,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            tuning: tables.viewer,
            layout: tables.layout,
            access: PreviewAccess {
                available_online: tables.preview.available_online,
                preview_pages: tables.preview.preview_pages,
            },
            chars_per_page: tables.preview.chars_per_page,
            base_font_size: tables.preview.base_font_size,
            window_width: tables.window.width,
            window_height: tables.window.height,
            log_level: tables.logging.log_level,
            keys: tables.keys,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct PreviewConfig {
    #[serde(default)]
    available_online: bool,
    #[serde(default)]
    preview_pages: Option<u32>,
    #[serde(default = "defaults::default_chars_per_page")]
    chars_per_page: usize,
    #[serde(default = "defaults::default_base_font_size")]
    base_font_size: f32,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        PreviewConfig {
            available_online: false,
            preview_pages: None,
            chars_per_page: defaults::default_chars_per_page(),
            base_font_size: defaults::default_base_font_size(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct WindowConfig {
    #[serde(default = "defaults::default_window_width")]
    width: f32,
    #[serde(default = "defaults::default_window_height")]
    height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: defaults::default_window_width(),
            height: defaults::default_window_height(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}
