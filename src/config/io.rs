use super::models::AppConfig;
use super::tables::ConfigTables;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Read the config file, falling back to defaults when it is missing or bad.
pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => {
            info!(path = %path.display(), "Loaded base config");
            data
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                "Falling back to default config: {err}"
            );
            return AppConfig::default();
        }
    };

    match parse_config(&contents) {
        Ok(cfg) => {
            debug!("Parsed configuration from disk");
            cfg
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid config TOML: {err:#}");
            AppConfig::default()
        }
    }
}

pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let tables: ConfigTables =
        toml::from_str(contents).context("failed to parse config tables")?;
    Ok(AppConfig::from(tables).sanitized())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;

    #[test]
    fn empty_file_yields_defaults() {
        let config = parse_config("").expect("empty config parses");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn sectioned_tables_are_flattened() {
        let config = parse_config(
            r#"
            [viewer]
            scroll_debounce_ms = 150
            jump_settle_ms = 1200

            [layout]
            gap_px = 24.0

            [preview]
            available_online = true
            preview_pages = 8
            chars_per_page = 900

            [window]
            width = 1400.0

            [logging]
            log_level = "warn"

            [keys]
            next_page = "j"
            "#,
        )
        .expect("config parses");

        assert_eq!(config.tuning.scroll_debounce_ms, 150);
        assert_eq!(config.tuning.jump_settle_ms, 1200);
        assert_eq!(config.tuning.resize_debounce_ms, 300);
        assert_eq!(config.layout.gap_px, 24.0);
        assert_eq!(config.layout.aspect_ratio, 1.5);
        assert!(config.access.available_online);
        assert_eq!(config.access.preview_pages, Some(8));
        assert_eq!(config.chars_per_page, 900);
        assert_eq!(config.window_width, 1400.0);
        assert_eq!(config.window_height, 768.0);
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.keys.next_page, "j");
        assert_eq!(config.keys.prev_page, "left");
    }

    #[test]
    fn out_of_range_values_are_sanitized() {
        let config = parse_config(
            r#"
            [viewer]
            jump_settle_ms = 5

            [preview]
            chars_per_page = 3
            "#,
        )
        .expect("config parses");
        assert_eq!(config.tuning.jump_settle_ms, 100);
        assert_eq!(config.chars_per_page, 200);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(parse_config("[viewer\nscroll_debounce_ms = ").is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = load_config(Path::new("/nonexistent/book-preview/config.toml"));
        assert_eq!(config, AppConfig::default());
    }
}
