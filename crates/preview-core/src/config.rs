//! Tunable timing and threshold values for a preview session.

use serde::Deserialize;
use std::time::Duration;

/// Debounce windows, settle delay and visibility threshold.
///
/// Deserializable from the `[viewer]` table of the host config; any missing
/// key falls back to its default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PreviewTuning {
    #[serde(default = "default_scroll_debounce_ms")]
    pub scroll_debounce_ms: u64,
    #[serde(default = "default_resize_debounce_ms")]
    pub resize_debounce_ms: u64,
    #[serde(default = "default_jump_settle_ms")]
    pub jump_settle_ms: u64,
    #[serde(default = "default_min_visible_overlap_px")]
    pub min_visible_overlap_px: f32,
    #[serde(default = "default_load_timeout_secs")]
    pub load_timeout_secs: f32,
}

impl Default for PreviewTuning {
    fn default() -> Self {
        PreviewTuning {
            scroll_debounce_ms: default_scroll_debounce_ms(),
            resize_debounce_ms: default_resize_debounce_ms(),
            jump_settle_ms: default_jump_settle_ms(),
            min_visible_overlap_px: default_min_visible_overlap_px(),
            load_timeout_secs: default_load_timeout_secs(),
        }
    }
}

impl PreviewTuning {
    pub fn scroll_debounce(&self) -> Duration {
        Duration::from_millis(self.scroll_debounce_ms)
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    pub fn jump_settle(&self) -> Duration {
        Duration::from_millis(self.jump_settle_ms)
    }

    pub fn load_timeout(&self) -> Duration {
        if self.load_timeout_secs.is_finite() && self.load_timeout_secs > 0.0 {
            Duration::from_secs_f32(self.load_timeout_secs)
        } else {
            Duration::from_secs_f32(default_load_timeout_secs())
        }
    }

    /// Clamp values read from disk into ranges the session can work with.
    pub fn sanitized(mut self) -> Self {
        self.scroll_debounce_ms = self.scroll_debounce_ms.min(5_000);
        self.resize_debounce_ms = self.resize_debounce_ms.min(5_000);
        self.jump_settle_ms = self.jump_settle_ms.clamp(100, 10_000);
        if !self.min_visible_overlap_px.is_finite() || self.min_visible_overlap_px < 0.0 {
            self.min_visible_overlap_px = default_min_visible_overlap_px();
        }
        if !self.load_timeout_secs.is_finite() || self.load_timeout_secs <= 0.0 {
            self.load_timeout_secs = default_load_timeout_secs();
        }
        self
    }
}

fn default_scroll_debounce_ms() -> u64 {
    300
}

fn default_resize_debounce_ms() -> u64 {
    300
}

fn default_jump_settle_ms() -> u64 {
    900
}

fn default_min_visible_overlap_px() -> f32 {
    100.0
}

fn default_load_timeout_secs() -> f32 {
    20.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_use_defaults() {
        let tuning: PreviewTuning = toml::from_str("jump_settle_ms = 1000").expect("parse tuning");
        assert_eq!(tuning.jump_settle_ms, 1000);
        assert_eq!(tuning.scroll_debounce_ms, 300);
        assert_eq!(tuning.min_visible_overlap_px, 100.0);
    }

    #[test]
    fn sanitize_repairs_nonsense_values() {
        let tuning = PreviewTuning {
            jump_settle_ms: 0,
            min_visible_overlap_px: f32::NAN,
            load_timeout_secs: -1.0,
            ..PreviewTuning::default()
        }
        .sanitized();
        assert_eq!(tuning.jump_settle_ms, 100);
        assert_eq!(tuning.min_visible_overlap_px, 100.0);
        assert_eq!(tuning.load_timeout(), Duration::from_secs(20));
    }
}
