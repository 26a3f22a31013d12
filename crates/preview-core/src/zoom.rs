use crate::layout::width_band;
use crate::timer::Timer;
use std::time::{Duration, Instant};
use tracing::debug;

/// Limits for the display scale.
pub const MIN_SCALE: f32 = 0.5;
pub const MAX_SCALE: f32 = 2.5;
pub const SCALE_STEP: f32 = 0.2;
pub const DEFAULT_SCALE: f32 = 1.0;

/// Display scale plus the debounced viewport width it multiplies.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomController {
    scale: f32,
    viewport_width: Option<f32>,
    pending_width: Option<f32>,
    resize: Timer,
}

impl Default for ZoomController {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoomController {
    pub fn new() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            viewport_width: None,
            pending_width: None,
            resize: Timer::new(),
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn zoom_in(&mut self) {
        self.set_scale(self.scale + SCALE_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_scale(self.scale - SCALE_STEP);
    }

    pub fn reset_zoom(&mut self) {
        self.scale = DEFAULT_SCALE;
    }

    pub fn set_scale(&mut self, scale: f32) {
        if !scale.is_finite() {
            return;
        }
        // Snap to hundredths so repeated steps do not drift off the grid.
        let snapped = (scale * 100.0).round() / 100.0;
        self.scale = snapped.clamp(MIN_SCALE, MAX_SCALE);
        debug!(scale = self.scale, "Zoom changed");
    }

    /// Seed the viewport width without waiting for the resize debounce.
    pub fn set_viewport_width(&mut self, width: f32) {
        if width.is_finite() && width > 0.0 {
            self.viewport_width = Some(width);
        }
    }

    /// Queue a window resize; the newest width wins after `debounce` of quiet.
    pub fn on_resize(&mut self, width: f32, now: Instant, debounce: Duration) {
        if !width.is_finite() || width <= 0.0 {
            return;
        }
        self.pending_width = Some(width);
        self.resize.arm(now, debounce);
    }

    /// Commit the queued width once due. Returns true if the width changed.
    pub fn settle_resize(&mut self, now: Instant) -> bool {
        if !self.resize.fire_if_due(now) {
            return false;
        }
        let Some(width) = self.pending_width.take() else {
            return false;
        };
        let changed = self.viewport_width != Some(width);
        self.viewport_width = Some(width);
        if changed {
            debug!(width, page_width = self.page_width(), "Viewport width committed");
        }
        changed
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.resize.deadline()
    }

    /// Rendered page width: the viewport's width band times the scale.
    pub fn page_width(&self) -> f32 {
        let base = self.viewport_width.map(width_band).unwrap_or(560.0);
        base * self.scale
    }

    pub fn reset(&mut self) {
        let viewport_width = self.pending_width.or(self.viewport_width);
        *self = Self::new();
        // Window geometry is not session state; keep the newest known width.
        self.viewport_width = viewport_width;
    }
}
