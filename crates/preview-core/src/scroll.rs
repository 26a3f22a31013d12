//! Viewport scroll tracking: progress percentage and most-visible page.

use crate::layout::PageRect;
use crate::timer::Timer;
use std::time::{Duration, Instant};
use tracing::trace;

/// Raw scroll geometry reported by the host scrollable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    pub scroll_top: f32,
    pub client_height: f32,
    pub scroll_height: f32,
}

impl ScrollSample {
    pub fn view_top(&self) -> f32 {
        finite_or_zero(self.scroll_top).max(0.0)
    }

    pub fn view_bottom(&self) -> f32 {
        self.view_top() + finite_or_zero(self.client_height).max(0.0)
    }
}

/// A page that won the visibility comparison, with its overlap in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageCandidate {
    pub page: u32,
    pub overlap_px: f32,
}

/// `round(100 * scrollTop / (scrollHeight - clientHeight))`, clamped to 0..=100.
///
/// Content that does not overflow the viewport reports 0.
pub fn scroll_progress_percent(sample: &ScrollSample) -> u8 {
    let scrollable = finite_or_zero(sample.scroll_height) - finite_or_zero(sample.client_height);
    if scrollable <= 0.0 {
        return 0;
    }
    let ratio = finite_or_zero(sample.scroll_top) / scrollable;
    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Page with the largest vertical overlap with `[view_top, view_bottom]`.
///
/// Equal overlaps keep the first page encountered, which for layout-ordered
/// boxes is the lowest page number. Returns `None` when nothing overlaps.
pub fn most_visible_page(
    view_top: f32,
    view_bottom: f32,
    pages: &[PageRect],
) -> Option<PageCandidate> {
    let mut best: Option<PageCandidate> = None;
    for rect in pages {
        let overlap = (rect.bottom.min(view_bottom) - rect.top.max(view_top)).max(0.0);
        if overlap <= 0.0 {
            continue;
        }
        match best {
            Some(current) if current.overlap_px >= overlap => {}
            _ => {
                best = Some(PageCandidate {
                    page: rect.page,
                    overlap_px: overlap,
                })
            }
        }
    }
    best
}

#[derive(Debug, Clone, Default)]
pub struct ScrollTracker {
    progress_percent: u8,
    candidate: Option<u32>,
    pending: Option<ScrollSample>,
    debounce: Timer,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn progress_percent(&self) -> u8 {
        self.progress_percent
    }

    pub fn candidate(&self) -> Option<u32> {
        self.candidate
    }

    pub fn has_pending(&self) -> bool {
        self.debounce.is_armed()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.debounce.deadline()
    }

    /// Record a scroll event. Progress updates at once; page detection waits
    /// for `debounce` of quiet time, replacing any evaluation already queued.
    pub fn on_scroll(&mut self, sample: ScrollSample, now: Instant, debounce: Duration) {
        self.progress_percent = scroll_progress_percent(&sample);
        self.pending = Some(sample);
        self.debounce.arm(now, debounce);
    }

    /// The latest sample once the quiet period has elapsed.
    pub fn take_settled(&mut self, now: Instant) -> Option<ScrollSample> {
        if self.debounce.fire_if_due(now) {
            self.pending.take()
        } else {
            None
        }
    }

    /// Recompute the most-visible candidate for a settled sample.
    pub fn evaluate(&mut self, sample: &ScrollSample, pages: &[PageRect]) -> Option<PageCandidate> {
        let candidate = most_visible_page(sample.view_top(), sample.view_bottom(), pages);
        trace!(?candidate, scroll_top = sample.scroll_top, "Evaluated scroll candidate");
        self.candidate = candidate.map(|c| c.page);
        candidate
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() { value } else { 0.0 }
}
