//! Geometry of the vertically stacked page column.
//!
//! The host renders pages with the same numbers, so the boxes computed here
//! are the bounding boxes the scroll tracker compares against the viewport.

use serde::Deserialize;

/// Vertical extent of one rendered page in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRect {
    /// 1-based page number.
    pub page: u32,
    pub top: f32,
    pub bottom: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PageLayout {
    /// Page height divided by page width.
    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: f32,
    #[serde(default = "default_gap_px")]
    pub gap_px: f32,
    #[serde(default = "default_padding_px")]
    pub padding_px: f32,
}

impl Default for PageLayout {
    fn default() -> Self {
        PageLayout {
            aspect_ratio: default_aspect_ratio(),
            gap_px: default_gap_px(),
            padding_px: default_padding_px(),
        }
    }
}

impl PageLayout {
    pub fn sanitized(mut self) -> Self {
        if !self.aspect_ratio.is_finite() || self.aspect_ratio <= 0.0 {
            self.aspect_ratio = default_aspect_ratio();
        }
        if !self.gap_px.is_finite() || self.gap_px < 0.0 {
            self.gap_px = default_gap_px();
        }
        if !self.padding_px.is_finite() || self.padding_px < 0.0 {
            self.padding_px = default_padding_px();
        }
        self
    }

    pub fn page_height(&self, page_width: f32) -> f32 {
        (page_width * self.aspect_ratio).max(1.0)
    }

    /// Top edge of a 1-based page. Page 0 is treated as page 1.
    pub fn page_top(&self, page: u32, page_width: f32) -> f32 {
        let index = page.saturating_sub(1) as f32;
        self.padding_px + index * (self.page_height(page_width) + self.gap_px)
    }

    pub fn page_rect(&self, page: u32, page_width: f32) -> PageRect {
        let top = self.page_top(page, page_width);
        PageRect {
            page: page.max(1),
            top,
            bottom: top + self.page_height(page_width),
        }
    }

    /// Boxes for pages `1..=page_count`, in page order.
    pub fn page_rects(&self, page_count: u32, page_width: f32) -> Vec<PageRect> {
        (1..=page_count)
            .map(|page| self.page_rect(page, page_width))
            .collect()
    }

    pub fn content_height(&self, page_count: u32, page_width: f32) -> f32 {
        if page_count == 0 {
            return self.padding_px * 2.0;
        }
        let pages = page_count as f32;
        self.padding_px * 2.0
            + pages * self.page_height(page_width)
            + (pages - 1.0) * self.gap_px
    }
}

/// Base page width for a viewport width, before zoom is applied.
pub fn width_band(viewport_width: f32) -> f32 {
    if !viewport_width.is_finite() || viewport_width <= 0.0 {
        return 560.0;
    }
    if viewport_width < 640.0 {
        (viewport_width - 32.0).max(240.0)
    } else if viewport_width < 1024.0 {
        560.0
    } else if viewport_width < 1440.0 {
        720.0
    } else {
        860.0
    }
}

fn default_aspect_ratio() -> f32 {
    1.5
}

fn default_gap_px() -> f32 {
    16.0
}

fn default_padding_px() -> f32 {
    16.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_stack_with_gap() {
        let layout = PageLayout {
            aspect_ratio: 1.5,
            gap_px: 10.0,
            padding_px: 20.0,
        };
        let rects = layout.page_rects(3, 400.0);
        assert_eq!(rects.len(), 3);
        assert_eq!(rects[0].top, 20.0);
        assert_eq!(rects[0].bottom, 620.0);
        assert_eq!(rects[1].top, 630.0);
        assert_eq!(rects[2].page, 3);
        assert_eq!(layout.content_height(3, 400.0), 20.0 * 2.0 + 3.0 * 600.0 + 2.0 * 10.0);
    }

    #[test]
    fn width_bands_are_discrete() {
        assert_eq!(width_band(400.0), 368.0);
        assert_eq!(width_band(200.0), 240.0);
        assert_eq!(width_band(800.0), 560.0);
        assert_eq!(width_band(1200.0), 720.0);
        assert_eq!(width_band(2560.0), 860.0);
        assert_eq!(width_band(f32::NAN), 560.0);
    }

    #[test]
    fn sanitize_restores_bad_aspect_ratio() {
        let layout = PageLayout {
            aspect_ratio: 0.0,
            ..PageLayout::default()
        }
        .sanitized();
        assert_eq!(layout.aspect_ratio, 1.5);
    }
}
