//! Scroll bookkeeping for a paged carousel viewport.

use serde::{Deserialize, Serialize};

use crate::pointer::Orientation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Carousel navigation request.
pub enum CarouselStep {
    /// Scroll back by one viewport.
    Prev,
    /// Scroll forward by one viewport.
    Next,
}

impl CarouselStep {
    /// Maps a keyboard `key` value for the given axis.
    pub fn from_key(key: &str, orientation: Orientation) -> Option<Self> {
        match (orientation, key) {
            (Orientation::Horizontal, "ArrowLeft") | (Orientation::Vertical, "ArrowUp") => {
                Some(Self::Prev)
            }
            (Orientation::Horizontal, "ArrowRight") | (Orientation::Vertical, "ArrowDown") => {
                Some(Self::Next)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
/// Scroll offset, visible extent, and content extent along the carousel axis.
pub struct CarouselMetrics {
    /// Current scroll offset.
    pub offset: f64,
    /// Visible extent of the viewport.
    pub viewport: f64,
    /// Total extent of the scrolled content.
    pub content: f64,
}

impl CarouselMetrics {
    /// Largest reachable offset.
    pub fn max_offset(&self) -> f64 {
        (self.content - self.viewport).max(0.0)
    }

    /// Whether anything lies before the viewport.
    pub fn can_scroll_prev(&self) -> bool {
        self.offset > 0.0
    }

    /// Whether anything lies after the viewport.
    pub fn can_scroll_next(&self) -> bool {
        self.offset + self.viewport < self.content
    }

    /// Offset after one step, clamped to the scrollable range.
    pub fn target(&self, step: CarouselStep) -> f64 {
        let delta = match step {
            CarouselStep::Prev => -self.viewport,
            CarouselStep::Next => self.viewport,
        };
        (self.offset + delta).clamp(0.0, self.max_offset())
    }

    /// Applies one step and returns the new offset.
    pub fn scroll(&mut self, step: CarouselStep) -> f64 {
        self.offset = self.target(step);
        self.offset
    }

    /// Scrolls forward one viewport.
    pub fn scroll_next(&mut self) -> f64 {
        self.scroll(CarouselStep::Next)
    }

    /// Scrolls back one viewport.
    pub fn scroll_prev(&mut self) -> f64 {
        self.scroll(CarouselStep::Prev)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn scroll_steps_by_viewport_and_clamps() {
        let mut metrics = CarouselMetrics {
            offset: 0.0,
            viewport: 300.0,
            content: 800.0,
        };
        assert!(!metrics.can_scroll_prev());
        assert!(metrics.can_scroll_next());
        assert_eq!(metrics.scroll_next(), 300.0);
        assert_eq!(metrics.scroll_next(), 500.0);
        assert!(!metrics.can_scroll_next());
        assert_eq!(metrics.scroll_next(), 500.0);
        assert_eq!(metrics.scroll_prev(), 200.0);
        assert_eq!(metrics.scroll_prev(), 0.0);
    }

    #[test]
    fn content_smaller_than_viewport_never_scrolls() {
        let mut metrics = CarouselMetrics {
            offset: 0.0,
            viewport: 300.0,
            content: 120.0,
        };
        assert!(!metrics.can_scroll_next());
        assert_eq!(metrics.scroll_next(), 0.0);
    }

    #[test]
    fn arrow_keys_follow_orientation() {
        assert_eq!(
            CarouselStep::from_key("ArrowLeft", Orientation::Horizontal),
            Some(CarouselStep::Prev)
        );
        assert_eq!(
            CarouselStep::from_key("ArrowDown", Orientation::Vertical),
            Some(CarouselStep::Next)
        );
        assert_eq!(CarouselStep::from_key("ArrowDown", Orientation::Horizontal), None);
    }
}
