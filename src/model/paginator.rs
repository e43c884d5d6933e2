// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Infinite scroll pagination.
//!
//! The paginator owns the display count, the number of filtered movies that
//! are actually shown. The count starts at one page and grows by one page
//! each time a scroll signal arrives with the viewport near the bottom of the
//! rendered content. It never shrinks and is never clamped to the number of
//! movies available.
//!
//! Only one increment is allowed per rendered frame: once the count has
//! grown, scroll signals are ignored until [`Paginator::frame_rendered`]
//! reports that the larger slice has been drawn and the content height has
//! had a chance to catch up.

pub(crate) const DEFAULT_PAGE_SIZE: usize = 9;
pub(crate) const DEFAULT_SCROLL_THRESHOLD: u32 = 200;

/// A snapshot of the scrollable viewport, all values in the same units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ScrollMetrics {
    pub(crate) viewport_height: u32,
    pub(crate) scroll_offset: u32,
    pub(crate) content_height: u32,
}

impl ScrollMetrics {
    /// Is the bottom of the viewport within `threshold` of the end of the
    /// content?
    pub(crate) fn near_bottom(&self, threshold: u32) -> bool {
        let bottom = self.scroll_offset.saturating_add(self.viewport_height);
        bottom >= self.content_height.saturating_sub(threshold)
    }
}

#[derive(Debug)]
pub(crate) struct Paginator {
    page_size: usize,
    threshold: u32,
    display_count: usize,
    pending: bool,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, DEFAULT_SCROLL_THRESHOLD)
    }
}

impl Paginator {
    pub(crate) fn new(page_size: usize, threshold: u32) -> Self {
        let page_size = page_size.max(1);
        Self {
            page_size,
            threshold,
            display_count: page_size,
            pending: false,
        }
    }

    pub(crate) fn display_count(&self) -> usize {
        self.display_count
    }

    /// Grow the display count by one page, unconditionally.
    pub(crate) fn load_more(&mut self) {
        self.display_count = self.display_count.saturating_add(self.page_size);
        self.pending = true;
    }

    /// Handle a scroll signal, returning `true` if the display count grew.
    ///
    /// Nothing happens while `blocked`, while a previous increment has not
    /// yet been rendered, or while the viewport is further than the
    /// threshold from the bottom of the content.
    pub(crate) fn on_scroll(&mut self, metrics: ScrollMetrics, blocked: bool) -> bool {
        if blocked || self.pending || !metrics.near_bottom(self.threshold) {
            return false;
        }

        self.load_more();
        true
    }

    /// Re-arm the scroll trigger once a frame has been drawn.
    pub(crate) fn frame_rendered(&mut self) {
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(viewport: u32, offset: u32, content: u32) -> ScrollMetrics {
        ScrollMetrics {
            viewport_height: viewport,
            scroll_offset: offset,
            content_height: content,
        }
    }

    #[test]
    fn starts_at_one_page() {
        assert_eq!(Paginator::default().display_count(), 9);
    }

    #[test]
    fn load_more_adds_a_page_each_time() {
        let mut paginator = Paginator::default();
        for k in 1..=5 {
            paginator.load_more();
            assert_eq!(paginator.display_count(), 9 + 9 * k);
        }
    }

    #[test]
    fn near_bottom_uses_threshold() {
        // 600 + 200 = 800 >= 1000 - 200
        assert!(metrics(600, 200, 1000).near_bottom(200));
        // 600 + 199 = 799 < 800
        assert!(!metrics(600, 199, 1000).near_bottom(200));
        // Content shorter than the threshold is always near the bottom
        assert!(metrics(10, 0, 150).near_bottom(200));
    }

    #[test]
    fn scroll_near_bottom_increments() {
        let mut paginator = Paginator::default();

        assert!(paginator.on_scroll(metrics(600, 400, 1000), false));
        assert_eq!(paginator.display_count(), 18);
    }

    #[test]
    fn scroll_far_from_bottom_does_nothing() {
        let mut paginator = Paginator::default();

        assert!(!paginator.on_scroll(metrics(600, 0, 5000), false));
        assert_eq!(paginator.display_count(), 9);
    }

    #[test]
    fn scroll_while_blocked_does_nothing() {
        let mut paginator = Paginator::default();

        assert!(!paginator.on_scroll(metrics(600, 400, 1000), true));
        assert_eq!(paginator.display_count(), 9);
    }

    #[test]
    fn one_increment_per_frame() {
        let mut paginator = Paginator::default();
        let at_bottom = metrics(600, 400, 1000);

        assert!(paginator.on_scroll(at_bottom, false));
        assert!(!paginator.on_scroll(at_bottom, false));
        assert!(!paginator.on_scroll(at_bottom, false));
        assert_eq!(paginator.display_count(), 18);

        paginator.frame_rendered();
        assert!(paginator.on_scroll(at_bottom, false));
        assert_eq!(paginator.display_count(), 27);
    }

    #[test]
    fn zero_page_size_is_promoted() {
        let mut paginator = Paginator::new(0, 200);
        assert_eq!(paginator.display_count(), 1);

        paginator.load_more();
        assert_eq!(paginator.display_count(), 2);
    }
}
