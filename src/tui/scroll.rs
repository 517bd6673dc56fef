//! Near-bottom detection for infinite scrolling.
//!
//! Units are list rows. The result list reports its geometry after each render
//! and the event loop asks whether the visible window has reached the last
//! `threshold` rows of content.

/// Visible window of a scrollable list, in rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    /// Index of the first visible row.
    pub offset: usize,
    /// Number of rows the list can show.
    pub height: usize,
    /// Total number of rows.
    pub content_height: usize,
}

impl Viewport {
    /// True when `offset + height` passes `content_height - threshold`.
    /// A zero-height viewport (not laid out yet) never counts.
    pub fn is_near_bottom(&self, threshold: usize) -> bool {
        self.height > 0 && self.offset + self.height > self.content_height.saturating_sub(threshold)
    }
}
