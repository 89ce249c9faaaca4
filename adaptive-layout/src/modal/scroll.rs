//! Scroll height for a table placed inside a modal body.

pub const DEFAULT_SCROLL_OFFSET: f64 = 56.0;
pub const DEFAULT_MIN_SCROLL_Y: f64 = 180.0;
pub const DEFAULT_SCROLL_Y: f64 = 320.0;

/// Tracks the body scroll height of a table that fills a modal.
///
/// The host reports the container height whenever it changes. Reports made
/// while the modal is closed are ignored and the last value is kept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableScrollY {
    offset: f64,
    min_y: f64,
    value: f64,
}

impl Default for TableScrollY {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_OFFSET, DEFAULT_MIN_SCROLL_Y, DEFAULT_SCROLL_Y)
    }
}

impl TableScrollY {
    /// `offset` is the space taken by the table header and pager.
    pub fn new(offset: f64, min_y: f64, default_y: f64) -> Self {
        Self {
            offset,
            min_y,
            value: default_y,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Container height observed; returns the scroll height to use.
    pub fn observe(&mut self, open: bool, container_height: f64) -> f64 {
        if open {
            let height = if container_height.is_finite() {
                container_height.floor()
            } else {
                0.0
            };
            self.value = self.min_y.max(height - self.offset);
        }
        self.value
    }
}
