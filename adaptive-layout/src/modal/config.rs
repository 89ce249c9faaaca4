//! Modal options supplied by the host.

use serde::{Deserialize, Serialize};

use crate::units::{Length, deserialize_lenient};

pub const DEFAULT_MODAL_MIN_WIDTH: f64 = 520.0;
pub const DEFAULT_MODAL_MIN_HEIGHT: f64 = 320.0;

/// Per-edge padding in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edges {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Edges {
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// CSS shorthand, `"16px 24px 16px 24px"`.
    pub fn to_css(&self) -> String {
        format!(
            "{}px {}px {}px {}px",
            self.top, self.right, self.bottom, self.left
        )
    }
}

/// Padding of the modal body, either one value or one per edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentPadding {
    Uniform(f64),
    Edges(Edges),
}

impl Default for ContentPadding {
    fn default() -> Self {
        ContentPadding::Edges(Edges::new(16.0, 24.0, 16.0, 24.0))
    }
}

impl ContentPadding {
    pub fn edges(&self) -> Edges {
        match *self {
            ContentPadding::Uniform(v) => Edges::uniform(v),
            ContentPadding::Edges(edges) => edges,
        }
    }
}

/// Sizing options of one modal dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModalConfig {
    /// Requested width. Unrecognised values fall back to a
    /// viewport-proportional default.
    #[serde(deserialize_with = "deserialize_lenient")]
    pub width: Option<Length>,
    pub min_width: f64,
    pub min_height: f64,
    /// Initial height in pixels.
    pub initial_height: Option<f64>,
    pub centered: bool,
    pub content_padding: ContentPadding,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            width: None,
            min_width: DEFAULT_MODAL_MIN_WIDTH,
            min_height: DEFAULT_MODAL_MIN_HEIGHT,
            initial_height: None,
            centered: true,
            content_padding: ContentPadding::default(),
        }
    }
}

impl ModalConfig {
    pub fn with_width(mut self, width: impl Into<Length>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn with_min_size(mut self, min_width: f64, min_height: f64) -> Self {
        self.min_width = min_width;
        self.min_height = min_height;
        self
    }

    pub fn with_initial_height(mut self, height: f64) -> Self {
        self.initial_height = Some(height);
        self
    }
}
