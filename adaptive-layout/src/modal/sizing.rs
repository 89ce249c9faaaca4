//! Viewport-relative modal size resolution.
//!
//! The maximum size is a fraction of the live viewport, leaving a margin
//! around the dialog. Minimums never exceed that maximum, so a tiny viewport
//! shrinks the dialog instead of overflowing it.

use super::config::ModalConfig;
use crate::units::{Length, Viewport, clamp};

const VIEWPORT_MAX_WIDTH_RATIO: f64 = 0.98;
const VIEWPORT_MAX_HEIGHT_RATIO: f64 = 0.95;
const DEFAULT_HEIGHT: f64 = 720.0;
const DEFAULT_HEIGHT_RATIO: f64 = 0.8;

/// Modal size in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModalSize {
    pub width: f64,
    pub height: f64,
}

impl ModalSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Allowed modal size range for one viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeBounds {
    pub min_width: f64,
    pub max_width: f64,
    pub min_height: f64,
    pub max_height: f64,
}

impl SizeBounds {
    pub fn for_viewport(config: &ModalConfig, viewport: Viewport) -> Self {
        let max = viewport_max(viewport);
        Self {
            min_width: config.min_width.min(max.width),
            max_width: max.width,
            min_height: config.min_height.min(max.height),
            max_height: max.height,
        }
    }

    pub fn clamp_width(&self, width: f64) -> f64 {
        clamp(width, self.min_width, self.max_width)
    }

    pub fn clamp_height(&self, height: f64) -> f64 {
        clamp(height, self.min_height, self.max_height)
    }

    pub fn clamp(&self, size: ModalSize) -> ModalSize {
        ModalSize::new(self.clamp_width(size.width), self.clamp_height(size.height))
    }
}

/// Resolve a requested width to pixels against the viewport.
pub fn resolve_width_px(width: &Length, viewport: Viewport) -> f64 {
    width.to_px(viewport.width)
}

/// Largest size a modal may take in `viewport`.
pub fn viewport_max(viewport: Viewport) -> ModalSize {
    ModalSize::new(
        (viewport.width * VIEWPORT_MAX_WIDTH_RATIO).round(),
        (viewport.height * VIEWPORT_MAX_HEIGHT_RATIO).round(),
    )
}

/// Share of the viewport width taken by a modal without a requested width.
pub fn default_width_ratio(viewport_width: f64) -> f64 {
    if viewport_width < 768.0 {
        0.96
    } else if viewport_width < 1024.0 {
        0.7
    } else {
        0.6
    }
}

/// Size of a modal as it opens.
pub fn initial_size(config: &ModalConfig, viewport: Viewport) -> ModalSize {
    let width = match config.width {
        Some(width) => resolve_width_px(&width, viewport),
        None => (viewport.width * default_width_ratio(viewport.width)).round(),
    };
    let height = config
        .initial_height
        .unwrap_or_else(|| DEFAULT_HEIGHT.min(viewport.height * DEFAULT_HEIGHT_RATIO))
        .round();

    SizeBounds::for_viewport(config, viewport).clamp(ModalSize::new(width, height))
}
