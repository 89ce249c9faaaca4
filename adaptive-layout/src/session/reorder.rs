//! Drag-and-drop reordering of column headers.

use crate::session::EventResult;
use crate::store::OrderArray;
use crate::table::ColumnId;

/// Horizontal extent of a header cell, in the same space as pointer x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderRect {
    pub left: f64,
    pub width: f64,
}

impl HeaderRect {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    pub fn midpoint(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

/// Which side of the target the dragged column lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropSide {
    Before,
    After,
}

impl DropSide {
    /// Right of the midpoint inserts after; the midpoint itself inserts before.
    pub fn from_pointer(x: f64, target: HeaderRect) -> Self {
        if x > target.midpoint() {
            DropSide::After
        } else {
            DropSide::Before
        }
    }
}

/// Move `from` next to `to` in `order`.
///
/// `from` is removed first, then reinserted before or after `to`. A target
/// missing from the order appends at the end.
pub fn move_column(order: &[ColumnId], from: &ColumnId, to: &ColumnId, side: DropSide) -> OrderArray {
    let mut next: OrderArray = order.iter().filter(|id| *id != from).cloned().collect();
    let index = match next.iter().position(|id| id == to) {
        Some(i) if side == DropSide::After => i + 1,
        Some(i) => i,
        None => next.len(),
    };
    next.insert(index, from.clone());
    next
}

/// The column currently being dragged, if any.
#[derive(Debug, Default)]
pub struct ReorderSession {
    dragging: Option<ColumnId>,
}

impl ReorderSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start dragging `column`, superseding any stale drag.
    pub fn begin(&mut self, column: ColumnId) -> EventResult {
        if let Some(stale) = self.dragging.replace(column) {
            log::debug!("reorder: superseding stale drag of {}", stale);
        }
        EventResult::StartDrag
    }

    pub fn dragging(&self) -> Option<&ColumnId> {
        self.dragging.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.dragging.is_some()
    }

    /// A drag hovers over `candidate`. Consumed means it is a valid target.
    pub fn drag_over(&self, candidate: &ColumnId) -> EventResult {
        match &self.dragging {
            Some(_) => {
                log::trace!("reorder: over {}", candidate);
                EventResult::Consumed
            }
            None => EventResult::Ignored,
        }
    }

    /// Drop onto `target`, returning the new order if anything moved.
    ///
    /// The dragged id comes from the session slot, or from the drop payload
    /// when the slot was lost (e.g. the header was rebuilt mid-drag). The
    /// session is cleared either way.
    pub fn drop_on(
        &mut self,
        current: &[ColumnId],
        target: &ColumnId,
        pointer_x: f64,
        target_rect: HeaderRect,
        payload: Option<&str>,
    ) -> Option<OrderArray> {
        let from = self
            .dragging
            .take()
            .or_else(|| payload.filter(|p| !p.is_empty()).map(ColumnId::from))?;

        if &from == target || !current.contains(&from) {
            return None;
        }

        let side = DropSide::from_pointer(pointer_x, target_rect);
        log::debug!("reorder: {} {:?} {}", from, side, target);
        Some(move_column(current, &from, target, side))
    }

    /// Drag ended without a drop (or after one).
    pub fn end(&mut self) {
        self.dragging = None;
    }
}
