//! Host surface capabilities: frame scheduling and pointer capture.
//!
//! Sessions never talk to a UI toolkit directly. They hold a [`Surface`] and
//! wrap every acquired capability in a guard ([`FrameSlot`], [`PointerGrab`])
//! whose `Drop` releases it, so ending a session, cancelling it, or dropping
//! its owner mid-drag all leave nothing captured or scheduled.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::{Arc, Mutex};

use crate::error::PlatformError;

/// Handle of a scheduled frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(pub u64);

/// Identifier of an active pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u32);

/// Interactive surface provided by the host toolkit.
///
/// When a requested frame fires, the host hands its [`FrameHandle`] back to
/// the owning engine (`on_frame`).
pub trait Surface: Send + Sync {
    /// Schedule one frame callback.
    fn request_frame(&self) -> Result<FrameHandle, PlatformError>;

    /// Cancel a scheduled frame. Unknown handles are ignored.
    fn cancel_frame(&self, handle: FrameHandle);

    /// Route all events of `pointer` to this surface.
    fn capture_pointer(&self, pointer: PointerId) -> Result<(), PlatformError>;

    /// Undo [`Surface::capture_pointer`].
    fn release_pointer(&self, pointer: PointerId);
}

/// Shared handle to a host surface.
pub type SharedSurface = Arc<dyn Surface>;

impl fmt::Debug for dyn Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Surface")
    }
}

// =============================================================================
// Guards
// =============================================================================

/// Single pending frame carrying the latest value.
///
/// Scheduling while a frame is already pending replaces the carried value
/// instead of requesting a second frame, so at most one update is applied
/// per frame no matter how many pointer events arrive.
pub struct FrameSlot<T> {
    surface: SharedSurface,
    pending: Option<(FrameHandle, T)>,
}

impl<T> FrameSlot<T> {
    pub fn new(surface: SharedSurface) -> Self {
        Self {
            surface,
            pending: None,
        }
    }

    /// Carry `value` into the next frame.
    ///
    /// Returns false when the surface cannot schedule frames; the value is
    /// then dropped.
    pub fn schedule(&mut self, value: T) -> bool {
        if let Some((_, carried)) = self.pending.as_mut() {
            *carried = value;
            return true;
        }
        match self.surface.request_frame() {
            Ok(handle) => {
                self.pending = Some((handle, value));
                true
            }
            Err(e) => {
                log::debug!("frame request failed, dropping update: {}", e);
                false
            }
        }
    }

    /// Take the carried value if `handle` is the pending frame.
    pub fn take(&mut self, handle: FrameHandle) -> Option<T> {
        match self.pending {
            Some((pending, _)) if pending == handle => self.pending.take().map(|(_, v)| v),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Cancel the pending frame, discarding its value.
    pub fn cancel(&mut self) {
        if let Some((handle, _)) = self.pending.take() {
            self.surface.cancel_frame(handle);
        }
    }
}

impl<T> Drop for FrameSlot<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl<T: fmt::Debug> fmt::Debug for FrameSlot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameSlot")
            .field("pending", &self.pending)
            .finish()
    }
}

/// Pointer capture held for the lifetime of the guard.
pub struct PointerGrab {
    surface: SharedSurface,
    pointer: PointerId,
    captured: bool,
}

impl PointerGrab {
    /// Capture `pointer`. A surface without capture support still yields a
    /// guard; events then only arrive while the pointer stays over the handle.
    pub fn acquire(surface: SharedSurface, pointer: PointerId) -> Self {
        let captured = match surface.capture_pointer(pointer) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("pointer {:?} not captured: {}", pointer, e);
                false
            }
        };
        Self {
            surface,
            pointer,
            captured,
        }
    }

    pub fn pointer(&self) -> PointerId {
        self.pointer
    }

    pub fn is_captured(&self) -> bool {
        self.captured
    }
}

impl Drop for PointerGrab {
    fn drop(&mut self) {
        if self.captured {
            self.surface.release_pointer(self.pointer);
        }
    }
}

impl fmt::Debug for PointerGrab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerGrab")
            .field("pointer", &self.pointer)
            .field("captured", &self.captured)
            .finish()
    }
}

// =============================================================================
// Surfaces
// =============================================================================

#[derive(Debug, Default)]
struct ManualState {
    next_frame: u64,
    pending: BTreeSet<FrameHandle>,
    captured: BTreeSet<PointerId>,
    frames_requested: usize,
}

/// Surface driven explicitly by its host.
///
/// Frames are only "fired" when the host calls [`ManualSurface::take_frames`]
/// and forwards the handles. Suitable for headless hosts, terminal UIs with
/// their own tick, and tests.
#[derive(Debug, Default)]
pub struct ManualSurface {
    state: Mutex<ManualState>,
}

impl ManualSurface {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn state(&self) -> std::sync::MutexGuard<'_, ManualState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Frames requested and not yet fired or cancelled.
    pub fn pending_frames(&self) -> Vec<FrameHandle> {
        self.state().pending.iter().copied().collect()
    }

    /// Fire all pending frames, returning their handles.
    pub fn take_frames(&self) -> Vec<FrameHandle> {
        std::mem::take(&mut self.state().pending).into_iter().collect()
    }

    /// Total number of frames ever requested.
    pub fn frames_requested(&self) -> usize {
        self.state().frames_requested
    }

    pub fn is_captured(&self, pointer: PointerId) -> bool {
        self.state().captured.contains(&pointer)
    }

    /// Number of pointers currently captured.
    pub fn captured_count(&self) -> usize {
        self.state().captured.len()
    }
}

impl Surface for ManualSurface {
    fn request_frame(&self) -> Result<FrameHandle, PlatformError> {
        let mut state = self.state();
        state.next_frame += 1;
        state.frames_requested += 1;
        let handle = FrameHandle(state.next_frame);
        state.pending.insert(handle);
        Ok(handle)
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        self.state().pending.remove(&handle);
    }

    fn capture_pointer(&self, pointer: PointerId) -> Result<(), PlatformError> {
        self.state().captured.insert(pointer);
        Ok(())
    }

    fn release_pointer(&self, pointer: PointerId) {
        self.state().captured.remove(&pointer);
    }
}

/// Surface without frame scheduling or pointer capture.
///
/// Resize gestures on it degrade to no-ops; layouts stay at their resolved
/// sizes.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedSurface;

impl Surface for UnsupportedSurface {
    fn request_frame(&self) -> Result<FrameHandle, PlatformError> {
        Err(PlatformError::FramesUnsupported)
    }

    fn cancel_frame(&self, _handle: FrameHandle) {}

    fn capture_pointer(&self, _pointer: PointerId) -> Result<(), PlatformError> {
        Err(PlatformError::PointerCaptureUnsupported)
    }

    fn release_pointer(&self, _pointer: PointerId) {}
}
