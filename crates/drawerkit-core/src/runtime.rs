//! Single-threaded frame-callback runtime.
//!
//! Hosts call [`RuntimeHandle::drain_frame_callbacks`] once per display frame
//! with the frame timestamp; animations register one-shot callbacks to be
//! woken on the next drain. Tests drive the same entry point with synthetic
//! timestamps.

use std::cell::RefCell;
use std::rc::Rc;

pub type FrameCallbackId = u64;

type FrameCallback = Box<dyn FnMut(u64)>;

struct RuntimeInner {
    next_id: FrameCallbackId,
    callbacks: Vec<(FrameCallbackId, FrameCallback)>,
}

/// Cheaply clonable handle to the runtime's frame-callback registry.
///
/// Not `Send`: the registry lives on the UI thread and callbacks are invoked
/// synchronously from `drain_frame_callbacks`.
#[derive(Clone)]
pub struct RuntimeHandle {
    inner: Rc<RefCell<RuntimeInner>>,
}

impl RuntimeHandle {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(RuntimeInner {
                next_id: 0,
                callbacks: Vec::new(),
            })),
        }
    }

    pub fn frame_clock(&self) -> crate::FrameClock {
        crate::FrameClock::new(self.clone())
    }

    /// Register a callback for the next frame drain. Returns an id usable
    /// with [`Self::cancel_frame_callback`].
    pub fn register_frame_callback(
        &self,
        callback: impl FnMut(u64) + 'static,
    ) -> FrameCallbackId {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id = inner.next_id.wrapping_add(1);
        inner.callbacks.push((id, Box::new(callback)));
        id
    }

    pub fn cancel_frame_callback(&self, id: FrameCallbackId) {
        self.inner
            .borrow_mut()
            .callbacks
            .retain(|(callback_id, _)| *callback_id != id);
    }

    /// Whether any frame callbacks are pending. Hosts use this to decide if
    /// another frame needs scheduling.
    pub fn has_frame_callbacks(&self) -> bool {
        !self.inner.borrow().callbacks.is_empty()
    }

    /// Invoke all pending frame callbacks with `frame_time_nanos`.
    ///
    /// Callbacks registered while draining (e.g. an animation scheduling its
    /// next step) are deferred to the next drain.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        let pending = std::mem::take(&mut self.inner.borrow_mut().callbacks);
        if !pending.is_empty() {
            log::trace!(
                "draining {} frame callbacks at {frame_time_nanos}",
                pending.len()
            );
        }
        for (_, mut callback) in pending {
            callback(frame_time_nanos);
        }
    }
}

impl Default for RuntimeHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
