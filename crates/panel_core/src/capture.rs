//! Window-scoped pointer capture, modeled as a scoped resource.
//!
//! While a drag or resize is in flight the panel must keep receiving
//! pointer samples even when the cursor leaves its rectangle, the same
//! way a browser widget attaches move/up listeners at the document
//! level. The registry counts active captures for the whole window; a
//! [`CaptureGuard`] is the attachment, and dropping it is the detach.
//! Release therefore happens on every exit path: pointer-up, forced
//! cancellation, or the owning controller being dropped.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Default)]
pub struct PointerCaptureRegistry {
    active: Cell<usize>,
}

impl PointerCaptureRegistry {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Number of captures currently held anywhere in the window. Hosts
    /// use a nonzero count to switch to a fast repaint cadence.
    pub fn active_count(&self) -> usize {
        self.active.get()
    }

    pub fn acquire(self: &Rc<Self>) -> CaptureGuard {
        let count = self.active.get() + 1;
        self.active.set(count);
        tracing::trace!(active = count, "pointer capture acquired");
        CaptureGuard {
            registry: Rc::clone(self),
        }
    }
}

/// Live pointer capture. Dropping it releases the registration.
#[derive(Debug)]
pub struct CaptureGuard {
    registry: Rc<PointerCaptureRegistry>,
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        let count = self.registry.active.get().saturating_sub(1);
        self.registry.active.set(count);
        tracing::trace!(active = count, "pointer capture released");
    }
}

#[cfg(test)]
#[path = "tests/capture_tests.rs"]
mod tests;
