//! Guide surface that only records its visibility and logs it.
//!
//! Used by the CLI and by tests; a UI shell would provide its own surface.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::ports::GuideSurface;

/// Headless [`GuideSurface`].
#[derive(Debug, Default)]
pub struct TracingSurface {
    open: AtomicBool,
    opened: AtomicUsize,
}

impl TracingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times the surface has been opened.
    pub fn open_count(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }
}

impl GuideSurface for TracingSurface {
    fn open(&self) {
        if !self.open.swap(true, Ordering::SeqCst) {
            self.opened.fetch_add(1, Ordering::SeqCst);
            tracing::debug!("guide surface opened");
        }
    }

    fn close(&self) {
        if self.open.swap(false, Ordering::SeqCst) {
            tracing::debug!("guide surface closed");
        }
    }

    fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }
}
