//! Page-bitmap rendering collaborator interface.
//!
//! Rendering is an independent pipeline, fully decoupled from sentence
//! extraction: a page that fails to render is logged and skipped, and never
//! aborts extraction (nor the other way around).

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::Result;

/// A rendered page bitmap in row-major RGBA order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data, `width * height * 4` bytes.
    pub data: Vec<u8>,
}

/// Renderer of document pages to bitmaps.
pub trait PageRenderer {
    /// Render one page scaled to the given target width in pixels.
    fn render_page(&self, index: usize, target_width: u32) -> Result<Bitmap>;
}

/// Explicit in-flight render counter.
///
/// Owned by the rendering subsystem and mutated only through the RAII
/// [`RenderGuard`]; observers query [`RenderTracker::is_rendering`] instead
/// of reading ambient global state.
#[derive(Debug, Default)]
pub struct RenderTracker {
    in_flight: AtomicUsize,
}

impl RenderTracker {
    /// Create a tracker with zero in-flight renders.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of renders currently in flight.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Whether any render is currently in flight.
    pub fn is_rendering(&self) -> bool {
        self.in_flight() > 0
    }

    /// Mark one render as started; the count drops when the guard drops.
    pub fn guard(&self) -> RenderGuard<'_> {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        RenderGuard { tracker: self }
    }
}

/// RAII handle for one in-flight render.
#[derive(Debug)]
pub struct RenderGuard<'a> {
    tracker: &'a RenderTracker,
}

impl Drop for RenderGuard<'_> {
    fn drop(&mut self) {
        self.tracker.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Render every page, isolating failures.
///
/// Each failed page yields `None` and a warning; successful pages are
/// returned in page order.
pub fn render_pages<R>(
    renderer: &R,
    page_count: usize,
    target_width: u32,
    tracker: &RenderTracker,
) -> Vec<Option<Bitmap>>
where
    R: PageRenderer + ?Sized,
{
    (0..page_count)
        .map(|index| {
            let _guard = tracker.guard();
            match renderer.render_page(index, target_width) {
                Ok(bitmap) => Some(bitmap),
                Err(err) => {
                    log::warn!("Failed to render page {}: {}", index, err);
                    None
                }
            }
        })
        .collect()
}
