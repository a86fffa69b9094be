use crate::paint::model::{STATUS_BAR_HEIGHT, TOOLBAR_HEIGHT};
use crate::paint::surface::{fit_transform, PaintSurface, Snapshot};

/// Preserves drawn content, proportionally, across surface dimension
/// changes. Container resize-observation and window resize events both
/// funnel into the same idempotent [`apply`](ResizeCoordinator::apply)
/// routine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResizeCoordinator {
    /// Most recent undegraded raster. Resizes read from it instead of the
    /// live buffer so repeated shrinks never compound quality loss; it is
    /// refreshed only from genuine content (completed gestures, clears,
    /// mount), never from a resize's own scaled output.
    cache: Option<Snapshot>,
}

impl ResizeCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface dimensions available inside a hosting container once the
    /// toolbar and status bar have taken their fixed insets.
    pub fn content_box(container_w: u32, container_h: u32) -> (u32, u32) {
        (
            container_w,
            container_h.saturating_sub(TOOLBAR_HEIGHT + STATUS_BAR_HEIGHT),
        )
    }

    pub fn apply(&mut self, surface: &mut PaintSurface, container_w: u32, container_h: u32) {
        let (width, height) = Self::content_box(container_w, container_h);
        self.apply_content(surface, width, height);
    }

    /// Resize the surface to exact content dimensions, re-rendering prior
    /// content shrink-to-fit and centered, with nearest-neighbor sampling.
    ///
    /// The source raster is the high-resolution cache when one exists;
    /// otherwise the live buffer is read back, which may already carry the
    /// loss of an earlier shrink. A failed read-back is logged and leaves
    /// the resized surface blank.
    pub fn apply_content(&mut self, surface: &mut PaintSurface, width: u32, height: u32) {
        let source = match &self.cache {
            Some(cached) => Ok(cached.clone()),
            None => surface.read_back(),
        };

        surface.resize(width, height);

        match source {
            Ok(src) => {
                let fit = fit_transform(src.width, src.height, width, height);
                surface.blit_scaled(&src, fit);
            }
            Err(err) => {
                tracing::warn!(error = %err, "resize source capture failed, canvas left blank");
            }
        }
    }

    /// Re-capture the cache from the live surface. Called after completed
    /// gestures and clears; a zero-area surface is not an error here, just
    /// nothing to cache yet.
    pub fn refresh_cache(&mut self, surface: &PaintSurface) {
        match surface.read_back() {
            Ok(snapshot) => self.cache = Some(snapshot),
            Err(err) => {
                tracing::debug!(error = %err, "skipping cache refresh, surface not readable");
            }
        }
    }

    pub fn cache(&self) -> Option<&Snapshot> {
        self.cache.as_ref()
    }
}
