use crate::config::{OverlapFactor, ScaleMode};
use crate::engine::ParallaxEngine;
use crate::error::Result;
use crate::geometry::Rect;
use crate::listener::{PageChangeListener, ScrollState};

/// Drawing surface supplied by the host toolkit.
pub trait BackgroundCanvas {
    /// Draw the `source` region of the background image scaled into the
    /// `destination` region of the viewport.
    fn draw_image_region(&mut self, source: Rect, destination: Rect);
}

/// Host-side glue between a horizontal pager widget and the parallax
/// engine.
///
/// The host forwards its size, page-count and scroll callbacks here and
/// calls [`draw`](ParallaxPager::draw) from its paint routine. One extra
/// [`PageChangeListener`] can be registered to keep observing the raw
/// pager events; it is called after the geometry update.
#[derive(Default)]
pub struct ParallaxPager {
    engine: ParallaxEngine,
    listener: Option<Box<dyn PageChangeListener>>,
}

impl ParallaxPager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn engine(&self) -> &ParallaxEngine {
        &self.engine
    }

    /// Assign the background image. Geometry is refreshed on the next
    /// size change or explicit invalidation.
    pub fn set_background(&mut self, width: u32, height: u32) -> Result<&mut Self> {
        self.engine.set_background_image(width, height)?;
        Ok(self)
    }

    pub fn set_page_count(&mut self, page_count: usize) -> Result<&mut Self> {
        self.engine.set_page_count(page_count)?;
        Ok(self)
    }

    pub fn set_scale_mode(&mut self, mode: ScaleMode) -> &mut Self {
        self.engine.set_scale_mode(mode);
        self
    }

    pub fn set_overlap_percentage(&mut self, percentage: f32) -> Result<&mut Self> {
        self.engine.set_overlap_factor(percentage)?;
        Ok(self)
    }

    pub fn set_overlap(&mut self, overlap: OverlapFactor) -> &mut Self {
        self.engine.set_overlap(overlap);
        self
    }

    /// Layout callback. Recomputes immediately once both a background and
    /// a page count are present.
    pub fn on_size_changed(&mut self, width: u32, height: u32) -> Result<()> {
        self.engine.set_viewport_size(width, height)?;
        if self.engine.image().is_some() && self.engine.page_count().is_some() {
            self.engine.recompute_chunk_parameters()?;
        }
        Ok(())
    }

    /// Recompute after runtime changes such as a new scale mode or overlap.
    pub fn invalidate_parallax_parameters(&mut self) -> Result<&mut Self> {
        self.engine.recompute_chunk_parameters()?;
        Ok(self)
    }

    /// Scroll callback. Returns `true` when the host should redraw.
    pub fn on_page_scrolled(&mut self, position: usize, offset: f32, offset_pixels: i32) -> bool {
        let redraw = self.engine.image().is_some();
        if redraw {
            self.engine.on_scroll(position, offset);
        }
        if let Some(listener) = self.listener.as_mut() {
            listener.on_page_scrolled(position, offset, offset_pixels);
        }
        redraw
    }

    pub fn on_page_selected(&mut self, position: usize) {
        if let Some(listener) = self.listener.as_mut() {
            listener.on_page_selected(position);
        }
    }

    pub fn on_page_scroll_state_changed(&mut self, state: ScrollState) {
        if let Some(listener) = self.listener.as_mut() {
            listener.on_page_scroll_state_changed(state);
        }
    }

    /// Register the external listener, replacing any previous one.
    pub fn set_page_change_listener(&mut self, listener: Box<dyn PageChangeListener>) {
        self.listener = Some(listener);
    }

    pub fn clear_page_change_listener(&mut self) -> Option<Box<dyn PageChangeListener>> {
        self.listener.take()
    }

    /// Paint callback. Draws nothing until a background is set.
    pub fn draw(&self, canvas: &mut impl BackgroundCanvas) {
        if self.engine.image().is_some() {
            canvas.draw_image_region(self.engine.source(), self.engine.destination());
        }
    }
}
