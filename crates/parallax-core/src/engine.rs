use tracing::{debug, warn};

use crate::config::{OverlapFactor, ParallaxConfig, ScaleMode};
use crate::consts::CORRECTION_PERCENTAGE;
use crate::error::{ParallaxError, Result};
use crate::geometry::{ImageSize, Rect, ViewportSize};

/// Geometry of a parallax background behind a horizontal pager.
///
/// The engine only does arithmetic. A host feeds it the image, viewport
/// and page count, calls [`recompute_chunk_parameters`] after any of them
/// change, then calls [`on_scroll`] for every scroll position and draws
/// [`source`] of the image into [`destination`] of the viewport.
///
/// Setters do not recompute on their own so that several changes can be
/// batched into one recompute.
///
/// [`recompute_chunk_parameters`]: ParallaxEngine::recompute_chunk_parameters
/// [`on_scroll`]: ParallaxEngine::on_scroll
/// [`source`]: ParallaxEngine::source
/// [`destination`]: ParallaxEngine::destination
#[derive(Clone, Debug, Default)]
pub struct ParallaxEngine {
    scale_mode: ScaleMode,
    overlap: OverlapFactor,
    image: Option<ImageSize>,
    viewport: Option<ViewportSize>,
    page_count: Option<usize>,
    chunk_width: i32,
    projected_width: i32,
    source: Rect,
    destination: Rect,
    stale: bool,
}

impl ParallaxEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ready engine from a config, recomputing once.
    pub fn from_config(config: &ParallaxConfig) -> Result<Self> {
        let mut engine = Self::new();
        engine
            .set_scale_mode(config.scale_mode)
            .set_overlap(config.overlap)
            .set_background_image(config.image.width, config.image.height)?
            .set_viewport_size(config.viewport.width, config.viewport.height)?
            .set_page_count(config.page_count)?;
        engine.recompute_chunk_parameters()?;
        Ok(engine)
    }

    pub fn set_scale_mode(&mut self, mode: ScaleMode) -> &mut Self {
        self.scale_mode = mode;
        self.stale = true;
        self
    }

    /// Set the scale mode from a raw host code (`FIT_WIDTH` or
    /// `FIT_HEIGHT`). Unknown codes leave the current mode in place.
    pub fn set_scale_mode_code(&mut self, code: i32) -> Result<&mut Self> {
        let mode = ScaleMode::try_from(code)?;
        Ok(self.set_scale_mode(mode))
    }

    /// Set the overlap from a raw value. Values outside `(0, 1)` are
    /// rejected and the current overlap is kept.
    pub fn set_overlap_factor(&mut self, value: f32) -> Result<&mut Self> {
        let overlap = OverlapFactor::new(value)?;
        Ok(self.set_overlap(overlap))
    }

    pub fn set_overlap(&mut self, overlap: OverlapFactor) -> &mut Self {
        self.overlap = overlap;
        self.stale = true;
        self
    }

    pub fn set_background_image(&mut self, width: u32, height: u32) -> Result<&mut Self> {
        self.image = Some(ImageSize::new(width, height)?);
        self.stale = true;
        Ok(self)
    }

    /// Record the host viewport size. The destination always spans the
    /// full viewport height.
    pub fn set_viewport_size(&mut self, width: u32, height: u32) -> Result<&mut Self> {
        let viewport = ViewportSize::new(width, height)?;
        self.viewport = Some(viewport);
        self.destination.top = 0;
        self.destination.bottom = to_i32(viewport.height);
        self.stale = true;
        Ok(self)
    }

    pub fn set_page_count(&mut self, page_count: usize) -> Result<&mut Self> {
        if page_count == 0 {
            return Err(ParallaxError::InvalidArgument(
                "page count must be at least 1".into(),
            ));
        }
        self.page_count = Some(page_count);
        self.stale = true;
        Ok(self)
    }

    /// Derive the per-page chunk width, the projected width and the
    /// vertical crop of the source rectangle.
    ///
    /// When the viewport height equals the image height nothing is
    /// recomputed and the previous values stay in place.
    pub fn recompute_chunk_parameters(&mut self) -> Result<()> {
        let image = self
            .image
            .ok_or(ParallaxError::NotConfigured("background image"))?;
        let viewport = self
            .viewport
            .ok_or(ParallaxError::NotConfigured("viewport size"))?;
        let page_count = self
            .page_count
            .ok_or(ParallaxError::NotConfigured("page count"))?;
        self.stale = false;

        if image.width < viewport.width
            && image.width < image.height
            && self.scale_mode == ScaleMode::FitHeight
        {
            warn!(
                image_width = image.width,
                image_height = image.height,
                viewport_width = viewport.width,
                "Background image too narrow for the viewport, parallax effect will not be visible"
            );
        }

        let image_width = f64::from(image.width);
        let image_height = f64::from(image.height);
        let ratio = f64::from(viewport.height) / image_height;
        if ratio == 1.0 {
            debug!("Viewport height matches image height, parallax parameters unchanged");
            return Ok(());
        }

        let pages = page_count as f64;
        match self.scale_mode {
            ScaleMode::FitWidth => {
                let top = ((image_height - image_height / ratio) / 2.0).ceil() as i32;
                self.source.top = top;
                self.source.bottom = to_i32(image.height) - top;
                self.chunk_width = (image_width / pages).ceil() as i32;
                self.projected_width = self.chunk_width;
            }
            ScaleMode::FitHeight => {
                self.source.top = 0;
                self.source.bottom = to_i32(image.height);
                self.projected_width = (f64::from(viewport.width) / ratio).ceil() as i32;
                let excess = image_width - f64::from(self.projected_width);
                self.chunk_width =
                    (excess / pages * f64::from(self.overlap.get())).ceil() as i32;
            }
        }

        debug!(
            mode = %self.scale_mode,
            ratio,
            chunk_width = self.chunk_width,
            projected_width = self.projected_width,
            "Parallax parameters computed"
        );
        Ok(())
    }

    /// Move the source and destination windows to the continuous scroll
    /// position `page_index + fractional_offset`.
    ///
    /// Does nothing until a background image is set.
    pub fn on_scroll(&mut self, page_index: usize, fractional_offset: f32) {
        let Some(viewport) = self.viewport.filter(|_| self.image.is_some()) else {
            return;
        };
        let position = page_index as f64 + f64::from(fractional_offset);
        let chunk = f64::from(self.chunk_width);
        let width = f64::from(viewport.width);

        self.source.left = ((position - CORRECTION_PERCENTAGE) * chunk).floor() as i32;
        self.source.right = ((position + CORRECTION_PERCENTAGE) * chunk
            + f64::from(self.projected_width))
        .ceil() as i32;
        self.destination.left = ((position - CORRECTION_PERCENTAGE) * width).floor() as i32;
        self.destination.right =
            ((position + 1.0 + CORRECTION_PERCENTAGE) * width).ceil() as i32;
    }

    /// Image-space crop to draw.
    pub fn source(&self) -> Rect {
        self.source
    }

    /// Viewport-space placement to draw into.
    pub fn destination(&self) -> Rect {
        self.destination
    }

    pub fn chunk_width(&self) -> i32 {
        self.chunk_width
    }

    pub fn projected_width(&self) -> i32 {
        self.projected_width
    }

    pub fn scale_mode(&self) -> ScaleMode {
        self.scale_mode
    }

    pub fn overlap(&self) -> OverlapFactor {
        self.overlap
    }

    pub fn image(&self) -> Option<ImageSize> {
        self.image
    }

    pub fn viewport(&self) -> Option<ViewportSize> {
        self.viewport
    }

    pub fn page_count(&self) -> Option<usize> {
        self.page_count
    }

    /// True once image, viewport and page count are all known.
    pub fn is_ready(&self) -> bool {
        self.image.is_some() && self.viewport.is_some() && self.page_count.is_some()
    }

    /// True when a setter ran since the last recompute.
    pub fn needs_recompute(&self) -> bool {
        self.stale
    }
}

fn to_i32(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}
