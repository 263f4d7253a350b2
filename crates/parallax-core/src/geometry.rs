use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ParallaxError, Result};

/// An integer rectangle, either an image-space crop or a viewport-space
/// placement. Edges are exclusive on the right and bottom.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{},{}][{},{}]",
            self.left, self.top, self.right, self.bottom
        )
    }
}

/// Pixel dimensions of the background image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    /// Reject images with a zero dimension; the ratio computation divides
    /// by the height.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ParallaxError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }
}

/// Pixel dimensions of the host viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ParallaxError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }
}

/// Parse a `WIDTHxHEIGHT` pair such as `1920x1080`.
pub fn parse_dimensions(s: &str) -> Result<(u32, u32)> {
    let (w, h) = s
        .trim()
        .split_once(['x', 'X'])
        .ok_or_else(|| ParallaxError::InvalidArgument(format!("expected WxH, got '{s}'")))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<u32>()
            .map_err(|_| ParallaxError::InvalidArgument(format!("expected WxH, got '{s}'")))
    };
    Ok((parse(w)?, parse(h)?))
}
