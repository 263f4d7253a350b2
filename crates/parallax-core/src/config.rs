use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_OVERLAP, FIT_HEIGHT, FIT_WIDTH};
use crate::error::{ParallaxError, Result};
use crate::geometry::{ImageSize, ViewportSize};

/// Which axis of the background image is mapped onto the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleMode {
    /// The image width is split into equal chunks, one per page, each
    /// filling the whole viewport width.
    FitWidth,
    /// The image height matches the viewport height and the width keeps
    /// the aspect ratio. The hidden part of the image slides in per page.
    #[default]
    FitHeight,
}

impl fmt::Display for ScaleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FitWidth => write!(f, "Fit Width"),
            Self::FitHeight => write!(f, "Fit Height"),
        }
    }
}

impl TryFrom<i32> for ScaleMode {
    type Error = ParallaxError;

    fn try_from(code: i32) -> Result<Self> {
        match code {
            FIT_WIDTH => Ok(Self::FitWidth),
            FIT_HEIGHT => Ok(Self::FitHeight),
            other => Err(ParallaxError::InvalidArgument(format!(
                "scale mode must be FIT_WIDTH ({FIT_WIDTH}) or FIT_HEIGHT ({FIT_HEIGHT}), got {other}"
            ))),
        }
    }
}

impl From<ScaleMode> for i32 {
    fn from(mode: ScaleMode) -> Self {
        match mode {
            ScaleMode::FitWidth => FIT_WIDTH,
            ScaleMode::FitHeight => FIT_HEIGHT,
        }
    }
}

impl FromStr for ScaleMode {
    type Err = ParallaxError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace(['_', ' '], "-").as_str() {
            "fit-width" | "fitwidth" => Ok(Self::FitWidth),
            "fit-height" | "fitheight" => Ok(Self::FitHeight),
            _ => Err(ParallaxError::InvalidArgument(format!(
                "unknown scale mode '{s}'"
            ))),
        }
    }
}

/// Fraction of the excess image width traversed per page, strictly
/// inside `(0, 1)`. Smaller values scroll the background more slowly.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct OverlapFactor(f32);

impl OverlapFactor {
    pub fn new(value: f32) -> Result<Self> {
        // NaN fails both comparisons, so test for the accepted range.
        if value > 0.0 && value < 1.0 {
            Ok(Self(value))
        } else {
            Err(ParallaxError::InvalidArgument(format!(
                "overlap must be between 0 and 1 (exclusive), got {value}"
            )))
        }
    }

    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for OverlapFactor {
    fn default() -> Self {
        Self(DEFAULT_OVERLAP)
    }
}

impl TryFrom<f32> for OverlapFactor {
    type Error = ParallaxError;

    fn try_from(value: f32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<OverlapFactor> for f32 {
    fn from(overlap: OverlapFactor) -> Self {
        overlap.0
    }
}

impl fmt::Display for OverlapFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything needed to bring an engine to the ready state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParallaxConfig {
    #[serde(default)]
    pub scale_mode: ScaleMode,
    #[serde(default)]
    pub overlap: OverlapFactor,
    pub page_count: usize,
    pub image: ImageSize,
    pub viewport: ViewportSize,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            scale_mode: ScaleMode::default(),
            overlap: OverlapFactor::default(),
            page_count: 4,
            image: ImageSize {
                width: 3000,
                height: 1000,
            },
            viewport: ViewportSize {
                width: 1000,
                height: 500,
            },
        }
    }
}
