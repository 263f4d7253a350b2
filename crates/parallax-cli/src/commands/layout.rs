use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use parallax_core::config::{OverlapFactor, ParallaxConfig, ScaleMode};
use parallax_core::engine::ParallaxEngine;
use parallax_core::geometry::{parse_dimensions, ImageSize, ViewportSize};

#[derive(Clone, Copy, ValueEnum)]
pub enum ScaleModeArg {
    /// Split the image width into one chunk per page
    FitWidth,
    /// Match the image height to the viewport (default)
    FitHeight,
}

impl From<ScaleModeArg> for ScaleMode {
    fn from(arg: ScaleModeArg) -> Self {
        match arg {
            ScaleModeArg::FitWidth => ScaleMode::FitWidth,
            ScaleModeArg::FitHeight => ScaleMode::FitHeight,
        }
    }
}

/// Layout inputs shared by every computing subcommand.
#[derive(Args)]
pub struct LayoutArgs {
    /// Parallax config file (TOML); overrides the flags below
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Background image size, WIDTHxHEIGHT
    #[arg(long, value_parser = parse_size)]
    pub image: Option<(u32, u32)>,

    /// Viewport size, WIDTHxHEIGHT
    #[arg(long, value_parser = parse_size)]
    pub viewport: Option<(u32, u32)>,

    /// Number of pages in the pager
    #[arg(long)]
    pub pages: Option<usize>,

    /// Scale mode
    #[arg(long, value_enum, default_value = "fit-height")]
    pub mode: ScaleModeArg,

    /// Overlap factor, strictly between 0 and 1
    #[arg(long, default_value = "0.5")]
    pub overlap: f32,
}

impl LayoutArgs {
    pub fn to_config(&self) -> Result<ParallaxConfig> {
        if let Some(ref path) = self.config {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            return toml::from_str(&contents).context("Invalid parallax config");
        }

        let (Some((iw, ih)), Some((vw, vh)), Some(pages)) = (self.image, self.viewport, self.pages)
        else {
            bail!("Either --config or all of --image, --viewport and --pages are required");
        };

        Ok(ParallaxConfig {
            scale_mode: self.mode.into(),
            overlap: OverlapFactor::new(self.overlap)?,
            page_count: pages,
            image: ImageSize::new(iw, ih)?,
            viewport: ViewportSize::new(vw, vh)?,
        })
    }

    pub fn engine(&self) -> Result<(ParallaxConfig, ParallaxEngine)> {
        let config = self.to_config()?;
        let engine = ParallaxEngine::from_config(&config)
            .context("Failed to compute parallax parameters")?;
        Ok((config, engine))
    }
}

fn parse_size(s: &str) -> std::result::Result<(u32, u32), String> {
    parse_dimensions(s).map_err(|e| e.to_string())
}
