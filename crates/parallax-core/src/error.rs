use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParallaxError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Parallax parameters requested before {0} was set")]
    NotConfigured(&'static str),
}

pub type Result<T> = std::result::Result<T, ParallaxError>;
