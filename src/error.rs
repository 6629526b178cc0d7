use thiserror::Error;

/// Reasons a board cannot be laid out.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LayoutError {
    #[error("board area {width}x{height} is not positive")]
    InvalidDimensions { width: f64, height: f64 },
    #[error("size range [{min}, {max}) is invalid")]
    InvalidSizeRange { min: f64, max: f64 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
