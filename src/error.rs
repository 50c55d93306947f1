use thiserror::Error;

#[derive(Error, Copy, Clone, Debug, PartialEq)]
pub enum ConfigError {
    #[error("image width must be at least 1 pixel")]
    ZeroWidth,
    #[error("aspect ratio must be finite and positive (got {0})")]
    InvalidAspectRatio(f64),
    #[error("viewport height must be finite and positive (got {0})")]
    InvalidViewportHeight(f64),
    #[error("focal length must be finite and positive (got {0})")]
    InvalidFocalLength(f64),
    #[error("image of width {width} with aspect ratio {aspect_ratio} has no rows")]
    NoRows { width: usize, aspect_ratio: f64 },
}

#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("surface dimensions must be non-zero (got {width}x{height})")]
    ZeroSize { width: usize, height: usize },
    #[error("pitch of {pitch} bytes is smaller than one row of {row_bytes} bytes")]
    PitchTooSmall { pitch: usize, row_bytes: usize },
    #[error("surface of {height} rows at {pitch} bytes per row does not fit in memory")]
    TooLarge { pitch: usize, height: usize },
}
