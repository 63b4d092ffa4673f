use derive_more::{Display, From};

pub type Result<T> = core::result::Result<T, ContourError>;

/// Failures from the peripheral layers (CLI parsing, rasterizer and CSV
/// I/O). The extraction engine itself surfaces no errors — its preconditions
/// are the caller's responsibility.
#[derive(Debug, Display, From)]
#[display("{self:?}")]
pub enum ContourError {
    /// A grid or image size argument was zero, negative, or unparseable.
    InvalidSize,
    /// No sample field is registered under the requested name.
    #[from(ignore)]
    UnknownField(String),
    Image(image::ImageError),
    Io(std::io::Error),
}

impl std::error::Error for ContourError {}
