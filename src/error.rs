//! Error taxonomy for the normalization pipeline

use thiserror::Error;

/// Error type covering every failure mode of [`crate::normalize`]
///
/// The variants map to the pipeline stages: container parsing, pixel
/// computation, and raster serialization. Numeric edge cases (flat images,
/// zero-width windows, non-finite window parameters) are handled by policy
/// and never surface here.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// Buffer is not a valid DICOM stream, or it carries no usable pixel data
    #[error("DICOM parse error: {0}")]
    Parse(String),

    /// Pixel computation produced something the raster cannot represent
    #[error("pixel compute error: {0}")]
    Compute(String),

    /// PNG serialization of the final raster failed
    #[error("image encode error: {0}")]
    Encode(String),
}

impl NormalizeError {
    /// Returns true when downstream consumers should not be invoked at all
    /// (no raster was produced)
    #[inline]
    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}
