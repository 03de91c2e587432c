//! The image normalizer
//!
//! Pure transform from a raw DICOM byte buffer to a display-ready 8-bit
//! grayscale raster plus its base64-encoded PNG form. Stateless and
//! synchronous; every invocation is independent.

mod encode;
mod grayscale;
pub mod windowing;

pub use grayscale::render_grayscale;
pub use windowing::WindowPolicy;

use crate::dicom::{self, RawDataset};
use crate::error::NormalizeError;
use image::GrayImage;

/// Successful normalization result: the in-memory raster and its
/// PNG-encoded transport form
#[derive(Debug)]
pub struct NormalizedImage {
    pub image: GrayImage,
    pub png_base64: String,
}

/// Normalize a single-frame monochrome DICOM buffer to 8-bit grayscale
///
/// # Errors
///
/// [`NormalizeError::Parse`] for malformed or unsupported input,
/// [`NormalizeError::Compute`] for unexpected numeric failures,
/// [`NormalizeError::Encode`] when PNG serialization fails. No partial
/// raster is produced on failure, and nothing is retried internally.
pub fn normalize(raw: &[u8]) -> Result<NormalizedImage, NormalizeError> {
    let dataset = dicom::parse_dataset(raw)?;
    render_dataset(&dataset)
}

/// Second half of [`normalize`], for callers that already parsed the
/// dataset (e.g. to print a summary first)
pub fn render_dataset(dataset: &RawDataset) -> Result<NormalizedImage, NormalizeError> {
    let image = grayscale::render_grayscale(dataset)?;
    let png_base64 = encode::to_png_base64(&image)?;
    Ok(NormalizedImage { image, png_base64 })
}
