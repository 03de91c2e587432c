//! Grayscale raster construction
//!
//! Applies the windowing policy to the sample matrix, runs the MONOCHROME1
//! inversion on the final 8-bit values, and backs the result with a
//! single-channel `GrayImage`.

use crate::dicom::RawDataset;
use crate::error::NormalizeError;
use image::GrayImage;

use super::windowing;

/// Build the display-ready luminance raster for a parsed dataset
///
/// # Errors
///
/// Returns [`NormalizeError::Compute`] if the pixel buffer cannot back a
/// raster of the dataset's dimensions.
pub fn render_grayscale(dataset: &RawDataset) -> Result<GrayImage, NormalizeError> {
    let mut pixels = windowing::normalize_samples(&dataset.samples, dataset.window);

    // Inversion operates on the final 8-bit values, strictly after the cast
    if dataset.photometric_interpretation.should_invert() {
        invert_in_place(&mut pixels);
    }

    GrayImage::from_raw(dataset.cols(), dataset.rows(), pixels).ok_or_else(|| {
        NormalizeError::Compute(format!(
            "pixel buffer does not match raster dimensions {dims}",
            dims = dataset.dimensions
        ))
    })
}

/// MONOCHROME1: higher raw values render darker
pub(crate) fn invert_in_place(pixels: &mut [u8]) {
    for v in pixels {
        *v = 255 - *v;
    }
}
