//! DICOM pixel data extraction
//!
//! Decodes the pixel data element and widens the samples of the first frame
//! to `f64`. All windowing arithmetic happens in `f64` regardless of the
//! source bit depth or signedness; the cast down to `u8` is the very last
//! step of the pipeline.

use crate::error::NormalizeError;
use crate::types::Dimensions;
use dicom::object::DefaultDicomObject;
use dicom::pixeldata::PixelDecoder;

/// Decode the pixel data and return the sample matrix of frame 0
///
/// Multi-frame datasets are reduced to their first frame; no aggregation
/// across frames.
pub fn extract_frame_samples(
    obj: &DefaultDicomObject,
) -> Result<(Dimensions, Vec<f64>), NormalizeError> {
    let decoded = obj
        .decode_pixel_data()
        .map_err(|e| NormalizeError::Parse(format!("failed to decode pixel data: {e}")))?;

    let dimensions = Dimensions::new(decoded.rows(), decoded.columns());
    if !dimensions.is_valid() {
        return Err(NormalizeError::Parse(format!(
            "dataset has no pixels ({dimensions})"
        )));
    }

    let samples: Vec<f64> = decoded
        .to_vec_frame(0)
        .map_err(|e| NormalizeError::Parse(format!("failed to read frame 0 samples: {e}")))?;

    if samples.len() != dimensions.pixel_count() {
        return Err(NormalizeError::Parse(format!(
            "frame 0 has {got} samples, expected {want} for {dimensions}",
            got = samples.len(),
            want = dimensions.pixel_count()
        )));
    }

    Ok((dimensions, samples))
}
