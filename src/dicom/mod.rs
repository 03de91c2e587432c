//! DICOM container parsing
//!
//! This module turns a raw byte buffer into a [`RawDataset`]: the frame-0
//! sample matrix plus the handful of attributes the normalizer consumes.

mod dataset;
mod parser;
mod photometric;
mod pixel_data;
mod validation;

// Re-export public API
pub use dataset::RawDataset;
pub use photometric::PhotometricInterpretation;

use crate::error::NormalizeError;
use dicom::object::from_reader;

const DICM_MAGIC: &[u8; 4] = b"DICM";
const PREAMBLE_LEN: usize = 128;

/// Parse a DICOM byte buffer into the attributes the normalizer needs
///
/// Accepts streams with or without the 128-byte preamble. Multi-frame
/// datasets are reduced to frame 0.
///
/// # Errors
///
/// Returns [`NormalizeError::Parse`] if the buffer is not a valid DICOM
/// stream, the dataset is not single-channel monochrome, or the pixel data
/// is missing or undecodable.
pub fn parse_dataset(raw: &[u8]) -> Result<RawDataset, NormalizeError> {
    let obj = from_reader(strip_preamble(raw))
        .map_err(|e| NormalizeError::Parse(format!("not a valid DICOM stream: {e}")))?;

    let photometric_interpretation = parser::extract_photometric_interpretation(&obj);
    let samples_per_pixel = parser::extract_samples_per_pixel(&obj);
    validation::validate_monochrome(&photometric_interpretation, samples_per_pixel)?;

    let window = parser::extract_window_level(&obj);
    let number_of_frames = parser::extract_number_of_frames(&obj);
    let (dimensions, samples) = pixel_data::extract_frame_samples(&obj)?;

    Ok(RawDataset {
        dimensions,
        samples,
        window,
        photometric_interpretation,
        number_of_frames,
    })
}

/// Skip the 128-byte preamble when present, leaving the `DICM` magic for
/// the reader
fn strip_preamble(raw: &[u8]) -> &[u8] {
    if raw.len() > PREAMBLE_LEN + DICM_MAGIC.len()
        && &raw[PREAMBLE_LEN..PREAMBLE_LEN + DICM_MAGIC.len()] == DICM_MAGIC
    {
        &raw[PREAMBLE_LEN..]
    } else {
        raw
    }
}
