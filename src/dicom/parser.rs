//! Tag extraction helpers
//!
//! One helper per concern, all tolerant of absent or malformed optional tags.

use crate::types::WindowLevel;
use dicom::dictionary_std::tags;
use dicom::object::DefaultDicomObject;
use std::str::FromStr;

use super::photometric::PhotometricInterpretation;

/// Extract the windowing parameters, if both tags are present
///
/// `WindowCenter` and `WindowWidth` may be multi-valued (one pair per VOI
/// preset); only the first value of each is used.
pub fn extract_window_level(obj: &DefaultDicomObject) -> Option<WindowLevel> {
    let center = extract_first_float(obj, tags::WINDOW_CENTER)?;
    let width = extract_first_float(obj, tags::WINDOW_WIDTH)?;
    Some(WindowLevel::new(center, width))
}

fn extract_first_float(obj: &DefaultDicomObject, tag: dicom::core::Tag) -> Option<f64> {
    obj.get(tag)
        .and_then(|e| e.to_multi_float64().ok())
        .and_then(|values| values.first().copied())
}

/// Parse the photometric interpretation, defaulting to MONOCHROME2
pub fn extract_photometric_interpretation(
    obj: &DefaultDicomObject,
) -> PhotometricInterpretation {
    obj.get(tags::PHOTOMETRIC_INTERPRETATION)
        .and_then(|e| e.value().to_str().ok())
        .and_then(|s| PhotometricInterpretation::from_str(&s).ok())
        .unwrap_or(PhotometricInterpretation::Monochrome2)
}

#[inline]
pub fn extract_number_of_frames(obj: &DefaultDicomObject) -> u32 {
    obj.get(tags::NUMBER_OF_FRAMES)
        .and_then(|e| e.to_int::<u32>().ok())
        .unwrap_or(1)
}

#[inline]
pub fn extract_samples_per_pixel(obj: &DefaultDicomObject) -> u16 {
    obj.get(tags::SAMPLES_PER_PIXEL)
        .and_then(|e| e.to_int::<u16>().ok())
        .unwrap_or(1)
}
