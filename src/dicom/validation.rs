use crate::error::NormalizeError;

use super::photometric::PhotometricInterpretation;

/// Reject datasets outside the supported single-channel monochrome scope
#[inline]
pub fn validate_monochrome(
    photometric_interpretation: &PhotometricInterpretation,
    samples_per_pixel: u16,
) -> Result<(), NormalizeError> {
    if !photometric_interpretation.is_monochrome() {
        return Err(NormalizeError::Parse(format!(
            "unsupported photometric interpretation {photometric_interpretation}: \
             only monochrome datasets are supported"
        )));
    }

    if samples_per_pixel != 1 {
        return Err(NormalizeError::Parse(format!(
            "inconsistent samples per pixel {samples_per_pixel} for monochrome data (expected 1)"
        )));
    }

    Ok(())
}
