//! Parsed representation of a single-frame monochrome dataset

use crate::types::{Dimensions, WindowLevel};
use std::fmt;

use super::photometric::PhotometricInterpretation;

/// Everything the normalizer consumes from a DICOM file
///
/// Constructed once per request by [`super::parse_dataset`] and discarded
/// after the raster is produced.
#[derive(Debug, Clone)]
pub struct RawDataset {
    pub dimensions: Dimensions,
    /// Frame-0 sample matrix, row-major, widened to `f64`
    pub samples: Vec<f64>,
    /// Windowing parameters, absent when either tag is missing
    pub window: Option<WindowLevel>,
    pub photometric_interpretation: PhotometricInterpretation,
    pub number_of_frames: u32,
}

impl RawDataset {
    #[inline(always)]
    #[must_use]
    pub fn rows(&self) -> u32 {
        self.dimensions.rows
    }

    #[inline(always)]
    #[must_use]
    pub fn cols(&self) -> u32 {
        self.dimensions.cols
    }
}

impl fmt::Display for RawDataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{dims}, {pi}, frames={frames}, window=",
            dims = self.dimensions,
            pi = self.photometric_interpretation,
            frames = self.number_of_frames,
        )?;
        match self.window {
            Some(window) => write!(f, "{window}"),
            None => write!(f, "none"),
        }
    }
}
