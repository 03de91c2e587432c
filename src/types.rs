//! Domain-specific types for the normalization pipeline

use std::fmt;

/// Raster dimensions of a single frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: u32,
    pub cols: u32,
}

impl Dimensions {
    #[must_use]
    pub fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    #[inline]
    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.rows > 0 && self.cols > 0
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{cols}x{rows}", cols = self.cols, rows = self.rows)
    }
}

/// Window center/width (W/L) pair from the dataset
///
/// Both values come from the first entry of the respective DICOM tags when
/// those are multi-valued. A pair is only constructed when both tags are
/// present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowLevel {
    pub center: f64,
    pub width: f64,
}

impl WindowLevel {
    #[must_use]
    pub fn new(center: f64, width: f64) -> Self {
        Self { center, width }
    }

    #[inline]
    #[must_use]
    pub fn lower(&self) -> f64 {
        self.center - self.width / 2.0
    }

    #[inline]
    #[must_use]
    pub fn upper(&self) -> f64 {
        self.center + self.width / 2.0
    }

    /// Zero-width windows get the clipped min-max policy instead of the
    /// linear formula (which would divide by zero)
    #[inline]
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width == 0.0
    }
}

impl fmt::Display for WindowLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "C={center}, W={width}",
            center = self.center,
            width = self.width
        )
    }
}
