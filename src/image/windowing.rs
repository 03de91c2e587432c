//! Pixel-value windowing policies
//!
//! The mapping from raw sample values to 8-bit luminance is an ordered
//! policy list selected once per call:
//!
//! 1. linear window when center/width are present and width is non-zero,
//! 2. clipped min-max when the window is degenerate (width == 0),
//! 3. global min-max when no window is present.
//!
//! A guard after the selected policy falls back to global min-max if the
//! output is empty or non-finite, so pathological window metadata (NaN or
//! infinite center/width) degrades to a usable image instead of failing the
//! request.

use crate::types::WindowLevel;
use tracing::warn;

const LUMA_MAX: f64 = 255.0;

/// One branch of the windowing policy list
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowPolicy {
    /// Clip to `[lower, upper]`, then `(v - lower) / width * 255`
    Linear { lower: f64, upper: f64, width: f64 },
    /// Clip to `[lower, upper]`, then rescale by the observed range of the
    /// clipped values
    DegenerateMinMax { lower: f64, upper: f64 },
    /// Rescale by the observed range of the whole matrix
    GlobalMinMax,
}

impl WindowPolicy {
    /// Pick the policy branch for the dataset's window metadata
    #[must_use]
    pub fn select(window: Option<WindowLevel>) -> Self {
        match window {
            Some(w) if w.is_degenerate() => Self::DegenerateMinMax {
                lower: w.lower(),
                upper: w.upper(),
            },
            Some(w) => Self::Linear {
                lower: w.lower(),
                upper: w.upper(),
                width: w.width,
            },
            None => Self::GlobalMinMax,
        }
    }

    /// Map raw samples into `[0, 255]`
    ///
    /// The output is only guaranteed to be finite and in range for finite
    /// policy parameters; callers must run the displayability guard before
    /// casting down.
    #[must_use]
    pub fn apply(&self, samples: &[f64]) -> Vec<f64> {
        match *self {
            Self::Linear {
                lower,
                upper,
                width,
            } => samples
                .iter()
                .map(|&v| (clip(v, lower, upper) - lower) / width * LUMA_MAX)
                .collect(),
            Self::DegenerateMinMax { lower, upper } => {
                let clipped: Vec<f64> = samples.iter().map(|&v| clip(v, lower, upper)).collect();
                let (min, max) = find_min_max(&clipped);
                rescale(&clipped, min, max)
            }
            Self::GlobalMinMax => {
                let (min, max) = find_min_max(samples);
                rescale(samples, min, max)
            }
        }
    }
}

/// Apply the policy list plus the safety fallback, then cast to 8-bit
///
/// The cast truncates rather than rounds; switching to rounding would
/// change output values for existing inputs.
#[must_use]
pub fn normalize_samples(samples: &[f64], window: Option<WindowLevel>) -> Vec<u8> {
    let policy = WindowPolicy::select(window);
    let mut scaled = policy.apply(samples);

    if !is_displayable(&scaled) {
        warn!(
            ?policy,
            "windowing produced empty or non-finite output, recomputing with global min-max"
        );
        scaled = WindowPolicy::GlobalMinMax.apply(samples);
    }

    // Values are in [0, 255] by construction; `as` truncates toward zero and
    // saturates on the stray rounding excursion past 255.0
    scaled.iter().map(|&v| v as u8).collect()
}

/// Guard condition for the safety fallback
#[inline]
#[must_use]
fn is_displayable(samples: &[f64]) -> bool {
    !samples.is_empty() && samples.iter().all(|v| v.is_finite())
}

/// NaN-tolerant clip; `f64::clamp` would panic on non-finite window bounds
#[inline]
fn clip(value: f64, lower: f64, upper: f64) -> f64 {
    value.max(lower).min(upper)
}

#[inline]
#[must_use]
fn find_min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &val| {
            (min.min(val), max.max(val))
        })
}

/// Min-max rescale to `[0, 255]`; flat input maps to all zeros
fn rescale(values: &[f64], min: f64, max: f64) -> Vec<f64> {
    if max == min {
        return vec![0.0; values.len()];
    }
    values
        .iter()
        .map(|&v| (v - min) / (max - min) * LUMA_MAX)
        .collect()
}
