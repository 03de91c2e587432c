pub mod cli;
pub mod dicom;
pub mod error;
pub mod image;
pub mod types;

#[cfg(test)]
mod testutil;

// Re-export commonly used items
pub use error::NormalizeError;
pub use image::{normalize, NormalizedImage};
