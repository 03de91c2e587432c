//! Lossless raster serialization
//!
//! PNG keeps the exact 8-bit sample values, so decoding the transport form
//! reproduces the raster bit for bit.

use crate::error::NormalizeError;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use image::{GrayImage, ImageFormat};
use std::io::Cursor;

/// Encode the raster to PNG and wrap it in standard base64 for transport
pub fn to_png_base64(image: &GrayImage) -> Result<String, NormalizeError> {
    Ok(BASE64.encode(encode_png(image)?))
}

/// PNG-encode the raster into an in-memory buffer
pub fn encode_png(image: &GrayImage) -> Result<Vec<u8>, NormalizeError> {
    let mut cursor = Cursor::new(Vec::new());
    image
        .write_to(&mut cursor, ImageFormat::Png)
        .map_err(|e| NormalizeError::Encode(format!("PNG serialization failed: {e}")))?;
    Ok(cursor.into_inner())
}
