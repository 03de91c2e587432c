//! Synthetic DICOM files for tests
//!
//! Builds minimal single-channel Explicit VR Little Endian files entirely in
//! memory, so tests can pin exact pixel values without committed fixtures.

use dicom::core::{DataElement, PrimitiveValue, VR};
use dicom::dictionary_std::{tags, uids};
use dicom::object::{FileMetaTableBuilder, InMemDicomObject};

pub struct SyntheticDicom {
    rows: u16,
    cols: u16,
    pixel_bytes: Vec<u8>,
    signed: bool,
    photometric: String,
    frames: u32,
    window_center: Option<Vec<String>>,
    window_width: Option<Vec<String>>,
}

impl SyntheticDicom {
    /// 16-bit unsigned samples, row-major; may span multiple frames
    pub fn new(rows: u16, cols: u16, samples: &[u16]) -> Self {
        Self {
            rows,
            cols,
            pixel_bytes: samples.iter().flat_map(|&v| v.to_le_bytes()).collect(),
            signed: false,
            photometric: "MONOCHROME2".to_string(),
            frames: 1,
            window_center: None,
            window_width: None,
        }
    }

    /// 16-bit two's-complement samples (PixelRepresentation = 1)
    pub fn new_signed(rows: u16, cols: u16, samples: &[i16]) -> Self {
        Self {
            signed: true,
            ..Self::new(
                rows,
                cols,
                &samples.iter().map(|&v| v as u16).collect::<Vec<_>>(),
            )
        }
    }

    pub fn photometric(mut self, value: &str) -> Self {
        self.photometric = value.to_string();
        self
    }

    pub fn frames(mut self, frames: u32) -> Self {
        self.frames = frames;
        self
    }

    /// Single-valued WindowCenter/WindowWidth (DS values are strings)
    pub fn window(self, center: &str, width: &str) -> Self {
        self.multi_window(&[center], &[width])
    }

    pub fn multi_window(mut self, centers: &[&str], widths: &[&str]) -> Self {
        self.window_center = Some(centers.iter().map(|s| s.to_string()).collect());
        self.window_width = Some(widths.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn window_center_only(mut self, center: &str) -> Self {
        self.window_center = Some(vec![center.to_string()]);
        self
    }

    /// Serialize the file, preamble and meta group included
    pub fn build(self) -> Vec<u8> {
        let mut obj = InMemDicomObject::new_empty();

        obj.put(DataElement::new(
            tags::SOP_CLASS_UID,
            VR::UI,
            PrimitiveValue::from(uids::SECONDARY_CAPTURE_IMAGE_STORAGE),
        ));
        obj.put(DataElement::new(
            tags::SOP_INSTANCE_UID,
            VR::UI,
            PrimitiveValue::from("2.25.859141520304"),
        ));
        obj.put(DataElement::new(
            tags::PHOTOMETRIC_INTERPRETATION,
            VR::CS,
            PrimitiveValue::from(self.photometric.as_str()),
        ));
        obj.put(DataElement::new(
            tags::SAMPLES_PER_PIXEL,
            VR::US,
            PrimitiveValue::from(1_u16),
        ));
        obj.put(DataElement::new(
            tags::ROWS,
            VR::US,
            PrimitiveValue::from(self.rows),
        ));
        obj.put(DataElement::new(
            tags::COLUMNS,
            VR::US,
            PrimitiveValue::from(self.cols),
        ));
        obj.put(DataElement::new(
            tags::BITS_ALLOCATED,
            VR::US,
            PrimitiveValue::from(16_u16),
        ));
        obj.put(DataElement::new(
            tags::BITS_STORED,
            VR::US,
            PrimitiveValue::from(16_u16),
        ));
        obj.put(DataElement::new(
            tags::HIGH_BIT,
            VR::US,
            PrimitiveValue::from(15_u16),
        ));
        obj.put(DataElement::new(
            tags::PIXEL_REPRESENTATION,
            VR::US,
            PrimitiveValue::from(u16::from(self.signed)),
        ));

        if self.frames > 1 {
            obj.put(DataElement::new(
                tags::NUMBER_OF_FRAMES,
                VR::IS,
                PrimitiveValue::from(self.frames.to_string()),
            ));
        }
        if let Some(centers) = self.window_center {
            obj.put(DataElement::new(
                tags::WINDOW_CENTER,
                VR::DS,
                PrimitiveValue::Strs(centers.into()),
            ));
        }
        if let Some(widths) = self.window_width {
            obj.put(DataElement::new(
                tags::WINDOW_WIDTH,
                VR::DS,
                PrimitiveValue::Strs(widths.into()),
            ));
        }

        obj.put(DataElement::new(
            tags::PIXEL_DATA,
            VR::OW,
            PrimitiveValue::U8(self.pixel_bytes.into()),
        ));

        let meta = FileMetaTableBuilder::new()
            .transfer_syntax(uids::EXPLICIT_VR_LITTLE_ENDIAN)
            .media_storage_sop_class_uid(uids::SECONDARY_CAPTURE_IMAGE_STORAGE)
            .media_storage_sop_instance_uid("2.25.859141520304");

        let file_obj = obj.with_meta(meta).expect("file meta should build");

        let mut out = Vec::new();
        file_obj
            .write_all(&mut out)
            .expect("in-memory write should not fail");
        out
    }
}
