//! Codec boundary
//!
//! The workflow never inspects pixels. It decodes a source into a
//! `DynamicImage` and re-encodes it at the target path, both behind the
//! [`ImageCodec`] trait so the executor can be exercised with stub codecs in
//! tests. The production codec decodes HEIC through libheif and writes PNG
//! through the `image` crate with default encoder settings.

use crate::errors::ConvertError;
use image::DynamicImage;
use libheif_rs::{ColorSpace, HeifContext, LibHeif, RgbChroma};
use std::path::Path;

pub trait ImageCodec {
    fn decode(&self, path: &Path) -> Result<DynamicImage, ConvertError>;
    fn encode(&self, image: &DynamicImage, path: &Path) -> Result<(), ConvertError>;
}

/// HEIC decoder + PNG encoder backed by system libheif.
pub struct HeifCodec;

impl ImageCodec for HeifCodec {
    fn decode(&self, path: &Path) -> Result<DynamicImage, ConvertError> {
        let decode_err = |msg: String| ConvertError::Decode(path.to_path_buf(), msg);

        let lib_heif = LibHeif::new();
        let ctx = HeifContext::read_from_file(path.to_string_lossy().as_ref())
            .map_err(|e| decode_err(format!("failed to read HEIC container: {}", e)))?;
        let handle = ctx
            .primary_image_handle()
            .map_err(|e| decode_err(format!("no primary image: {}", e)))?;

        let width = handle.width();
        let height = handle.height();

        if handle.has_alpha_channel() {
            let decoded = lib_heif
                .decode(&handle, ColorSpace::Rgb(RgbChroma::Rgba), None)
                .map_err(|e| decode_err(format!("decode failed: {}", e)))?;
            let planes = decoded.planes();
            let plane = planes
                .interleaved
                .ok_or_else(|| decode_err("no RGBA plane found".to_string()))?;
            image::RgbaImage::from_raw(width, height, plane.data.to_vec())
                .map(DynamicImage::ImageRgba8)
                .ok_or_else(|| decode_err("failed to assemble RGBA image".to_string()))
        } else {
            let decoded = lib_heif
                .decode(&handle, ColorSpace::Rgb(RgbChroma::Rgb), None)
                .map_err(|e| decode_err(format!("decode failed: {}", e)))?;
            let planes = decoded.planes();
            let plane = planes
                .interleaved
                .ok_or_else(|| decode_err("no RGB plane found".to_string()))?;
            image::RgbImage::from_raw(width, height, plane.data.to_vec())
                .map(DynamicImage::ImageRgb8)
                .ok_or_else(|| decode_err("failed to assemble RGB image".to_string()))
        }
    }

    fn encode(&self, image: &DynamicImage, path: &Path) -> Result<(), ConvertError> {
        // Format is chosen by extension; an existing target is overwritten.
        image
            .save(path)
            .map_err(|e| ConvertError::Encode(path.to_path_buf(), e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_rejects_non_heic_bytes() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("garbage.heic");
        std::fs::write(&path, b"definitely not a heic container").unwrap();

        let err = HeifCodec.decode(&path).unwrap_err();
        assert!(matches!(err, ConvertError::Decode(..)));
    }

    #[test]
    fn test_encode_writes_png() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("out.png");
        let image = DynamicImage::new_rgb8(2, 2);

        HeifCodec.encode(&image, &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }

    #[test]
    fn test_encode_overwrites_existing_target() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("out.png");
        std::fs::write(&path, b"stale").unwrap();

        let image = DynamicImage::new_rgb8(2, 2);
        HeifCodec.encode(&image, &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_ne!(bytes, b"stale");
    }
}
