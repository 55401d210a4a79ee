//! Image decoding with capture-orientation correction.
//!
//! Phone captures embed their rotation in EXIF metadata; without applying
//! it, a portrait photo reaches the pipeline sideways and boundary
//! detection finds nothing useful.

use crate::core::errors::{ScanError, ScanResult};
use image::metadata::Orientation;
use image::{DynamicImage, ImageDecoder, ImageReader, RgbImage};
use std::io::Cursor;
use tracing::debug;

/// Decodes raw capture bytes into an orientation-corrected RGB image.
///
/// # Errors
///
/// Returns [`ScanError::ImageDecode`] when the bytes are not a decodable
/// image; the request fails immediately in that case.
pub fn decode_oriented(bytes: &[u8]) -> ScanResult<RgbImage> {
    let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    let mut decoder = reader.into_decoder().map_err(ScanError::ImageDecode)?;

    // Missing or unreadable metadata means no rotation to undo.
    let orientation = decoder
        .orientation()
        .unwrap_or(Orientation::NoTransforms);

    let mut image = DynamicImage::from_decoder(decoder).map_err(ScanError::ImageDecode)?;
    if orientation != Orientation::NoTransforms {
        debug!(?orientation, "applying capture orientation");
        image.apply_orientation(orientation);
    }

    Ok(image.to_rgb8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageFormat;

    fn encode_png(image: &RgbImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(image.clone())
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn decodes_valid_png() {
        let image = RgbImage::from_pixel(8, 6, image::Rgb([10, 20, 30]));
        let decoded = decode_oriented(&encode_png(&image)).unwrap();
        assert_eq!(decoded.dimensions(), (8, 6));
        assert_eq!(decoded.get_pixel(0, 0), &image::Rgb([10, 20, 30]));
    }

    #[test]
    fn garbage_bytes_fail_with_decode_error() {
        let result = decode_oriented(&[0x00, 0x01, 0x02, 0x03]);
        assert!(matches!(
            result,
            Err(ScanError::ImageDecode(_)) | Err(ScanError::Io(_))
        ));
    }

    #[test]
    fn empty_input_fails() {
        assert!(decode_oriented(&[]).is_err());
    }
}
