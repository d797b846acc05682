use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;
use tracing::debug;

use crate::consts::{MAX_JPEG_QUALITY, MIN_JPEG_QUALITY};
use crate::error::CaptureError;
use crate::pixel::{CapturedImage, EncodedPayload};

use super::{CaptureOptions, ImageCaptureProvider};

/// Capture provider that "shoots" an image file from disk.
#[derive(Clone, Debug)]
pub struct FileCapture {
    path: PathBuf,
}

impl FileCapture {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_file(&self) -> Result<Vec<u8>, CaptureError> {
        std::fs::read(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => {
                CaptureError::Unavailable(format!("no image at {}", self.path.display()))
            }
            ErrorKind::PermissionDenied => CaptureError::PermissionDenied,
            _ => CaptureError::Io(e),
        })
    }
}

/// Map a [0.0, 1.0] quality to a JPEG quality setting.
pub fn jpeg_quality(quality: f32) -> u8 {
    let scaled = (quality.clamp(0.0, 1.0) * MAX_JPEG_QUALITY as f32).round() as u8;
    scaled.clamp(MIN_JPEG_QUALITY, MAX_JPEG_QUALITY)
}

fn reencode_jpeg(image: &DynamicImage, quality: f32) -> Result<Vec<u8>, CaptureError> {
    let mut out = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut out, jpeg_quality(quality));
    DynamicImage::ImageRgb8(image.to_rgb8()).write_with_encoder(encoder)?;
    Ok(out)
}

impl ImageCaptureProvider for FileCapture {
    async fn capture_image(&self, options: &CaptureOptions) -> Result<CapturedImage, CaptureError> {
        let original = self.read_file()?;
        let decoded = image::load_from_memory(&original)?;

        let bytes = if options.quality < 1.0 {
            reencode_jpeg(&decoded, options.quality)?
        } else {
            original
        };

        debug!(
            path = %self.path.display(),
            width = decoded.width(),
            height = decoded.height(),
            bytes = bytes.len(),
            "Captured image"
        );

        let payload = options
            .include_encoded_payload
            .then(|| EncodedPayload::base64_from_bytes(&bytes));

        Ok(CapturedImage::new(decoded.width(), decoded.height(), payload).with_source(&self.path))
    }
}
