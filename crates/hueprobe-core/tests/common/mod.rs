#![allow(dead_code)]

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};

use hueprobe_core::error::{CaptureError, TransformError};
use hueprobe_core::pixel::{CapturedImage, EncodedPayload, ReducedPixelPayload};
use hueprobe_core::provider::{CaptureOptions, ImageCaptureProvider, ImageTransformProvider};

/// Encode a uniform RGBA image as PNG bytes.
pub fn uniform_png(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba(rgba));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png).expect("encode PNG");
    out.into_inner()
}

/// A captured uniform PNG with its base64 payload attached.
pub fn captured_png(width: u32, height: u32, rgba: [u8; 4]) -> CapturedImage {
    let payload = EncodedPayload::base64_from_bytes(&uniform_png(width, height, rgba));
    CapturedImage::new(width, height, Some(payload))
}

/// A captured image whose payload is irrelevant to the transform under test.
pub fn placeholder_image() -> CapturedImage {
    CapturedImage::new(4, 3, None)
}

/// Reduced payload holding `bytes` as base64.
pub fn reduced_base64(bytes: &[u8]) -> ReducedPixelPayload {
    ReducedPixelPayload {
        width: 1,
        height: 1,
        payload: Some(EncodedPayload::base64_from_bytes(bytes)),
    }
}

/// Transform provider that always returns the same reduced payload.
pub struct FixedTransform {
    pub reduced: ReducedPixelPayload,
}

impl FixedTransform {
    pub fn bytes(bytes: &[u8]) -> Self {
        Self {
            reduced: reduced_base64(bytes),
        }
    }

    pub fn payload(payload: Option<EncodedPayload>) -> Self {
        Self {
            reduced: ReducedPixelPayload {
                width: 1,
                height: 1,
                payload,
            },
        }
    }
}

impl ImageTransformProvider for FixedTransform {
    async fn resize_to_single_pixel(
        &self,
        _image: &CapturedImage,
        include_encoded_payload: bool,
    ) -> Result<ReducedPixelPayload, TransformError> {
        let mut reduced = self.reduced.clone();
        if !include_encoded_payload {
            reduced.payload = None;
        }
        Ok(reduced)
    }
}

/// Transform provider that always fails.
pub struct FailingTransform;

impl ImageTransformProvider for FailingTransform {
    async fn resize_to_single_pixel(
        &self,
        _image: &CapturedImage,
        _include_encoded_payload: bool,
    ) -> Result<ReducedPixelPayload, TransformError> {
        Err(TransformError::MissingPayload)
    }
}

/// Capture provider that hands out a fixed image and records the options it saw.
pub struct FixedCapture {
    pub image: CapturedImage,
    pub seen: std::cell::RefCell<Vec<CaptureOptions>>,
}

impl FixedCapture {
    pub fn new(image: CapturedImage) -> Self {
        Self {
            image,
            seen: std::cell::RefCell::new(Vec::new()),
        }
    }
}

impl ImageCaptureProvider for FixedCapture {
    async fn capture_image(&self, options: &CaptureOptions) -> Result<CapturedImage, CaptureError> {
        self.seen.borrow_mut().push(*options);
        Ok(self.image.clone())
    }
}

/// Capture provider standing in for a camera the user has not granted.
pub struct DeniedCapture;

impl ImageCaptureProvider for DeniedCapture {
    async fn capture_image(&self, _options: &CaptureOptions) -> Result<CapturedImage, CaptureError> {
        Err(CaptureError::PermissionDenied)
    }
}
