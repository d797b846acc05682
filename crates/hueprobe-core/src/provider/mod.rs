//! Collaborators the pipeline talks to: something that captures a photo and
//! something that reduces it to one pixel.
//!
//! Both are asynchronous black boxes. The core awaits them one at a time and
//! never retries.

pub mod file_capture;
pub mod resize;

pub use file_capture::FileCapture;
pub use resize::ImageResizer;

use crate::consts::DEFAULT_CAPTURE_QUALITY;
use crate::error::{CaptureError, TransformError};
use crate::pixel::{CapturedImage, ReducedPixelPayload};

/// Options passed to the capture provider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaptureOptions {
    /// Quality in [0.0, 1.0].
    pub quality: f32,
    /// Ask for the encoded image bytes, not only a reference.
    pub include_encoded_payload: bool,
}

impl CaptureOptions {
    pub fn with_quality(quality: f32) -> Self {
        Self {
            quality: quality.clamp(0.0, 1.0),
            include_encoded_payload: true,
        }
    }
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self::with_quality(DEFAULT_CAPTURE_QUALITY)
    }
}

/// Produces full-resolution photos.
#[allow(async_fn_in_trait)]
pub trait ImageCaptureProvider {
    async fn capture_image(&self, options: &CaptureOptions) -> Result<CapturedImage, CaptureError>;
}

/// Reduces a photo to a deterministic 1x1 image.
#[allow(async_fn_in_trait)]
pub trait ImageTransformProvider {
    /// The returned payload, when present, holds the pixel's raw RGBA bytes.
    async fn resize_to_single_pixel(
        &self,
        image: &CapturedImage,
        include_encoded_payload: bool,
    ) -> Result<ReducedPixelPayload, TransformError>;
}
