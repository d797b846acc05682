use tracing::{debug, info, warn};

use crate::consts::TRANSPARENT_ALPHA;
use crate::decode::decode;
use crate::error::SampleError;
use crate::pixel::{CapturedImage, ChannelSample, DetectedColor, ReducedPixelPayload};
use crate::provider::ImageTransformProvider;

/// Reduces a captured image to one pixel and reads its color.
#[derive(Clone, Debug, Default)]
pub struct ColorSampler<T> {
    transform: T,
}

impl<T: ImageTransformProvider> ColorSampler<T> {
    pub fn new(transform: T) -> Self {
        Self { transform }
    }

    pub fn transform(&self) -> &T {
        &self.transform
    }

    /// Run one resize → decode → color cycle.
    ///
    /// Suspends once, while the transform provider resizes the image.
    pub async fn sample(&self, image: &CapturedImage) -> Result<DetectedColor, SampleError> {
        let reduced = self.transform.resize_to_single_pixel(image, true).await?;
        sample_payload(&reduced)
    }
}

/// Decode a reduced payload and apply the color policy.
pub fn sample_payload(reduced: &ReducedPixelPayload) -> Result<DetectedColor, SampleError> {
    let payload = reduced.payload.as_ref().ok_or(SampleError::NoPayload)?;
    let sample = decode(payload)?;
    debug!(
        r = sample.r,
        g = sample.g,
        b = sample.b,
        a = sample.a,
        "Extracted RGBA"
    );
    let color = resolve_color(sample);
    info!(color = %color, "Detected color");
    Ok(color)
}

/// Turn channel values into the reported color.
///
/// The resize path does not keep color under full transparency, so a pixel
/// with alpha 0 is reported as black whatever its RGB bytes say. Alpha is
/// otherwise ignored.
pub fn resolve_color(sample: ChannelSample) -> DetectedColor {
    if sample.a == TRANSPARENT_ALPHA {
        warn!("Pixel is fully transparent, reporting black");
        return DetectedColor::BLACK;
    }
    DetectedColor::new(sample.r, sample.g, sample.b)
}
