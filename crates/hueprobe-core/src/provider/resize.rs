use tracing::debug;

use crate::config::ResizeFilter;
use crate::consts::SINGLE_PIXEL;
use crate::decode::payload_bytes;
use crate::error::TransformError;
use crate::pixel::{CapturedImage, EncodedPayload, ReducedPixelPayload};

use super::ImageTransformProvider;

/// Transform provider backed by the `image` crate's resampling.
///
/// Output is deterministic for a given payload and filter.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImageResizer {
    pub filter: ResizeFilter,
}

impl ImageResizer {
    pub fn new(filter: ResizeFilter) -> Self {
        Self { filter }
    }
}

impl ImageTransformProvider for ImageResizer {
    async fn resize_to_single_pixel(
        &self,
        image: &CapturedImage,
        include_encoded_payload: bool,
    ) -> Result<ReducedPixelPayload, TransformError> {
        let payload = image
            .payload
            .as_ref()
            .ok_or(TransformError::MissingPayload)?;
        let source = image::load_from_memory(&payload_bytes(payload)?)?;

        let reduced = source
            .resize_exact(SINGLE_PIXEL, SINGLE_PIXEL, self.filter.filter_type())
            .to_rgba8();
        debug!(
            filter = %self.filter,
            from_width = source.width(),
            from_height = source.height(),
            "Reduced capture to a single pixel"
        );

        Ok(ReducedPixelPayload {
            width: reduced.width(),
            height: reduced.height(),
            payload: include_encoded_payload
                .then(|| EncodedPayload::base64_from_bytes(reduced.as_raw())),
        })
    }
}
