use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::consts::RGBA_CHANNEL_COUNT;
use crate::error::DecodeError;
use crate::pixel::{ChannelSample, EncodedPayload};

/// Decode a payload into its raw bytes under the declared encoding.
pub fn payload_bytes(payload: &EncodedPayload) -> Result<Vec<u8>, DecodeError> {
    match payload {
        EncodedPayload::Base64(text) => BASE64
            .decode(text.trim())
            .map_err(|e| DecodeError::InvalidEncoding(e.to_string())),
        EncodedPayload::Raw(bytes) => Ok(bytes.clone()),
    }
}

/// Extract the first pixel's R, G, B, A channels from a 1x1 payload.
///
/// Bytes past the fourth (row padding, trailing data) are ignored.
pub fn decode(payload: &EncodedPayload) -> Result<ChannelSample, DecodeError> {
    let bytes = payload_bytes(payload)?;
    first_pixel(&bytes)
}

fn first_pixel(bytes: &[u8]) -> Result<ChannelSample, DecodeError> {
    match bytes.get(..RGBA_CHANNEL_COUNT) {
        Some(&[r, g, b, a]) => Ok(ChannelSample::new(r, g, b, a)),
        _ => Err(DecodeError::TooShort { len: bytes.len() }),
    }
}
