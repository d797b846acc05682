/// Number of channels in a decoded pixel (R, G, B, A).
pub const RGBA_CHANNEL_COUNT: usize = 4;

/// Alpha value of a fully transparent pixel.
pub const TRANSPARENT_ALPHA: u8 = 0;

/// Width and height of the reduced image.
pub const SINGLE_PIXEL: u32 = 1;

/// Default capture quality (1.0 = best, no re-encoding).
pub const DEFAULT_CAPTURE_QUALITY: f32 = 1.0;

/// Lowest JPEG quality used when re-encoding a capture.
pub const MIN_JPEG_QUALITY: u8 = 1;

/// Highest JPEG quality used when re-encoding a capture.
pub const MAX_JPEG_QUALITY: u8 = 100;
