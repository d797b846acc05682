use thiserror::Error;

/// Failure of the image capture provider. Aborts a capture attempt.
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Capture device unavailable: {0}")]
    Unavailable(String),

    #[error("Capture permission denied")]
    PermissionDenied,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),
}

/// Failure of the image transform provider while reducing to a single pixel.
#[derive(Error, Debug)]
pub enum TransformError {
    #[error("Captured image carries no encoded payload")]
    MissingPayload,

    #[error("Captured payload could not be decoded: {0}")]
    Decode(#[from] DecodeError),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),
}

/// Failure to turn a reduced-pixel payload into channel values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Pixel payload too short: {len} byte(s), need 4")]
    TooShort { len: usize },

    #[error("Invalid payload encoding: {0}")]
    InvalidEncoding(String),
}

/// Failure of a sampling cycle. Never fatal to the session.
#[derive(Error, Debug)]
pub enum SampleError {
    #[error("Transform returned no encoded payload")]
    NoPayload,

    #[error("Decode failed: {0}")]
    Decode(#[from] DecodeError),

    #[error("Transform failed: {0}")]
    Transform(#[from] TransformError),
}

/// Rejected session operation.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("A capture is already being sampled")]
    CaptureInFlight,

    #[error("Capture failed: {0}")]
    Capture(#[from] CaptureError),
}
