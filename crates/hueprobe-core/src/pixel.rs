use std::fmt;
use std::path::PathBuf;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

/// Encoded byte buffer together with its declared encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EncodedPayload {
    /// Standard-alphabet, padded base64 text.
    Base64(String),
    /// Bytes carried as-is.
    Raw(Vec<u8>),
}

impl EncodedPayload {
    /// Base64-encode `bytes` into a text payload.
    pub fn base64_from_bytes(bytes: &[u8]) -> Self {
        Self::Base64(BASE64.encode(bytes))
    }

    pub fn encoding(&self) -> PayloadEncoding {
        match self {
            Self::Base64(_) => PayloadEncoding::Base64,
            Self::Raw(_) => PayloadEncoding::Raw,
        }
    }

    /// Length of the encoded form in bytes.
    pub fn encoded_len(&self) -> usize {
        match self {
            Self::Base64(text) => text.len(),
            Self::Raw(bytes) => bytes.len(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayloadEncoding {
    Base64,
    Raw,
}

impl fmt::Display for PayloadEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base64 => write!(f, "base64"),
            Self::Raw => write!(f, "raw"),
        }
    }
}

/// A full-resolution captured photo. Immutable once created.
#[derive(Clone, Debug, PartialEq)]
pub struct CapturedImage {
    /// Where the image came from, if it has a location at all.
    pub source: Option<PathBuf>,
    pub width: u32,
    pub height: u32,
    /// Encoded image file bytes (PNG, JPEG, ...), when requested at capture.
    pub payload: Option<EncodedPayload>,
}

impl CapturedImage {
    pub fn new(width: u32, height: u32, payload: Option<EncodedPayload>) -> Self {
        Self {
            source: None,
            width,
            height,
            payload,
        }
    }

    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Output of reducing a captured image to exactly one pixel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReducedPixelPayload {
    pub width: u32,
    pub height: u32,
    /// Raw pixel bytes in row-major RGBA order, encoded. `None` when the
    /// transform succeeded without returning data.
    pub payload: Option<EncodedPayload>,
}

/// The four channels of one pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChannelSample {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ChannelSample {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgba(rgba: [u8; 4]) -> Self {
        let [r, g, b, a] = rgba;
        Self { r, g, b, a }
    }
}

/// The externally visible color result.
///
/// Formats as `rgb(R, G, B)`. Absence of a color is modeled as
/// `Option<DetectedColor>::None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DetectedColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl DetectedColor {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for DetectedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}
