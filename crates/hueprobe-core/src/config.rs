use std::fmt;

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_CAPTURE_QUALITY;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HueprobeConfig {
    #[serde(default)]
    pub capture: CaptureConfig,
    #[serde(default)]
    pub sampler: SamplerConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Capture quality in [0.0, 1.0]. Below 1.0 the capture is re-encoded lossy.
    #[serde(default = "default_quality")]
    pub quality: f32,
}

fn default_quality() -> f32 {
    DEFAULT_CAPTURE_QUALITY
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            quality: DEFAULT_CAPTURE_QUALITY,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SamplerConfig {
    #[serde(default)]
    pub filter: ResizeFilter,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub overlap: OverlapPolicy,
}

/// Resampling filter used to reduce a capture to one pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeFilter {
    /// Picks the source pixel nearest the image center.
    Nearest,
    /// Weighted average over the whole frame.
    #[default]
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl ResizeFilter {
    pub fn filter_type(self) -> FilterType {
        match self {
            Self::Nearest => FilterType::Nearest,
            Self::Triangle => FilterType::Triangle,
            Self::CatmullRom => FilterType::CatmullRom,
            Self::Gaussian => FilterType::Gaussian,
            Self::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl fmt::Display for ResizeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nearest => write!(f, "Nearest"),
            Self::Triangle => write!(f, "Triangle"),
            Self::CatmullRom => write!(f, "Catmull-Rom"),
            Self::Gaussian => write!(f, "Gaussian"),
            Self::Lanczos3 => write!(f, "Lanczos3"),
        }
    }
}

/// What `capture` does while a previous capture is still being sampled.
///
/// A completed cycle (sampled or failed) is always replaced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverlapPolicy {
    /// Refuse the new capture.
    #[default]
    Reject,
    /// Drop the in-flight cycle; its result is discarded as stale.
    Replace,
}

impl fmt::Display for OverlapPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reject => write!(f, "Reject"),
            Self::Replace => write!(f, "Replace"),
        }
    }
}
