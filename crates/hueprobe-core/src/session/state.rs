use std::fmt;
use std::sync::Arc;

use crate::error::SampleError;
use crate::pixel::{CapturedImage, DetectedColor};

/// Where a capture session currently is.
#[derive(Debug)]
pub enum SessionState {
    /// No image held.
    Idle,
    /// Image held, sampling in flight.
    Captured { image: Arc<CapturedImage> },
    /// Image held with its detected color.
    Sampled {
        image: Arc<CapturedImage>,
        color: DetectedColor,
    },
    /// Image held, sampling failed. No color.
    Failed {
        image: Arc<CapturedImage>,
        reason: SampleError,
    },
}

impl SessionState {
    pub fn phase(&self) -> SessionPhase {
        match self {
            Self::Idle => SessionPhase::Idle,
            Self::Captured { .. } => SessionPhase::Captured,
            Self::Sampled { .. } => SessionPhase::Sampled,
            Self::Failed { .. } => SessionPhase::Failed,
        }
    }

    pub fn image(&self) -> Option<&Arc<CapturedImage>> {
        match self {
            Self::Idle => None,
            Self::Captured { image } | Self::Sampled { image, .. } | Self::Failed { image, .. } => {
                Some(image)
            }
        }
    }

    pub fn color(&self) -> Option<DetectedColor> {
        match self {
            Self::Sampled { color, .. } => Some(*color),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&SampleError> {
        match self {
            Self::Failed { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

/// Discriminant of [`SessionState`] without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Captured,
    Sampled,
    Failed,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Captured => write!(f, "Captured"),
            Self::Sampled => write!(f, "Sampled"),
            Self::Failed => write!(f, "Failed"),
        }
    }
}

/// Handle for one in-flight capture cycle, returned by `CaptureSession::begin`.
#[derive(Debug)]
pub struct CaptureTicket {
    pub(super) generation: u64,
    pub(super) image: Arc<CapturedImage>,
}

impl CaptureTicket {
    /// The image to sample.
    pub fn image(&self) -> &CapturedImage {
        &self.image
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What happened to a sampling outcome handed back to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The session moved to Sampled or Failed.
    Applied,
    /// The session was retaken or recaptured meanwhile; the outcome was dropped.
    Stale,
}
