//! Per-capture state machine: Idle → Captured → Sampled | Failed → (retake) Idle.

mod observer;
mod state;

pub use observer::{ObserverId, SessionObserver};
pub use state::{CaptureTicket, Resolution, SessionPhase, SessionState};

use std::cell::RefCell;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::{OverlapPolicy, SessionConfig};
use crate::error::{SampleError, SessionError};
use crate::pixel::{CapturedImage, DetectedColor};
use crate::provider::{CaptureOptions, ImageCaptureProvider, ImageTransformProvider};
use crate::sampler::ColorSampler;

use observer::ObserverRegistry;

pub struct CaptureSession {
    state: SessionState,
    /// Bumped on every begin and retake; tickets from older generations are stale.
    generation: u64,
    overlap: OverlapPolicy,
    observers: ObserverRegistry,
}

impl Default for CaptureSession {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CaptureSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaptureSession")
            .field("state", &self.state)
            .field("generation", &self.generation)
            .field("overlap", &self.overlap)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl CaptureSession {
    pub fn new() -> Self {
        Self::with_config(&SessionConfig::default())
    }

    pub fn with_config(config: &SessionConfig) -> Self {
        Self {
            state: SessionState::Idle,
            generation: 0,
            overlap: config.overlap,
            observers: ObserverRegistry::default(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.phase()
    }

    /// The held image in Captured, Sampled and Failed; `None` when idle.
    pub fn current_image(&self) -> Option<&CapturedImage> {
        self.state.image().map(Arc::as_ref)
    }

    /// The detected color, only in Sampled.
    pub fn current_color(&self) -> Option<DetectedColor> {
        self.state.color()
    }

    /// Why the last cycle failed, only in Failed.
    pub fn failure(&self) -> Option<&SampleError> {
        self.state.failure()
    }

    pub fn subscribe(&mut self, observer: impl SessionObserver + 'static) -> ObserverId {
        self.observers.add(Box::new(observer))
    }

    /// Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.remove(id)
    }

    fn transition(&mut self, next: SessionState) {
        debug!(from = %self.state.phase(), to = %next.phase(), "Session transition");
        self.state = next;
        self.observers.notify(&self.state);
    }

    /// Take ownership of a new capture and move to Captured.
    ///
    /// Accepted from Idle or a completed cycle. While a cycle is in flight
    /// the session's [`OverlapPolicy`] decides.
    pub fn begin(&mut self, image: CapturedImage) -> Result<CaptureTicket, SessionError> {
        if let SessionState::Captured { .. } = self.state {
            match self.overlap {
                OverlapPolicy::Reject => {
                    warn!("Capture rejected, previous capture still sampling");
                    return Err(SessionError::CaptureInFlight);
                }
                OverlapPolicy::Replace => {
                    info!("Replacing in-flight capture");
                }
            }
        }

        self.generation += 1;
        let image = Arc::new(image);
        self.transition(SessionState::Captured {
            image: Arc::clone(&image),
        });
        Ok(CaptureTicket {
            generation: self.generation,
            image,
        })
    }

    /// Hand back the outcome of sampling `ticket`'s image.
    ///
    /// Dropped as stale if the session was retaken or recaptured since.
    pub fn resolve(
        &mut self,
        ticket: CaptureTicket,
        outcome: Result<DetectedColor, SampleError>,
    ) -> Resolution {
        let current = matches!(self.state, SessionState::Captured { .. })
            && ticket.generation == self.generation;
        if !current {
            debug!(
                ticket = ticket.generation,
                session = self.generation,
                "Discarding stale sample"
            );
            return Resolution::Stale;
        }

        let image = ticket.image;
        let next = match outcome {
            Ok(color) => SessionState::Sampled { image, color },
            Err(reason) => {
                warn!(error = %reason, "Color detection failed");
                SessionState::Failed { image, reason }
            }
        };
        self.transition(next);
        Resolution::Applied
    }

    /// Drop the held image and color and return to Idle. No-op when idle.
    pub fn retake(&mut self) {
        if let SessionState::Idle = self.state {
            return;
        }
        self.generation += 1;
        self.transition(SessionState::Idle);
    }

    /// Capture `image` and sample it before returning.
    ///
    /// Sampling failures leave the session in Failed and yield `Ok(None)`.
    pub async fn capture<T: ImageTransformProvider>(
        &mut self,
        image: CapturedImage,
        sampler: &ColorSampler<T>,
    ) -> Result<Option<DetectedColor>, SessionError> {
        let ticket = self.begin(image)?;
        let outcome = sampler.sample(ticket.image()).await;
        self.resolve(ticket, outcome);
        Ok(self.current_color())
    }

    /// Ask `provider` for a photo, then [`capture`](Self::capture) it.
    ///
    /// A capture-provider error leaves the session exactly as it was.
    pub async fn capture_from<P, T>(
        &mut self,
        provider: &P,
        options: CaptureOptions,
        sampler: &ColorSampler<T>,
    ) -> Result<Option<DetectedColor>, SessionError>
    where
        P: ImageCaptureProvider,
        T: ImageTransformProvider,
    {
        if let (SessionState::Captured { .. }, OverlapPolicy::Reject) = (&self.state, self.overlap)
        {
            return Err(SessionError::CaptureInFlight);
        }
        let options = CaptureOptions {
            include_encoded_payload: true,
            ..options
        };
        let image = provider.capture_image(&options).await?;
        self.capture(image, sampler).await
    }
}

/// Run a capture cycle on a shared session without holding the borrow
/// across the resize, so the caller may retake while it is in flight.
pub async fn capture_shared<T: ImageTransformProvider>(
    session: &RefCell<CaptureSession>,
    image: CapturedImage,
    sampler: &ColorSampler<T>,
) -> Result<Resolution, SessionError> {
    let ticket = session.borrow_mut().begin(image)?;
    let outcome = sampler.sample(ticket.image()).await;
    Ok(session.borrow_mut().resolve(ticket, outcome))
}
