use super::state::SessionState;

/// Receives every session transition, after it has happened.
///
/// Observers must not reach back into the session they observe.
pub trait SessionObserver {
    fn on_transition(&self, state: &SessionState);
}

impl<F> SessionObserver for F
where
    F: Fn(&SessionState),
{
    fn on_transition(&self, state: &SessionState) {
        self(state)
    }
}

/// Registration handle returned by `CaptureSession::subscribe`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

#[derive(Default)]
pub(super) struct ObserverRegistry {
    next_id: u64,
    observers: Vec<(ObserverId, Box<dyn SessionObserver>)>,
}

impl ObserverRegistry {
    pub(super) fn add(&mut self, observer: Box<dyn SessionObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    pub(super) fn remove(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub(super) fn len(&self) -> usize {
        self.observers.len()
    }

    /// Notify in registration order.
    pub(super) fn notify(&self, state: &SessionState) {
        for (_, observer) in &self.observers {
            observer.on_transition(state);
        }
    }
}
