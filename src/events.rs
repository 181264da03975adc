//! Session lifecycle signals.
//!
//! Instead of performing navigation itself, the gateway broadcasts a
//! `SessionSignal` when a reply invalidates the current application state.
//! A UI collaborator subscribes and translates signals into navigation
//! (login page on `SessionInvalidated`, forbidden page on `AccessDenied`).

use tokio::sync::broadcast;

/// Buffered signals per subscriber before the oldest is dropped
const SIGNAL_CHANNEL_CAPACITY: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSignal {
    /// The backend answered 401; the session tokens have been cleared.
    SessionInvalidated,
    /// The backend answered 403; the session is intact but the current
    /// user lacks privilege.
    AccessDenied,
}

/// Broadcast hub the gateway emits session signals through.
#[derive(Clone)]
pub struct SignalHub {
    sender: broadcast::Sender<SessionSignal>,
}

impl SignalHub {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(SIGNAL_CHANNEL_CAPACITY);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionSignal> {
        self.sender.subscribe()
    }

    /// Emit a signal. A send with no live subscriber is a no-op.
    pub fn emit(&self, signal: SessionSignal) {
        let _ = self.sender.send(signal);
    }
}

impl Default for SignalHub {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribers_receive_emitted_signals() {
        let hub = SignalHub::new();
        let mut receiver = hub.subscribe();

        hub.emit(SessionSignal::SessionInvalidated);
        hub.emit(SessionSignal::AccessDenied);

        assert_eq!(
            receiver.try_recv().unwrap(),
            SessionSignal::SessionInvalidated
        );
        assert_eq!(receiver.try_recv().unwrap(), SessionSignal::AccessDenied);
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn emitting_without_subscribers_does_not_panic() {
        let hub = SignalHub::new();
        hub.emit(SessionSignal::SessionInvalidated);
    }
}
