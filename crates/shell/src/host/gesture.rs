use std::sync::{Arc, Mutex, PoisonError};

use thiserror::Error;
use tokio::sync::oneshot;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    PointerDown,
    TouchStart,
    KeyDown,
}

#[derive(Debug, Error)]
#[error("all gesture triggers were dropped before a gesture arrived")]
pub struct GestureGateClosed;

/// One-shot wait for the first user gesture, required before audio playback
/// is allowed. The wait is consumed exactly once; a trigger may be cloned
/// into every host event hook and the first fire wins.
pub struct GestureGate {
    receiver: oneshot::Receiver<GestureKind>,
}

#[derive(Clone)]
pub struct GestureTrigger {
    slot: Arc<Mutex<Option<oneshot::Sender<GestureKind>>>>,
}

impl GestureGate {
    pub fn new() -> (GestureTrigger, GestureGate) {
        let (sender, receiver) = oneshot::channel();
        (
            GestureTrigger {
                slot: Arc::new(Mutex::new(Some(sender))),
            },
            GestureGate { receiver },
        )
    }

    /// Suspends until a trigger fires. No timeout: a host that never
    /// produces a gesture suspends this future indefinitely.
    pub async fn wait(self) -> Result<GestureKind, GestureGateClosed> {
        self.receiver.await.map_err(|_| GestureGateClosed)
    }
}

impl GestureTrigger {
    pub fn fire(&self, kind: GestureKind) {
        let mut slot = self
            .slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(sender) = slot.take() {
            info!(gesture = ?kind, "user_gesture_fired");
            let _ = sender.send(kind);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn first_fire_wins_and_later_fires_are_no_ops() {
        let (trigger, gate) = GestureGate::new();
        let second = trigger.clone();

        trigger.fire(GestureKind::PointerDown);
        second.fire(GestureKind::KeyDown);

        let kind = gate.wait().await.expect("gesture");
        assert_eq!(kind, GestureKind::PointerDown);
    }

    #[tokio::test]
    async fn dropping_every_trigger_reports_closure_instead_of_hanging() {
        let (trigger, gate) = GestureGate::new();
        drop(trigger);

        assert!(gate.wait().await.is_err());
    }

    #[tokio::test]
    async fn firing_after_the_wait_resolved_is_a_no_op() {
        let (trigger, gate) = GestureGate::new();
        trigger.fire(GestureKind::TouchStart);
        let kind = gate.wait().await.expect("gesture");
        assert_eq!(kind, GestureKind::TouchStart);

        trigger.fire(GestureKind::KeyDown);
    }
}
