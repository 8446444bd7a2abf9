//! Notification publishing.
//!
//! The contract hands each [`Notification`] to an [`EventSink`] and never
//! looks at it again. During a command the host passes a `Vec` that buffers
//! notifications; once the command's writes commit they are forwarded, in
//! order, to the host's real sink.

use leaderboard_core::{Identity, Notification, Score, ScoreSubmitted};
use tokio::sync::broadcast;

/// A channel that accepts published notifications.
pub trait EventSink {
    fn publish(&mut self, notification: Notification);
}

impl EventSink for Vec<Notification> {
    fn publish(&mut self, notification: Notification) {
        self.push(notification);
    }
}

impl<E: EventSink + ?Sized> EventSink for &mut E {
    fn publish(&mut self, notification: Notification) {
        (**self).publish(notification)
    }
}

/// Serialize a `ScoreSubmitted` record and publish it.
pub fn emit_score_submitted<E: EventSink + ?Sized>(sink: &mut E, player: &Identity, score: Score) {
    let event = ScoreSubmitted::new(*player, score);
    sink.publish(event.to_notification());
}

/// Fans notifications out to any number of async subscribers.
///
/// Delivery is best effort. Publishing with no live subscriber drops the
/// notification. A subscriber that falls more than `capacity` notifications
/// behind loses the oldest ones; its next `recv` reports
/// [`RecvError::Lagged`](broadcast::error::RecvError::Lagged) with the number
/// skipped and then resumes from the oldest retained notification.
#[derive(Debug, Clone)]
pub struct BroadcastSink {
    tx: broadcast::Sender<Notification>,
}

impl BroadcastSink {
    /// Create a sink whose subscribers may lag by up to `capacity` notifications.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for BroadcastSink {
    fn default() -> Self {
        Self::new(1024)
    }
}

impl EventSink for BroadcastSink {
    fn publish(&mut self, notification: Notification) {
        if self.tx.send(notification).is_err() {
            tracing::trace!("notification dropped: no subscribers");
        }
    }
}
