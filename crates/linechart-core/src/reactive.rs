// File: crates/linechart-core/src/reactive.rs
// Summary: Bounded hand-off queue from the per-frame context to the host.

use std::sync::mpsc::{self, Receiver, SyncSender, TryRecvError, TrySendError};

use thiserror::Error;

use crate::types::DataPoint;

/// Events crossing from the high-frequency context back into the primary
/// one. Producers emit at most one message per logical event (an index
/// change, a focus edge), never one per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HandoffEvent {
    /// The nearest index changed; carries the new active point, if any.
    PointChanged(Option<DataPoint>),
    /// The active point became defined for the first time; the host should
    /// refresh any plain (non-reactive) state once.
    Refresh,
    /// Touch became active over the chart.
    Focus,
    /// Touch was released.
    Blur,
}

#[derive(Debug, Error)]
pub enum HandoffError {
    #[error("hand-off queue is full")]
    Full,
    #[error("hand-off receiver disconnected")]
    Closed,
}

/// Create a bounded hand-off pair. `capacity` bounds how far the primary
/// context may fall behind before events are dropped.
pub fn handoff(capacity: usize) -> (HandoffSender, HandoffReceiver) {
    let (tx, rx) = mpsc::sync_channel(capacity);
    (HandoffSender(tx), HandoffReceiver(rx))
}

pub struct HandoffSender(SyncSender<HandoffEvent>);

impl HandoffSender {
    /// Non-blocking send; the render path must never stall on the host.
    pub fn send(&self, event: HandoffEvent) -> Result<(), HandoffError> {
        self.0.try_send(event).map_err(|e| match e {
            TrySendError::Full(_) => HandoffError::Full,
            TrySendError::Disconnected(_) => HandoffError::Closed,
        })
    }

    /// Send, logging and dropping the event when the queue is saturated.
    pub fn send_or_drop(&self, event: HandoffEvent) {
        if let Err(err) = self.send(event) {
            log::debug!("hand-off dropped {event:?}: {err}");
        }
    }
}

pub struct HandoffReceiver(Receiver<HandoffEvent>);

impl HandoffReceiver {
    pub fn try_recv(&self) -> Option<HandoffEvent> {
        match self.0.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Drain everything currently queued.
    pub fn drain(&self) -> Vec<HandoffEvent> {
        std::iter::from_fn(|| self.try_recv()).collect()
    }
}
