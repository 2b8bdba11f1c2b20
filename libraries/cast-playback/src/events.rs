//! Player Events
//!
//! Change notifications for presentation code. Every mutation that changes
//! observable state emits one event per changed value; commands that turn
//! out to be no-ops emit nothing.

use cast_core::Episode;
use crossbeam_channel::{unbounded, Receiver, Sender};
use serde::{Deserialize, Serialize};

/// Events emitted by the player controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// The queue was replaced by `play` or `play_list`
    QueueReplaced {
        /// New queue length
        length: usize,
    },

    /// The selected episode or index changed
    SelectionChanged {
        index: usize,
        /// `None` when the index points past the end of the queue
        episode: Option<Episode>,
    },

    /// Playing flag changed
    PlayingChanged(bool),

    /// Loop flag changed
    LoopingChanged(bool),

    /// Shuffle flag changed
    ShufflingChanged(bool),

    /// Elapsed time changed (time report, metadata load or seek)
    ProgressChanged {
        /// Elapsed whole seconds
        elapsed: u64,
    },

    /// The queue was emptied
    Cleared,
}

/// Fan-out of player events to any number of subscribers
#[derive(Debug, Default)]
pub struct EventBus {
    subscribers: Vec<Sender<PlayerEvent>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber
    pub fn subscribe(&mut self) -> Receiver<PlayerEvent> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Deliver an event to every live subscriber, dropping disconnected ones
    pub fn emit(&mut self, event: PlayerEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
