//! Change subscriptions over the mirror store.
//!
//! Replaces ambient listener callbacks with an explicit interface:
//! `subscribe(filter)` hands back a `Subscription` that yields matching
//! `ChangeEvent`s and unregisters itself when dropped, tying the listener's
//! lifetime to its consumer's scope.

use std::collections::HashMap;
use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::sync::{Arc, Mutex, Weak};

/// A mutation observed in the mirror store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEvent {
    SoundAdded {
        sound_id: String,
    },
    LikeCountChanged {
        sound_id: String,
        likes: u64,
    },
    LikeAdded {
        sound_id: String,
        wallet: String,
    },
    LikeRemoved {
        sound_id: String,
        wallet: String,
    },
}

impl ChangeEvent {
    fn sound_id(&self) -> &str {
        match self {
            ChangeEvent::SoundAdded { sound_id }
            | ChangeEvent::LikeCountChanged { sound_id, .. }
            | ChangeEvent::LikeAdded { sound_id, .. }
            | ChangeEvent::LikeRemoved { sound_id, .. } => sound_id,
        }
    }

    fn wallet(&self) -> Option<&str> {
        match self {
            ChangeEvent::LikeAdded { wallet, .. } | ChangeEvent::LikeRemoved { wallet, .. } => {
                Some(wallet)
            }
            _ => None,
        }
    }
}

/// Selects which events a subscription receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchFilter {
    /// Every event.
    All,
    /// Events touching one sound.
    Sound(String),
    /// Like events for one wallet.
    Wallet(String),
}

impl WatchFilter {
    fn matches(&self, event: &ChangeEvent) -> bool {
        match self {
            WatchFilter::All => true,
            WatchFilter::Sound(id) => event.sound_id() == id,
            WatchFilter::Wallet(wallet) => event.wallet() == Some(wallet.as_str()),
        }
    }
}

struct Listener {
    filter: WatchFilter,
    sender: Sender<ChangeEvent>,
}

type Registry = Mutex<HashMap<u64, Listener>>;

/// Fan-out of store mutations to live subscriptions.
pub struct Broadcaster {
    registry: Arc<Registry>,
    next_id: Mutex<u64>,
}

impl Default for Broadcaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Broadcaster {
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Mutex::new(HashMap::new())),
            next_id: Mutex::new(0),
        }
    }

    /// Registers a new listener; events are delivered until the returned
    /// `Subscription` is dropped.
    pub fn subscribe(&self, filter: WatchFilter) -> Subscription {
        let (sender, receiver) = channel();
        let id = {
            let mut next_id = self.next_id.lock().expect("subscription registry poisoned");
            let id = *next_id;
            *next_id += 1;
            id
        };
        self.registry
            .lock()
            .expect("subscription registry poisoned")
            .insert(id, Listener { filter, sender });
        tracing::debug!(id, "subscription registered");
        Subscription {
            id,
            receiver,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Delivers an event to every matching listener. Listeners whose receiver
    /// vanished without a drop are pruned here.
    pub fn publish(&self, event: &ChangeEvent) {
        let mut registry = self.registry.lock().expect("subscription registry poisoned");
        registry.retain(|id, listener| {
            if !listener.filter.matches(event) {
                return true;
            }
            match listener.sender.send(event.clone()) {
                Ok(()) => true,
                Err(_) => {
                    tracing::debug!(id, "pruning disconnected subscription");
                    false
                }
            }
        });
    }
}

/// A live subscription handle. Dropping it unregisters the listener.
pub struct Subscription {
    id: u64,
    receiver: Receiver<ChangeEvent>,
    registry: Weak<Registry>,
}

impl Subscription {
    /// Returns the next pending event, if any, without blocking.
    pub fn try_next(&self) -> Option<ChangeEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Drains every pending event.
    pub fn drain(&self) -> Vec<ChangeEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_next() {
            events.push(event);
        }
        events
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .lock()
                .expect("subscription registry poisoned")
                .remove(&self.id);
            tracing::debug!(id = self.id, "subscription dropped");
        }
    }
}
