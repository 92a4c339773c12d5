//! Event publishing/subscription abstraction (mechanics only).
//!
//! A storefront session publishes every cart mutation so the presentation
//! layer can surface confirmations ("Jacket added to cart!", "Order placed")
//! without the session knowing anything about how they are shown.
//!
//! - Broadcast: each subscriber receives a copy of every message published
//!   after it subscribed.
//! - Ordered per publisher: messages arrive in publish order.
//! - No persistence: a subscriber that is dropped simply stops receiving.

use std::sync::mpsc::{Receiver, TryRecvError};
use std::sync::{Arc, Weak};

/// A subscription to an event stream.
///
/// ```ignore
/// let subscription = session.subscribe();
/// session.add_to_cart(product)?;
///
/// while let Ok(envelope) = subscription.try_recv() {
///     show_toast(envelope.payload());
/// }
/// ```
///
/// Subscriptions are meant for single-threaded consumption. Nothing here
/// blocks: messages are only ever read if already queued.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
    alive: Arc<()>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self {
            receiver,
            alive: Arc::new(()),
        }
    }

    /// Handle that stops upgrading once this subscription is dropped.
    pub(crate) fn liveness(&self) -> Weak<()> {
        Arc::downgrade(&self.alive)
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, TryRecvError> {
        self.receiver.try_recv()
    }

    /// Drain every message that is already queued, without blocking.
    pub fn drain(&self) -> Vec<M> {
        self.receiver.try_iter().collect()
    }
}

/// Domain-agnostic event bus (pub/sub abstraction).
///
/// `publish()` may fail; callers decide whether that failure matters. The
/// storefront session logs and continues, since cart mutations never fail.
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}
