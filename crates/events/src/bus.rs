//! Event publishing/subscription abstraction (mechanics only).
//!
//! The bus distributes invalidation notices to view refreshers. It makes
//! minimal assumptions:
//!
//! - **Transport-agnostic**: in-memory channels today, anything later.
//! - **Best-effort fan-out**: a refresh notice that is dropped costs one
//!   stale render until the next full load, nothing more.
//! - **No persistence**: the backend is the source of truth; events carry no
//!   state worth storing.

use std::sync::Arc;
use std::sync::mpsc::Receiver;

/// A subscription to a stream of published messages.
///
/// Each subscription gets a copy of every message published after it was
/// created (broadcast semantics). Designed for single-threaded consumption:
/// one subscription per refresher loop.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, std::sync::mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Drain everything currently queued, without blocking.
    pub fn drain(&self) -> Vec<M> {
        let mut out = Vec::new();
        while let Ok(msg) = self.receiver.try_recv() {
            out.push(msg);
        }
        out
    }
}

/// Publish/subscribe contract for refresh notices.
///
/// `publish()` is fire-and-forget from the mutation's point of view: failures
/// are surfaced to the caller but a mutation that already succeeded against
/// the backend stays succeeded regardless of what the bus does.
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}

impl<M, B> EventBus<M> for Arc<B>
where
    B: EventBus<M> + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        (**self).publish(message)
    }

    fn subscribe(&self) -> Subscription<M> {
        (**self).subscribe()
    }
}
