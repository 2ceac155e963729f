//! Single-resolution result slot shared by racing tasks.
//!
//! The first task to call [`RaceSlot::resolve`] delivers its value; every
//! later call is a no-op that returns `false`. A losing task may still run to
//! completion, but its result is dropped and never reaches the receiver.

use parking_lot::Mutex;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;

pub struct RaceSlot<T> {
    sender: Arc<Mutex<Option<oneshot::Sender<T>>>>,
}

impl<T> Clone for RaceSlot<T> {
    fn clone(&self) -> Self {
        Self {
            sender: Arc::clone(&self.sender),
        }
    }
}

impl<T> RaceSlot<T> {
    /// Deliver `value` if nobody has yet. Returns whether this call won.
    pub fn resolve(&self, value: T) -> bool {
        match self.sender.lock().take() {
            Some(tx) => tx.send(value).is_ok(),
            None => false,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.sender.lock().is_none()
    }
}

/// Create a slot and the receiver that observes its single value.
pub fn race_slot<T>() -> (RaceSlot<T>, oneshot::Receiver<T>) {
    let (tx, rx) = oneshot::channel();
    (
        RaceSlot {
            sender: Arc::new(Mutex::new(Some(tx))),
        },
        rx,
    )
}

/// Run `task` against a timer of length `timeout`.
///
/// Both run as independent tasks feeding one slot. Returns the task's output
/// if it finished first, otherwise `on_timeout()`. `None` only if both
/// tasks died without resolving.
pub async fn race_with_timer<T, F, G>(task: F, timeout: Duration, on_timeout: G) -> Option<T>
where
    T: Send + 'static,
    F: Future<Output = T> + Send + 'static,
    G: FnOnce() -> T + Send + 'static,
{
    let (slot, rx) = race_slot();

    let task_slot = slot.clone();
    tokio::spawn(async move {
        let value = task.await;
        if !task_slot.resolve(value) {
            tracing::debug!("Task finished after the timer; result dropped");
        }
    });

    tokio::spawn(async move {
        tokio::time::sleep(timeout).await;
        if !slot.resolve(on_timeout()) {
            tracing::trace!("Timer fired after the task resolved");
        }
    });

    rx.await.ok()
}
