//! Completion tracking for a dynamically growing tree of tasks
//!
//! A walk cannot know up front how many steps it will spawn, so it counts
//! outstanding steps instead. Each step holds a [`StepToken`]; the walk is over
//! once every token has been dropped.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

#[derive(Debug, Default)]
struct Inner {
    outstanding: AtomicUsize,
    notify: Notify,
}

/// Counter of outstanding walk steps
///
/// Children must be tracked from inside their parent (before the parent's own
/// token drops), which keeps the count from touching zero while work remains.
#[derive(Debug, Clone, Default)]
pub struct CompletionTracker {
    inner: Arc<Inner>,
}

/// Proof that one step is outstanding; dropping it marks the step done
///
/// Dropping happens on every exit path, including early returns and panics
/// inside the owning task.
#[derive(Debug)]
#[must_use = "dropping the token immediately marks the step as finished"]
pub struct StepToken {
    inner: Arc<Inner>,
}

impl CompletionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one more outstanding step
    pub fn track(&self) -> StepToken {
        self.inner.outstanding.fetch_add(1, Ordering::SeqCst);
        StepToken {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Number of steps still outstanding
    pub fn outstanding(&self) -> usize {
        self.inner.outstanding.load(Ordering::SeqCst)
    }

    /// Waits until no step is outstanding
    ///
    /// Returns immediately if nothing was ever tracked.
    pub async fn wait(&self) {
        loop {
            // Register interest before reading the count so a wakeup between
            // the load and the await is not lost.
            let notified = self.inner.notify.notified();
            if self.outstanding() == 0 {
                return;
            }
            notified.await;
        }
    }
}

impl Drop for StepToken {
    fn drop(&mut self) {
        if self.inner.outstanding.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.inner.notify.notify_waiters();
        }
    }
}
