//! Read-only projections over a store's state
//!
//! A [`DerivedView`] holds a receiver on the store's `watch` channel and a
//! projection function. It has no state of its own: every read recomputes the
//! projection from the latest snapshot, so it can never disagree with the store.

use std::fmt;
use std::sync::Arc;

use tokio::sync::watch;

type Projection<S, T> = Arc<dyn Fn(&S) -> T + Send + Sync>;

pub struct DerivedView<S, T> {
    source: watch::Receiver<S>,
    project: Projection<S, T>,
}

impl<S, T> DerivedView<S, T> {
    pub fn new(
        source: watch::Receiver<S>,
        project: impl Fn(&S) -> T + Send + Sync + 'static,
    ) -> Self {
        Self {
            source,
            project: Arc::new(project),
        }
    }

    /// Projection of the current snapshot
    pub fn current(&self) -> T {
        (self.project)(&*self.source.borrow())
    }

    /// Wait for the next state change and return the recomputed projection.
    ///
    /// Returns `None` once the owning store has been dropped.
    pub async fn changed(&mut self) -> Option<T> {
        self.source.changed().await.ok()?;
        Some((self.project)(&*self.source.borrow_and_update()))
    }
}

impl<S, T> Clone for DerivedView<S, T> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            project: Arc::clone(&self.project),
        }
    }
}

impl<S, T> fmt::Debug for DerivedView<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedView").finish_non_exhaustive()
    }
}
