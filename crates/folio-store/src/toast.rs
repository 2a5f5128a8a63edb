//! Notification pipeline
//!
//! [`ToastService`] is a cheaply cloneable handle on one ordered queue of
//! transient notifications. Stores push to it as a side effect of their
//! actions; presentation code reads it through [`ToastService::subscribe`].
//! Toasts with a non-zero duration remove themselves via a tokio timer task.

use std::fmt;
use std::sync::{Arc, Weak};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tracing::{debug, warn};
use uuid::Uuid;

/// Default lifetime of a toast
pub const DEFAULT_DURATION: Duration = Duration::from_millis(5000);

/// Default lifetime used by [`ToastService::error`]
pub const ERROR_DURATION: Duration = Duration::from_millis(8000);

/// Opaque toast identifier, unique for the life of the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(Uuid);

impl ToastId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

/// A queued notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub title: String,
    pub message: Option<String>,
    /// Zero means the toast stays until dismissed
    pub duration: Duration,
    pub dismissible: bool,
}

/// Input to [`ToastService::add`]; unset fields take the defaults
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastOptions {
    pub kind: Option<ToastKind>,
    pub title: String,
    pub message: Option<String>,
    pub duration: Option<Duration>,
    pub dismissible: Option<bool>,
}

impl ToastOptions {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn kind(mut self, kind: ToastKind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Keep the toast until it is dismissed
    #[must_use]
    pub fn persistent(self) -> Self {
        self.duration(Duration::ZERO)
    }

    #[must_use]
    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = Some(dismissible);
        self
    }
}

#[derive(Debug)]
struct ToastQueue {
    toasts: watch::Sender<Vec<Toast>>,
}

/// Shared notification queue
#[derive(Debug, Clone)]
pub struct ToastService {
    inner: Arc<ToastQueue>,
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastService {
    pub fn new() -> Self {
        let (toasts, _) = watch::channel(Vec::new());
        Self {
            inner: Arc::new(ToastQueue { toasts }),
        }
    }

    /// Receiver notified on every queue change
    pub fn subscribe(&self) -> watch::Receiver<Vec<Toast>> {
        self.inner.toasts.subscribe()
    }

    /// Copy of the queue, oldest first
    pub fn snapshot(&self) -> Vec<Toast> {
        self.inner.toasts.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.inner.toasts.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.toasts.borrow().is_empty()
    }

    /// Append a toast and schedule its expiry.
    ///
    /// Expiry needs a tokio runtime; outside one the toast is kept until
    /// dismissed.
    pub fn add(&self, options: ToastOptions) -> ToastId {
        let toast = Toast {
            id: ToastId::new(),
            kind: options.kind.unwrap_or_default(),
            title: options.title,
            message: options.message,
            duration: options.duration.unwrap_or(DEFAULT_DURATION),
            dismissible: options.dismissible.unwrap_or(true),
        };
        let (id, duration) = (toast.id, toast.duration);

        debug!(%id, kind = ?toast.kind, title = %toast.title, "Toast queued");
        self.inner.toasts.send_modify(|queue| queue.push(toast));

        if !duration.is_zero() {
            self.schedule_expiry(id, duration);
        }
        id
    }

    /// Remove a toast; returns `false` if it was already gone
    pub fn dismiss(&self, id: ToastId) -> bool {
        self.inner.toasts.send_if_modified(|queue| {
            let before = queue.len();
            queue.retain(|toast| toast.id != id);
            queue.len() != before
        })
    }

    pub fn clear(&self) {
        self.inner.toasts.send_if_modified(|queue| {
            let had_toasts = !queue.is_empty();
            queue.clear();
            had_toasts
        });
    }

    pub fn success(&self, title: impl Into<String>, message: impl Into<String>) -> ToastId {
        self.add(with_message(ToastOptions::new(title).kind(ToastKind::Success), message))
    }

    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) -> ToastId {
        self.add(with_message(
            ToastOptions::new(title)
                .kind(ToastKind::Error)
                .duration(ERROR_DURATION),
            message,
        ))
    }

    pub fn warning(&self, title: impl Into<String>, message: impl Into<String>) -> ToastId {
        self.add(with_message(ToastOptions::new(title).kind(ToastKind::Warning), message))
    }

    pub fn info(&self, title: impl Into<String>, message: impl Into<String>) -> ToastId {
        self.add(with_message(ToastOptions::new(title).kind(ToastKind::Info), message))
    }

    fn schedule_expiry(&self, id: ToastId, duration: Duration) {
        let Ok(handle) = Handle::try_current() else {
            warn!(%id, "No tokio runtime; toast will stay until dismissed");
            return;
        };

        // A weak handle so pending timers do not keep a dropped queue alive.
        let queue: Weak<ToastQueue> = Arc::downgrade(&self.inner);
        handle.spawn(async move {
            tokio::time::sleep(duration).await;
            if let Some(inner) = queue.upgrade() {
                ToastService { inner }.dismiss(id);
            }
        });
    }
}

/// Empty messages are treated as absent
fn with_message(options: ToastOptions, message: impl Into<String>) -> ToastOptions {
    let message = message.into();
    if message.is_empty() {
        options
    } else {
        options.message(message)
    }
}
