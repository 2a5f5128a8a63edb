//! Domain stores
//!
//! Each store owns one slice of state behind a `watch` channel. Actions call
//! the API, reconcile the state, and report the outcome to the shared
//! [`ToastService`]. Load failures are also kept in the store's
//! [`LoadingState`](crate::LoadingState); mutation failures are toast-only.

mod contact;
mod profile;
mod projects;
mod skills;

pub use contact::{ContactState, ContactStore, CONTACT_SENT_MESSAGE};
pub use profile::{ProfileState, ProfileStore};
pub use projects::{ProjectState, ProjectStore};
pub use skills::{SkillState, SkillStore};

use folio_core::{CatalogEntry, ErrorInfo};
use tracing::warn;

use crate::toast::ToastService;

/// Log a failed action and queue an error toast with the server's message
pub(crate) fn report_failure(
    toasts: &ToastService,
    action: &'static str,
    title: &str,
    fallback: &str,
    error: &ErrorInfo,
) {
    warn!(action, code = %error.code, message = %error.message, "Store action failed");
    toasts.error(title, error.display_message(fallback));
}

/// Replace the entry with the same id; returns `false` if there is none
pub(crate) fn replace_by_id<T: CatalogEntry>(items: &mut [T], updated: T) -> bool {
    match items.iter_mut().find(|item| item.id() == updated.id()) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

/// Remove the entry with the given id; returns `false` if there is none
pub(crate) fn remove_by_id<T: CatalogEntry>(items: &mut Vec<T>, id: i32) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}
