//! Contact form submission store

use std::sync::Arc;

use folio_core::{ContactApi, ContactMessage};
use tokio::sync::watch;
use tracing::{info, instrument};

use super::report_failure;
use crate::state::LoadingState;
use crate::toast::ToastService;

/// Body of the toast shown once the server accepts a message
pub const CONTACT_SENT_MESSAGE: &str = "Merci pour votre message, je vous répondrai rapidement.";

/// Submission status; messages themselves are not kept
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactState {
    pub loading: LoadingState,
    pub success: bool,
}

pub struct ContactStore {
    api: Arc<dyn ContactApi>,
    toasts: ToastService,
    state: watch::Sender<ContactState>,
}

impl ContactStore {
    pub fn new(api: Arc<dyn ContactApi>, toasts: ToastService) -> Self {
        let (state, _) = watch::channel(ContactState::default());
        Self { api, toasts, state }
    }

    pub fn subscribe(&self) -> watch::Receiver<ContactState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> ContactState {
        self.state.borrow().clone()
    }

    /// Forward a message to the server.
    ///
    /// Field rules are checked by the caller with
    /// [`validate_contact`](folio_core::validate_contact); nothing is
    /// re-validated here.
    #[instrument(skip(self, message), fields(email = %message.email))]
    pub async fn send_message(&self, message: &ContactMessage) -> bool {
        self.state.send_modify(|s| {
            s.loading.start();
            s.success = false;
        });

        match self.api.send_contact(message).await {
            Ok(receipt) => {
                info!(
                    receipt_id = receipt.id,
                    receipt = %receipt.message,
                    "Contact message accepted"
                );
                self.state.send_modify(|s| {
                    s.loading.succeed();
                    s.success = true;
                });
                self.toasts.success("Message envoyé", CONTACT_SENT_MESSAGE);
                true
            }
            Err(err) => {
                report_failure(
                    &self.toasts,
                    "send_contact",
                    "Erreur lors de l'envoi",
                    "Impossible d'envoyer le message",
                    &err,
                );
                self.state.send_modify(|s| s.loading.fail(err));
                false
            }
        }
    }

    pub fn clear_success(&self) {
        self.state.send_if_modified(|s| std::mem::take(&mut s.success));
    }

    pub fn reset(&self) {
        self.state.send_if_modified(|s| {
            let dirty = *s != ContactState::default();
            *s = ContactState::default();
            dirty
        });
    }
}
