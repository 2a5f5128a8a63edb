//! Profile store (single entity)

use std::sync::Arc;

use folio_core::{Profile, ProfileApi, UpdateProfile};
use tokio::sync::watch;
use tracing::instrument;

use super::report_failure;
use crate::state::LoadingState;
use crate::toast::ToastService;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileState {
    pub profile: Option<Profile>,
    pub loading: LoadingState,
}

pub struct ProfileStore {
    api: Arc<dyn ProfileApi>,
    toasts: ToastService,
    state: watch::Sender<ProfileState>,
}

impl ProfileStore {
    pub fn new(api: Arc<dyn ProfileApi>, toasts: ToastService) -> Self {
        let (state, _) = watch::channel(ProfileState::default());
        Self { api, toasts, state }
    }

    pub fn subscribe(&self) -> watch::Receiver<ProfileState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> ProfileState {
        self.state.borrow().clone()
    }

    pub fn profile(&self) -> Option<Profile> {
        self.state.borrow().profile.clone()
    }

    #[instrument(skip(self))]
    pub async fn load(&self) -> bool {
        self.state.send_modify(|s| s.loading.start());

        match self.api.get_profile().await {
            Ok(profile) => {
                self.state.send_modify(|s| {
                    s.profile = Some(profile);
                    s.loading.succeed();
                });
                true
            }
            Err(err) => {
                report_failure(
                    &self.toasts,
                    "load_profile",
                    "Erreur de chargement",
                    "Impossible de charger le profil",
                    &err,
                );
                self.state.send_modify(|s| s.loading.fail(err));
                false
            }
        }
    }

    /// Apply a partial update; the server's answer replaces the profile
    #[instrument(skip(self, payload))]
    pub async fn update(&self, payload: &UpdateProfile) -> bool {
        match self.api.update_profile(payload).await {
            Ok(profile) => {
                self.state.send_modify(|s| s.profile = Some(profile));
                self.toasts.success("Profil mis à jour", "");
                true
            }
            Err(err) => {
                report_failure(
                    &self.toasts,
                    "update_profile",
                    "Erreur lors de la mise à jour",
                    "Impossible de mettre à jour le profil",
                    &err,
                );
                false
            }
        }
    }

    pub fn clear_error(&self) {
        self.state.send_if_modified(|s| {
            let had_error = s.loading.has_error();
            s.loading.clear_error();
            had_error
        });
    }
}
