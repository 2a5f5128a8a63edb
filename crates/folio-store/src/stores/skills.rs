//! Skill catalogue store

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use folio_core::{CreateSkill, Skill, SkillApi, SkillCategories, SkillQuery, UpdateSkill};
use tokio::sync::watch;
use tracing::{debug, instrument};

use super::{remove_by_id, replace_by_id, report_failure};
use crate::reactive::DerivedView;
use crate::state::LoadingState;
use crate::toast::ToastService;
use crate::views;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillState {
    pub skills: Vec<Skill>,
    /// Filled by [`SkillStore::load_categories`]
    pub categories: Option<SkillCategories>,
    pub loading: LoadingState,
}

pub struct SkillStore {
    api: Arc<dyn SkillApi>,
    toasts: ToastService,
    state: watch::Sender<SkillState>,
    load_tickets: AtomicU64,
}

impl SkillStore {
    pub fn new(api: Arc<dyn SkillApi>, toasts: ToastService) -> Self {
        let (state, _) = watch::channel(SkillState::default());
        Self {
            api,
            toasts,
            state,
            load_tickets: AtomicU64::new(0),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<SkillState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> SkillState {
        self.state.borrow().clone()
    }

    pub fn skills(&self) -> Vec<Skill> {
        self.state.borrow().skills.clone()
    }

    #[instrument(skip(self))]
    pub async fn load(&self, query: SkillQuery) -> bool {
        let ticket = self.load_tickets.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_modify(|s| s.loading.start());

        let result = self.api.list_skills(&query).await;

        let latest = self.load_tickets.load(Ordering::SeqCst);
        if ticket < latest {
            debug!(ticket, latest, "Older skill load resolved after a newer one");
        }

        match result {
            Ok(skills) => {
                debug!(count = skills.len(), "Skills loaded");
                self.state.send_modify(|s| {
                    s.skills = skills;
                    s.loading.succeed();
                });
                true
            }
            Err(err) => {
                report_failure(
                    &self.toasts,
                    "load_skills",
                    "Erreur de chargement",
                    "Impossible de charger les compétences",
                    &err,
                );
                self.state.send_modify(|s| s.loading.fail(err));
                false
            }
        }
    }

    /// Fetch the used/available category lists; failures only raise a toast
    #[instrument(skip(self))]
    pub async fn load_categories(&self) -> bool {
        match self.api.skill_categories().await {
            Ok(categories) => {
                self.state.send_modify(|s| s.categories = Some(categories));
                true
            }
            Err(err) => {
                report_failure(
                    &self.toasts,
                    "load_skill_categories",
                    "Erreur de chargement",
                    "Impossible de charger les catégories",
                    &err,
                );
                false
            }
        }
    }

    #[instrument(skip(self, payload), fields(name = %payload.name))]
    pub async fn create(&self, payload: &CreateSkill) -> bool {
        match self.api.create_skill(payload).await {
            Ok(skill) => {
                let message = format!("« {} » a été ajoutée", skill.name);
                self.state.send_modify(|s| s.skills.push(skill));
                self.toasts.success("Compétence créée", message);
                true
            }
            Err(err) => {
                report_failure(
                    &self.toasts,
                    "create_skill",
                    "Erreur lors de la création",
                    "Impossible de créer la compétence",
                    &err,
                );
                false
            }
        }
    }

    #[instrument(skip(self, payload))]
    pub async fn update(&self, id: i32, payload: &UpdateSkill) -> bool {
        match self.api.update_skill(id, payload).await {
            Ok(skill) => {
                let message = format!("« {} » a été modifiée", skill.name);
                self.state
                    .send_if_modified(|s| replace_by_id(&mut s.skills, skill));
                self.toasts.success("Compétence mise à jour", message);
                true
            }
            Err(err) => {
                report_failure(
                    &self.toasts,
                    "update_skill",
                    "Erreur lors de la mise à jour",
                    "Impossible de mettre à jour la compétence",
                    &err,
                );
                false
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> bool {
        match self.api.delete_skill(id).await {
            Ok(()) => {
                self.state.send_if_modified(|s| remove_by_id(&mut s.skills, id));
                self.toasts.success("Compétence supprimée", "");
                true
            }
            Err(err) => {
                report_failure(
                    &self.toasts,
                    "delete_skill",
                    "Erreur lors de la suppression",
                    "Impossible de supprimer la compétence",
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

    pub fn grouped_by_category(&self) -> DerivedView<SkillState, BTreeMap<String, Vec<Skill>>> {
        DerivedView::new(self.subscribe(), |s: &SkillState| views::group_by_category(&s.skills))
    }

    pub fn categories(&self) -> DerivedView<SkillState, Vec<String>> {
        DerivedView::new(self.subscribe(), |s: &SkillState| views::categories(&s.skills))
    }

    pub fn by_category(&self, label: impl Into<String>) -> DerivedView<SkillState, Vec<Skill>> {
        let label = label.into();
        DerivedView::new(self.subscribe(), move |s: &SkillState| {
            views::in_category(&s.skills, &label)
        })
    }
}
