//! Project catalogue store

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use folio_core::{CreateProject, Pagination, Project, ProjectApi, ProjectQuery, UpdateProject};
use tokio::sync::watch;
use tracing::{debug, instrument};

use super::{remove_by_id, replace_by_id, report_failure};
use crate::reactive::DerivedView;
use crate::state::LoadingState;
use crate::toast::ToastService;
use crate::views;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectState {
    pub projects: Vec<Project>,
    /// Project fetched by [`ProjectStore::load_one`]
    pub selected: Option<Project>,
    /// Present only after a paged load
    pub pagination: Option<Pagination>,
    pub loading: LoadingState,
}

pub struct ProjectStore {
    api: Arc<dyn ProjectApi>,
    toasts: ToastService,
    state: watch::Sender<ProjectState>,
    load_tickets: AtomicU64,
}

impl ProjectStore {
    pub fn new(api: Arc<dyn ProjectApi>, toasts: ToastService) -> Self {
        let (state, _) = watch::channel(ProjectState::default());
        Self {
            api,
            toasts,
            state,
            load_tickets: AtomicU64::new(0),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ProjectState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> ProjectState {
        self.state.borrow().clone()
    }

    pub fn projects(&self) -> Vec<Project> {
        self.state.borrow().projects.clone()
    }

    /// Replace the collection with the server's answer for `query`.
    ///
    /// Overlapping loads are not cancelled: whichever response arrives last
    /// is applied.
    #[instrument(skip(self))]
    pub async fn load(&self, query: ProjectQuery) -> bool {
        let ticket = self.load_tickets.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_modify(|s| s.loading.start());

        let result = self.api.list_projects(&query).await;

        let latest = self.load_tickets.load(Ordering::SeqCst);
        if ticket < latest {
            debug!(ticket, latest, "Older project load resolved after a newer one");
        }

        match result {
            Ok(page) => {
                debug!(count = page.items.len(), "Projects loaded");
                self.state.send_modify(|s| {
                    s.projects = page.items;
                    s.pagination = page.pagination;
                    s.loading.succeed();
                });
                true
            }
            Err(err) => {
                report_failure(
                    &self.toasts,
                    "load_projects",
                    "Erreur de chargement",
                    "Impossible de charger les projets",
                    &err,
                );
                self.state.send_modify(|s| s.loading.fail(err));
                false
            }
        }
    }

    /// Fetch one project into `selected`
    #[instrument(skip(self))]
    pub async fn load_one(&self, id: i32) -> bool {
        self.state.send_modify(|s| s.loading.start());

        match self.api.get_project(id).await {
            Ok(project) => {
                self.state.send_modify(|s| {
                    s.selected = Some(project);
                    s.loading.succeed();
                });
                true
            }
            Err(err) => {
                report_failure(
                    &self.toasts,
                    "load_project",
                    "Erreur de chargement",
                    "Impossible de charger le projet",
                    &err,
                );
                self.state.send_modify(|s| s.loading.fail(err));
                false
            }
        }
    }

    /// Create a project and append it to the collection
    #[instrument(skip(self, payload), fields(title = %payload.title))]
    pub async fn create(&self, payload: &CreateProject) -> bool {
        match self.api.create_project(payload).await {
            Ok(project) => {
                let message = format!("« {} » a été ajouté", project.title);
                self.state.send_modify(|s| s.projects.push(project));
                self.toasts.success("Projet créé", message);
                true
            }
            Err(err) => {
                report_failure(
                    &self.toasts,
                    "create_project",
                    "Erreur lors de la création",
                    "Impossible de créer le projet",
                    &err,
                );
                false
            }
        }
    }

    /// Update a project and replace it in place
    #[instrument(skip(self, payload))]
    pub async fn update(&self, id: i32, payload: &UpdateProject) -> bool {
        match self.api.update_project(id, payload).await {
            Ok(project) => {
                let message = format!("« {} » a été modifié", project.title);
                self.state.send_if_modified(|s| {
                    let mut changed = false;
                    if s.selected.as_ref().is_some_and(|p| p.id == project.id) {
                        s.selected = Some(project.clone());
                        changed = true;
                    }
                    replace_by_id(&mut s.projects, project) || changed
                });
                self.toasts.success("Projet mis à jour", message);
                true
            }
            Err(err) => {
                report_failure(
                    &self.toasts,
                    "update_project",
                    "Erreur lors de la mise à jour",
                    "Impossible de mettre à jour le projet",
                    &err,
                );
                false
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> bool {
        match self.api.delete_project(id).await {
            Ok(()) => {
                self.state.send_if_modified(|s| {
                    let mut changed = false;
                    if s.selected.as_ref().is_some_and(|p| p.id == id) {
                        s.selected = None;
                        changed = true;
                    }
                    remove_by_id(&mut s.projects, id) || changed
                });
                self.toasts.success("Projet supprimé", "");
                true
            }
            Err(err) => {
                report_failure(
                    &self.toasts,
                    "delete_project",
                    "Erreur lors de la suppression",
                    "Impossible de supprimer le projet",
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

    pub fn clear_selected(&self) {
        self.state.send_if_modified(|s| s.selected.take().is_some());
    }

    // ------------------------------------------------------------------
    // Derived views
    // ------------------------------------------------------------------

    pub fn featured(&self) -> DerivedView<ProjectState, Vec<Project>> {
        DerivedView::new(self.subscribe(), |s: &ProjectState| views::featured(&s.projects))
    }

    pub fn categories(&self) -> DerivedView<ProjectState, Vec<String>> {
        DerivedView::new(self.subscribe(), |s: &ProjectState| views::categories(&s.projects))
    }

    pub fn by_category(&self, label: impl Into<String>) -> DerivedView<ProjectState, Vec<Project>> {
        let label = label.into();
        DerivedView::new(self.subscribe(), move |s: &ProjectState| {
            views::in_category(&s.projects, &label)
        })
    }

    pub fn search(&self, text: impl Into<String>) -> DerivedView<ProjectState, Vec<Project>> {
        let text = text.into();
        DerivedView::new(self.subscribe(), move |s: &ProjectState| {
            views::search_projects(&s.projects, &text)
        })
    }
}
