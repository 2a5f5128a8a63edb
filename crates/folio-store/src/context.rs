//! Application context: one API, one toast queue, all stores

use std::sync::Arc;

use folio_core::{PortfolioApi, ProjectQuery, SkillQuery};
use tracing::{info, instrument};

use crate::stores::{ContactStore, ProfileStore, ProjectStore, SkillStore};
use crate::toast::ToastService;

pub struct Portfolio {
    pub projects: ProjectStore,
    pub skills: SkillStore,
    pub profile: ProfileStore,
    pub contact: ContactStore,
    toasts: ToastService,
}

impl Portfolio {
    /// Build every store against `api`, all reporting to `toasts`
    pub fn new<A: PortfolioApi + 'static>(api: Arc<A>, toasts: ToastService) -> Self {
        Self {
            projects: ProjectStore::new(api.clone(), toasts.clone()),
            skills: SkillStore::new(api.clone(), toasts.clone()),
            profile: ProfileStore::new(api.clone(), toasts.clone()),
            contact: ContactStore::new(api, toasts.clone()),
            toasts,
        }
    }

    pub fn toasts(&self) -> &ToastService {
        &self.toasts
    }

    /// Load profile, projects and skills concurrently; `true` if all succeeded
    #[instrument(skip(self))]
    pub async fn load_all(&self) -> bool {
        let (profile, projects, skills) = tokio::join!(
            self.profile.load(),
            self.projects.load(ProjectQuery::default()),
            self.skills.load(SkillQuery::default()),
        );
        info!(profile, projects, skills, "Initial load finished");
        profile && projects && skills
    }
}
