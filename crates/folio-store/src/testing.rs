//! Builders and a scripted API double for store tests

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use folio_core::{
    ApiResult, ContactApi, ContactMessage, ContactReceipt, CreateProject, CreateSkill, ErrorCode,
    ErrorInfo, Page, Profile, ProfileApi, Project, ProjectApi, ProjectQuery, Skill, SkillApi,
    SkillCategories, SkillQuery, UpdateProfile, UpdateProject, UpdateSkill,
};
use parking_lot::Mutex;

use crate::toast::{Toast, ToastKind, ToastService};

pub fn project(id: i32, category: &str) -> Project {
    Project {
        id,
        title: format!("Project {id}"),
        description: format!("Description of project {id}"),
        long_description: None,
        technologies: Vec::new(),
        github_url: None,
        demo_url: None,
        image_url: None,
        category: category.to_string(),
        featured: false,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

pub fn skill(id: i32, name: &str, category: &str, level: i32) -> Skill {
    Skill {
        id,
        name: name.to_string(),
        category: category.to_string(),
        level,
        years_experience: None,
        description: None,
        created_at: None,
    }
}

pub fn profile(name: &str) -> Profile {
    Profile {
        name: name.to_string(),
        title: "Développeur".to_string(),
        bio: "Bio".to_string(),
        email: "dev@example.com".to_string(),
        phone: None,
        location: "Lyon".to_string(),
        avatar_url: None,
        linkedin_url: None,
        github_url: None,
        twitter_url: None,
        updated_at: None,
    }
}

pub fn receipt(id: i32) -> ContactReceipt {
    ContactReceipt {
        id,
        submitted_at: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
        message: "Thank you for your message! I'll get back to you soon.".to_string(),
    }
}

pub fn server_error() -> ErrorInfo {
    ErrorInfo::new(
        ErrorCode::from_code("SERVER_ERROR"),
        "Internal server error",
    )
}

/// Toasts of one kind currently queued
pub fn toasts_of(toasts: &ToastService, kind: ToastKind) -> Vec<Toast> {
    toasts
        .snapshot()
        .into_iter()
        .filter(|t| t.kind == kind)
        .collect()
}

/// One queued reply per call, consumed in call order.
///
/// An unscripted call fails with `UNKNOWN_ERROR` rather than panicking inside
/// the store under test.
struct Script<T>(Mutex<VecDeque<(Duration, ApiResult<T>)>>);

impl<T> Default for Script<T> {
    fn default() -> Self {
        Self(Mutex::new(VecDeque::new()))
    }
}

impl<T> Script<T> {
    fn push(&self, delay: Duration, reply: ApiResult<T>) {
        self.0.lock().push_back((delay, reply));
    }

    async fn next(&self, call: &str) -> ApiResult<T> {
        let next = self.0.lock().pop_front();
        match next {
            Some((delay, reply)) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                reply
            }
            None => Err(ErrorInfo::unknown(format!("unscripted call: {call}"))),
        }
    }
}

#[derive(Default)]
pub struct FakeApi {
    project_lists: Script<Page<Project>>,
    projects: Script<Project>,
    skill_lists: Script<Vec<Skill>>,
    skills: Script<Skill>,
    categories: Script<SkillCategories>,
    profiles: Script<Profile>,
    receipts: Script<ContactReceipt>,
    deletes: Script<()>,
    calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().push(call.into());
    }

    pub fn on_list_projects(&self, reply: ApiResult<Page<Project>>) -> &Self {
        self.project_lists.push(Duration::ZERO, reply);
        self
    }

    pub fn on_list_projects_after(&self, delay: Duration, reply: ApiResult<Page<Project>>) -> &Self {
        self.project_lists.push(delay, reply);
        self
    }

    pub fn on_project(&self, reply: ApiResult<Project>) -> &Self {
        self.projects.push(Duration::ZERO, reply);
        self
    }

    pub fn on_list_skills(&self, reply: ApiResult<Vec<Skill>>) -> &Self {
        self.skill_lists.push(Duration::ZERO, reply);
        self
    }

    pub fn on_skill(&self, reply: ApiResult<Skill>) -> &Self {
        self.skills.push(Duration::ZERO, reply);
        self
    }

    pub fn on_categories(&self, reply: ApiResult<SkillCategories>) -> &Self {
        self.categories.push(Duration::ZERO, reply);
        self
    }

    pub fn on_profile(&self, reply: ApiResult<Profile>) -> &Self {
        self.profiles.push(Duration::ZERO, reply);
        self
    }

    pub fn on_contact(&self, reply: ApiResult<ContactReceipt>) -> &Self {
        self.receipts.push(Duration::ZERO, reply);
        self
    }

    pub fn on_delete(&self, reply: ApiResult<()>) -> &Self {
        self.deletes.push(Duration::ZERO, reply);
        self
    }
}

#[async_trait]
impl ProjectApi for FakeApi {
    async fn list_projects(&self, query: &ProjectQuery) -> ApiResult<Page<Project>> {
        self.record(format!("list_projects {:?}", query.category));
        self.project_lists.next("list_projects").await
    }

    async fn get_project(&self, id: i32) -> ApiResult<Project> {
        self.record(format!("get_project {id}"));
        self.projects.next("get_project").await
    }

    async fn create_project(&self, payload: &CreateProject) -> ApiResult<Project> {
        self.record(format!("create_project {}", payload.title));
        self.projects.next("create_project").await
    }

    async fn update_project(&self, id: i32, _payload: &UpdateProject) -> ApiResult<Project> {
        self.record(format!("update_project {id}"));
        self.projects.next("update_project").await
    }

    async fn delete_project(&self, id: i32) -> ApiResult<()> {
        self.record(format!("delete_project {id}"));
        self.deletes.next("delete_project").await
    }
}

#[async_trait]
impl SkillApi for FakeApi {
    async fn list_skills(&self, _query: &SkillQuery) -> ApiResult<Vec<Skill>> {
        self.record("list_skills");
        self.skill_lists.next("list_skills").await
    }

    async fn get_skill(&self, id: i32) -> ApiResult<Skill> {
        self.record(format!("get_skill {id}"));
        self.skills.next("get_skill").await
    }

    async fn create_skill(&self, payload: &CreateSkill) -> ApiResult<Skill> {
        self.record(format!("create_skill {}", payload.name));
        self.skills.next("create_skill").await
    }

    async fn update_skill(&self, id: i32, _payload: &UpdateSkill) -> ApiResult<Skill> {
        self.record(format!("update_skill {id}"));
        self.skills.next("update_skill").await
    }

    async fn delete_skill(&self, id: i32) -> ApiResult<()> {
        self.record(format!("delete_skill {id}"));
        self.deletes.next("delete_skill").await
    }

    async fn skill_categories(&self) -> ApiResult<SkillCategories> {
        self.record("skill_categories");
        self.categories.next("skill_categories").await
    }
}

#[async_trait]
impl ProfileApi for FakeApi {
    async fn get_profile(&self) -> ApiResult<Profile> {
        self.record("get_profile");
        self.profiles.next("get_profile").await
    }

    async fn update_profile(&self, _payload: &UpdateProfile) -> ApiResult<Profile> {
        self.record("update_profile");
        self.profiles.next("update_profile").await
    }
}

#[async_trait]
impl ContactApi for FakeApi {
    async fn send_contact(&self, message: &ContactMessage) -> ApiResult<ContactReceipt> {
        self.record(format!("send_contact {}", message.email));
        self.receipts.next("send_contact").await
    }
}
