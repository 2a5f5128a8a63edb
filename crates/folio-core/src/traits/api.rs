//! API traits (ports) - the operations a store may request from the backend
//!
//! Every method returns an [`ApiResult`]; implementations fold transport and
//! server failures into [`crate::ErrorInfo`] instead of panicking.

use async_trait::async_trait;

use crate::entities::{
    ContactMessage, ContactReceipt, CreateProject, CreateSkill, Page, Profile, Project,
    ProjectQuery, Skill, SkillCategories, SkillQuery, UpdateProfile, UpdateProject, UpdateSkill,
};
use crate::error::ApiResult;

// ============================================================================
// Projects
// ============================================================================

#[async_trait]
pub trait ProjectApi: Send + Sync {
    /// List projects matching the query; pagination is present only for paged queries
    async fn list_projects(&self, query: &ProjectQuery) -> ApiResult<Page<Project>>;

    async fn get_project(&self, id: i32) -> ApiResult<Project>;

    async fn create_project(&self, payload: &CreateProject) -> ApiResult<Project>;

    async fn update_project(&self, id: i32, payload: &UpdateProject) -> ApiResult<Project>;

    async fn delete_project(&self, id: i32) -> ApiResult<()>;
}

// ============================================================================
// Skills
// ============================================================================

#[async_trait]
pub trait SkillApi: Send + Sync {
    async fn list_skills(&self, query: &SkillQuery) -> ApiResult<Vec<Skill>>;

    async fn get_skill(&self, id: i32) -> ApiResult<Skill>;

    async fn create_skill(&self, payload: &CreateSkill) -> ApiResult<Skill>;

    async fn update_skill(&self, id: i32, payload: &UpdateSkill) -> ApiResult<Skill>;

    async fn delete_skill(&self, id: i32) -> ApiResult<()>;

    /// Categories in use and categories the backend accepts
    async fn skill_categories(&self) -> ApiResult<SkillCategories>;
}

// ============================================================================
// Profile
// ============================================================================

#[async_trait]
pub trait ProfileApi: Send + Sync {
    async fn get_profile(&self) -> ApiResult<Profile>;

    async fn update_profile(&self, payload: &UpdateProfile) -> ApiResult<Profile>;
}

// ============================================================================
// Contact
// ============================================================================

#[async_trait]
pub trait ContactApi: Send + Sync {
    async fn send_contact(&self, message: &ContactMessage) -> ApiResult<ContactReceipt>;
}

/// Everything the portfolio stores need from one backend
pub trait PortfolioApi: ProjectApi + SkillApi + ProfileApi + ContactApi {}

impl<T> PortfolioApi for T where T: ProjectApi + SkillApi + ProfileApi + ContactApi {}
