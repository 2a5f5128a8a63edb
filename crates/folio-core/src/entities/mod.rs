//! Domain entities - client-side copies of the portfolio records

mod contact;
mod page;
mod profile;
mod project;
mod skill;

pub use contact::{ContactMessage, ContactReceipt};
pub use page::{Page, Pagination};
pub use profile::{Profile, UpdateProfile};
pub use project::{CreateProject, Project, ProjectQuery, UpdateProject};
pub use skill::{
    level_label, CreateSkill, Skill, SkillCategories, SkillCategory, SkillQuery, UpdateSkill,
    LEVEL_LABELS,
};

/// An entity that lives in an id-keyed, categorized collection
pub trait CatalogEntry {
    fn id(&self) -> i32;

    fn category(&self) -> &str;
}
