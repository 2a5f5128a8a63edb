//! # folio-core
//!
//! Domain layer for the portfolio client: entities, request payloads, the
//! normalized API error taxonomy, contact form validation, and the async API
//! traits the stores are written against.
//! This crate performs no I/O.

pub mod entities;
pub mod error;
pub mod traits;
pub mod validation;

// Re-export commonly used types at crate root
pub use entities::{
    level_label, CatalogEntry, ContactMessage, ContactReceipt, CreateProject, CreateSkill, Page,
    Pagination, Profile, Project, ProjectQuery, Skill, SkillCategories, SkillCategory, SkillQuery,
    UpdateProfile, UpdateProject, UpdateSkill, LEVEL_LABELS,
};
pub use error::{ApiResult, ErrorCode, ErrorInfo};
pub use traits::{ContactApi, PortfolioApi, ProfileApi, ProjectApi, SkillApi};
pub use validation::{validate_contact, validation_messages};
