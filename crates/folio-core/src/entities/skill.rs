//! Skill entity - a technology with a proficiency level

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::CatalogEntry;

/// Display labels for proficiency levels 1 through 5
pub const LEVEL_LABELS: [&str; 5] = ["Débutant", "Intermédiaire", "Confirmé", "Expert", "Maître"];

/// Label for a proficiency level.
///
/// Total over `i32`: anything outside 1..=5 falls back to the level-1 label.
pub fn level_label(level: i32) -> &'static str {
    match level {
        1..=5 => LEVEL_LABELS[(level - 1) as usize],
        _ => LEVEL_LABELS[0],
    }
}

/// Skill as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: i32,
    pub name: String,
    pub category: String,
    /// Proficiency, 1 to 5
    pub level: i32,
    pub years_experience: Option<i32>,
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Skill {
    pub fn level_label(&self) -> &'static str {
        level_label(self.level)
    }

    /// Level clamped into the displayable range
    pub fn display_level(&self) -> i32 {
        if (1..=5).contains(&self.level) {
            self.level
        } else {
            1
        }
    }

    /// Check if the category is one of the known [`SkillCategory`] values
    pub fn is_known_category(&self) -> bool {
        SkillCategory::parse(&self.category).is_some()
    }
}

impl CatalogEntry for Skill {
    fn id(&self) -> i32 {
        self.id
    }

    fn category(&self) -> &str {
        &self.category
    }
}

/// Categories the backend recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    DevOps,
    Tools,
    Mobile,
    Other,
}

impl SkillCategory {
    pub const ALL: [Self; 7] = [
        Self::Frontend,
        Self::Backend,
        Self::Database,
        Self::DevOps,
        Self::Tools,
        Self::Mobile,
        Self::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Database => "Database",
            Self::DevOps => "DevOps",
            Self::Tools => "Tools",
            Self::Mobile => "Mobile",
            Self::Other => "Other",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == label)
    }

    pub fn all() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.as_str()).collect()
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Create skill payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CreateSkill {
    #[validate(length(min = 1, max = 100, message = "Skill name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 50, message = "Category must be between 1 and 50 characters"))]
    pub category: String,

    #[validate(range(min = 1, max = 5, message = "Level must be between 1 and 5"))]
    pub level: i32,

    #[validate(range(min = 0, max = 50, message = "Years of experience must be between 0 and 50"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_experience: Option<i32>,

    #[validate(length(max = 500, message = "Description must be less than 500 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateSkill {
    pub fn new(name: impl Into<String>, category: impl Into<String>, level: i32) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            level,
            years_experience: None,
            description: None,
        }
    }
}

/// Partial skill update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UpdateSkill {
    #[validate(length(min = 1, max = 100, message = "Skill name must be between 1 and 100 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 50, message = "Category must be between 1 and 50 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[validate(range(min = 1, max = 5, message = "Level must be between 1 and 5"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<i32>,

    #[validate(range(min = 0, max = 50, message = "Years of experience must be between 0 and 50"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_experience: Option<i32>,

    #[validate(length(max = 500, message = "Description must be less than 500 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl UpdateSkill {
    pub fn has_updates(&self) -> bool {
        self.name.is_some()
            || self.category.is_some()
            || self.level.is_some()
            || self.years_experience.is_some()
            || self.description.is_some()
    }
}

/// Skill list filters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SkillQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_level: Option<i32>,
}

impl SkillQuery {
    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            min_level: None,
        }
    }

    pub fn min_level(level: i32) -> Self {
        Self {
            category: None,
            min_level: Some(level),
        }
    }
}

/// Categories in use versus the ones the backend accepts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategories {
    pub used: Vec<String>,
    pub available: Vec<String>,
}
