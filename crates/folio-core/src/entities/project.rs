//! Project entity - a portfolio project card

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::CatalogEntry;

/// Portfolio project as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub long_description: Option<String>,
    /// Ordered technology tags; the server guarantees at least one
    #[serde(default)]
    pub technologies: Vec<String>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub image_url: Option<String>,
    pub category: String,
    #[serde(default)]
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Technology tags joined for display
    pub fn technologies_label(&self) -> String {
        self.technologies.join(", ")
    }

    /// Whether the project links to anything outside the card
    pub fn has_links(&self) -> bool {
        self.github_url.is_some() || self.demo_url.is_some()
    }

    /// Case-insensitive match against title, descriptions and tags.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self
                .long_description
                .as_deref()
                .is_some_and(|long| long.to_lowercase().contains(needle))
            || self
                .technologies
                .iter()
                .any(|tech| tech.to_lowercase().contains(needle))
    }
}

impl CatalogEntry for Project {
    fn id(&self) -> i32 {
        self.id
    }

    fn category(&self) -> &str {
        &self.category
    }
}

/// Create project payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 500, message = "Description must be between 1 and 500 characters"))]
    pub description: String,

    #[validate(length(max = 2000, message = "Long description must be less than 2000 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,

    #[validate(length(min = 1, message = "At least one technology must be specified"))]
    pub technologies: Vec<String>,

    #[validate(url(message = "GitHub URL must be a valid URL"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,

    #[validate(url(message = "Demo URL must be a valid URL"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,

    #[validate(url(message = "Image URL must be a valid URL"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[validate(length(min = 1, max = 50, message = "Category must be between 1 and 50 characters"))]
    pub category: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

impl CreateProject {
    /// Minimal payload; optional fields start empty
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        technologies: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            long_description: None,
            technologies,
            github_url: None,
            demo_url: None,
            image_url: None,
            category: category.into(),
            featured: None,
        }
    }
}

/// Partial project update; absent fields are left untouched by the server
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UpdateProject {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 500, message = "Description must be between 1 and 500 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[validate(length(max = 2000, message = "Long description must be less than 2000 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,

    #[validate(url(message = "GitHub URL must be a valid URL"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,

    #[validate(url(message = "Demo URL must be a valid URL"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,

    #[validate(url(message = "Image URL must be a valid URL"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[validate(length(min = 1, max = 50, message = "Category must be between 1 and 50 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

impl UpdateProject {
    /// Check if any field is being updated
    pub fn has_updates(&self) -> bool {
        self.title.is_some()
            || self.description.is_some()
            || self.long_description.is_some()
            || self.technologies.is_some()
            || self.github_url.is_some()
            || self.demo_url.is_some()
            || self.image_url.is_some()
            || self.category.is_some()
            || self.featured.is_some()
    }
}

/// List filters; an absent field means "no constraint"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl ProjectQuery {
    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::default()
        }
    }

    pub fn featured() -> Self {
        Self {
            featured: Some(true),
            ..Self::default()
        }
    }

    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search: Some(text.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn paged(mut self, page: u32, page_size: u32) -> Self {
        self.page = Some(page);
        self.page_size = Some(page_size);
        self
    }
}
