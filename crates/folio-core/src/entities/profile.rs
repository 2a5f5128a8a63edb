//! Profile entity - the single owner of the portfolio

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Developer profile (singleton)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub twitter_url: Option<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Profile {
    /// Social links as `(platform, url)` pairs, LinkedIn then GitHub then Twitter
    pub fn social_links(&self) -> Vec<(&'static str, &str)> {
        [
            ("LinkedIn", &self.linkedin_url),
            ("GitHub", &self.github_url),
            ("Twitter", &self.twitter_url),
        ]
        .into_iter()
        .filter_map(|(platform, url)| url.as_deref().map(|url| (platform, url)))
        .collect()
    }

    /// Check if profile has complete basic information
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.title, &self.bio, &self.email, &self.location]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    /// Name, or email if the name is empty
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

/// Partial profile update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UpdateProfile {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 1000, message = "Bio must be between 1 and 1000 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    #[validate(email(message = "Email must be a valid email address"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[validate(length(max = 20, message = "Phone number must be less than 20 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Location must be between 1 and 100 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[validate(url(message = "Avatar URL must be a valid URL"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    #[validate(url(message = "LinkedIn URL must be a valid URL"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,

    #[validate(url(message = "GitHub URL must be a valid URL"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,

    #[validate(url(message = "Twitter URL must be a valid URL"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_url: Option<String>,
}

impl UpdateProfile {
    pub fn has_updates(&self) -> bool {
        self.name.is_some()
            || self.title.is_some()
            || self.bio.is_some()
            || self.email.is_some()
            || self.phone.is_some()
            || self.location.is_some()
            || self.avatar_url.is_some()
            || self.linkedin_url.is_some()
            || self.github_url.is_some()
            || self.twitter_url.is_some()
    }
}
