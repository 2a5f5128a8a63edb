//! Contact form submission

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::contact::{
    validate_contact_email, validate_contact_message, validate_contact_name,
    validate_contact_subject,
};

/// Outgoing contact message; not retained after submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ContactMessage {
    #[validate(custom(function = "validate_contact_name"))]
    pub name: String,

    #[validate(custom(function = "validate_contact_email"))]
    pub email: String,

    #[validate(custom(function = "validate_contact_subject"))]
    pub subject: String,

    #[validate(custom(function = "validate_contact_message"))]
    pub message: String,
}

impl ContactMessage {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }
}

/// Server acknowledgement of a submitted message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub id: i32,
    pub submitted_at: DateTime<Utc>,
    pub message: String,
}
