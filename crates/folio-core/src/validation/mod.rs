//! Client-side input validation

pub(crate) mod contact;

use validator::{Validate, ValidationErrors};

use crate::entities::ContactMessage;

/// Validate a contact form before it is handed to the contact store
pub fn validate_contact(message: &ContactMessage) -> Result<(), ValidationErrors> {
    message.validate()
}

/// Flatten validation errors into `field: message` lines, sorted by field
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map_or_else(|| format!("Invalid value for field '{field}'"), ToString::to_string);
                format!("{field}: {message}")
            })
        })
        .collect()
}
