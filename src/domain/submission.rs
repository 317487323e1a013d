use serde::Deserialize;
use serde::Serialize;

use super::Field;

/// A contact-form record, exactly as it crosses the wire and lands in the
/// submissions file: four free-form strings. No ids, no timestamps;
/// submissions are never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Raw field values as read out of a form, prior to any checking. The only
/// way to turn these into a `Submission` is `domain::validate`.
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormFields {
    pub(crate) fn get(
        &self,
        field: Field,
    ) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }
}
