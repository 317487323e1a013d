use std::collections::BTreeMap;
use std::fmt::Display;

use once_cell::sync::Lazy;
use regex::Regex;

use super::FormFields;
use super::Submission;

/// The email check the contact form has always applied: one `@`, no
/// whitespace, and a dotted domain. Deliberately loose; this is not RFC 5322
/// parsing.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// The four form fields. Ordering follows the form layout, so accumulated
/// errors read top-to-bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }
}

impl Display for Field {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

struct FormatRule {
    pattern: &'static Lazy<Regex>,
    message: &'static str,
}

/// One row of the validator configuration. Every listed field is required
/// (blank after trimming fails); a field may additionally carry a format
/// check.
struct Rule {
    field: Field,
    format: Option<FormatRule>,
}

// The canonical rule table. The original form scripts repeated these checks
// as one branch per field per page; adding a field or a format rule here is a
// table edit, not a new branch.
static RULES: [Rule; 4] = [
    Rule {
        field: Field::Name,
        format: None,
    },
    Rule {
        field: Field::Email,
        format: Some(FormatRule {
            pattern: &EMAIL_PATTERN,
            message: "Email is invalid.",
        }),
    },
    Rule {
        field: Field::Subject,
        format: None,
    },
    Rule {
        field: Field::Message,
        format: None,
    },
];

/// Per-field error messages, keyed and ordered by `Field`. `Display` joins
/// the messages one per line, ready for a warning region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn get(
        &self,
        field: Field,
    ) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl Display for ValidationErrors {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        let joined = self
            .0
            .values()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n");
        write!(f, "{joined}")
    }
}

impl std::error::Error for ValidationErrors {}

/// Check `fields` against the rule table. Pure; no DOM and no network.
///
/// Failing rules are accumulated rather than short-circuited, so a caller can
/// surface every message at once. Blankness is judged on the trimmed value,
/// but the values carried into the returned `Submission` are passed through
/// exactly as the form supplied them.
pub fn validate(fields: FormFields) -> Result<Submission, ValidationErrors> {
    let mut errors = BTreeMap::new();

    for rule in &RULES {
        let value = fields.get(rule.field);

        if value.trim().is_empty() {
            errors.insert(rule.field, format!("{} is required.", rule.field));
            // format rules only apply to non-blank values
            continue;
        }

        if let Some(format) = &rule.format {
            if !format.pattern.is_match(value) {
                errors.insert(rule.field, format.message.to_string());
            }
        }
    }

    match errors.is_empty() {
        true => Ok(Submission {
            name: fields.name,
            email: fields.email,
            subject: fields.subject,
            message: fields.message,
        }),
        false => Err(ValidationErrors(errors)),
    }
}
