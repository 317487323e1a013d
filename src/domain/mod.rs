mod submission;
mod validation;

// allow external `use` statements to skip `submission` etc
pub use submission::FormFields;
pub use submission::Submission;
pub use validation::validate;
pub use validation::Field;
pub use validation::ValidationErrors;
