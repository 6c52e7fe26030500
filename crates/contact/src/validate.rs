use regex::Regex;
use std::sync::LazyLock;
use strum::VariantArray;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{Field, FieldErrors, FormFields};

/// Permissive shape check: some non-space run, "@", non-space, ".", non-space.
static RE_EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

#[derive(Validate)]
struct ContactInput {
    #[validate(custom(function = "required_name"))]
    name: String,
    #[validate(custom(function = "email_shape"))]
    email: String,
    #[validate(custom(function = "required_subject"))]
    subject: String,
    #[validate(custom(function = "required_message"))]
    message: String,
}

fn required(value: &str, field: Field) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required")
            .with_message(format!("{} is required", field.label()).into()));
    }

    Ok(())
}

fn required_name(value: &str) -> Result<(), ValidationError> {
    required(value, Field::Name)
}

fn required_subject(value: &str) -> Result<(), ValidationError> {
    required(value, Field::Subject)
}

fn required_message(value: &str) -> Result<(), ValidationError> {
    required(value, Field::Message)
}

fn email_shape(value: &str) -> Result<(), ValidationError> {
    required(value, Field::Email)?;

    if !RE_EMAIL_SHAPE.is_match(value) {
        return Err(ValidationError::new("email").with_message("Invalid email format".into()));
    }

    Ok(())
}

/// Outcome of one validation pass.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Validation {
    pub errors: FieldErrors,
    pub is_valid: bool,
}

/// Runs every field rule and returns a complete error snapshot.
///
/// Rules are independent: a failing field never hides the errors of the
/// others, and identical input always yields identical output.
pub fn validate(fields: &FormFields) -> Validation {
    let input = ContactInput {
        name: fields.name.to_owned(),
        email: fields.email.to_owned(),
        subject: fields.subject.to_owned(),
        message: fields.message.to_owned(),
    };

    let errors = match input.validate() {
        Ok(()) => FieldErrors::default(),
        Err(errors) => collect_errors(&errors),
    };

    Validation {
        is_valid: errors.is_empty(),
        errors,
    }
}

fn collect_errors(errors: &ValidationErrors) -> FieldErrors {
    let by_field = errors.field_errors();
    let mut collected = FieldErrors::default();

    for field in Field::VARIANTS {
        let message = by_field
            .get(field.as_ref())
            .and_then(|errs| errs.first())
            .map(|err| match &err.message {
                Some(msg) => msg.to_string(),
                None => err.code.to_string(),
            })
            .unwrap_or_default();

        collected.set(*field, message);
    }

    collected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, email: &str, subject: &str, message: &str) -> FormFields {
        FormFields {
            name: name.to_owned(),
            email: email.to_owned(),
            subject: subject.to_owned(),
            message: message.to_owned(),
        }
    }

    #[test]
    fn accepts_complete_form() {
        let result = validate(&fields("Jane", "jane@example.com", "Hi", "Hello"));

        assert!(result.is_valid);
        assert_eq!(result.errors, FieldErrors::default());
    }

    #[test]
    fn reports_every_error_at_once() {
        let result = validate(&fields("", "bad", "", ""));

        assert!(!result.is_valid);
        assert_eq!(
            result.errors,
            FieldErrors {
                name: "Name is required".to_owned(),
                email: "Invalid email format".to_owned(),
                subject: "Title is required".to_owned(),
                message: "Message is required".to_owned(),
            }
        );
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let result = validate(&fields("   ", " \t", "\n", "  "));

        assert_eq!(result.errors.name, "Name is required");
        assert_eq!(result.errors.email, "Email is required");
        assert_eq!(result.errors.subject, "Title is required");
        assert_eq!(result.errors.message, "Message is required");
    }

    #[test]
    fn missing_field_leaves_valid_siblings_clean() {
        let result = validate(&fields("Jane", "jane@example.com", "", "Hello"));

        assert!(!result.is_valid);
        assert_eq!(result.errors.subject, "Title is required");
        assert_eq!(result.errors.name, "");
        assert_eq!(result.errors.email, "");
        assert_eq!(result.errors.message, "");
    }

    #[test]
    fn email_shape_is_permissive() {
        for ok in ["a@b.c", "first.last@sub.example.org", "x y@z.w"] {
            assert_eq!(validate(&fields("n", ok, "s", "m")).errors.email, "", "{ok}");
        }

        for bad in ["plain", "a@b", "@.", "a@.c", "a @b.c"] {
            assert_eq!(
                validate(&fields("n", bad, "s", "m")).errors.email,
                "Invalid email format",
                "{bad}"
            );
        }
    }

    #[test]
    fn validation_is_idempotent() {
        let input = fields("", "jane@", "Hi", "");

        assert_eq!(validate(&input), validate(&input));
    }
}
