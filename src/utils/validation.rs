use regex::Regex;
use std::sync::LazyLock;
use validator::{Validate, ValidationErrors};

use crate::errors::{AppError, FieldErrors};
use crate::models::onboarding::OnboardingSubmission;

pub static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{10}$").expect("Invalid phone regex"));
pub static AADHAAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{12}$").expect("Invalid Aadhaar regex"));
pub static PAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("Invalid PAN regex"));
pub static BANK_ACCOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{9,18}$").expect("Invalid bank account regex"));
pub static IFSC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{4}0[A-Z0-9]{6}$").expect("Invalid IFSC regex"));

/// Checks the text fields and document references of a submission,
/// reporting at most one message per field.
pub fn validate_submission(submission: &OnboardingSubmission) -> Result<(), AppError> {
    let mut errors = FieldErrors::new();

    for result in [submission.details.validate(), submission.documents.validate()] {
        if let Err(err) = result {
            errors.extend(field_errors(&err));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

/// Keeps the first message reported for each field, keyed by its camelCase
/// wire name.
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| {
            let first = errs.first()?;
            let message = first
                .message
                .as_ref()
                .map(|msg| msg.to_string())
                .unwrap_or_else(|| first.code.to_string());
            Some((wire_name(field), message))
        })
        .collect()
}

fn wire_name(field: &str) -> String {
    let mut name = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            name.extend(c.to_uppercase());
            upper = false;
        } else {
            name.push(c);
        }
    }
    name
}
