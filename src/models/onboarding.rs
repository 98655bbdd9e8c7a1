use serde::{Deserialize, Serialize};

use crate::models::document::DocumentRefs;
use crate::models::employee::{EmployeeDetails, EmployeeRecord};

/// What the onboarding form posts: the nine text fields plus whatever
/// document references the client attached.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct OnboardingSubmission {
    #[serde(flatten)]
    pub details: EmployeeDetails,
    #[serde(flatten)]
    pub documents: DocumentRefs,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No record shared the identity number; a new one was appended.
    Created { employee: EmployeeRecord },
    /// Stored record matches the submission field for field.
    Confirmed { employee_id: String },
    /// Stored record differs; nothing was written.
    Mismatch {
        employee_id: String,
        mismatched_fields: Vec<&'static str>,
    },
}

impl Outcome {
    pub fn employee_id(&self) -> &str {
        match self {
            Outcome::Created { employee } => &employee.employee_id,
            Outcome::Confirmed { employee_id } => employee_id,
            Outcome::Mismatch { employee_id, .. } => employee_id,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Outcome::Created { employee } => {
                format!("New employee onboarded with ID: {}", employee.employee_id)
            }
            Outcome::Confirmed { employee_id } => {
                format!("WELCOME! Your Employee ID is: {}.", employee_id)
            }
            Outcome::Mismatch { mismatched_fields, .. } => format!(
                "You already exist in our database, The following fields do not match our records: {}. Please review and submit again.",
                mismatched_fields.join(", ")
            ),
        }
    }

    /// Text for the persistent notification banner, distinct from the
    /// one-shot alert in `message`.
    pub fn notification(&self) -> String {
        match self {
            Outcome::Created { employee } => {
                format!("New employee onboarded with ID: {}", employee.employee_id)
            }
            Outcome::Confirmed { .. } => "Employee details updated successfully.".to_string(),
            Outcome::Mismatch { employee_id, .. } => {
                format!("Existing Employee Found! Employee ID: {}", employee_id)
            }
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeKind {
    Created,
    Confirmed,
    Mismatch,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingResponse {
    pub outcome: OutcomeKind,
    pub employee_id: String,
    pub message: String,
    pub notification: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mismatched_fields: Option<Vec<&'static str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee: Option<EmployeeRecord>,
}

impl From<Outcome> for OnboardingResponse {
    fn from(outcome: Outcome) -> Self {
        let employee_id = outcome.employee_id().to_string();
        let message = outcome.message();
        let notification = outcome.notification();
        match outcome {
            Outcome::Created { employee } => OnboardingResponse {
                outcome: OutcomeKind::Created,
                employee_id,
                message,
                notification,
                mismatched_fields: None,
                employee: Some(employee),
            },
            Outcome::Confirmed { .. } => OnboardingResponse {
                outcome: OutcomeKind::Confirmed,
                employee_id,
                message,
                notification,
                mismatched_fields: None,
                employee: None,
            },
            Outcome::Mismatch { mismatched_fields, .. } => OnboardingResponse {
                outcome: OutcomeKind::Mismatch,
                employee_id,
                message,
                notification,
                mismatched_fields: Some(mismatched_fields),
                employee: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_message_lists_fields() {
        let outcome = Outcome::Mismatch {
            employee_id: "EMP1".to_string(),
            mismatched_fields: vec!["phone", "email"],
        };

        assert_eq!(
            outcome.message(),
            "You already exist in our database, The following fields do not match our records: phone, email. Please review and submit again."
        );
    }

    #[test]
    fn confirmed_response_omits_optional_parts() {
        let response = OnboardingResponse::from(Outcome::Confirmed {
            employee_id: "EMP42".to_string(),
        });
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "outcome": "confirmed",
                "employeeId": "EMP42",
                "message": "WELCOME! Your Employee ID is: EMP42.",
                "notification": "Employee details updated successfully."
            })
        );
    }

    #[test]
    fn mismatch_notification_names_existing_employee() {
        let outcome = Outcome::Mismatch {
            employee_id: "EMP7".to_string(),
            mismatched_fields: vec!["phone"],
        };

        assert_eq!(outcome.notification(), "Existing Employee Found! Employee ID: EMP7");
    }

    #[test]
    fn submission_reads_documents_alongside_fields() {
        let submission: OnboardingSubmission = serde_json::from_value(serde_json::json!({
            "firstName": "Asha",
            "aadhaar": "123456789012",
            "panPhoto": "blob:abc"
        }))
        .unwrap();

        assert_eq!(submission.details.first_name, "Asha");
        assert_eq!(submission.details.phone, "");
        assert_eq!(submission.documents.pan_photo.as_deref(), Some("blob:abc"));
        assert_eq!(submission.documents.aadhaar_front, None);
    }
}
