use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::document::ResolvedDocuments;

/// The nine scalar fields collected from an employee.
///
/// Missing JSON keys deserialize as empty strings so that the validator,
/// not serde, reports them as required.
#[derive(Serialize, Deserialize, Validate, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDetails {
    #[serde(default)]
    #[validate(length(min = 1, message = "First Name is required"))]
    pub first_name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Last Name is required"))]
    pub last_name: String,
    #[serde(default)]
    #[validate(
        length(min = 1, message = "Phone number is required"),
        regex(path = "crate::utils::validation::PHONE_RE", message = "Phone number must be 10 digits")
    )]
    pub phone: String,
    #[serde(default)]
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Invalid email")
    )]
    pub email: String,
    #[serde(default)]
    #[validate(
        length(min = 1, message = "Aadhaar is required"),
        regex(path = "crate::utils::validation::AADHAAR_RE", message = "Aadhaar must be 12 digits")
    )]
    pub aadhaar: String,
    #[serde(default)]
    #[validate(
        length(min = 1, message = "PAN is required"),
        regex(path = "crate::utils::validation::PAN_RE", message = "Invalid PAN format")
    )]
    pub pan: String,
    #[serde(default)]
    #[validate(
        length(min = 1, message = "Bank Account is required"),
        regex(path = "crate::utils::validation::BANK_ACCOUNT_RE", message = "Bank account must be 9-18 digits")
    )]
    pub bank_account: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Bank Name is required"))]
    pub bank_name: String,
    #[serde(default)]
    #[validate(
        length(min = 1, message = "IFSC Code is required"),
        regex(path = "crate::utils::validation::IFSC_RE", message = "Invalid IFSC code")
    )]
    pub ifsc: String,
}

impl EmployeeDetails {
    /// Wire names and values of every field compared during reconciliation.
    pub fn comparable_fields(&self) -> [(&'static str, &str); 9] {
        [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("phone", &self.phone),
            ("email", &self.email),
            ("aadhaar", &self.aadhaar),
            ("pan", &self.pan),
            ("bankAccount", &self.bank_account),
            ("bankName", &self.bank_name),
            ("ifsc", &self.ifsc),
        ]
    }

    /// Names of the fields whose values differ from `other`.
    pub fn mismatched_fields(&self, other: &EmployeeDetails) -> Vec<&'static str> {
        self.comparable_fields()
            .into_iter()
            .zip(other.comparable_fields())
            .filter(|((_, ours), (_, theirs))| ours != theirs)
            .map(|((name, _), _)| name)
            .collect()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    pub employee_id: String,
    #[serde(flatten)]
    pub details: EmployeeDetails,
    #[serde(flatten)]
    pub documents: ResolvedDocuments,
}

impl EmployeeRecord {
    pub fn aadhaar(&self) -> &str {
        &self.details.aadhaar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> EmployeeDetails {
        EmployeeDetails {
            first_name: "Ravi".to_string(),
            last_name: "Kumar".to_string(),
            phone: "9876543210".to_string(),
            email: "ravi.kumar@example.com".to_string(),
            aadhaar: "111122223333".to_string(),
            pan: "ABCDE1234F".to_string(),
            bank_account: "123456789012".to_string(),
            bank_name: "State Bank".to_string(),
            ifsc: "SBIN0001234".to_string(),
        }
    }

    #[test]
    fn identical_details_have_no_mismatch() {
        assert!(details().mismatched_fields(&details()).is_empty());
    }

    #[test]
    fn mismatches_follow_field_order() {
        let stored = details();
        let mut submitted = details();
        submitted.ifsc = "HDFC0001234".to_string();
        submitted.phone = "9000000000".to_string();
        submitted.first_name = "Ravindra".to_string();

        assert_eq!(
            stored.mismatched_fields(&submitted),
            vec!["firstName", "phone", "ifsc"]
        );
    }

    #[test]
    fn record_reads_flat_camel_case_json() {
        let record: EmployeeRecord = serde_json::from_value(serde_json::json!({
            "employeeId": "EMP1700000000000",
            "firstName": "Ravi",
            "lastName": "Kumar",
            "phone": "9876543210",
            "email": "ravi.kumar@example.com",
            "aadhaar": "111122223333",
            "pan": "ABCDE1234F",
            "bankAccount": "123456789012",
            "bankName": "State Bank",
            "ifsc": "SBIN0001234",
            "aadhaarFront": "https://example.com/front.png",
            "aadhaarBack": "https://example.com/back.png",
            "panPhoto": "https://example.com/pan.png",
            "passBookPhoto": "https://example.com/passbook.png"
        }))
        .unwrap();

        assert_eq!(record.aadhaar(), "111122223333");
        assert_eq!(record.details, details());
        assert_eq!(record.documents.pan_photo, "https://example.com/pan.png");
    }
}
