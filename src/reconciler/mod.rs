use crate::db::EmployeeStore;
use crate::errors::AppError;
use crate::models::employee::EmployeeRecord;
use crate::models::onboarding::{OnboardingSubmission, Outcome};
use crate::utils::employee_id::EmployeeIdGenerator;

/// Decides whether a validated submission is a new hire, a returning
/// employee, or a returning employee whose details changed.
///
/// Only the first branch writes to the store. A mismatch is reported back
/// and the stored record is left as it was.
pub fn reconcile<S: EmployeeStore + ?Sized>(
    submission: &OnboardingSubmission,
    store: &S,
    ids: &EmployeeIdGenerator,
) -> Result<Outcome, AppError> {
    let Some(existing) = store.find_by_identity(&submission.details.aadhaar)? else {
        let employee = EmployeeRecord {
            employee_id: ids.next_id(),
            details: submission.details.clone(),
            documents: submission.documents.resolve(),
        };
        store.append(employee.clone())?;
        return Ok(Outcome::Created { employee });
    };

    let mismatched_fields = existing.details.mismatched_fields(&submission.details);
    if mismatched_fields.is_empty() {
        Ok(Outcome::Confirmed {
            employee_id: existing.employee_id,
        })
    } else {
        Ok(Outcome::Mismatch {
            employee_id: existing.employee_id,
            mismatched_fields,
        })
    }
}
