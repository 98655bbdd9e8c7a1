use actix_web::{web, HttpResponse};
use log::{info, warn};

use crate::db::documents::DocumentPreviews;
use crate::db::EmployeeStore;
use crate::errors::AppError;
use crate::models::onboarding::{OnboardingResponse, OnboardingSubmission, Outcome};
use crate::reconciler;
use crate::utils::employee_id::EmployeeIdGenerator;
use crate::utils::validation::validate_submission;

pub async fn submit_onboarding(
    store: web::Data<dyn EmployeeStore>,
    ids: web::Data<EmployeeIdGenerator>,
    previews: web::Data<DocumentPreviews>,
    submission: web::Json<OnboardingSubmission>,
) -> Result<HttpResponse, AppError> {
    let submission = submission.into_inner();

    let checked = validate_submission(&submission)
        .and_then(|_| previews.check_refs(&submission.documents));
    if let Err(err) = checked {
        info!("Rejected onboarding submission: {}", err);
        return Err(err);
    }

    let outcome = reconciler::reconcile(&submission, store.get_ref(), ids.get_ref())?;

    match &outcome {
        Outcome::Created { employee } => {
            info!("New employee onboarded with ID {}", employee.employee_id)
        }
        Outcome::Confirmed { employee_id } => {
            info!("Returning employee {} confirmed", employee_id)
        }
        Outcome::Mismatch { employee_id, mismatched_fields } => warn!(
            "Employee {} resubmitted with differing fields: {}",
            employee_id,
            mismatched_fields.join(", ")
        ),
    }

    let created = matches!(outcome, Outcome::Created { .. });
    let body = OnboardingResponse::from(outcome);
    if created {
        Ok(HttpResponse::Created().json(body))
    } else {
        Ok(HttpResponse::Ok().json(body))
    }
}
