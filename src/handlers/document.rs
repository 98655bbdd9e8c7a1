use actix_web::{web, HttpResponse};
use log::{info, warn};
use serde::Serialize;
use uuid::Uuid;

use crate::config::Config;
use crate::db::documents::DocumentPreviews;
use crate::errors::AppError;
use crate::models::document::{DocumentPreview, DocumentSlot};

#[derive(Serialize)]
struct DocumentUploadResponse {
    slot: DocumentSlot,
    uri: String,
}

/// Accepts a JPEG or PNG for one of the document slots and returns a
/// `blob:` reference the client includes in its onboarding submission.
pub async fn upload_document(
    config: web::Data<Config>,
    previews: web::Data<DocumentPreviews>,
    slot: web::Path<String>,
    file: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let slot: DocumentSlot = slot.parse().map_err(AppError::BadRequest)?;

    if file.is_empty() {
        return Err(AppError::BadRequest("File is empty".to_string()));
    }

    if file.len() > config.max_document_bytes {
        warn!("Rejected {} upload of {} bytes", slot, file.len());
        return Err(AppError::PayloadTooLarge(format!(
            "File size exceeds {} byte limit",
            config.max_document_bytes
        )));
    }

    let file_type = infer::get(&file)
        .ok_or_else(|| AppError::BadRequest("Invalid file type".to_string()))?;
    if !matches!(file_type.mime_type(), "image/jpeg" | "image/png") {
        warn!("Rejected {} upload of type {}", slot, file_type.mime_type());
        return Err(AppError::BadRequest("Only JPEG and PNG files are allowed".to_string()));
    }

    let preview = DocumentPreview {
        preview_id: Uuid::new_v4(),
        slot,
        mime_type: file_type.mime_type(),
        bytes: file.to_vec(),
    };
    let uri = preview.uri();
    previews.insert(preview)?;

    info!("Stored {} preview at {} ({} held)", slot, uri, previews.len()?);
    Ok(HttpResponse::Ok().json(DocumentUploadResponse { slot, uri }))
}

pub async fn get_document_preview(
    previews: web::Data<DocumentPreviews>,
    preview_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let preview_id = Uuid::parse_str(&preview_id)
        .map_err(|_| AppError::BadRequest("Invalid preview ID".to_string()))?;

    let preview = previews
        .get(preview_id)?
        .ok_or_else(|| AppError::NotFound("Document preview not found".to_string()))?;

    Ok(HttpResponse::Ok()
        .content_type(preview.mime_type)
        .body(preview.bytes))
}
