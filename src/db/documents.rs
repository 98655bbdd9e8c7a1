use log::info;
use std::collections::{HashMap, VecDeque};
use std::sync::RwLock;
use uuid::Uuid;

use crate::errors::{AppError, FieldErrors};
use crate::models::document::{parse_preview_uri, DocumentPreview, DocumentRefs, DocumentSlot};

#[derive(Debug, Default)]
struct Previews {
    by_id: HashMap<Uuid, DocumentPreview>,
    // Upload order, oldest first.
    order: VecDeque<Uuid>,
}

/// Uploaded document images, addressable by their `blob:` preview reference.
/// Holds at most `max_previews` images; the oldest is dropped to make room.
#[derive(Debug)]
pub struct DocumentPreviews {
    previews: RwLock<Previews>,
    max_previews: usize,
}

fn poisoned<T>(_: T) -> AppError {
    AppError::StoreError("document store lock poisoned".to_string())
}

impl DocumentPreviews {
    pub fn new(max_previews: usize) -> Self {
        Self {
            previews: RwLock::new(Previews::default()),
            max_previews,
        }
    }

    pub fn insert(&self, preview: DocumentPreview) -> Result<(), AppError> {
        if self.max_previews == 0 {
            return Err(AppError::PayloadTooLarge("Document previews are disabled".to_string()));
        }

        let mut previews = self.previews.write().map_err(poisoned)?;
        while previews.by_id.len() >= self.max_previews {
            let Some(oldest) = previews.order.pop_front() else {
                break;
            };
            if previews.by_id.remove(&oldest).is_some() {
                info!("Evicted document preview {}", oldest);
            }
        }

        previews.order.push_back(preview.preview_id);
        previews.by_id.insert(preview.preview_id, preview);
        Ok(())
    }

    pub fn get(&self, preview_id: Uuid) -> Result<Option<DocumentPreview>, AppError> {
        let previews = self.previews.read().map_err(poisoned)?;
        Ok(previews.by_id.get(&preview_id).cloned())
    }

    pub fn len(&self) -> Result<usize, AppError> {
        let previews = self.previews.read().map_err(poisoned)?;
        Ok(previews.by_id.len())
    }

    /// Every `blob:` reference in a submission must name a preview that is
    /// still held and was uploaded for the same slot. Other URIs pass through.
    pub fn check_refs(&self, refs: &DocumentRefs) -> Result<(), AppError> {
        let previews = self.previews.read().map_err(poisoned)?;
        let mut errors = FieldErrors::new();

        for slot in DocumentSlot::ALL {
            let Some(preview_id) = refs.get(slot).and_then(parse_preview_uri) else {
                continue;
            };

            match preview_id.and_then(|id| previews.by_id.get(&id)) {
                None => {
                    errors.insert(
                        slot.as_str().to_string(),
                        "Document preview not found, please upload it again".to_string(),
                    );
                }
                Some(preview) if preview.slot != slot => {
                    errors.insert(
                        slot.as_str().to_string(),
                        format!("Document was uploaded for {}", preview.slot),
                    );
                }
                Some(_) => {}
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(errors))
        }
    }
}
