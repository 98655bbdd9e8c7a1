use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum DocumentSlot {
    AadhaarFront,
    AadhaarBack,
    PanPhoto,
    PassBookPhoto,
}

impl DocumentSlot {
    pub const ALL: [DocumentSlot; 4] = [
        DocumentSlot::AadhaarFront,
        DocumentSlot::AadhaarBack,
        DocumentSlot::PanPhoto,
        DocumentSlot::PassBookPhoto,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentSlot::AadhaarFront => "aadhaarFront",
            DocumentSlot::AadhaarBack => "aadhaarBack",
            DocumentSlot::PanPhoto => "panPhoto",
            DocumentSlot::PassBookPhoto => "passBookPhoto",
        }
    }

    /// Fallback image used when nothing was attached to this slot.
    pub fn placeholder_uri(&self) -> &'static str {
        match self {
            DocumentSlot::AadhaarFront => "https://via.placeholder.com/150?text=Aadhaar+Front+10",
            DocumentSlot::AadhaarBack => "https://via.placeholder.com/150?text=Aadhaar+Back+10",
            DocumentSlot::PanPhoto => "https://via.placeholder.com/150?text=PAN+10",
            DocumentSlot::PassBookPhoto => "https://via.placeholder.com/150?text=Passbook+10",
        }
    }
}

impl fmt::Display for DocumentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentSlot::ALL
            .into_iter()
            .find(|slot| slot.as_str() == s)
            .ok_or_else(|| format!("Unknown document slot '{}'", s))
    }
}

/// Document references carried by a submission. Each is typically a
/// `blob:` preview reference returned by the upload endpoint.
#[derive(Serialize, Deserialize, Validate, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRefs {
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(url(message = "Aadhaar Front must be a valid URI"))]
    pub aadhaar_front: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(url(message = "Aadhaar Back must be a valid URI"))]
    pub aadhaar_back: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(url(message = "PAN Photo must be a valid URI"))]
    pub pan_photo: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(url(message = "Passbook Photo must be a valid URI"))]
    pub pass_book_photo: Option<String>,
}

/// A slot the client never filled may arrive as `""`; treat it like `null`.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|uri| !uri.trim().is_empty()))
}

impl DocumentRefs {
    pub fn get(&self, slot: DocumentSlot) -> Option<&str> {
        let value = match slot {
            DocumentSlot::AadhaarFront => &self.aadhaar_front,
            DocumentSlot::AadhaarBack => &self.aadhaar_back,
            DocumentSlot::PanPhoto => &self.pan_photo,
            DocumentSlot::PassBookPhoto => &self.pass_book_photo,
        };
        value.as_deref()
    }

    /// Fills every empty slot with its placeholder URI.
    pub fn resolve(&self) -> ResolvedDocuments {
        let uri = |slot: DocumentSlot| {
            self.get(slot)
                .filter(|uri| !uri.is_empty())
                .unwrap_or(slot.placeholder_uri())
                .to_string()
        };

        ResolvedDocuments {
            aadhaar_front: uri(DocumentSlot::AadhaarFront),
            aadhaar_back: uri(DocumentSlot::AadhaarBack),
            pan_photo: uri(DocumentSlot::PanPhoto),
            pass_book_photo: uri(DocumentSlot::PassBookPhoto),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedDocuments {
    pub aadhaar_front: String,
    pub aadhaar_back: String,
    pub pan_photo: String,
    pub pass_book_photo: String,
}

/// An uploaded image held in process memory until the session submits.
#[derive(Debug, Clone)]
pub struct DocumentPreview {
    pub preview_id: Uuid,
    pub slot: DocumentSlot,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl DocumentPreview {
    pub fn uri(&self) -> String {
        preview_uri(self.preview_id)
    }
}

const PREVIEW_SCHEME: &str = "blob:";

pub fn preview_uri(preview_id: Uuid) -> String {
    format!("{}{}", PREVIEW_SCHEME, preview_id)
}

/// `Some` for any `blob:` reference; the inner value is `None` when the
/// reference does not carry a well-formed preview id.
pub fn parse_preview_uri(uri: &str) -> Option<Option<Uuid>> {
    uri.strip_prefix(PREVIEW_SCHEME)
        .map(|id| Uuid::parse_str(id).ok())
}
