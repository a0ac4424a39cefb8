use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entity::{require_non_negative, require_text, Entity};
use crate::errors::ServiceError;

/// Metadata for an uploaded confirmation document. The raw bytes live in a
/// `BlobStore` under `blob_key`; this row only describes them. Size and
/// content-type validation happen before the bytes reach this layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmationDocument {
    pub id: i64,
    pub sales_order_id: i64,
    pub file_name: String,
    pub size_bytes: i64,
    pub blob_key: Uuid,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmationDocumentRequest {
    pub sales_order_id: i64,
    pub file_name: String,
    pub size_bytes: i64,
    pub blob_key: Uuid,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfirmationDocumentResponse {
    pub id: i64,
    pub sales_order_id: i64,
    pub file_name: String,
    pub size_bytes: i64,
    pub uploaded_at: DateTime<Utc>,
}

impl Entity for ConfirmationDocument {
    type Request = ConfirmationDocumentRequest;
    type Response = ConfirmationDocumentResponse;

    const NAME: &'static str = "ConfirmationDocument";

    fn from_request(id: i64, req: ConfirmationDocumentRequest) -> Result<Self, ServiceError> {
        Ok(ConfirmationDocument {
            id,
            sales_order_id: req.sales_order_id,
            file_name: require_text("file_name", &req.file_name)?,
            size_bytes: require_non_negative("size_bytes", req.size_bytes)?,
            blob_key: req.blob_key,
            uploaded_at: req.uploaded_at,
        })
    }

    fn to_response(&self) -> ConfirmationDocumentResponse {
        ConfirmationDocumentResponse {
            id: self.id,
            sales_order_id: self.sales_order_id,
            file_name: self.file_name.clone(),
            size_bytes: self.size_bytes,
            uploaded_at: self.uploaded_at,
        }
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}
