use chrono::Utc;
use uuid::Uuid;

use super::service::EntityService;
use crate::domain::documents::{
    ConfirmationDocument, ConfirmationDocumentRequest, ConfirmationDocumentResponse,
};
use crate::domain::entity::{require_text, Entity};
use crate::domain::ports::{BlobStore, Repository};
use crate::errors::ServiceError;

/// Upload and retrieval of confirmation documents.
///
/// The byte stream goes into the blob store under a fresh key; only the
/// metadata row is exposed to callers. Size and content-type checks are an
/// upstream collaborator's job.
pub struct DocumentService<R, B> {
    docs: EntityService<ConfirmationDocument, R>,
    blobs: B,
}

impl<R, B> DocumentService<R, B>
where
    R: Repository<ConfirmationDocument>,
    B: BlobStore,
{
    pub fn new(repo: R, blobs: B) -> Self {
        Self {
            docs: EntityService::new(repo),
            blobs,
        }
    }

    /// Accept a raw byte stream plus its owning sales order and persist it.
    /// Returns the stored document's metadata.
    pub fn upload(
        &self,
        sales_order_id: i64,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<ConfirmationDocumentResponse, ServiceError> {
        let file_name = require_text("file_name", file_name)?;
        let blob_key = Uuid::new_v4();
        let size_bytes = bytes.len() as i64;
        self.blobs.put(blob_key, bytes)?;

        let created = self.docs.create(ConfirmationDocumentRequest {
            sales_order_id,
            file_name,
            size_bytes,
            blob_key,
            uploaded_at: Utc::now(),
        });
        match created {
            Ok(resp) => {
                log::info!(
                    "stored confirmation document id={} ({} bytes)",
                    resp.id,
                    size_bytes
                );
                Ok(resp)
            }
            Err(e) => {
                // Orphaned blobs are unreachable, drop them.
                let _ = self.blobs.remove(blob_key);
                Err(e)
            }
        }
    }

    /// The document's byte stream. `NotFound` for an unknown metadata id;
    /// `Io` when the blob itself cannot be read.
    pub fn download(&self, id: i64) -> Result<Vec<u8>, ServiceError> {
        let doc = self
            .docs
            .repo
            .get(id)?
            .ok_or_else(|| ServiceError::not_found(ConfirmationDocument::NAME, id))?;
        self.blobs
            .fetch(doc.blob_key)?
            .ok_or_else(|| ServiceError::io(format!("blob missing for document {id}")))
    }

    pub fn get(&self, id: i64) -> Result<Option<ConfirmationDocumentResponse>, ServiceError> {
        self.docs.get(id)
    }

    pub fn find_by_order(
        &self,
        sales_order_id: i64,
    ) -> Result<Vec<ConfirmationDocumentResponse>, ServiceError> {
        self.docs.find_where(|d| d.sales_order_id == sales_order_id)
    }

    /// Remove the metadata row and its blob. `NotFound` when absent.
    pub fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let doc = self
            .docs
            .repo
            .get(id)?
            .ok_or_else(|| ServiceError::not_found(ConfirmationDocument::NAME, id))?;
        self.docs.delete(id)?;
        self.blobs.remove(doc.blob_key)
    }
}
