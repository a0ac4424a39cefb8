use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::audit::AuditLogService;
use crate::domain::entity::require_text;
use crate::domain::ports::{BlobStore, Repository};
use crate::errors::ServiceError;

#[derive(Debug, Clone, Deserialize)]
pub struct ReportRequest {
    pub title: String,
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

/// Describes a generated artifact; the bytes are fetched separately by id.
#[derive(Debug, Clone, Serialize)]
pub struct ReportResponse {
    pub artifact_id: Uuid,
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub size_bytes: i64,
    pub row_count: usize,
}

/// Renders audit-log activity reports as CSV artifacts.
pub struct ReportService<R, B> {
    logs: AuditLogService<R>,
    blobs: B,
}

impl<R, B> ReportService<R, B>
where
    R: Repository<crate::domain::audit::AuditLog>,
    B: BlobStore,
{
    pub fn new(logs: R, blobs: B) -> Self {
        Self {
            logs: AuditLogService::new(logs),
            blobs,
        }
    }

    /// Generate a CSV over the audit entries in the requested range, store
    /// it, and return the artifact's description.
    pub fn generate(&self, req: ReportRequest) -> Result<ReportResponse, ServiceError> {
        let title = require_text("title", &req.title)?;
        if req.to < req.from {
            return Err(ServiceError::validation(
                "report range end must not precede its start",
            ));
        }

        let rows = self.logs.get_logs_between_dates(req.from, req.to)?;
        // Keep one log per line and one value per column, whatever the
        // free-text fields contain.
        let field = |s: &str| s.replace(['\n', ','], " ");
        let mut csv = String::from("logged_at,actor,action,detail\n");
        for row in &rows {
            csv.push_str(&format!(
                "{},{},{},{}\n",
                row.logged_at.to_rfc3339(),
                field(&row.actor),
                field(&row.action),
                field(&row.detail),
            ));
        }

        let artifact_id = Uuid::new_v4();
        let bytes = csv.into_bytes();
        let size_bytes = bytes.len() as i64;
        self.blobs.put(artifact_id, bytes)?;
        log::info!(
            "generated report '{}' ({} rows, {} bytes)",
            title,
            rows.len(),
            size_bytes
        );

        Ok(ReportResponse {
            artifact_id,
            title,
            generated_at: Utc::now(),
            size_bytes,
            row_count: rows.len(),
        })
    }

    /// The artifact's byte stream by identifier. Unknown artifacts and
    /// storage failures both surface as `Io`.
    pub fn download(&self, artifact_id: Uuid) -> Result<Vec<u8>, ServiceError> {
        self.blobs
            .fetch(artifact_id)?
            .ok_or_else(|| ServiceError::io(format!("no report artifact {artifact_id}")))
    }
}
