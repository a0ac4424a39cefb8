use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::entity::{require_text, Entity};
use crate::errors::ServiceError;

// ── AuditLog ─────────────────────────────────────────────────────────────────

/// A free-form audit trail entry. Listing is chronological rather than by
/// insertion order; the timestamp is supplied by the caller so that
/// late-arriving entries keep their true event time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLog {
    pub id: i64,
    pub actor: String,
    pub action: String,
    pub detail: String,
    pub logged_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuditLogRequest {
    pub actor: String,
    pub action: String,
    pub detail: String,
    pub logged_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditLogResponse {
    pub id: i64,
    pub actor: String,
    pub action: String,
    pub detail: String,
    pub logged_at: DateTime<Utc>,
}

impl Entity for AuditLog {
    type Request = AuditLogRequest;
    type Response = AuditLogResponse;

    const NAME: &'static str = "AuditLog";

    fn from_request(id: i64, req: AuditLogRequest) -> Result<Self, ServiceError> {
        Ok(AuditLog {
            id,
            actor: require_text("actor", &req.actor)?,
            action: require_text("action", &req.action)?,
            detail: req.detail,
            logged_at: req.logged_at,
        })
    }

    fn to_response(&self) -> AuditLogResponse {
        AuditLogResponse {
            id: self.id,
            actor: self.actor.clone(),
            action: self.action.clone(),
            detail: self.detail.clone(),
            logged_at: self.logged_at,
        }
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

// ── TransactionAudit ─────────────────────────────────────────────────────────

/// Records one write operation against a named entity, correlated by a
/// transaction id so multi-row writes can be traced together. `payload`
/// carries the written fields as structured JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionAudit {
    pub id: i64,
    pub transaction_id: Uuid,
    pub entity_name: String,
    pub operation: String,
    pub payload: Value,
    pub performed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransactionAuditRequest {
    pub transaction_id: Uuid,
    pub entity_name: String,
    pub operation: String,
    pub payload: Value,
    pub performed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionAuditResponse {
    pub id: i64,
    pub transaction_id: Uuid,
    pub entity_name: String,
    pub operation: String,
    pub payload: Value,
    pub performed_at: DateTime<Utc>,
}

impl Entity for TransactionAudit {
    type Request = TransactionAuditRequest;
    type Response = TransactionAuditResponse;

    const NAME: &'static str = "TransactionAudit";

    fn from_request(id: i64, req: TransactionAuditRequest) -> Result<Self, ServiceError> {
        Ok(TransactionAudit {
            id,
            transaction_id: req.transaction_id,
            entity_name: require_text("entity_name", &req.entity_name)?,
            operation: require_text("operation", &req.operation)?,
            payload: req.payload,
            performed_at: req.performed_at,
        })
    }

    fn to_response(&self) -> TransactionAuditResponse {
        TransactionAuditResponse {
            id: self.id,
            transaction_id: self.transaction_id,
            entity_name: self.entity_name.clone(),
            operation: self.operation.clone(),
            payload: self.payload.clone(),
            performed_at: self.performed_at,
        }
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}
