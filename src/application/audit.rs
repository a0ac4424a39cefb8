use chrono::{DateTime, Utc};

use super::service::EntityService;
use crate::domain::audit::{
    AuditLog, AuditLogRequest, AuditLogResponse, TransactionAudit, TransactionAuditResponse,
};
use crate::domain::ports::Repository;
use crate::errors::ServiceError;

/// Audit-log service. Wraps the generic contract instead of aliasing it:
/// audit logs are the one entity whose bulk listing is chronological, so
/// `get_all` here sorts by event time rather than creation order.
pub struct AuditLogService<R> {
    inner: EntityService<AuditLog, R>,
}

impl<R: Repository<AuditLog>> AuditLogService<R> {
    pub fn new(repo: R) -> Self {
        Self {
            inner: EntityService::new(repo),
        }
    }

    pub fn create(&self, req: AuditLogRequest) -> Result<AuditLogResponse, ServiceError> {
        self.inner.create(req)
    }

    pub fn create_all(
        &self,
        reqs: Vec<AuditLogRequest>,
    ) -> Result<Vec<AuditLogResponse>, ServiceError> {
        self.inner.create_all(reqs)
    }

    pub fn update(&self, id: i64, req: AuditLogRequest) -> Result<AuditLogResponse, ServiceError> {
        self.inner.update(id, req)
    }

    pub fn delete(&self, id: i64) -> Result<(), ServiceError> {
        self.inner.delete(id)
    }

    pub fn delete_all(&self, ids: &[i64]) -> Result<(), ServiceError> {
        self.inner.delete_all(ids)
    }

    pub fn get(&self, id: i64) -> Result<Option<AuditLogResponse>, ServiceError> {
        self.inner.get(id)
    }

    /// All entries in chronological order (event time, not creation order).
    pub fn get_all(&self) -> Result<Vec<AuditLogResponse>, ServiceError> {
        let mut logs = self.inner.get_all()?;
        logs.sort_by_key(|l| l.logged_at);
        Ok(logs)
    }

    /// Entries logged inside `[from, to]`, bounds inclusive, in
    /// chronological order.
    pub fn get_logs_between_dates(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<AuditLogResponse>, ServiceError> {
        let mut logs = self
            .inner
            .find_where(|l| l.logged_at >= from && l.logged_at <= to)?;
        logs.sort_by_key(|l| l.logged_at);
        Ok(logs)
    }

    pub fn find_by_actor(&self, actor: &str) -> Result<Vec<AuditLogResponse>, ServiceError> {
        self.inner.find_where(|l| l.actor == actor)
    }
}

pub type TransactionAuditService<R> = EntityService<TransactionAudit, R>;

impl<R: Repository<TransactionAudit>> EntityService<TransactionAudit, R> {
    pub fn find_by_entity(
        &self,
        entity_name: &str,
    ) -> Result<Vec<TransactionAuditResponse>, ServiceError> {
        self.find_where(|t| t.entity_name == entity_name)
    }

    pub fn find_performed_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<TransactionAuditResponse>, ServiceError> {
        self.find_where(|t| t.performed_at >= from && t.performed_at <= to)
    }
}
