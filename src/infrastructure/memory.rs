use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entity::Entity;
use crate::domain::mail::EmailMessage;
use crate::domain::ports::{BlobStore, Mailer, Repository};
use crate::errors::ServiceError;

// ── In-memory repository ─────────────────────────────────────────────────────

struct Rows<E> {
    by_id: BTreeMap<i64, E>,
    next_id: i64,
}

/// Reference `Repository` adapter backed by an ordered map.
///
/// Ids are assigned sequentially from 1, so ascending-id iteration is
/// creation order. Uniqueness is enforced through `Entity::conflicts_with`.
/// Real deployments substitute a database-backed adapter; the service layer
/// cannot tell the difference.
pub struct InMemoryRepository<E> {
    inner: Mutex<Rows<E>>,
}

impl<E> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Rows {
                by_id: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl<E> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> InMemoryRepository<E> {
    fn lock(&self) -> Result<MutexGuard<'_, Rows<E>>, ServiceError> {
        self.inner
            .lock()
            .map_err(|_| ServiceError::io(format!("{} repository lock poisoned", E::NAME)))
    }

    fn check_conflicts(rows: &Rows<E>, candidate: &E, skip_id: i64) -> Result<(), ServiceError> {
        if rows
            .by_id
            .values()
            .any(|e| e.id() != skip_id && e.conflicts_with(candidate))
        {
            return Err(ServiceError::conflict(format!(
                "{} violates a uniqueness constraint",
                E::NAME
            )));
        }
        Ok(())
    }
}

impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    fn insert(&self, mut entity: E) -> Result<E, ServiceError> {
        let mut rows = self.lock()?;
        Self::check_conflicts(&rows, &entity, 0)?;
        let id = rows.next_id;
        rows.next_id += 1;
        entity.set_id(id);
        rows.by_id.insert(id, entity.clone());
        Ok(entity)
    }

    fn insert_all(&self, mut entities: Vec<E>) -> Result<Vec<E>, ServiceError> {
        let mut rows = self.lock()?;
        // Check the whole batch (against the store and within itself)
        // before writing anything.
        for (i, entity) in entities.iter().enumerate() {
            Self::check_conflicts(&rows, entity, 0)?;
            if entities[..i].iter().any(|e| e.conflicts_with(entity)) {
                return Err(ServiceError::conflict(format!(
                    "{} batch contains conflicting entries",
                    E::NAME
                )));
            }
        }
        for entity in &mut entities {
            let id = rows.next_id;
            rows.next_id += 1;
            entity.set_id(id);
            rows.by_id.insert(id, entity.clone());
        }
        Ok(entities)
    }

    fn get(&self, id: i64) -> Result<Option<E>, ServiceError> {
        Ok(self.lock()?.by_id.get(&id).cloned())
    }

    fn update(&self, entity: E) -> Result<E, ServiceError> {
        let mut rows = self.lock()?;
        let id = entity.id();
        if !rows.by_id.contains_key(&id) {
            return Err(ServiceError::not_found(E::NAME, id));
        }
        Self::check_conflicts(&rows, &entity, id)?;
        rows.by_id.insert(id, entity.clone());
        Ok(entity)
    }

    fn delete(&self, id: i64) -> Result<(), ServiceError> {
        match self.lock()?.by_id.remove(&id) {
            Some(_) => Ok(()),
            None => Err(ServiceError::not_found(E::NAME, id)),
        }
    }

    fn delete_all(&self, ids: &[i64]) -> Result<(), ServiceError> {
        let mut rows = self.lock()?;
        for id in ids {
            if !rows.by_id.contains_key(id) {
                return Err(ServiceError::not_found(E::NAME, *id));
            }
        }
        for id in ids {
            rows.by_id.remove(id);
        }
        Ok(())
    }

    fn all(&self) -> Result<Vec<E>, ServiceError> {
        Ok(self.lock()?.by_id.values().cloned().collect())
    }

    fn find_matching(&self, pred: &dyn Fn(&E) -> bool) -> Result<Vec<E>, ServiceError> {
        Ok(self
            .lock()?
            .by_id
            .values()
            .filter(|e| pred(e))
            .cloned()
            .collect())
    }
}

// ── In-memory blob store ─────────────────────────────────────────────────────

#[derive(Default)]
pub struct InMemoryBlobStore {
    blobs: Mutex<HashMap<Uuid, Vec<u8>>>,
}

impl InMemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<Uuid, Vec<u8>>>, ServiceError> {
        self.blobs
            .lock()
            .map_err(|_| ServiceError::io("blob store lock poisoned"))
    }
}

impl BlobStore for InMemoryBlobStore {
    fn put(&self, key: Uuid, bytes: Vec<u8>) -> Result<(), ServiceError> {
        self.lock()?.insert(key, bytes);
        Ok(())
    }

    fn fetch(&self, key: Uuid) -> Result<Option<Vec<u8>>, ServiceError> {
        Ok(self.lock()?.get(&key).cloned())
    }

    fn remove(&self, key: Uuid) -> Result<(), ServiceError> {
        self.lock()?.remove(&key);
        Ok(())
    }
}

// ── Logging mailer ───────────────────────────────────────────────────────────

/// Mail transport that records deliveries instead of sending them.
#[derive(Default)]
pub struct LoggingMailer {
    delivered: Mutex<Vec<EmailMessage>>,
}

impl LoggingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages delivered so far, oldest first.
    pub fn delivered(&self) -> Vec<EmailMessage> {
        self.delivered
            .lock()
            .map(|msgs| msgs.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Mailer for LoggingMailer {
    async fn deliver(&self, mail: &EmailMessage) -> Result<(), ServiceError> {
        log::info!("mail to {}: {}", mail.to, mail.subject);
        self.delivered
            .lock()
            .map_err(|_| ServiceError::io("mailer lock poisoned"))?
            .push(mail.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fleet::{Driver, DriverRequest};

    fn driver(name: &str, phone: &str, license: &str) -> Driver {
        Driver::from_request(
            0,
            DriverRequest {
                name: name.into(),
                phone: phone.into(),
                license_number: license.into(),
            },
        )
        .unwrap()
    }

    #[test]
    fn insert_assigns_sequential_ids() {
        let repo = InMemoryRepository::new();
        let a = repo.insert(driver("Ana", "555-0100", "L-1")).unwrap();
        let b = repo.insert(driver("Bo", "555-0101", "L-2")).unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[test]
    fn all_returns_creation_order() {
        let repo = InMemoryRepository::new();
        repo.insert(driver("Ana", "555-0100", "L-1")).unwrap();
        repo.insert(driver("Bo", "555-0101", "L-2")).unwrap();
        let names: Vec<String> = repo.all().unwrap().into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["Ana", "Bo"]);
    }

    #[test]
    fn duplicate_unique_field_conflicts() {
        let repo = InMemoryRepository::new();
        repo.insert(driver("Ana", "555-0100", "L-1")).unwrap();
        let err = repo.insert(driver("Bo", "555-0101", "L-1")).unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[test]
    fn delete_absent_reports_not_found() {
        let repo: InMemoryRepository<Driver> = InMemoryRepository::new();
        let err = repo.delete(9999).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn insert_all_is_atomic() {
        let repo = InMemoryRepository::new();
        let batch = vec![
            driver("Ana", "555-0100", "L-1"),
            driver("Bo", "555-0101", "L-1"),
        ];
        assert!(repo.insert_all(batch).is_err());
        assert!(repo.all().unwrap().is_empty());
    }

    #[test]
    fn delete_all_is_atomic() {
        let repo = InMemoryRepository::new();
        let kept = repo.insert(driver("Ana", "555-0100", "L-1")).unwrap();
        let err = repo.delete_all(&[kept.id, 42]).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(repo.all().unwrap().len(), 1);
    }

    #[test]
    fn blob_store_round_trip() {
        let blobs = InMemoryBlobStore::new();
        let key = Uuid::new_v4();
        blobs.put(key, b"pdf bytes".to_vec()).unwrap();
        assert_eq!(blobs.fetch(key).unwrap().unwrap(), b"pdf bytes");
        blobs.remove(key).unwrap();
        assert!(blobs.fetch(key).unwrap().is_none());
    }
}
