use async_trait::async_trait;
use uuid::Uuid;

use super::entity::Entity;
use crate::errors::ServiceError;

/// Abstract persistence port for one entity type.
///
/// Implementations own id assignment, uniqueness enforcement, and ordering.
/// `all` yields entities in creation order (ascending id). Concurrency and
/// referential integrity across entities are the adapter's concern, not the
/// service layer's.
pub trait Repository<E: Entity>: Send + Sync {
    /// Store a new entity, assigning it a fresh nonzero id.
    fn insert(&self, entity: E) -> Result<E, ServiceError>;

    /// Store a batch atomically: every conflict is checked before any row
    /// is written, so one bad item leaves the store untouched.
    fn insert_all(&self, entities: Vec<E>) -> Result<Vec<E>, ServiceError>;

    fn get(&self, id: i64) -> Result<Option<E>, ServiceError>;

    /// Overwrite an existing entity. `NotFound` when the id is absent.
    fn update(&self, entity: E) -> Result<E, ServiceError>;

    /// Remove by id. `NotFound` when absent; removing twice reports the
    /// second call as not found rather than silently succeeding.
    fn delete(&self, id: i64) -> Result<(), ServiceError>;

    /// Remove a batch atomically: every id is checked before any removal.
    fn delete_all(&self, ids: &[i64]) -> Result<(), ServiceError>;

    fn all(&self) -> Result<Vec<E>, ServiceError>;

    /// Entities matching a predicate, in creation order.
    fn find_matching(&self, pred: &dyn Fn(&E) -> bool) -> Result<Vec<E>, ServiceError>;
}

// Repositories are injected by value; sharing one store between services
// happens through `Arc`.
impl<E: Entity, R: Repository<E>> Repository<E> for std::sync::Arc<R> {
    fn insert(&self, entity: E) -> Result<E, ServiceError> {
        (**self).insert(entity)
    }

    fn insert_all(&self, entities: Vec<E>) -> Result<Vec<E>, ServiceError> {
        (**self).insert_all(entities)
    }

    fn get(&self, id: i64) -> Result<Option<E>, ServiceError> {
        (**self).get(id)
    }

    fn update(&self, entity: E) -> Result<E, ServiceError> {
        (**self).update(entity)
    }

    fn delete(&self, id: i64) -> Result<(), ServiceError> {
        (**self).delete(id)
    }

    fn delete_all(&self, ids: &[i64]) -> Result<(), ServiceError> {
        (**self).delete_all(ids)
    }

    fn all(&self) -> Result<Vec<E>, ServiceError> {
        (**self).all()
    }

    fn find_matching(&self, pred: &dyn Fn(&E) -> bool) -> Result<Vec<E>, ServiceError> {
        (**self).find_matching(pred)
    }
}

/// Byte-artifact storage for confirmation documents and generated reports.
pub trait BlobStore: Send + Sync {
    fn put(&self, key: Uuid, bytes: Vec<u8>) -> Result<(), ServiceError>;

    fn fetch(&self, key: Uuid) -> Result<Option<Vec<u8>>, ServiceError>;

    fn remove(&self, key: Uuid) -> Result<(), ServiceError>;
}

impl<B: BlobStore> BlobStore for std::sync::Arc<B> {
    fn put(&self, key: Uuid, bytes: Vec<u8>) -> Result<(), ServiceError> {
        (**self).put(key, bytes)
    }

    fn fetch(&self, key: Uuid) -> Result<Option<Vec<u8>>, ServiceError> {
        (**self).fetch(key)
    }

    fn remove(&self, key: Uuid) -> Result<(), ServiceError> {
        (**self).remove(key)
    }
}

/// Outbound mail transport.
///
/// Delivery happens off the calling path; see `MailDispatcher`.
#[async_trait]
pub trait Mailer: Send + Sync + 'static {
    async fn deliver(&self, mail: &super::mail::EmailMessage) -> Result<(), ServiceError>;
}

#[async_trait]
impl<M: Mailer> Mailer for std::sync::Arc<M> {
    async fn deliver(&self, mail: &super::mail::EmailMessage) -> Result<(), ServiceError> {
        (**self).deliver(mail).await
    }
}
