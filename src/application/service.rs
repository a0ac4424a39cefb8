use std::marker::PhantomData;

use crate::domain::entity::Entity;
use crate::domain::ports::Repository;
use crate::errors::ServiceError;

/// Generic CRUD/query service instantiated once per entity type.
///
/// Every ERP entity shares the same contract: commands (`create`, `update`,
/// `delete`), a single lookup returning an optional response, and bulk
/// reads in creation order. Per-entity finder methods are added as inherent
/// impls next to their domain (`DriverService::find_by_phone` and friends),
/// so the catalogue cannot drift between entities.
///
/// The service is stateless apart from the repository it is handed at
/// construction time.
pub struct EntityService<E, R> {
    pub(crate) repo: R,
    _entity: PhantomData<E>,
}

impl<E, R> EntityService<E, R>
where
    E: Entity,
    R: Repository<E>,
{
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            _entity: PhantomData,
        }
    }

    /// Create one entity from a request. Validation failures and uniqueness
    /// conflicts surface before anything is stored.
    pub fn create(&self, req: E::Request) -> Result<E::Response, ServiceError> {
        let entity = E::from_request(0, req)?;
        let stored = self.repo.insert(entity)?;
        log::debug!("created {} id={}", E::NAME, stored.id());
        Ok(stored.to_response())
    }

    /// Create a batch, all-or-nothing: one invalid or conflicting request
    /// aborts the whole batch before any row is written.
    pub fn create_all(&self, reqs: Vec<E::Request>) -> Result<Vec<E::Response>, ServiceError> {
        let entities = reqs
            .into_iter()
            .map(|req| E::from_request(0, req))
            .collect::<Result<Vec<_>, _>>()?;
        let stored = self.repo.insert_all(entities)?;
        log::debug!("created {} {} rows", stored.len(), E::NAME);
        Ok(stored.iter().map(E::to_response).collect())
    }

    /// Overwrite all mutable fields of an existing entity. Identity is
    /// immutable; `NotFound` when the id is absent.
    pub fn update(&self, id: i64, req: E::Request) -> Result<E::Response, ServiceError> {
        let mut entity = self
            .repo
            .get(id)?
            .ok_or_else(|| ServiceError::not_found(E::NAME, id))?;
        entity.apply_request(req)?;
        let stored = self.repo.update(entity)?;
        log::debug!("updated {} id={}", E::NAME, id);
        Ok(stored.to_response())
    }

    /// Remove by id. Deleting an absent id reports `NotFound`.
    pub fn delete(&self, id: i64) -> Result<(), ServiceError> {
        self.repo.delete(id)?;
        log::debug!("deleted {} id={}", E::NAME, id);
        Ok(())
    }

    /// Remove a batch, all-or-nothing: one missing id aborts the batch
    /// before any removal.
    pub fn delete_all(&self, ids: &[i64]) -> Result<(), ServiceError> {
        self.repo.delete_all(ids)?;
        log::debug!("deleted {} {} rows", ids.len(), E::NAME);
        Ok(())
    }

    /// Single lookup. Absence is a normal outcome, not an error.
    pub fn get(&self, id: i64) -> Result<Option<E::Response>, ServiceError> {
        Ok(self.repo.get(id)?.map(|e| e.to_response()))
    }

    /// All responses in creation order.
    pub fn get_all(&self) -> Result<Vec<E::Response>, ServiceError> {
        Ok(self.repo.all()?.iter().map(E::to_response).collect())
    }

    /// Responses whose entities match the predicate, in creation order.
    /// The building block for every per-entity finder.
    pub fn find_where(&self, pred: impl Fn(&E) -> bool) -> Result<Vec<E::Response>, ServiceError> {
        Ok(self
            .repo
            .find_matching(&pred)?
            .iter()
            .map(E::to_response)
            .collect())
    }

    /// First entity matching the predicate, if any.
    pub fn find_one_where(
        &self,
        pred: impl Fn(&E) -> bool,
    ) -> Result<Option<E::Response>, ServiceError> {
        Ok(self
            .repo
            .find_matching(&pred)?
            .first()
            .map(E::to_response))
    }
}

/// Case-insensitive containment, the catalogue's standard text filter.
pub(crate) fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Reject a negative caller-supplied threshold for physically meaningful
/// quantities (capacities, distances, costs, stock counts).
pub(crate) fn check_threshold<T: PartialOrd + Default + std::fmt::Display>(
    field: &str,
    value: &T,
) -> Result<(), ServiceError> {
    if *value < T::default() {
        return Err(ServiceError::validation(format!(
            "{field} threshold must be non-negative, got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_ci_ignores_case() {
        assert!(contains_ci("Central Warehouse", "WARE"));
        assert!(!contains_ci("Central Warehouse", "dock"));
    }

    #[test]
    fn check_threshold_rejects_negative() {
        assert!(check_threshold("capacity", &-1).is_err());
        assert!(check_threshold("capacity", &0).is_ok());
    }
}
